mod company;
mod student;

pub use company::CompanyProfilePage;
pub use student::StudentProfilePage;

mod admin;
mod company;
mod student;

pub use admin::AdminDashboard;
pub use company::CompanyDashboard;
pub use student::StudentDashboard;

mod mine;
mod review;

pub use mine::MyApplications;
pub use review::OfferApplications;

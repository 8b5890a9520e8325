mod company_list;
mod detail;
mod form;
mod list;

pub use company_list::CompanyOffers;
pub use detail::OfferDetail;
pub use form::{OfferEdit, OfferNew};
pub use list::OfferDirectory;

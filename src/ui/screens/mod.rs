//! One module per page. Each renders from borrowed state only.

pub mod assistant;
pub mod dashboard;
pub mod inventory;
pub mod landing;

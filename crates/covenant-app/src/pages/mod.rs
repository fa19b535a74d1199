mod dao;
mod landing;

pub use dao::DaoPage;
pub use landing::LandingPage;

//! Database models, schema and the catalog repository

pub mod artists;
pub mod catalog;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use artists::insert_artist;
pub use catalog::CatalogRepository;
pub use init::*;
pub use models::*;
pub use shows::insert_show;
pub use venues::insert_venue;

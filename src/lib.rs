pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Film, NewFilm};
pub use error::AppError;

//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Repository layer for the `films` table
//! - Startup seeding from a JSON file

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
pub use seed::{seed_from_file, SeedError};

//! pgh3-docgen - reference documentation for the PostgreSQL H3 extension
//!
//! This library reads the stored-function catalog of a PostgreSQL database
//! and renders it as a Markdown reference.

pub mod config;
pub mod db;
pub mod models;
pub mod services;

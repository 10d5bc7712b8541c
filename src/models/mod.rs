//! Data models
//!
//! This module contains the data structures read from the PostgreSQL catalog.

mod function;

pub use function::FunctionDescriptor;

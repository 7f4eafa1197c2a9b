//! # Reel Config
//!
//! Type-safe configuration management for ReelTracker.
//!
//! This crate provides the configuration schema with its defaults, YAML
//! loading with environment variable overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::*;
pub use schema::*;
pub use validation::*;

//! # Reel Common
//!
//! Shared types, errors, and logging setup for the ReelTracker workspace.
//!
//! Every other crate in the workspace builds on the [`ViewEvent`] record and
//! the [`ReelError`] type defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{ReelError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;

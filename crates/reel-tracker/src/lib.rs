//! # Reel Tracker
//!
//! Command line front end printing viewing timelines and streaks as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;

pub use cli::{execute, Cli, Command, OutputArgs};

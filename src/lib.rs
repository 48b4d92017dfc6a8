//! patternbook: textbook design patterns expressed in Rust.
//!
//! - [`domain`]: the pattern models (composite tree, flyweight pool, catalog)
//! - [`application`]: demo runner writing transcripts to a sink
//! - [`config`]: layered settings for the demos
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

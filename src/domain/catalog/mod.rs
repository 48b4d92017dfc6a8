//! The smaller patterns of the catalog.
//!
//! Every operation returns the lines it would print, so callers decide where
//! the transcript goes.

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod copy;
pub mod decorator;
pub mod facade;
pub mod proxy;

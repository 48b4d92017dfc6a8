//! Application services

pub mod demo;

pub use demo::DemoService;

//! Application logic for the arbitrary-precision calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;

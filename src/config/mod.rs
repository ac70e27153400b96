//! Configuration module for the dashboard client.

pub mod constants;
pub mod plot;

// Utility functions module
pub mod config;
pub mod formatters;
pub mod lang;
pub mod logging;
pub mod template;

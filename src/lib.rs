pub mod config;
pub mod domain;
pub mod error;
pub mod tasks;
pub mod ui;

pub use error::{Result, VerfileError};

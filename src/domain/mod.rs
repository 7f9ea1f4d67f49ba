//! Core version value types

pub mod data;
pub mod number;
pub mod version;

pub use data::{Data, Identifier};
pub use number::{Change, Level, Number};
pub use version::{Preserve, Version};

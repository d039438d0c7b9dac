pub mod aggregate;
pub mod config;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod io;
pub mod model;
pub mod shop;

pub use error::{Result, ToolError};

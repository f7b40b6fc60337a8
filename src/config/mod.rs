//! Configuration discovery, parsing and validation
//!
//! This module finds the nearest `_tasks.yml` (and/or `package.json`),
//! decodes it and normalizes it into a [`Config`].

pub mod env;
pub mod manifest;
pub mod model;
pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use env::*;
pub use manifest::*;
pub use model::*;
pub use parse::*;
pub use schema::*;
pub use types::*;

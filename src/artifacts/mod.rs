//! Value types and the strings built from them
//!
//! - `core`: console setup shared by all commands
//! - `invocation`: package manager command lines and process execution
//! - `reference`: repository URLs, refs, package names and dependency entries

pub mod core;
pub mod invocation;
pub mod reference;

//! Stateful parts of an invocation
//!
//! - `installer`: effective settings, output writer and process execution
//! - `dependency_file`: reading and rewriting the user's requirements file

pub mod dependency_file;
pub mod installer;

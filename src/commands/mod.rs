//! Command implementations
//!
//! Each command is an `impl Installer` block. Porcelain commands may spawn the
//! package manager; plumbing commands only compose or read strings.

pub mod plumbing;
pub mod porcelain;

//! Porcelain commands (what the user types)
//!
//! - `install`: install from a branch, tag or the default branch; `upgrade`
//!   forces a refresh
//! - `uninstall`: remove an installed package by name
//! - `requirement`: print or record a dependency file entry

pub mod install;
pub mod requirement;
pub mod uninstall;

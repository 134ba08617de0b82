//! Plumbing commands, mostly useful from scripts
//!
//! - `address`: print the composed `<url>@<ref>` address
//! - `requirements`: list the git entries of a dependency file

pub mod address;
pub mod requirements;

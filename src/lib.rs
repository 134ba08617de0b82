//! Install, upgrade and uninstall Python packages straight from git.
//!
//! `gitpip` composes `git+<url>@<ref>` addresses from a repository URL and a
//! branch or tag, hands them to the configured package manager and reports
//! its exit status unchanged. It also reads and writes the matching
//! `#egg=<name>` lines of a requirements file.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod error;

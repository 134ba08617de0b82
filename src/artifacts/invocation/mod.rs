//! External package manager invocations
//!
//! - `front_end`: which package manager command line to call (`pip`, `uv pip`, ...)
//! - `install_flags`: optional install behaviour (upgrade, force reinstall)
//! - `process`: spawning the command with inherited stdio
//!
//! An [`Invocation`] is only a program and its arguments. Nothing here
//! interprets what the package manager prints.

pub mod front_end;
pub mod install_flags;
pub mod process;

use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

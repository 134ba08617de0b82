use crate::areas::dependency_file::DependencyFile;
use crate::artifacts::invocation::Invocation;
use crate::artifacts::invocation::front_end::PackageManager;
use crate::artifacts::invocation::process;
use crate::config::Settings;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tracing::debug;

/// Entry point for every command: holds the effective settings and where
/// human-facing output goes.
pub struct Installer {
    dir: Box<Path>,
    settings: Settings,
    dry_run: bool,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Installer {
    pub fn new(
        dir: &Path,
        settings: Settings,
        dry_run: bool,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Installer {
            dir: dir.into(),
            settings,
            dry_run,
            writer: RefCell::new(writer),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Resolved on demand so commands that never spawn anything do not fail
    /// on a misconfigured package manager.
    pub fn package_manager(&self) -> anyhow::Result<PackageManager> {
        PackageManager::resolve(&self.settings.package_manager)
    }

    pub fn dependency_file(&self) -> DependencyFile {
        DependencyFile::new(self.dir.join(&self.settings.requirements_file).into_boxed_path())
    }

    /// Runs the invocation and returns the code to exit with. In dry-run
    /// mode the command line is printed instead and nothing is spawned.
    pub(crate) async fn execute(&self, invocation: Invocation) -> anyhow::Result<u8> {
        if self.dry_run {
            debug!(command = %invocation, "Dry run, not spawning");
            writeln!(self.writer(), "{invocation}")?;
            return Ok(0);
        }

        let status = process::run(&invocation).await?;
        Ok(process::exit_code(status))
    }
}

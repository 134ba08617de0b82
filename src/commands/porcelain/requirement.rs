use crate::areas::dependency_file::Upsert;
use crate::areas::installer::Installer;
use crate::artifacts::reference::package_reference::PackageReference;
use crate::artifacts::reference::requirement::{EntryStyle, format_entry};
use anyhow::Context;
use colored::Colorize;

impl Installer {
    /// Prints the entry, or upserts it into the dependency file. A dry run
    /// reports what the upsert would do and leaves the file alone.
    pub fn requirement(
        &self,
        reference: &PackageReference,
        style: EntryStyle,
        write: bool,
    ) -> anyhow::Result<()> {
        let entry = format_entry(reference, style)?;

        if !write {
            writeln!(self.writer(), "{entry}")?;
            return Ok(());
        }

        let name = reference
            .name()
            .context("a package name is required to update the dependency file")?;
        let dependency_file = self.dependency_file();

        if self.dry_run() {
            let outcome = dependency_file.preview(reference, style)?;
            writeln!(self.writer(), "{entry}")?;
            writeln!(
                self.writer(),
                "{} {name} in {} (dry run)",
                outcome.to_string().yellow(),
                dependency_file.path().display()
            )?;
            return Ok(());
        }

        let outcome = dependency_file.upsert(reference, style)?;

        let label = match outcome {
            Upsert::Added | Upsert::Replaced => outcome.to_string().green(),
            Upsert::Unchanged => outcome.to_string().normal(),
        };
        writeln!(
            self.writer(),
            "{label} {name} in {}",
            dependency_file.path().display()
        )?;

        Ok(())
    }
}

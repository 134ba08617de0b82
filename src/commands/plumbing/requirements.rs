use crate::areas::installer::Installer;
use colored::Colorize;

const DEFAULT_REF_LABEL: &str = "(default)";

impl Installer {
    /// Lists git entries of the dependency file as `name<TAB>url<TAB>ref`.
    pub fn requirements(&self) -> anyhow::Result<()> {
        let entries = self.dependency_file().entries()?;

        for reference in &entries {
            let name = reference
                .name()
                .map(|name| name.to_string())
                .unwrap_or_default();
            let git_ref = reference
                .selector()
                .ref_name()
                .map_or(DEFAULT_REF_LABEL.to_string(), |name| name.to_string());

            writeln!(
                self.writer(),
                "{}\t{}\t{}",
                name.bold(),
                reference.url(),
                git_ref.yellow()
            )?;
        }

        Ok(())
    }
}

use crate::areas::installer::Installer;
use crate::artifacts::reference::package_reference::PackageReference;

impl Installer {
    pub fn address(&self, reference: &PackageReference) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", reference.address())?;
        Ok(())
    }
}

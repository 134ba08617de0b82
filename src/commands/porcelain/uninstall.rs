use crate::areas::installer::Installer;
use crate::artifacts::reference::package_name::PackageName;

impl Installer {
    pub async fn uninstall(&self, package_name: &str, assume_yes: bool) -> anyhow::Result<u8> {
        let package_name = PackageName::try_parse(package_name)?;
        let assume_yes = assume_yes || self.settings().assume_yes;

        let invocation = self
            .package_manager()?
            .uninstall(&package_name, assume_yes);
        self.execute(invocation).await
    }
}

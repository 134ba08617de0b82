use crate::areas::installer::Installer;
use crate::artifacts::invocation::install_flags::InstallFlags;
use crate::artifacts::reference::package_reference::PackageReference;
use tracing::warn;

impl Installer {
    pub async fn install(
        &self,
        reference: &PackageReference,
        flags: InstallFlags,
    ) -> anyhow::Result<u8> {
        if flags.contains(InstallFlags::UPGRADE) && reference.selector().is_tag() {
            warn!(
                target_ref = %reference.selector().describe(),
                "Tags are immutable, upgrading reinstalls the same commit"
            );
        }

        let invocation = self.package_manager()?.install(reference, flags);
        self.execute(invocation).await
    }

    /// Reinstalls from the latest commit of the reference, even when the
    /// package version has not changed.
    pub async fn upgrade(
        &self,
        reference: &PackageReference,
        flags: InstallFlags,
    ) -> anyhow::Result<u8> {
        self.install(reference, flags | InstallFlags::REFRESH).await
    }
}

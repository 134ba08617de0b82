use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InstallFlags: u8 {
        const UPGRADE = 0b001;
        const FORCE_REINSTALL = 0b010;
        const NO_DEPS = 0b100;
    }
}

impl InstallFlags {
    /// What the tutorial calls refreshing a branch install: upgrade and
    /// reinstall even though the version string did not change.
    pub const REFRESH: Self = Self::UPGRADE.union(Self::FORCE_REINSTALL);

    pub fn from_options(upgrade: bool, force_reinstall: bool, no_deps: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::UPGRADE, upgrade);
        flags.set(Self::FORCE_REINSTALL, force_reinstall);
        flags.set(Self::NO_DEPS, no_deps);
        flags
    }

    /// pip options in the order pip documents them.
    pub fn to_args(self) -> Vec<&'static str> {
        [
            (Self::UPGRADE, "--upgrade"),
            (Self::FORCE_REINSTALL, "--force-reinstall"),
            (Self::NO_DEPS, "--no-deps"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, arg)| arg)
        .collect()
    }
}

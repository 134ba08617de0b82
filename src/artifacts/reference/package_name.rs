use crate::artifacts::reference::PACKAGE_NAME_REGEX;
use crate::error::{ReferenceError, Result};
use std::sync::LazyLock;

static PACKAGE_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(PACKAGE_NAME_REGEX).expect("package name regex is valid")
});

/// Name of an installed distribution, as pip knows it.
///
/// This is what `uninstall` removes and what `#egg=` announces; it is not
/// derived from the repository URL (`xyzs_py.git` may install `xyzs-py`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ReferenceError::EmptyPackageName);
        }

        if PACKAGE_NAME.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(ReferenceError::InvalidPackageName { name })
        }
    }

    /// PEP 503 normalized form: lowercase, with runs of `-`, `_` and `.`
    /// collapsed into a single `-`.
    pub fn normalized(&self) -> String {
        let mut normalized = String::with_capacity(self.0.len());
        let mut in_separator = false;

        for c in self.0.chars() {
            if matches!(c, '-' | '_' | '.') {
                if !in_separator {
                    normalized.push('-');
                }
                in_separator = true;
            } else {
                normalized.push(c.to_ascii_lowercase());
                in_separator = false;
            }
        }

        normalized
    }

    /// Whether both names refer to the same distribution.
    pub fn same_package(&self, other: &PackageName) -> bool {
        self.normalized() == other.normalized()
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("xyzs_py")]
    #[case("xyzs-py")]
    #[case("Django")]
    #[case("zope.interface")]
    #[case("a")]
    #[case("py3")]
    fn valid_names_are_accepted(#[case] name: &str) {
        assert_eq!(PackageName::try_parse(name).unwrap().as_ref(), name);
    }

    #[rstest]
    #[case("-leading")]
    #[case("trailing_")]
    #[case("has space")]
    #[case("semi;colon")]
    #[case("xyzs_py==1.0")]
    fn invalid_names_are_rejected(#[case] name: &str) {
        assert_eq!(
            PackageName::try_parse(name),
            Err(ReferenceError::InvalidPackageName {
                name: name.to_string()
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_names_are_rejected(#[case] name: &str) {
        assert_eq!(
            PackageName::try_parse(name),
            Err(ReferenceError::EmptyPackageName)
        );
    }

    #[test]
    fn normalization_folds_case_and_separators() {
        let name = PackageName::try_parse("XYZS__py.Extra").unwrap();
        assert_eq!(name.normalized(), "xyzs-py-extra");
    }

    #[test]
    fn underscore_and_dash_spellings_are_the_same_package() {
        let a = PackageName::try_parse("xyzs_py").unwrap();
        let b = PackageName::try_parse("XYZS-Py").unwrap();
        assert!(a.same_package(&b));
    }
}

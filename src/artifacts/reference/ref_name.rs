use crate::artifacts::reference::INVALID_REF_NAME_REGEX;
use crate::error::{ReferenceError, Result};
use std::sync::LazyLock;

static INVALID_REF_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(INVALID_REF_NAME_REGEX).expect("ref name regex is valid")
});

/// A branch, tag or commit name, checked against git's ref naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefName(String);

impl RefName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(ReferenceError::EmptyRef);
        }

        // '#' would start the URL fragment of the address
        if INVALID_REF_NAME.is_match(&name) || name.contains('#') {
            Err(ReferenceError::InvalidRef { name })
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which commit of the repository an install should resolve to.
///
/// `Branch` and `Tag` only differ in intent: both end up as `@<ref>` in the
/// address. `Revision` is a ref given inline (`<url>@<ref>`) whose kind is
/// unknown to us and left for git to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefSelector {
    #[default]
    Default,
    Branch(RefName),
    Tag(RefName),
    Revision(RefName),
}

impl RefSelector {
    /// Builds a selector from the `--branch` / `--tag` options.
    ///
    /// Supplying both is ambiguous and rejected instead of picking one.
    pub fn from_options(branch: Option<&str>, tag: Option<&str>) -> Result<Self> {
        match (branch, tag) {
            (Some(branch), Some(tag)) => Err(ReferenceError::ConflictingRefs {
                first: format!("branch '{branch}'"),
                second: format!("tag '{tag}'"),
            }),
            (Some(branch), None) => Ok(Self::Branch(RefName::try_parse(branch)?)),
            (None, Some(tag)) => Ok(Self::Tag(RefName::try_parse(tag)?)),
            (None, None) => Ok(Self::Default),
        }
    }

    /// Merges a selector parsed from the target string with one built from
    /// options. At most one of them may name a ref.
    pub fn merge(self, other: Self) -> Result<Self> {
        match (self, other) {
            (Self::Default, other) => Ok(other),
            (this, Self::Default) => Ok(this),
            (this, other) => Err(ReferenceError::ConflictingRefs {
                first: this.describe(),
                second: other.describe(),
            }),
        }
    }

    pub fn ref_name(&self) -> Option<&RefName> {
        match self {
            Self::Default => None,
            Self::Branch(name) | Self::Tag(name) | Self::Revision(name) => Some(name),
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Default => "default branch".to_string(),
            Self::Branch(name) => format!("branch '{name}'"),
            Self::Tag(name) => format!("tag '{name}'"),
            Self::Revision(name) => format!("ref '{name}'"),
        }
    }
}

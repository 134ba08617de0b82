use crate::artifacts::reference::package_name::PackageName;
use crate::artifacts::reference::ref_name::{RefName, RefSelector};
use crate::artifacts::reference::repository_url::{RepositoryUrl, split_ref};
use crate::artifacts::reference::EGG_FRAGMENT;
use crate::error::Result;
use derive_new::new;

/// A repository, the commit to take from it and, optionally, the name of the
/// package it provides.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PackageReference {
    url: RepositoryUrl,
    selector: RefSelector,
    #[new(default)]
    name: Option<PackageName>,
}

impl PackageReference {
    /// Parses a `[git+]<url>[@<ref>]` target and combines its inline ref with
    /// the selector built from `--branch` / `--tag`.
    pub fn try_parse(target: &str, selector: RefSelector) -> Result<Self> {
        let (url, inline_ref) = split_ref(target.trim());
        let url = RepositoryUrl::try_parse(url)?;

        let inline = match inline_ref {
            Some(name) => RefSelector::Revision(RefName::try_parse(name)?),
            None => RefSelector::Default,
        };

        Ok(Self::new(url, inline.merge(selector)?))
    }

    pub fn with_name(mut self, name: PackageName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn url(&self) -> &RepositoryUrl {
        &self.url
    }

    pub fn selector(&self) -> &RefSelector {
        &self.selector
    }

    pub fn name(&self) -> Option<&PackageName> {
        self.name.as_ref()
    }

    /// `<url>@<ref>`, or just `<url>` when the default branch is wanted.
    pub fn address(&self) -> String {
        match self.selector.ref_name() {
            Some(ref_name) => format!("{}@{}", self.url, ref_name),
            None => self.url.to_string(),
        }
    }

    /// [`Self::address`] with the `git+` prefix pip requires.
    pub fn vcs_address(&self) -> String {
        match self.selector.ref_name() {
            Some(ref_name) => format!("{}@{}", self.url.vcs_url(), ref_name),
            None => self.url.vcs_url(),
        }
    }

    /// The argument handed to `pip install`.
    pub fn install_target(&self) -> String {
        match &self.name {
            Some(name) => format!("{}#{EGG_FRAGMENT}{name}", self.vcs_address()),
            None => self.vcs_address(),
        }
    }
}

//! Dependency file (requirements.txt)
//!
//! Only git entries are interpreted. Every other line (registry
//! requirements, options, comments, blank lines) is carried over untouched
//! when the file is rewritten.

use crate::artifacts::reference::package_name::PackageName;
use crate::artifacts::reference::package_reference::PackageReference;
use crate::artifacts::reference::requirement::{
    EntryStyle, Qualifiers, format_entry, format_qualified_entry, is_git_entry, parse_entry,
    parse_qualified_entry, split_comment, strip_comment,
};
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::{Read, Seek, SeekFrom, Write};
use std::ops::DerefMut;
use std::path::Path;

/// What an upsert did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Replaced,
    Unchanged,
}

impl std::fmt::Display for Upsert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Upsert::Added => "Added",
            Upsert::Replaced => "Replaced",
            Upsert::Unchanged => "Unchanged",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, new)]
pub struct DependencyFile {
    path: Box<Path>,
}

impl DependencyFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses every git entry; a malformed one fails with its line number.
    pub fn entries(&self) -> anyhow::Result<Vec<PackageReference>> {
        let content = self.read_shared()?;

        content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, strip_comment(line)))
            .filter(|(_, line)| is_git_entry(line))
            .map(|(line_no, line)| {
                parse_entry(line).with_context(|| {
                    format!("{}:{line_no}: invalid git requirement", self.path.display())
                })
            })
            .collect()
    }

    /// Replaces the git entry for the same package in place, or appends a
    /// new one when there is none. The file is created if missing.
    ///
    /// A replaced line keeps its extras, markers and trailing comment.
    pub fn upsert(
        &self,
        reference: &PackageReference,
        style: EntryStyle,
    ) -> anyhow::Result<Upsert> {
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .with_context(|| format!("failed to open dependency file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;

        let (outcome, rewritten) = merge_entry(&content, reference, style)?;
        if outcome == Upsert::Unchanged {
            return Ok(outcome);
        }

        let file = lock.deref_mut();
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(rewritten.as_bytes())
            .with_context(|| format!("failed to write dependency file at {:?}", self.path))?;

        Ok(outcome)
    }

    /// What [`Self::upsert`] would do, without creating or touching the file.
    pub fn preview(
        &self,
        reference: &PackageReference,
        style: EntryStyle,
    ) -> anyhow::Result<Upsert> {
        if !self.path.exists() {
            return Ok(Upsert::Added);
        }

        let content = self.read_shared()?;
        merge_entry(&content, reference, style).map(|(outcome, _)| outcome)
    }

    fn read_shared(&self) -> anyhow::Result<String> {
        let mut file = std::fs::File::open(&self.path)
            .with_context(|| format!("failed to open dependency file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;
        Ok(content)
    }
}

fn merge_entry(
    content: &str,
    reference: &PackageReference,
    style: EntryStyle,
) -> anyhow::Result<(Upsert, String)> {
    let name = reference
        .name()
        .context("a package name is required to update the dependency file")?;

    let mut outcome = Upsert::Added;
    let mut lines = Vec::new();

    for line in content.lines() {
        let (requirement, comment) = split_comment(line);

        match declared_qualifiers(requirement, name) {
            Some(qualifiers) if outcome == Upsert::Added => {
                let entry = format_qualified_entry(reference, style, &qualifiers)?;
                outcome = if requirement == entry {
                    Upsert::Unchanged
                } else {
                    Upsert::Replaced
                };
                lines.push(format!("{entry}{comment}"));
            }
            _ => lines.push(line.to_string()),
        }
    }

    if outcome == Upsert::Added {
        lines.push(format_entry(reference, style)?);
    }

    let mut rewritten = lines.join("\n");
    rewritten.push('\n');
    Ok((outcome, rewritten))
}

/// The extras and markers of `requirement` when it is a git entry for `name`.
fn declared_qualifiers(requirement: &str, name: &PackageName) -> Option<Qualifiers> {
    if !is_git_entry(requirement) {
        return None;
    }

    let (reference, qualifiers) = parse_qualified_entry(requirement).ok()?;
    reference
        .name()
        .is_some_and(|found| found.same_package(name))
        .then_some(qualifiers)
}

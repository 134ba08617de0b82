//! Dependency-file entries
//!
//! pip accepts two spellings for a requirement pulled from git:
//!
//! - egg form: `git+<url>@<ref>#egg=<name>`
//! - PEP 508 form: `<name>[<extras>] @ git+<url>@<ref>`
//!
//! Either may end in environment markers (` ; python_version >= "3.8"`).
//! Both are written and parsed here. Parsing only deals with a single line;
//! walking a whole file is done by the dependency file area.

use crate::artifacts::reference::package_name::PackageName;
use crate::artifacts::reference::package_reference::PackageReference;
use crate::artifacts::reference::ref_name::RefSelector;
use crate::artifacts::reference::{EGG_FRAGMENT, VCS_PREFIX};
use crate::error::{ReferenceError, Result};

const EDITABLE_FLAGS: [&str; 3] = ["-e ", "--editable ", "--editable="];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryStyle {
    #[default]
    Egg,
    Pep508,
}

/// Extras and environment markers of an entry. A [`PackageReference`]
/// carries neither, so they travel next to it when a line is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Qualifiers {
    pub extras: Vec<PackageName>,
    pub markers: Option<String>,
}

/// Renders the dependency-file line for a named reference.
pub fn format_entry(reference: &PackageReference, style: EntryStyle) -> Result<String> {
    format_qualified_entry(reference, style, &Qualifiers::default())
}

/// Like [`format_entry`], keeping extras and markers. The egg fragment
/// cannot name extras, so an entry with extras is always in PEP 508 form.
pub fn format_qualified_entry(
    reference: &PackageReference,
    style: EntryStyle,
    qualifiers: &Qualifiers,
) -> Result<String> {
    let name = reference.name().ok_or(ReferenceError::MissingPackageName)?;
    let target = reference.vcs_address();

    let mut entry = if !qualifiers.extras.is_empty() {
        let extras = qualifiers
            .extras
            .iter()
            .map(PackageName::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{name}[{extras}] @ {target}")
    } else {
        match style {
            EntryStyle::Egg => format!("{target}#{EGG_FRAGMENT}{name}"),
            EntryStyle::Pep508 => format!("{name} @ {target}"),
        }
    };

    if let Some(markers) = &qualifiers.markers {
        entry.push_str(" ; ");
        entry.push_str(markers);
    }

    Ok(entry)
}

/// Parses one requirement line back into a named reference.
///
/// Comments must already be stripped (see [`strip_comment`]). A leading
/// `-e`/`--editable` flag is tolerated.
pub fn parse_entry(line: &str) -> Result<PackageReference> {
    parse_qualified_entry(line).map(|(reference, _)| reference)
}

/// Like [`parse_entry`], also returning the entry's extras and markers.
pub fn parse_qualified_entry(line: &str) -> Result<(PackageReference, Qualifiers)> {
    let entry = strip_editable(line.trim());

    let malformed = |reason: &str| ReferenceError::MalformedEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let (requirement, markers) = split_markers(entry);

    let (declared_name, extras, address) = if requirement.starts_with(VCS_PREFIX) {
        (None, Vec::new(), requirement)
    } else {
        let (name, address) = requirement
            .split_once('@')
            .ok_or_else(|| malformed("not a git+ requirement"))?;
        let address = address.trim_start();
        if !address.starts_with(VCS_PREFIX) {
            return Err(malformed("not a git+ requirement"));
        }

        let (name, extras) = match name.split_once('[') {
            Some((name, extras)) => {
                let extras = extras
                    .trim_end()
                    .strip_suffix(']')
                    .ok_or_else(|| malformed("unclosed extras"))?;
                (name, parse_extras(extras)?)
            }
            None => (name, Vec::new()),
        };
        (Some(PackageName::try_parse(name.trim())?), extras, address)
    };

    let (address, fragment) = match address.split_once('#') {
        Some((address, fragment)) => (address, Some(fragment)),
        None => (address, None),
    };

    let egg_name = fragment
        .into_iter()
        .flat_map(|fragment| fragment.split('&'))
        .find_map(|param| param.strip_prefix(EGG_FRAGMENT))
        .map(PackageName::try_parse)
        .transpose()?;

    let name = declared_name
        .or(egg_name)
        .ok_or_else(|| malformed("missing #egg=<name>"))?;

    let reference = PackageReference::try_parse(address, RefSelector::Default)?.with_name(name);
    let qualifiers = Qualifiers {
        extras,
        markers: markers.map(str::to_string),
    };

    Ok((reference, qualifiers))
}

/// Whether a comment-free line is a git requirement worth parsing.
pub fn is_git_entry(line: &str) -> bool {
    let entry = strip_editable(line.trim());
    entry.starts_with(VCS_PREFIX)
        || entry
            .split_once('@')
            .is_some_and(|(_, address)| address.trim_start().starts_with(VCS_PREFIX))
}

/// Drops a whole-line comment, or an inline one introduced by whitespace
/// followed by `#` (a bare `#` is the URL fragment).
pub fn strip_comment(line: &str) -> &str {
    split_comment(line).0
}

/// Splits a line into its trimmed requirement and the trailing comment,
/// including the whitespace in front of it.
pub fn split_comment(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return ("", trimmed);
    }

    let cut = trimmed
        .char_indices()
        .find(|&(i, c)| c == '#' && trimmed[..i].ends_with(char::is_whitespace))
        .map_or(trimmed.len(), |(i, _)| i);

    let requirement = trimmed[..cut].trim_end();
    (requirement, &trimmed[requirement.len()..])
}

/// URL requirements need whitespace before the `;` of their markers.
fn split_markers(entry: &str) -> (&str, Option<&str>) {
    entry
        .char_indices()
        .find(|&(i, c)| c == ';' && entry[..i].ends_with(char::is_whitespace))
        .map_or((entry, None), |(i, _)| {
            let markers = entry[i + 1..].trim();
            (
                entry[..i].trim_end(),
                (!markers.is_empty()).then_some(markers),
            )
        })
}

fn parse_extras(extras: &str) -> Result<Vec<PackageName>> {
    extras
        .split(',')
        .map(str::trim)
        .filter(|extra| !extra.is_empty())
        .map(PackageName::try_parse)
        .collect()
}

fn strip_editable(entry: &str) -> &str {
    EDITABLE_FLAGS
        .iter()
        .find_map(|flag| entry.strip_prefix(flag))
        .map_or(entry, str::trim_start)
}

//! Package references and the strings built from them
//!
//! - `repository_url`: the remote location, stored without its `git+` prefix
//! - `ref_name`: branch/tag names and the selector choosing between them
//! - `package_name`: distribution names used by `uninstall` and `#egg=`
//! - `package_reference`: the composite address (`<url>@<ref>`)
//! - `requirement`: dependency-file entries and their parser

pub mod package_name;
pub mod package_reference;
pub mod ref_name;
pub mod repository_url;
pub mod requirement;

/// Same rules `git check-ref-format` applies to branch and tag names.
pub const INVALID_REF_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
/// PEP 508 distribution name, matched case-insensitively.
pub const PACKAGE_NAME_REGEX: &str = r"(?i)^([a-z0-9]|[a-z0-9][a-z0-9._-]*[a-z0-9])$";
/// Scheme prefix pip uses to recognise git sources.
pub const VCS_PREFIX: &str = "git+";
pub const EGG_FRAGMENT: &str = "egg=";
pub const SUPPORTED_SCHEMES: [&str; 5] = ["https", "http", "ssh", "git", "file"];

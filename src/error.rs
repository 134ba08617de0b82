//! Invalid reference errors
//!
//! These are the only failures `gitpip` raises on its own. Everything that can
//! go wrong once the package manager runs (network, missing refs, conflicts) is
//! reported by that tool through its exit status and output.

use thiserror::Error;

/// Rejections raised while composing or parsing a package reference.
///
/// Every variant is detected before any external process is spawned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The repository URL was empty.
    #[error("repository url cannot be empty")]
    EmptyUrl,

    /// The repository URL could not be used as a pip VCS address.
    #[error("invalid repository url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The ref name was empty.
    #[error("ref name cannot be empty")]
    EmptyRef,

    /// The ref name breaks git's ref naming rules.
    #[error("invalid ref name: {name}")]
    InvalidRef { name: String },

    /// More than one of branch, tag or inline ref was supplied.
    #[error("conflicting references: {first} and {second} cannot be combined")]
    ConflictingRefs { first: String, second: String },

    /// The package name was empty.
    #[error("package name cannot be empty")]
    EmptyPackageName,

    /// The package name is not a valid distribution name.
    #[error("invalid package name: {name}")]
    InvalidPackageName { name: String },

    /// A dependency-file entry was requested for a reference without a name.
    #[error("a package name is required to build a dependency file entry")]
    MissingPackageName,

    /// A dependency-file line could not be parsed.
    #[error("malformed dependency entry '{entry}': {reason}")]
    MalformedEntry { entry: String, reason: String },
}

/// Convenience alias for reference operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;

use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldNotFoundError
///
/// A field path segment has no resolvable member on its containing type.
/// Raised by path resolution; the ordering entry points turn it into
/// degrade-to-unsorted.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{reason} resolving '{path}' on {record}: segment '{segment}' (on {owner})")]
pub struct FieldNotFoundError {
    /// Root record type path.
    pub record: &'static str,
    /// Full requested field path.
    pub path: String,
    /// First segment that failed.
    pub segment: String,
    /// Type the failing segment was looked up on.
    pub owner: String,
    /// Why the segment did not resolve.
    pub reason: MissingReason,
}

impl FieldNotFoundError {
    pub(crate) fn new(
        record: &'static str,
        path: &str,
        segment: &str,
        owner: impl Into<String>,
        reason: MissingReason,
    ) -> Self {
        Self {
            record,
            path: path.to_string(),
            segment: segment.to_string(),
            owner: owner.into(),
            reason,
        }
    }
}

///
/// MissingReason
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MissingReason {
    /// The containing type declares no member with this name.
    NoSuchMember,
    /// The path ends on a nested record, which has no comparable value.
    NotComparable,
    /// The path continues past a scalar field.
    ScalarHasNoMembers,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoSuchMember => "no such member",
            Self::NotComparable => "field is a nested record, not a comparable value",
            Self::ScalarHasNoMembers => "scalar field has no members",
        };

        f.write_str(label)
    }
}

///
/// SortError
///
/// Failure surfaced by the fallible ordering entry points.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum SortError {
    #[error(transparent)]
    FieldNotFound(#[from] FieldNotFoundError),
}

///
/// ConfigError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid sort configuration: {0}")]
    Invalid(String),

    #[error("failed to parse sort configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Sort expressions and their parsed form.
//!
//! Grammar (direction token is case-insensitive):
//!
//! ```text
//! expression := directive (',' directive)*
//! directive  := fieldPath (WS direction)?
//! fieldPath  := identifier ('.' identifier)*
//! direction  := 'ASC' | 'DESC'
//! ```

mod parse;


use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

// re-exports
pub use parse::is_blank;

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// SortKey
/// One field path plus its direction.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    #[must_use]
    pub const fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

///
/// SortSpec
///
/// Ordered list of sort keys; index 0 is the primary key.
/// An empty spec is a no-op. Key order is never changed after parsing.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse `expression`, falling back to `default_expression` when the
    /// expression is blank. Never fails.
    #[must_use]
    pub fn parse(expression: &str, default_expression: &str) -> Self {
        parse::parse(expression, default_expression)
    }

    #[must_use]
    pub fn then(mut self, key: SortKey) -> Self {
        self.0.push(key);
        self
    }

    #[must_use]
    pub fn then_asc(self, field: impl Into<String>) -> Self {
        self.then(SortKey::asc(field))
    }

    #[must_use]
    pub fn then_desc(self, field: impl Into<String>) -> Self {
        self.then(SortKey::desc(field))
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<SortKey> {
        self.0
    }
}

impl From<Vec<SortKey>> for SortSpec {
    fn from(keys: Vec<SortKey>) -> Self {
        Self(keys)
    }
}

impl FromIterator<SortKey> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for SortSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, ""))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }

        Ok(())
    }
}

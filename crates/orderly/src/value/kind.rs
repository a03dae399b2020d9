use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ValueKind
///
/// Terminal value type of a resolved field path.
/// Decides the comparison family (numeric, lexical, temporal) used by
/// an ordering key.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    Bool,
    Date,
    Float,
    Int,
    Text,
    Timestamp,
    Uint,
}

impl ValueKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::Uint)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Timestamp)
    }

    #[must_use]
    pub const fn is_lexical(self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Float => "float",
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uint => "uint",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

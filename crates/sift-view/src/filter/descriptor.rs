//! Typed descriptors for column filter commands.

use regex::Regex;

/// The parsed form of one column's filter string.
///
/// Literal text is stored lowercased at parse time so that evaluation is
/// case-insensitive without re-lowering the needle per cell. Numeric bounds
/// keep the user-given order; evaluation normalizes the interval.
#[derive(Debug, Clone)]
pub enum FilterDescriptor {
    /// No constraint; matches every cell. Produced by an empty filter
    /// string or a command with an empty argument.
    Always,

    /// Case-insensitive substring match. The default when no command is
    /// given, and the fallback for every malformed command.
    Substring(String),

    /// Case-insensitive prefix match.
    StartsWith(String),

    /// Case-insensitive suffix match.
    EndsWith(String),

    /// Case-insensitive whole-cell equality.
    Equals(String),

    /// Case-insensitive substring match (explicit `#contains:` form).
    Contains(String),

    /// Matches cells that do NOT contain the literal.
    Not(String),

    /// Inclusive numeric interval.
    Range {
        /// First bound as the user typed it.
        low: f64,
        /// Second bound as the user typed it.
        high: f64,
    },

    /// Complement of [`FilterDescriptor::Range`].
    NotRange {
        /// First bound as the user typed it.
        low: f64,
        /// Second bound as the user typed it.
        high: f64,
    },

    /// Compiled case-insensitive pattern, matched anywhere in the cell.
    /// The compiled state lives in the descriptor and is rebuilt whenever
    /// the filter string changes.
    Regex(Regex),

    /// Case-insensitive membership test against trimmed cell text.
    /// Members are trimmed, lowercased, and deduplicated.
    InSet(Vec<String>),
}

impl FilterDescriptor {
    /// Builds the substring descriptor used both for plain filter text and
    /// as the fallback for malformed commands.
    pub fn substring(text: &str) -> Self {
        FilterDescriptor::Substring(text.to_lowercase())
    }

    /// Returns true if this descriptor imposes no constraint.
    pub fn is_always(&self) -> bool {
        matches!(self, FilterDescriptor::Always)
    }
}

impl PartialEq for FilterDescriptor {
    /// Compiled patterns compare by source text; range bounds compare as
    /// the user gave them.
    fn eq(&self, other: &Self) -> bool {
        use FilterDescriptor::*;
        match (self, other) {
            (Always, Always) => true,
            (Substring(a), Substring(b))
            | (StartsWith(a), StartsWith(b))
            | (EndsWith(a), EndsWith(b))
            | (Equals(a), Equals(b))
            | (Contains(a), Contains(b))
            | (Not(a), Not(b)) => a == b,
            (Range { low: a, high: b }, Range { low: c, high: d })
            | (NotRange { low: a, high: b }, NotRange { low: c, high: d }) => a == c && b == d,
            (Regex(a), Regex(b)) => a.as_str() == b.as_str(),
            (InSet(a), InSet(b)) => a == b,
            _ => false,
        }
    }
}

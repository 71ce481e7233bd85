//! Parser for column filter strings.

use regex::RegexBuilder;

use super::descriptor::FilterDescriptor;

/// Commands recognized after a leading `#`.
const COMMANDS: [&str; 9] = [
    "range",
    "notrange",
    "in",
    "regex",
    "startswith",
    "endswith",
    "contains",
    "equals",
    "not",
];

/// Parser for column filter strings.
///
/// # Grammar
///
/// ```text
/// filter   ::= "" | "#" command ":" argument | text
/// command  ::= "range" | "notrange" | "in" | "regex" | "startswith"
///            | "endswith" | "contains" | "equals" | "not"
/// argument ::= everything after the FIRST ":" (later colons are literal)
/// text     ::= anything else, matched as a substring
/// ```
///
/// Parsing is total. An empty string means "no constraint". Anything that
/// is not a well-formed command - unknown command name, missing `:`, a
/// range bound that is not a number, a pattern that does not compile -
/// degrades to a substring search on the full raw text, `#` included.
/// Commands and literals are matched case-insensitively.
pub struct FilterParser;

impl FilterParser {
    /// Parses a raw filter string into a [`FilterDescriptor`].
    pub fn parse(raw: &str) -> FilterDescriptor {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FilterDescriptor::Always;
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            if let Some((command, argument)) = rest.split_once(':') {
                if let Some(descriptor) = Self::parse_command(command.trim(), argument) {
                    return descriptor;
                }
            }
        }

        FilterDescriptor::substring(trimmed)
    }

    /// Dispatches a recognized command, or returns `None` so the caller
    /// falls back to a substring search.
    fn parse_command(command: &str, argument: &str) -> Option<FilterDescriptor> {
        let command = command.to_lowercase();
        if !COMMANDS.contains(&command.as_str()) {
            return None;
        }

        // A recognized command with nothing after the colon imposes no
        // constraint, the same as an empty filter field.
        let argument = argument.trim();
        if argument.is_empty() {
            return Some(FilterDescriptor::Always);
        }

        match command.as_str() {
            "range" => {
                Self::parse_bounds(argument).map(|(low, high)| FilterDescriptor::Range { low, high })
            }
            "notrange" => Self::parse_bounds(argument)
                .map(|(low, high)| FilterDescriptor::NotRange { low, high }),
            "in" => Some(FilterDescriptor::InSet(Self::parse_set(argument))),
            "regex" => RegexBuilder::new(argument)
                .case_insensitive(true)
                .build()
                .ok()
                .map(FilterDescriptor::Regex),
            "startswith" => Some(FilterDescriptor::StartsWith(argument.to_lowercase())),
            "endswith" => Some(FilterDescriptor::EndsWith(argument.to_lowercase())),
            "contains" => Some(FilterDescriptor::Contains(argument.to_lowercase())),
            "equals" => Some(FilterDescriptor::Equals(argument.to_lowercase())),
            "not" => Some(FilterDescriptor::Not(argument.to_lowercase())),
            _ => None,
        }
    }

    /// Parses `low,high` as two numbers in the user-given order.
    fn parse_bounds(argument: &str) -> Option<(f64, f64)> {
        let (low, high) = argument.split_once(',')?;
        if high.contains(',') {
            return None;
        }
        let low: f64 = low.trim().parse().ok()?;
        let high: f64 = high.trim().parse().ok()?;
        Some((low, high))
    }

    /// Splits a `#in:` list on commas: trimmed, lowercased, empties
    /// discarded, duplicates dropped in first-seen order.
    fn parse_set(argument: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for piece in argument.split(',') {
            let piece = piece.trim().to_lowercase();
            if piece.is_empty() || values.contains(&piece) {
                continue;
            }
            values.push(piece);
        }
        values
    }
}

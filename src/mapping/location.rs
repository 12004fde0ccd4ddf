use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A numbered anchor: `#loc<N> = loc("<path>":<line>:<col>)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDefinition {
    pub alias: String,
    pub file: String,
    pub line: u32,
    /// Parsed for completeness, never used for mapping.
    pub column: u32,
}

/// Compiled line patterns for the location syntax.
struct LocationPatterns {
    bare_anchor: Regex,
    numbered_anchor: Regex,
    reference: Regex,
}

fn patterns() -> &'static LocationPatterns {
    static PATTERNS: OnceLock<LocationPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| LocationPatterns {
        bare_anchor: Regex::new(r#"#loc = loc\("(.*?)":\d+:\d+\)"#)
            .expect("bare anchor pattern is a valid regex"),
        numbered_anchor: Regex::new(r#"#loc(\d+) = loc\("(.*?)":(\d+):(\d+)\)"#)
            .expect("numbered anchor pattern is a valid regex"),
        reference: Regex::new(r"loc\s*\(\s*(#loc\d+)\s*\)")
            .expect("reference pattern is a valid regex"),
    })
}

/// Parse a positive line number. Zero and overflow are treated as a non-match.
fn parse_line_number(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|line| *line > 0)
}

/// Extract the source path from a bare anchor line, if the line is one.
///
/// Only the path is used, so the line and column digits are not range-checked.
pub fn parse_bare_anchor(line: &str) -> Option<&str> {
    patterns()
        .bare_anchor
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a numbered anchor definition on this line.
pub fn parse_numbered_anchor(line: &str) -> Option<LocationDefinition> {
    let caps = patterns().numbered_anchor.captures(line)?;
    let line_number = parse_line_number(caps.get(3)?.as_str())?;
    let column = caps.get(4)?.as_str().parse::<u32>().ok()?;

    Some(LocationDefinition {
        alias: format!("#loc{}", caps.get(1)?.as_str()),
        file: caps.get(2)?.as_str().to_string(),
        line: line_number,
        column,
    })
}

/// Return the alias of the first `loc(#locN)` reference on this line.
pub fn parse_reference(line: &str) -> Option<&str> {
    patterns()
        .reference
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Alias → definition table for a single artifact
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    definitions: HashMap<String, LocationDefinition>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition, replacing any earlier one for the same alias.
    pub fn define(&mut self, definition: LocationDefinition) {
        self.definitions.insert(definition.alias.clone(), definition);
    }

    pub fn resolve(&self, alias: &str) -> Option<&LocationDefinition> {
        self.definitions.get(alias)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

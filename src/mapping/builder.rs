use super::line_map::LineMapping;
use super::location::{self, LocationTable};
use crate::logging;
use crate::{Result, SyncError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Counters collected while building a mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Distinct numbered aliases in the location table
    pub anchors: usize,
    /// Lines carrying a `loc(#locN)` reference
    pub references: usize,
    pub resolved: usize,
    pub unresolved: usize,
}

/// Outcome of parsing one IR artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Path from the first bare `#loc = loc(...)` anchor
    pub source_file_path: Option<String>,
    pub mapping: LineMapping,
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn lookup_forward(&self, ir_line: u32) -> &[u32] {
        self.mapping.lookup_forward(ir_line)
    }

    pub fn lookup_backward(&self, source_line: u32) -> &[u32] {
        self.mapping.lookup_backward(source_line)
    }
}

/// Build the line mapping for an IR artifact given as ordered lines.
///
/// The first pass collects the location table and the tracked source file,
/// the second resolves per-line references against that table. Lines that
/// match nothing, or reference an unknown alias, contribute nothing.
pub fn parse_locations<I, S>(lines: I) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();

    let mut source_file_path: Option<String> = None;
    let mut table = LocationTable::new();

    for line in &lines {
        let line = line.as_ref();
        if source_file_path.is_none() {
            if let Some(path) = location::parse_bare_anchor(line) {
                logging::log_source_discovered(path);
                source_file_path = Some(path.to_string());
            }
        }
        if let Some(definition) = location::parse_numbered_anchor(line) {
            table.define(definition);
        }
    }

    let mut mapping = LineMapping::new();
    let mut stats = ParseStats {
        anchors: table.len(),
        ..ParseStats::default()
    };

    for (ir_line, line) in (1u32..).zip(&lines) {
        let Some(alias) = location::parse_reference(line.as_ref()) else {
            continue;
        };
        stats.references += 1;
        match table.resolve(alias) {
            Some(definition) => {
                mapping.record(ir_line, definition.line);
                stats.resolved += 1;
            }
            None => {
                logging::log_unresolved_alias(alias, ir_line);
                stats.unresolved += 1;
            }
        }
    }

    ParseResult {
        source_file_path,
        mapping,
        stats,
    }
}

/// Parse IR text held in memory.
pub fn parse_text(text: &str) -> ParseResult {
    parse_locations(text.lines())
}

/// Read an IR artifact from disk and parse it.
pub fn parse_file(path: &Path) -> Result<ParseResult> {
    logging::log_parsing_artifact(&path.to_string_lossy());

    let text = fs::read_to_string(path).map_err(|e| {
        SyncError::ArtifactRead(format!("{}: {}", path.display(), e))
    })?;

    let result = parse_text(&text);
    logging::log_parse_complete(&result.stats);
    Ok(result)
}

//! Structured logging utilities for ttir-sync.
//!
//! Helper functions for consistent, structured logging across the
//! application using the `tracing` crate.

use crate::mapping::ParseStats;
use std::fmt;

/// Log artifact parsing start.
pub fn log_parsing_artifact(path: &str) {
    tracing::info!(artifact = path, "Parsing IR artifact");
}

/// Log parse completion with its counters.
pub fn log_parse_complete(stats: &ParseStats) {
    tracing::info!(
        anchors = stats.anchors,
        references = stats.references,
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        "Location mapping built"
    );
}

/// Log the tracked source file taken from the bare anchor.
pub fn log_source_discovered(path: &str) {
    tracing::debug!(source = path, "Source file path discovered");
}

pub fn log_missing_source() {
    tracing::warn!("No bare #loc anchor found; source file unknown");
}

pub fn log_unresolved_alias(alias: &str, ir_line: u32) {
    tracing::debug!(alias, ir_line, "Reference to undefined location alias skipped");
}

/// Log a cursor sync between views.
pub fn log_sync(direction: &str, line: u32, matches: usize) {
    tracing::debug!(direction, line, matches, "Cursor synchronized");
}

pub fn log_highlight(buffer: &str, lines: &[u32]) {
    tracing::trace!(buffer, ?lines, "Highlight requested");
}

/// Log an editor-side failure that was reported to the user.
pub fn log_editor_failure(operation: &str, error: &dyn fmt::Display) {
    tracing::warn!(operation, error = %error, "Editor operation failed");
}

pub fn log_source_opened(path: &str) {
    tracing::info!(source = path, "Source file opened in split view");
}

pub fn log_interactive_mode_start() {
    tracing::info!("Interactive sync session started");
}

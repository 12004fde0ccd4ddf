use crossterm::style::Stylize;
use is_terminal::IsTerminal;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Pretty printing utilities for sync output
pub struct Formatter;

impl Formatter {
    /// Format a list of line numbers as `12, 14, 20`, or `-` when empty.
    pub fn format_line_list(lines: &[u32]) -> String {
        if lines.is_empty() {
            return "-".to_string();
        }
        lines
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Format one mapping entry, e.g. `  IR 12 -> 40, 41`.
    pub fn format_mapping_entry(label: &str, line: u32, targets: &[u32]) -> String {
        format!("  {} {:>5} -> {}", label, line, Self::format_line_list(targets))
    }

    /// Header printed above a rendered buffer window.
    pub fn format_buffer_header(name: &str) -> String {
        Self::info(format!("── {} ──", name))
    }

    /// A single buffer line with gutter markers for highlight and cursor.
    pub fn format_buffer_line(number: usize, text: &str, highlighted: bool, is_cursor: bool) -> String {
        let marker = match (highlighted, is_cursor) {
            (true, _) => "►",
            (false, true) => ">",
            (false, false) => " ",
        };
        let line = format!("{} {:>5} │ {}", marker, number, text);
        if highlighted {
            Self::apply_color(&line, ColorKind::Highlight)
        } else {
            line
        }
    }

    pub fn format_repl_help() -> String {
        [
            "Sync commands:",
            "  ir <line>        Move the IR cursor and highlight the source lines",
            "  src <line>       Move the source cursor and highlight the IR lines",
            "  goto <line>      Move the cursor in the focused view and sync",
            "  focus ir|src     Switch the focused view",
            "  open             Open the source file in a split",
            "  sync             Re-sync from the focused view",
            "  map              Show the full line mapping",
            "  show             Show the focused view around its cursor",
            "  buffers          List open buffers",
            "  history          Show command history",
            "  help             Show this help",
            "  exit, quit       Leave the session",
        ]
        .join("\n")
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Configure whether ANSI colors are enabled.
    pub fn configure_colors(enable: bool) {
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    /// Disable colors under `NO_COLOR` or when stdout is not a terminal.
    pub fn configure_colors_from_env() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::configure_colors(!no_color && std::io::stdout().is_terminal());
    }

    /// 0 = quiet, 1 = normal, 2 = verbose
    pub fn set_verbosity(level: u8) {
        VERBOSITY.store(level.min(2), Ordering::Relaxed);
    }

    pub fn is_quiet() -> bool {
        VERBOSITY.load(Ordering::Relaxed) == 0
    }

    pub fn is_verbose() -> bool {
        VERBOSITY.load(Ordering::Relaxed) >= 2
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
            ColorKind::Highlight => format!("{}", message.black().on_yellow()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
    Highlight,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
static VERBOSITY: AtomicU8 = AtomicU8::new(1);

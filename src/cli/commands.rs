use crate::cli::args::{InteractiveArgs, LookupArgs, MapArgs, OutputFormat, SourceArgs};
use crate::cli::output::{CommandOutput, LookupReport};
use crate::config::Config;
use crate::editor::terminal::DEFAULT_CONTEXT_LINES;
use crate::mapping::{self, ParseResult};
use crate::repl::{self, ReplConfig};
use crate::ui::formatter::Formatter;
use crate::{Result, SyncError};
use serde::Serialize;
use serde_json::json;

/// Settings resolved from CLI flags and the config file
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub config: Config,
}

impl CommandContext {
    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

fn print_info(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::info(message));
    }
}

fn print_warning(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::warning(message));
    }
}

fn print_json<T: Serialize>(output: &CommandOutput<T>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(output)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", rendered);
    Ok(())
}

fn print_summary(result: &ParseResult) {
    match &result.source_file_path {
        Some(path) => print_info(format!("Source file: {}", path)),
        None => print_warning("No source file found in the IR file."),
    }
    if Formatter::is_verbose() {
        let stats = &result.stats;
        print_info(format!(
            "Anchors: {}, references: {} (resolved {}, unresolved {})",
            stats.anchors, stats.references, stats.resolved, stats.unresolved
        ));
    }
}

/// Execute the map command
pub fn map(args: MapArgs, ctx: &CommandContext) -> Result<()> {
    let result = mapping::parse_file(&args.ir)?;
    let show_forward = !args.backward_only;
    let show_backward = !args.forward_only;

    if ctx.is_json() {
        let mut report = json!({
            "source_file_path": result.source_file_path,
            "stats": result.stats,
        });
        let mapping = serde_json::to_value(&result.mapping)
            .map_err(|e| miette::miette!("Failed to serialize mapping: {}", e))?;
        if show_forward {
            report["forward"] = mapping["forward"].clone();
        }
        if show_backward {
            report["backward"] = mapping["backward"].clone();
        }
        return print_json(&CommandOutput::ok(report));
    }

    print_summary(&result);
    if result.mapping.is_empty() {
        print_warning("No location references resolved.");
        return Ok(());
    }

    if show_forward {
        print_info("IR → source:");
        for (line, targets) in result.mapping.forward_entries() {
            println!("{}", Formatter::format_mapping_entry("IR ", line, targets));
        }
    }
    if show_backward {
        print_info("Source → IR:");
        for (line, targets) in result.mapping.backward_entries() {
            println!("{}", Formatter::format_mapping_entry("src", line, targets));
        }
    }
    Ok(())
}

/// Execute the lookup command
pub fn lookup(args: LookupArgs, ctx: &CommandContext) -> Result<()> {
    let result = mapping::parse_file(&args.ir)?;

    let report = match (args.ir_line, args.source_line) {
        (Some(line), _) => LookupReport {
            direction: "forward",
            line: validate_line(line)?,
            matches: result.lookup_forward(line).to_vec(),
        },
        (None, Some(line)) => LookupReport {
            direction: "backward",
            line: validate_line(line)?,
            matches: result.lookup_backward(line).to_vec(),
        },
        (None, None) => {
            return Err(SyncError::InvalidCommand(
                "lookup requires --ir-line or --source-line".to_string(),
            )
            .into())
        }
    };

    if ctx.is_json() {
        return print_json(&CommandOutput::ok(report));
    }

    let (from, to) = match report.direction {
        "forward" => ("IR line", "source lines"),
        _ => ("Source line", "IR lines"),
    };
    if report.matches.is_empty() {
        print_warning(format!("No mapping found for {} {}", from, report.line));
    } else {
        print_info(format!("{} {} -> {}:", from, report.line, to));
        println!("{}", Formatter::format_line_list(&report.matches));
    }
    Ok(())
}

/// Execute the source command
pub fn source(args: SourceArgs, ctx: &CommandContext) -> Result<()> {
    let result = mapping::parse_file(&args.ir)?;

    let Some(path) = result.source_file_path else {
        let err = SyncError::MissingSourceFile(args.ir.display().to_string());
        if ctx.is_json() {
            print_json(&CommandOutput::<()>::error(vec![err.to_string()]))?;
        }
        return Err(err.into());
    };

    if ctx.is_json() {
        print_json(&CommandOutput::ok(json!({ "source_file_path": path })))
    } else {
        println!("{}", path);
        Ok(())
    }
}

/// Execute the interactive command
pub fn interactive(args: InteractiveArgs, ctx: &CommandContext) -> Result<()> {
    let config = ReplConfig {
        ir_path: args.ir,
        open_source: !args.no_open_source && ctx.config.sync.open_source.unwrap_or(true),
        context_lines: args
            .context
            .or(ctx.config.sync.context_lines)
            .unwrap_or(DEFAULT_CONTEXT_LINES),
    };
    repl::start_repl(config)
}

fn validate_line(line: u32) -> Result<u32> {
    if line == 0 {
        return Err(SyncError::InvalidLine("line numbers start at 1".to_string()).into());
    }
    Ok(line)
}

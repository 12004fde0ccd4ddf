use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttir_sync::cli::{Cli, CommandContext, Commands, OutputFormat, Verbosity};
use ttir_sync::config::Config;
use ttir_sync::ui::formatter::Formatter;

fn initialize_tracing(verbosity: Verbosity) {
    let log_level = verbosity.to_log_level();
    let fallback_filter = format!("ttir_sync={}", log_level);

    let use_json = std::env::var("TTIR_SYNC_JSON").is_ok();

    if use_json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.clone().into()),
            )
            .with(json_layer)
            .init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| fallback_filter.into()),
            )
            .with(fmt_layer)
            .init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    let (config, config_error) = Config::load_or_default(cli.config.as_deref());

    let verbosity = cli.verbosity_override().unwrap_or_else(|| {
        config
            .debug
            .verbosity
            .map(Verbosity::from_level)
            .unwrap_or(Verbosity::Normal)
    });
    initialize_tracing(verbosity);
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        target = env!("TTIR_SYNC_TARGET"),
        profile = env!("TTIR_SYNC_BUILD_PROFILE"),
        "Starting ttir-sync"
    );
    if let Some(err) = config_error {
        tracing::warn!("Failed to load config: {}. Using defaults.", err);
    }
    Formatter::set_verbosity(verbosity.level());
    if config.output.color == Some(false) {
        Formatter::configure_colors(false);
    }

    let format = cli
        .format
        .or_else(|| config.output.format.as_deref().and_then(OutputFormat::parse_name))
        .unwrap_or(OutputFormat::Text);
    let ctx = CommandContext {
        format,
        config,
    };

    let result = match cli.command {
        Commands::Map(args) => ttir_sync::cli::commands::map(args, &ctx),
        Commands::Lookup(args) => ttir_sync::cli::commands::lookup(args, &ctx),
        Commands::Source(args) => ttir_sync::cli::commands::source(args, &ctx),
        Commands::Interactive(args) => ttir_sync::cli::commands::interactive(args, &ctx),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "ttir-sync", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", Formatter::error(format!("Error: {err:#}")));
        return Err(err);
    }
    Ok(())
}

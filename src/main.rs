mod config;

/// Version injected at compile time via STACKFORM_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("STACKFORM_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use stackform::{default_registry, Decoded, Decoder, Format};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Decode, inspect and re-encode infrastructure templates
#[derive(Parser, Debug)]
#[command(name = "stackform", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Fail when a resource does not match its registered kind
    #[arg(long, global = true)]
    strict: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a template and write it back out
    Fmt {
        file: PathBuf,

        /// Output format (defaults to config, then to the input format)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// List the resources of a template
    List {
        file: PathBuf,

        /// Only show resources of this kind
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// List the kinds decoded as typed resources
    Kinds,
    /// Show or change saved defaults
    Config {
        /// Default output format
        #[arg(long, value_enum)]
        set_output: Option<OutputFormat>,

        /// Default to strict decoding
        #[arg(long)]
        set_strict: Option<bool>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    fn to_format(self) -> Format {
        match self {
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Install the file subscriber; the guard flushes the log when dropped
fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;
    let log_path = get_log_path();

    let file = match open_log_file(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {:#}", e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(writer.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("stackform {} logging at {:?} to {}", VERSION, level, log_path.display());

    Some(guard)
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open {}", path.display()))
}

/// Log file in the app dir, or the working directory without one
fn get_log_path() -> PathBuf {
    config::app_dir().unwrap_or_default().join("stackform.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let mut config = Config::load();

    match args.command {
        Command::Fmt { file, output } => {
            let input_format = Format::from_path(&file);
            let decoded = load(&file, input_format, &config, args.strict)?;
            let format = config.effective_output(output.map(OutputFormat::to_format), input_format);
            let encoded = decoded
                .template
                .encode(format)
                .with_context(|| format!("Failed to encode {}", file.display()))?;
            print!("{}", encoded);
            if format == Format::Json {
                println!();
            }
        }
        Command::List { file, kind } => {
            let decoded = load(&file, Format::from_path(&file), &config, args.strict)?;
            for (logical_id, resource) in decoded.template.resources() {
                if kind.as_deref().is_some_and(|k| k != resource.kind()) {
                    continue;
                }
                let shape = if resource.is_typed() { "typed" } else { "generic" };
                let policy = resource
                    .deletion_policy()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|_| "invalid".to_string());
                println!("{}\t{}\t{}\t{}", logical_id, resource.kind(), shape, policy);
            }
        }
        Command::Kinds => {
            for kind in default_registry().kinds() {
                println!("{}", kind);
            }
        }
        Command::Config {
            set_output,
            set_strict,
        } => {
            if set_output.is_some() || set_strict.is_some() {
                if let Some(output) = set_output {
                    config.output = Some(output.to_format());
                }
                if let Some(strict) = set_strict {
                    config.strict = strict;
                }
                let path = config.save().context("Failed to save config")?;
                tracing::info!("Saved config to {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Read and decode a template file
fn load(path: &Path, format: Format, config: &Config, cli_strict: bool) -> Result<Decoded> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let decoded = Decoder::default()
        .with_mode(config.decode_mode(cli_strict))
        .decode(&bytes, format)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    for issue in &decoded.issues {
        eprintln!(
            "warning: {} kept generic, not a valid {}: {}",
            issue.logical_id, issue.kind, issue.reason
        );
    }

    tracing::info!(
        "Loaded {} ({} resources)",
        path.display(),
        decoded.template.resource_count()
    );

    Ok(decoded)
}

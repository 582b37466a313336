use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

#[derive(Parser)]
#[command(name = "rimcheck", version, about = "RimWorld mod XML validation toolkit (Rust)")]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Only log errors to the console
    #[arg(long)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one XML file, or every XML file under a folder
    Validate {
        #[arg(long, conflicts_with = "root", required_unless_present = "root")]
        file: Option<PathBuf>,
        #[arg(short, long, conflicts_with = "file")]
        root: Option<PathBuf>,
        /// Output format: text or json
        #[arg(long)]
        format: Option<String>,
        /// Exit with an error when any document is invalid
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Check a whole mod folder (About/About.xml plus Defs)
    CheckMod {
        #[arg(short, long)]
        root: PathBuf,
        #[arg(long)]
        format: Option<String>,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },

    /// Print element and definition statistics for an XML file
    Stats {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        format: Option<String>,
    },

    /// Re-indent an XML file
    Format {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long, default_value = "  ")]
        indent: String,
        /// Rewrite the file in place instead of printing to stdout
        #[arg(long, default_value_t = false)]
        write: bool,
        #[arg(long, default_value_t = false)]
        backup: bool,
    },

    /// Dump JSON schemas for machine-readable outputs
    Schema {
        #[arg(long, default_value = "")]
        out_dir: PathBuf,
    },
}

trait Runnable {
    fn run(self, use_color: bool) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, use_color: bool) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        info!("▶ Starting command: {}", cmd_name);

        let result = match self {
            Commands::Validate {
                file,
                root,
                format,
                strict,
            } => commands::validate::run_validate(file, root, format, strict, use_color),
            Commands::CheckMod {
                root,
                format,
                strict,
            } => commands::check_mod::run_check_mod(root, format, strict, use_color),
            Commands::Stats { file, format } => commands::stats::run_stats(file, format),
            Commands::Format {
                file,
                indent,
                write,
                backup,
            } => commands::format::run_format(file, indent, write, backup),
            Commands::Schema { out_dir } => commands::schema::run_schema(out_dir),
        };

        match &result {
            Ok(_) => info!("✔ Finished command: {}", cmd_name),
            Err(e) => error!("✖ Command {} failed: {:?}", cmd_name, e),
        }

        result
    }
}

fn init_tracing(quiet: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = rolling::daily("logs", "rimcheck.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // console logs go to stderr so json output on stdout stays parseable
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let _guard = init_tracing(cli.quiet);

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    cli.cmd.run(use_color)
}

//! Jianghu CLI - Inspect and simulate procedural particle fields

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{effects, field, profile, simulate};

#[derive(Parser)]
#[command(name = "jianghu")]
#[command(about = "Deterministic particle fields for wuxia scene effects", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to engine settings (defaults to ./jianghu.toml when present)
    #[arg(long, global = true)]
    settings: Option<String>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every effect type with its budget
    Effects {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the resolved profile of one particle
    Profile {
        /// Effect tag (canonical or legacy)
        tag: String,

        /// Particle index
        index: usize,

        /// Theme color
        #[arg(long)]
        color: Option<String>,

        /// Output format (json or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Resolve a whole particle field
    Field {
        /// Effect tag (canonical or legacy)
        tag: String,

        /// Requested particle count (clamped by the budget)
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i64>,

        /// Theme color
        #[arg(long)]
        color: Option<String>,

        /// Fail on unrecognized tags instead of using the fallback
        #[arg(long)]
        strict: bool,

        /// Output format (summary or json)
        #[arg(long, default_value = "summary")]
        format: String,
    },

    /// Play a field headlessly and report what is on screen
    Simulate {
        /// Effect tag (canonical or legacy)
        tag: String,

        /// Requested particle count (clamped by the budget)
        #[arg(long, allow_hyphen_values = true)]
        count: Option<i64>,

        /// Theme color
        #[arg(long)]
        color: Option<String>,

        /// Seconds to simulate
        #[arg(long, default_value = "10")]
        seconds: f64,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f64,

        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = commands::load_settings(cli.settings.as_deref())?;

    match cli.command {
        Commands::Effects { format } => effects::run(&settings, &format),
        Commands::Profile {
            tag,
            index,
            color,
            format,
        } => profile::run(&settings, &tag, index, color.as_deref(), &format),
        Commands::Field {
            tag,
            count,
            color,
            strict,
            format,
        } => field::run(
            field::FieldArgs {
                tag,
                count,
                color,
                strict,
                format,
            },
            &settings,
        ),
        Commands::Simulate {
            tag,
            count,
            color,
            seconds,
            fps,
            width,
            height,
        } => simulate::run(
            simulate::SimulateArgs {
                tag,
                count,
                color,
                seconds,
                fps,
                width,
                height,
            },
            &settings,
        ),
    }
}

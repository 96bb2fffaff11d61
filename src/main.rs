//! `tokenkit`: interactive terminal playground for the design tokens.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tokenkit::app::{App, AppConfig};
use tokenkit::playground::Surface;

/// Environment variable holding the log filter (e.g. `tokenkit=debug`).
const LOG_ENV: &str = "TOKENKIT_LOG";

#[derive(Debug, Parser)]
#[command(name = "tokenkit", version, about = "Design token playground for the terminal")]
struct Args {
    /// Surface to open first: button, input, typography, color or motion.
    #[arg(long, default_value = "button")]
    surface: Surface,

    /// Print one frame to stdout instead of starting the interactive UI.
    #[arg(long)]
    print: bool,

    /// Frame width for --print.
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Frame height for --print.
    #[arg(long, default_value_t = 30)]
    height: u16,

    /// Write logs to this file (the interactive UI owns the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = AppConfig::new().with_surface(args.surface);

    if args.print {
        let mut app = App::headless(config, args.width, args.height);
        println!("{}", app.render_text()?);
        return Ok(());
    }

    let mut app = App::new(config)?;
    app.run()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs go to `--log-file` when given, to stderr in print mode, and nowhere
/// otherwise.
fn init_logging(args: &Args) -> io::Result<()> {
    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.print {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

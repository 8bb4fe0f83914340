//! Command-line entry point for the `ranktable` binary.
//!
//! `render` runs the same address -> tab -> load -> container flow as the
//! browser module against a dataset file and writes the result as a full
//! page, a container fragment, or the JSON view model.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use futures::executor::block_on;
use ranktable_report::types::Placeholder;
use ranktable_report::{PageAssets, render_container, render_page};
use tracing::info;

use crate::app::RatingApp;
use crate::config::RenderConfig;
use crate::location::{History, Location};
use crate::source::FileSource;
use crate::tabs::{TAB_QUERY_PARAM, TabId};

#[derive(Parser, Debug)]
#[command(name = "ranktable")]
#[command(about = "Render operator rating tables from a JSON dataset")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Config file (default: .ranktable/config.toml under the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the table for one tab
    Render(RenderArgs),
    /// List tab identifiers with their positions
    Tabs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset file (default: `data_path` from config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Tab identifier; overrides the `type` parameter of --url
    #[arg(long = "type", value_name = "TAB")]
    tab: Option<String>,

    /// Page address the tab is resolved from
    #[arg(long, default_value = "/")]
    url: String,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Emit only the container content
    #[arg(long, conflicts_with = "json")]
    fragment: bool,

    /// Emit the view model as JSON
    #[arg(long)]
    json: bool,

    /// Module script that boots the browser bundle
    #[arg(long, value_name = "PATH")]
    web_module: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Parse arguments, run the command and map the outcome to an exit code.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(&cli.log_level);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ranktable: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Render(args) => render(args, load_config(cli.config.as_deref())?),
        Command::Tabs => list_tabs(),
    }
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            Ok(RenderConfig::load_from_path(path))
        }
        None => {
            let root = std::env::current_dir().context("cannot resolve current directory")?;
            Ok(RenderConfig::load(&root))
        }
    }
}

fn render(args: &RenderArgs, config: RenderConfig) -> Result<()> {
    let data = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_path));

    let mut location = Location::parse(&args.url);
    if let Some(tab) = &args.tab {
        location.set_query_param(TAB_QUERY_PARAM, tab);
    }

    let mut app = RatingApp::new(config, args.width, History::new(location));
    block_on(app.load_from_address(&FileSource::new(&data)));
    info!(
        tab = %app.tabs().active(),
        skipped = app.skipped().len(),
        "rendered rating container"
    );

    let output = if args.json {
        serde_json::to_string_pretty(&app.page_view()).context("failed to serialize view model")?
    } else if args.fragment {
        render_container(app.container())
    } else {
        let assets = PageAssets {
            web_module_path: args.web_module.clone(),
        };
        render_page(&app.page_view(), &assets)
    };

    write_output(args.output.as_deref(), &output)?;

    if app.container().placeholder() == Some(Placeholder::LoadError) {
        bail!("failed to load dataset from {}", data.display());
    }
    Ok(())
}

fn list_tabs() -> Result<()> {
    let listing: String = TabId::ALL
        .iter()
        .map(|tab| format!("{}\t{}\t{}\n", tab.position(), tab, tab.label()))
        .collect();
    write_stdout(&listing)
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => write_stdout(&format!("{}\n", content)),
    }
}

/// Write to stdout; a reader that closes early (`| head`) is not an error.
fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
    {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.context("failed to write to stdout"),
    }
}

// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::unnecessary_wraps)]

use std::path::Path;

use clap::Parser;

use cvsync::cli::commands::{Cli, Command};
use cvsync::cli::output;
use cvsync::config::Config;
use cvsync::sync;

fn main() {
    // Logs go to stderr; stdout carries sync reports and JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn run(cli: Cli) -> CmdResult {
    match cli.command {
        Command::Sync { path } => cmd_sync(&path),
        Command::Parse { file, pretty } => cmd_parse(&file, pretty),
        Command::Extract { file } => cmd_extract(&file),
    }
}

fn cmd_sync(path: &str) -> CmdResult {
    let config = if path == "." {
        Config::from_cwd().map_err(map_err)?
    } else {
        Config::new(path)
    };
    sync::run(&config).map_err(map_err)
}

fn cmd_parse(file: &str, pretty: bool) -> CmdResult {
    let record = sync::extract_record(Path::new(file)).map_err(map_err)?;
    if pretty {
        println!("{}", output::format_json_pretty(&record));
    } else {
        println!("{}", output::format_json(&record));
    }
    Ok(())
}

fn cmd_extract(file: &str) -> CmdResult {
    let html = sync::extract_html(Path::new(file)).map_err(map_err)?;
    println!("{html}");
    Ok(())
}

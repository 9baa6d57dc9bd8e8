mod cli;
mod paths;

use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use tabula::render::{RenderOptions, render};
use tabula::{TableModel, TableSpec};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the terminal logger and, when a log file can be created, the
/// file logger.
fn init_logging(cli: &Cli) {
    let term_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = cli.log_file.clone().or_else(paths::log_file) {
        match create_log_file(&path) {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
            Err(e) => eprintln!("Warning: {e:#}"),
        }
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Warning: failed to initialize logger: {e}");
    }
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))
}

fn run(cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in table_lines(cli)? {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

/// Load, check and render the table spec named on the command line.
fn table_lines(cli: &Cli) -> Result<Vec<String>> {
    let spec = TableSpec::from_path(&cli.spec)?;
    let columns = spec.columns();
    if cli.strict {
        TableModel::validate(&columns).context("Invalid columns")?;
    }

    let options = spec.options();
    let view = TableModel::build(&columns, spec.records(), &options);
    if cli.strict && !view.diagnostics.is_empty() {
        bail!("{} table diagnostic(s) in strict mode", view.diagnostics.len());
    }

    let rendered = render(
        &view,
        &RenderOptions {
            viewport_width: cli.width,
            scroll_x: cli.scroll_x,
            scroll_y: cli.scroll_y,
        },
    );
    log::debug!(
        "Rendered {} lines, {} columns, content width {}",
        rendered.lines.len(),
        view.column_count(),
        rendered.layout.total_width()
    );

    Ok(rendered.lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_spec(name: &str, json: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tabula-cli-{name}-{}.json", std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    const SPEC: &str = r#"{
        "columns": [
            { "key": "name", "title": "Name" },
            { "key": "age", "title": "Age" }
        ],
        "data": [{ "key": "a", "name": "Lucy", "age": 32 }],
        "options": { "scroll": { "x": true } }
    }"#;

    #[test]
    fn test_lines_follow_viewport() {
        let path = write_spec("viewport", SPEC);
        let arg = path.to_string_lossy().into_owned();
        let cli =
            Cli::try_parse_from(["tabula", arg.as_str(), "--width", "4", "--scroll-x", "4"]).unwrap();

        let lines = table_lines(&cli).unwrap();
        assert_eq!(lines, vec![" Age", "────", " 32 "]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_strict_rejects_missing_row_key() {
        let path = write_spec(
            "strict",
            r#"{ "columns": [{ "key": "name" }], "data": [{ "name": "Lucy" }] }"#,
        );
        let arg = path.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["tabula", arg.as_str(), "--strict"]).unwrap();

        assert!(table_lines(&cli).is_err());
        fs::remove_file(&path).unwrap();
    }
}

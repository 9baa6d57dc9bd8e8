use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "Render a JSON table spec to the terminal", long_about = None)]
pub struct Cli {
    /// Table spec file (JSON with `columns`, `data` and `options`)
    pub spec: PathBuf,

    /// Viewport width in terminal columns
    #[arg(long, short = 'w')]
    pub width: Option<u16>,

    /// Horizontal scroll offset
    #[arg(long, default_value = "0")]
    pub scroll_x: u16,

    /// Vertical body scroll offset, in rows (needs `scroll.y` in the table spec)
    #[arg(long, default_value = "0")]
    pub scroll_y: u16,

    /// Fail on invalid columns or any other table diagnostic
    #[arg(long)]
    pub strict: bool,

    /// Write the log here instead of the cache directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tabula", "table.json"]).unwrap();
        assert_eq!(cli.spec, PathBuf::from("table.json"));
        assert_eq!(cli.width, None);
        assert_eq!(cli.scroll_x, 0);
        assert!(!cli.strict);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_viewport_flags() {
        let cli = Cli::try_parse_from([
            "tabula",
            "table.json",
            "-w",
            "40",
            "--scroll-x",
            "12",
            "--strict",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.scroll_x, 12);
        assert!(cli.strict);
    }

    #[test]
    fn test_spec_is_required() {
        assert!(Cli::try_parse_from(["tabula"]).is_err());
    }
}

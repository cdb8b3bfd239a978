//! Command-line interface for undermark.

use clap::Parser;
use std::path::PathBuf;

/// Undermark - converts underscore-emphasis markdown into HTML.
///
/// Headings start with `# `, paragraphs are separated by blank lines,
/// `_text_` is emphasis and `__text__` is strong.
#[derive(Parser, Debug)]
#[command(
    name = "um",
    author = "Undermark Contributors",
    version,
    about = "Converts underscore-emphasis markdown into HTML",
    after_help = "Examples:\n  \
                  cat notes.md | um\n  \
                  um chapter1.md chapter2.md -o book.html\n  \
                  um --dump-nodes notes.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Parse blocks in parallel regardless of document size
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Print the parsed blocks as JSON instead of HTML
    #[arg(long = "dump-nodes")]
    pub dump_nodes: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use undermark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["um"]);
        assert!(cli.files.is_empty());
        assert!(cli.output.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.parallel);
        assert!(!cli.dump_nodes);
    }

    #[test]
    fn test_cli_parse_with_files() {
        let cli = Cli::parse_from(["um", "a.md", "b.md"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "um",
            "-l", "debug",
            "-o", "out.html",
            "-c", "[features]\nParallel = true",
            "--parallel",
            "file.md",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.config.as_deref(), Some("[features]\nParallel = true"));
        assert!(cli.parallel);
    }

    #[test]
    fn test_should_read_stdin() {
        let cli = Cli::parse_from(["um"]);
        assert!(cli.should_read_stdin());

        let cli = Cli::parse_from(["um", "file.md"]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

//! Undermark - converts underscore-emphasis markdown into HTML.
//!
//! This binary reads markdown from files or stdin and writes the HTML
//! fragment to stdout or a file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

use undermark::{Block, Config, Pipeline, Result, UndermarkError};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Undermark v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let pipeline = Pipeline::new(config);
    let documents = read_documents(cli)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            info!("Writing to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.dump_nodes {
        dump_nodes(&pipeline, &documents, &mut out)?;
    } else {
        write_html(&pipeline, &documents, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if cli.parallel {
        config.features.parallel = true;
        config.features.parallel_threshold = 0;
    }

    Ok(config)
}

/// Read every input file, or stdin when no files were given.
fn read_documents(cli: &Cli) -> Result<Vec<String>> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(vec![text]);
    }

    cli.files
        .iter()
        .map(|path| {
            info!("Processing file: {}", path.display());
            Ok(fs::read_to_string(path)?)
        })
        .collect()
}

/// Convert each document and write the HTML, one document after another.
fn write_html(pipeline: &Pipeline, documents: &[String], out: &mut dyn Write) -> Result<()> {
    let separator = pipeline.config().output.block_separator.as_bytes();
    let mut wrote_any = false;

    for text in documents {
        let blocks = pipeline.parse(text);
        if blocks.is_empty() {
            continue;
        }
        if wrote_any {
            out.write_all(separator)?;
        }
        let written = pipeline.render_to(&blocks, &mut *out)?;
        debug!("Wrote {} blocks", written);
        wrote_any = true;
    }

    if wrote_any && pipeline.config().output.trailing_newline {
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Write the parsed blocks of every document as pretty-printed JSON.
fn dump_nodes(pipeline: &Pipeline, documents: &[String], out: &mut dyn Write) -> Result<()> {
    let blocks: Vec<Block> = documents
        .iter()
        .flat_map(|text| pipeline.parse(text))
        .collect();

    serde_json::to_writer_pretty(&mut *out, &blocks)
        .map_err(|e| UndermarkError::Serialize(e.to_string()))?;
    out.write_all(b"\n")?;
    Ok(())
}

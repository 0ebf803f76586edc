// proptable: truth tables for propositional expressions

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::tty::IsTty;

use proptable::table::engine::{process_source, Summary};
use proptable::ui::{render_table, report_error, RenderOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// Colour when stdout is a terminal
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(author, version, about = "Print a truth table for each expression in a file")]
struct Cli {
    /// Input file, one expression per line (`-` reads stdin)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// When to colour the tables
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Do not print the expression above its table
    #[arg(long)]
    no_title: bool,

    /// Log more (repeat for debug and trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .wrap_err("Failed to read stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read '{}'", path.display()))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        log_level(cli.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let source = read_input(&cli.input)?;
    log::info!("Loaded {} bytes from {:?}", source.len(), cli.input);

    let stdout = io::stdout();
    let color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => stdout.is_tty(),
    };
    let options = RenderOptions {
        color,
        title: !cli.no_title,
    };

    let mut out = stdout.lock();
    let mut err = io::stderr().lock();
    let mut summary = Summary::default();

    for line in process_source(&source) {
        summary.record(&line);
        match &line.result {
            Ok(table) => {
                render_table(&mut out, table, &options)?;
                writeln!(out)?;
            }
            Err(e) => {
                log::debug!("line {} rejected: {:?}", line.line_number, e);
                report_error(&mut err, line.expression, e, &options)?;
            }
        }
    }

    out.flush()?;
    log::info!(
        "Processed {} expressions: {} tables, {} errors",
        summary.lines,
        summary.tables,
        summary.failures
    );

    Ok(())
}

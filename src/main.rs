use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use rsprop::input::Problem;
use rsprop::render;
use rsprop::tree::Expr;
use rsprop::tree_io::ParseForest;
use rsprop::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned plain text with T/F cells
    Table,
    /// Comma separated values with 1/0 cells
    Csv,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "FORMULA")]
    /// Formulas to evaluate, appended to those of the input file
    formulas: Vec<String>,

    #[clap(short, long, value_parser, value_name = "SYMBOLS")]
    /// Symbols, separated by commas or whitespace; overrides the input file's symbol list
    symbols: Option<String>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// Read symbols and formulas from FILE
    input: Option<PathBuf>,

    #[clap(short, long, value_parser, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long, value_enum, default_value_t = Format::Table)]
    /// Output format of the truth table
    format: Format,

    #[clap(short, long)]
    /// Only list every assignment as a binary string
    assignments: bool,

    #[clap(short, long)]
    /// Evaluate the rows on all available cores
    parallel: bool,

    #[clap(long, value_parser, value_name = "FILE")]
    /// Write the parse trees of all formulas to FILE in dot (GraphViz) format
    dot: Option<PathBuf>,

    #[clap(short, long, action = ArgAction::Count)]
    /// Increase the log level (repeat for more detail)
    verbose: u8,
}

const fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> anyhow::Result<()> {
    let args =
        argfile::expand_args_from(wild::args_os(), argfile::parse_fromfile, argfile::PREFIX)?;
    let args = Args::parse_from(args);

    TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut problem = if let Some(input) = &args.input {
        let file = File::open(input)?;
        Problem::new(&mut BufReader::new(file))?
    } else {
        Problem::default()
    };

    if let Some(symbols) = &args.symbols {
        problem.symbols = Problem::split_symbols(symbols);
    }

    problem.formulas.extend(args.formulas.iter().cloned());

    let session = Session::new(&problem.symbols, &problem.formulas)?;

    info!(
        "{} symbol(s), {} formula(s)",
        session.symbols().len(),
        session.formulas().len()
    );

    if let Some(dot_file) = &args.dot {
        let trees = problem
            .formulas
            .iter()
            .map(|f| Ok((f.as_str(), Expr::parse(session.symbols(), f)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut f = File::create(dot_file)?;
        ParseForest::new(&trees).render_dot(&mut f)?;
        info!("wrote parse trees to {}", dot_file.display());
    }

    let mut writer = if let Some(output_file) = &args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    if args.assignments {
        render::write_assignments(session.assignments(), &mut writer)?;
    } else {
        let table = if args.parallel {
            session.par_truth_table()?
        } else {
            session.truth_table()?
        };

        match args.format {
            Format::Table => render::write_table(&table, &mut writer)?,
            Format::Csv => render::write_csv(&table, &mut writer)?,
        }
    }

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

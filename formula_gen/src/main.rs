use clap::Parser;
use formula_gen::{parse_symbols, write_problem};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "SYMBOLS")]
    /// The symbols to use, as one string of single characters (e.g. "pqr")
    symbols: String,

    #[clap(value_parser, value_name = "FORMULAS")]
    /// The number of formulas to generate
    formulas: usize,

    #[clap(short, long, value_parser, default_value_t = 4)]
    /// The maximum nesting depth of a formula
    depth: usize,

    #[clap(long, value_parser)]
    /// Seed for the random number generator
    seed: Option<u64>,

    #[clap(value_parser, short, long, value_name = "FILE")]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let symbols = parse_symbols(&args.symbols)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    write_problem(&mut writer, &mut rng, &symbols, args.formulas, args.depth)?;

    // flush the writer before dropping it
    writer.flush()?;

    Ok(())
}

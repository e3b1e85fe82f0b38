//! KART: Projection of coordinates from the command line
use anyhow::Context as _;
use carto::prelude::*;
use clap::Parser;
use log::{debug, trace, warn};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// KART: Kortprojektion af koordinater.
/// Reads coordinate pairs, one per line, from the files given, or from
/// stdin. Geographic coordinates are longitude/latitude in degrees.
/// Anything following a '#' is a comment. Columns beyond the first two are
/// passed through untouched.
#[derive(Parser, Debug)]
#[clap(name = "kart")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The projection definition, e.g. "proj=bipc bns"
    definition: String,

    /// Inverse operation
    #[clap(short, long = "inv")]
    inverse: bool,

    /// Number of decimals in the output
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Report fwd-inv roundtrip deviation
    #[clap(short, long)]
    roundtrip: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on. Read stdin if none are given
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{:#?}", options);

    let mut ctx = Minimal::new();
    let op = ctx
        .op(&options.definition)
        .with_context(|| format!("cannot instantiate '{}'", options.definition))?;

    let direction = if options.inverse { Inv } else { Fwd };
    let inverted = ctx.params(op)?.inverted;
    // Geographic input iff running the projection forward
    let geographic_input = (direction == Fwd) != inverted;
    debug!("direction: {direction:?}, geographic input: {geographic_input}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let job = Job {
        ctx: &ctx,
        op,
        direction,
        geographic_input,
        options: &options,
    };

    if options.args.is_empty() {
        let stdin = io::stdin();
        job.run(stdin.lock(), &mut out)?;
    } else {
        for path in &options.args {
            let file = std::fs::File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            job.run(BufReader::new(file), &mut out)?;
        }
    }
    Ok(())
}

struct Job<'a> {
    ctx: &'a Minimal,
    op: OpHandle,
    direction: Direction,
    geographic_input: bool,
    options: &'a Cli,
}

impl Job<'_> {
    fn run(&self, input: impl BufRead, out: &mut impl Write) -> Result<(), anyhow::Error> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split_whitespace().collect();
            if columns.len() < 2 {
                anyhow::bail!("line {}: expected two coordinates, got '{line}'", number + 1);
            }
            let a: f64 = columns[0]
                .parse()
                .with_context(|| format!("line {}: bad number '{}'", number + 1, columns[0]))?;
            let b: f64 = columns[1]
                .parse()
                .with_context(|| format!("line {}: bad number '{}'", number + 1, columns[1]))?;

            let input = if self.geographic_input {
                Coor2D::gis(a, b)
            } else {
                Coor2D::raw(a, b)
            };
            let mut data = [input];
            let successes = self.ctx.apply(self.op, self.direction, &mut data)?;
            let output = if self.geographic_input {
                data[0]
            } else {
                data[0].to_degrees()
            };

            let mut text = self.format(output);
            for column in &columns[2..] {
                text.push(' ');
                text.push_str(column);
            }

            // The reason is logged by the operator, at trace level
            if successes == 0 {
                warn!("line {}: cannot transform ({a}, {b})", number + 1);
                text.push_str("  # failed");
            } else if self.options.roundtrip {
                let back = if self.direction == Fwd { Inv } else { Fwd };
                if self.ctx.apply(self.op, back, &mut data)? == 0 {
                    warn!("line {}: cannot transform ({a}, {b}) back", number + 1);
                    text.push_str("  # roundtrip failed");
                    writeln!(out, "{text}")?;
                    continue;
                }
                let deviation = if self.geographic_input {
                    // Approximately in metres, on the GRS80 sphere
                    data[0].hypot2(&input) * 6_378_137.
                } else {
                    data[0].hypot2(&input)
                };
                text.push_str(&format!("  # roundtrip: {deviation:.3e}"));
            }
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn format(&self, coord: Coor2D) -> String {
        let decimals = self
            .options
            .decimals
            .unwrap_or(if self.geographic_input { 4 } else { 10 });
        format!("{:.*} {:.*}", decimals, coord.x(), decimals, coord.y())
    }
}

// ----- T E S T S ------------------------------------------------------------------

//! cclabel - label the connected components of a binary image
//!
//! Reads an image, thresholds it to a mask, labels its 4-connected
//! components and writes either the rendered labels or, with
//! `--min-size`, the mask of components that survive the area filter.
//!
//! Logging is controlled with `RUST_LOG` (default `cclabel=info`).

use anyhow::{Context, Result, bail};
use cclabel::io::{self, ThresholdMethod};
use cclabel::region::{self, LabelAlgorithm};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const USAGE: &str = "\
Usage: cclabel [OPTIONS]

Options:
  -I, --input-image <PATH>   Input image (default: binary.png)
  -O, --output-image <PATH>  Output image (default: out.png)
      --two-pass             Use two-pass union-find labeling
      --min-size <N>         Keep only components of at least N pixels and
                             write the filtered mask
      --threshold <N|otsu>   Foreground iff value > N (default: 127)
  -h, --help                 Print this help";

/// Largest label count that still renders to distinct 8-bit gray levels.
const MAX_DISTINCT_LEVELS: u32 = 255;

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    algorithm: LabelAlgorithm,
    min_size: Option<u32>,
    threshold: ThresholdMethod,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("binary.png"),
            output: PathBuf::from("out.png"),
            algorithm: LabelAlgorithm::default(),
            min_size: None,
            threshold: ThresholdMethod::default(),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(CliArgs),
    Help,
}

fn parse_threshold(value: &str) -> Result<ThresholdMethod> {
    if value.eq_ignore_ascii_case("otsu") {
        return Ok(ThresholdMethod::Otsu);
    }
    let level = value
        .parse::<u8>()
        .with_context(|| format!("invalid threshold '{}': expected 0-255 or 'otsu'", value))?;
    Ok(ThresholdMethod::Fixed(level))
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .with_context(|| format!("missing value for {}", flag))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-I" | "--input-image" => parsed.input = value_for(&arg)?.into(),
            "-O" | "--output-image" => parsed.output = value_for(&arg)?.into(),
            "--two-pass" => parsed.algorithm = LabelAlgorithm::TwoPass,
            "--min-size" => {
                let value = value_for(&arg)?;
                let min_size = value
                    .parse::<u32>()
                    .with_context(|| format!("invalid --min-size '{}'", value))?;
                if min_size == 0 {
                    bail!("--min-size must be at least 1");
                }
                parsed.min_size = Some(min_size);
            }
            "--threshold" => parsed.threshold = parse_threshold(&value_for(&arg)?)?,
            other => bail!("unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Run(parsed))
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cclabel=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: &CliArgs) -> Result<()> {
    let mask = io::read_mask(&args.input, args.threshold)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    info!(
        width = mask.width(),
        height = mask.height(),
        foreground = mask.count_foreground(),
        "loaded mask"
    );

    let labels = region::label_with(&mask, args.algorithm);
    let components = region::count_components(&labels);
    info!(
        components,
        max_label = labels.max_label(),
        algorithm = ?args.algorithm,
        "labeled"
    );

    if let Some(min_size) = args.min_size {
        let filtered = region::filter_by_area(&labels, min_size)?;
        info!(
            min_size,
            kept = filtered.count_foreground(),
            "filtered components by area"
        );
        io::write_mask(&filtered, &args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
    } else {
        if labels.max_label() > MAX_DISTINCT_LEVELS {
            warn!(
                max_label = labels.max_label(),
                "more than {} labels, some components share a gray level", MAX_DISTINCT_LEVELS
            );
        }
        io::write_labels(&labels, &args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
    }

    info!(output = %args.output.display(), "done");
    Ok(())
}

fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    init_tracing();
    run(&args)
}

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod solomon;

/// Convert a Solomon VRP instance from its text format to CSV
#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    /// Instance in Solomon text format
    input: PathBuf,

    /// Where to write the CSV [default: input with a .csv extension]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Instance name written as the first row [default: input file stem]
    #[clap(short, long)]
    label: Option<String>,

    /// Log each section as it is read and list them when done
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn label(&self) -> Result<String> {
        match &self.label {
            Some(label) => Ok(label.clone()),
            None => self
                .input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow!("cannot derive a label from {}", self.input.display())),
        }
    }

    fn output(&self) -> Result<PathBuf> {
        let output = match &self.output {
            Some(output) => output.clone(),
            None => self.input.with_extension("csv"),
        };
        if output == self.input {
            bail!("output would overwrite the input {}", self.input.display());
        }
        Ok(output)
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let label = args.label()?;
    let output = args.output()?;

    let summary = solomon::convert(&args.input, &output, &label)
        .with_context(|| format!("converting {}", args.input.display()))?;

    println!(
        "Converted {} to {} ({} rows, instance {})",
        args.input.display(),
        output.display(),
        summary.rows_written(),
        summary.label,
    );
    if args.verbose {
        for header in &summary.sections {
            println!("  {}", header);
        }
    }
    Ok(())
}

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tpcds_datagen::runner::{run_generate, GenerateArgs};
use tpcds_datagen::{Compression, DEFAULT_COMPRESSION, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Clone)]
#[command(
    name = "tpcds-datagen",
    about = "Generate TPC-DS benchmark data with DuckDB and export it to Parquet"
)]
struct Args {
    /// TPC-DS scale factor (~GB of data); prompts interactively when omitted
    #[arg(short, long)]
    scale_factor: Option<String>,

    /// Destination directory for the exported Parquet files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Parquet compression codec (snappy, gzip, zstd)
    #[arg(short, long, default_value = DEFAULT_COMPRESSION)]
    compression: String,

    /// Skip the confirmation prompt for very large scale factors
    #[arg(short = 'y', long)]
    yes: bool,

    /// Quiet mode - minimal output, only show summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing based on quiet mode
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let filter = if args.quiet {
        EnvFilter::new("tpcds_datagen=warn")
    } else {
        EnvFilter::new("tpcds_datagen=info")
    };
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let compression = Compression::parse(&args.compression)?;

    // One line of input, whether from the flag or the prompt. Invalid text
    // aborts before the engine or the filesystem is touched.
    let scale_factor = match args.scale_factor {
        Some(ref raw) => cli::parse_scale_factor(raw)?,
        None => {
            if !args.quiet {
                print_scale_reference();
            }
            let raw = read_line("\nEnter TPC-DS Scale Factor (default: 1): ")?;
            cli::parse_scale_factor(&raw)?
        }
    };

    if cli::needs_confirmation(scale_factor) && !args.yes {
        let answer = read_line(&format!(
            "Scale factor {} will generate roughly {} GB. Continue? (y/n): ",
            scale_factor, scale_factor
        ))?;
        if !cli::is_affirmative(&answer) {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    if !args.quiet {
        println!();
        println!("TPC-DS Data Generator");
        println!("=====================");
        println!("Scale factor: {}", scale_factor);
        println!("Output directory: {}", args.output_dir.display());
        println!("Compression: {}", compression.codec_name());
        println!();
    }

    let report = run_generate(GenerateArgs {
        scale_factor,
        output_dir: args.output_dir,
        compression,
        quiet: args.quiet,
    })?;

    println!();
    println!("Export Summary");
    println!("==============");
    println!("Scale factor: {}", report.scale_factor);
    println!("Tables exported: {}", report.tables_exported);
    println!("Total rows: {}", report.total_rows);
    println!("Total size: {:.2} MB", report.total_megabytes());
    println!("Duration: {:.2}s", report.duration.as_secs_f64());
    println!("Directory: {}", report.output_dir.display());

    Ok(())
}

fn print_scale_reference() {
    println!("{}", "=".repeat(70));
    println!("TPC-DS DATA GENERATOR");
    println!("{}", "=".repeat(70));
    println!();
    println!("Scale Factor Reference:");
    println!("  1    = ~1 GB    (Development/Testing)");
    println!("  10   = ~10 GB   (Small benchmarks)");
    println!("  100  = ~100 GB  (Medium benchmarks)");
    println!("  1000 = ~1 TB    (Large benchmarks)");
    println!("{}", "=".repeat(70));
}

/// Print a prompt and read one line from stdin
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// CLI utility functions for parsing user input
mod cli {
    use tpcds_datagen::{TpcdsError, CONFIRM_SCALE_THRESHOLD};

    /// Parse the scale-factor text: blank means 1, anything else must be a
    /// positive finite number (integers and decimals both accepted)
    pub fn parse_scale_factor(raw: &str) -> Result<f64, TpcdsError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(1.0);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value > 0.0 && value.is_finite() => Ok(value),
            _ => Err(TpcdsError::InvalidInput {
                input: trimmed.to_string(),
            }),
        }
    }

    /// Whether a scale factor is large enough to warrant a confirmation
    pub fn needs_confirmation(scale_factor: f64) -> bool {
        scale_factor > CONFIRM_SCALE_THRESHOLD
    }

    /// Interpret a confirmation answer; anything but y/Y declines
    pub fn is_affirmative(answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case("y")
    }
}

#[cfg(test)]
mod tests {
    use super::cli;

    #[test]
    fn blank_input_defaults_to_one() {
        assert_eq!(cli::parse_scale_factor("").unwrap(), 1.0);
        assert_eq!(cli::parse_scale_factor("   ").unwrap(), 1.0);
        assert_eq!(cli::parse_scale_factor("\n").unwrap(), 1.0);
    }

    #[test]
    fn numeric_input_is_accepted() {
        assert_eq!(cli::parse_scale_factor("10").unwrap(), 10.0);
        assert_eq!(cli::parse_scale_factor(" 100 \n").unwrap(), 100.0);
        assert_eq!(cli::parse_scale_factor("0.5").unwrap(), 0.5);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!(cli::parse_scale_factor("abc").is_err());
        assert!(cli::parse_scale_factor("1x").is_err());
    }

    #[test]
    fn non_positive_and_non_finite_input_is_rejected() {
        assert!(cli::parse_scale_factor("0").is_err());
        assert!(cli::parse_scale_factor("-3").is_err());
        assert!(cli::parse_scale_factor("inf").is_err());
        assert!(cli::parse_scale_factor("NaN").is_err());
    }

    #[test]
    fn confirmation_only_above_threshold() {
        assert!(!cli::needs_confirmation(1.0));
        assert!(!cli::needs_confirmation(10_000.0));
        assert!(cli::needs_confirmation(10_001.0));
    }

    #[test]
    fn affirmative_answers() {
        assert!(cli::is_affirmative("y"));
        assert!(cli::is_affirmative(" Y\n"));
        assert!(!cli::is_affirmative("n"));
        assert!(!cli::is_affirmative(""));
        assert!(!cli::is_affirmative("yes please"));
    }
}

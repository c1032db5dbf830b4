//! RISC-V static branch predictor CLI.
//!
//! This binary provides a single entry point to the predictor. It performs:
//! 1. **Predict:** Evaluate one fetched word at one address.
//! 2. **Scan:** Walk a raw image or the text sections of an ELF file and predict every fetch.
//! 3. **Check:** Run expected-output test vectors (built-in or from JSON) and report mismatches.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rvsbp_core::common::{Result, parse_u32};
use rvsbp_core::sim::{loader, scanner, vectors};
use rvsbp_core::stats::PredictionStats;
use rvsbp_core::{BranchPredictor, Config, FetchInput, Prediction, StaticBranchPredictor};

#[derive(Parser, Debug)]
#[command(
    name = "sbp",
    author,
    version,
    about = "RISC-V fetch-stage static branch predictor",
    long_about = "Predict branch direction and target for RV32IC instruction words.\n\nExamples:\n  sbp predict 0x8C218363 --pc 0x1000\n  sbp scan firmware.elf --taken-only\n  sbp scan image.bin --base 0x80000000 --stats\n  sbp check vectors.json"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Predict a single fetched word.
    Predict {
        /// Fetched instruction word (hex with 0x, binary with 0b, or decimal).
        word: String,

        /// Fetch address.
        #[arg(long, default_value = "0")]
        pc: String,

        /// Base-register index carried with the fetch.
        #[arg(long, default_value = "0")]
        rs1: String,

        /// Present the fetch with the valid bit clear.
        #[arg(long)]
        invalid: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Predict every fetch of a raw image or ELF file.
    Scan {
        /// Raw binary image or ELF file.
        file: String,

        /// Load address for raw images.
        #[arg(long, default_value = "0")]
        base: String,

        /// Only print fetches predicted taken.
        #[arg(long)]
        taken_only: bool,

        /// Print a statistics summary after the listing.
        #[arg(long)]
        stats: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Run expected-output test vectors.
    Check {
        /// JSON vector file; the built-in suite is used when omitted.
        file: Option<String>,
    },
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    segments: Vec<SegmentOutput>,
    stats: &'a PredictionStats,
}

#[derive(Serialize)]
struct SegmentOutput {
    name: String,
    base: u32,
    predictions: Vec<Prediction>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    debug!(
        compressed = config.predictor.compressed,
        indirect_target = ?config.predictor.indirect_target,
        trace = config.general.trace_predictions,
        "configuration"
    );
    let predictor = StaticBranchPredictor::from_config(&config);

    match cli.command {
        Commands::Predict {
            word,
            pc,
            rs1,
            invalid,
            json,
        } => cmd_predict(&predictor, &word, &pc, &rs1, invalid, json),
        Commands::Scan {
            file,
            base,
            taken_only,
            stats,
            json,
        } => cmd_scan(&predictor, &file, &base, taken_only, stats, json),
        Commands::Check { file } => cmd_check(&predictor, file.as_deref()),
    }
}

fn cmd_predict(
    predictor: &StaticBranchPredictor,
    word: &str,
    pc: &str,
    rs1: &str,
    invalid: bool,
    json: bool,
) -> Result<ExitCode> {
    let input = FetchInput::new(parse_u32(word)?, parse_u32(pc)?)
        .with_register(parse_u32(rs1)? as u8)
        .with_valid(!invalid);
    let prediction = predictor.evaluate(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print_prediction(&prediction);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_scan(
    predictor: &StaticBranchPredictor,
    file: &str,
    base: &str,
    taken_only: bool,
    show_stats: bool,
    json: bool,
) -> Result<ExitCode> {
    let segments = loader::load_segments(file, parse_u32(base)?)?;
    let mut stats = PredictionStats::new();
    let mut output = Vec::new();

    for segment in &segments {
        if !json {
            println!(
                "\n{} [{:#010x}..{:#010x})",
                segment.name,
                segment.base,
                segment.end()
            );
        }

        let mut predictions = Vec::new();
        for prediction in scanner::scan(predictor, segment) {
            stats.record(&prediction);
            if taken_only && !prediction.taken() {
                continue;
            }
            if json {
                predictions.push(prediction);
            } else {
                print_prediction(&prediction);
            }
        }

        output.push(SegmentOutput {
            name: segment.name.clone(),
            base: segment.base,
            predictions,
        });
    }

    if json {
        let doc = ScanOutput {
            segments: output,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else if show_stats {
        stats.print();
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(predictor: &StaticBranchPredictor, file: Option<&str>) -> Result<ExitCode> {
    let suite = match file {
        Some(path) => vectors::load_vectors(path)?,
        None => vectors::builtin(),
    };
    let report = vectors::run(predictor, &suite);

    for failure in report.failures() {
        println!(
            "FAIL {}: expected taken={} pc={:08X}, got taken={} pc={:08X}",
            failure.vector.name,
            u8::from(failure.vector.expected_taken),
            failure.vector.expected_pc,
            u8::from(failure.actual.taken),
            failure.actual.target
        );
    }
    println!("{}/{} vectors passed", report.passed(), report.outcomes.len());

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_prediction(p: &Prediction) {
    let imm = p
        .immediate
        .map_or_else(|| "-".to_string(), |imm| imm.to_string());
    println!(
        "{:08x}: {:08x}  {:<8} {:<26} imm={:<8} {} -> {:08x}{}",
        p.input.pc,
        p.input.raw,
        p.mnemonic(),
        p.variant.to_string(),
        imm,
        if p.taken() { "T" } else { "N" },
        p.target(),
        if p.input.valid { "" } else { "  (invalid)" },
    );
}

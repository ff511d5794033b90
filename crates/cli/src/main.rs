//! Cut-list planner and carpentry fraction calculator CLI.

mod args;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use u_cutlist_core::{
    format_length, parse_fraction, parse_length, Fraction, COMMON_BOARD_LENGTHS,
    COMMON_FRACTIONS, COMMON_SAW_KERFS,
};
use u_cutlist_cutting::{CutJob, CutList, CutPlanner, PlannerConfig, ResidualPolicy};

use crate::args::{parse_board, parse_cut_arg, parse_kerf};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Plan lumber cuts and work with carpentry fractions")]
#[command(version)]
struct Cli {
    /// Log planner decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out cuts on stock boards
    Plan {
        /// Stock board length (e.g. 96, 8', 12-0)
        #[arg(short, long)]
        board: Option<String>,

        /// Saw kerf in inches (e.g. 0.125, 1/8)
        #[arg(short, long)]
        kerf: Option<String>,

        /// Cut as LEN[xQTY][:LABEL] (e.g. 2-6x4:Shelf); repeatable
        #[arg(short, long = "cut")]
        cuts: Vec<String>,

        /// Job file (TOML or JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Keep negative residuals instead of clamping at zero
        #[arg(long)]
        raw_residual: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between fractions and decimals
    Convert {
        /// A fraction (3-5/8, 5/8, 3) or decimal (3.625)
        value: String,

        /// Finest denominator when converting decimals
        #[arg(short, long, default_value = "64")]
        precision: u64,
    },

    /// Add, subtract, multiply or divide two fractions
    Calc {
        /// Left operand
        a: String,

        /// Operation
        #[arg(value_enum)]
        op: Operation,

        /// Right operand
        b: String,
    },

    /// Parse a length and show it in inches and feet-inches
    Length {
        /// Length text (e.g. 8-2, 8'2", 98.5)
        value: String,
    },

    /// Show common board lengths, kerfs and fractions
    Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum Operation {
    /// Addition
    #[value(name = "+", alias = "add")]
    Add,
    /// Subtraction
    #[value(name = "-", alias = "sub")]
    Subtract,
    /// Multiplication
    #[value(name = "x", alias = "mul")]
    Multiply,
    /// Division
    #[value(name = "/", alias = "div")]
    Divide,
}

impl Operation {
    fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    fn apply(self, a: Fraction, b: Fraction) -> u_cutlist_core::Result<Fraction> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
            Operation::Divide => a.divide(b),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Plan {
            board,
            kerf,
            cuts,
            file,
            raw_residual,
            json,
        } => {
            let (config, list) = build_plan_input(board, kerf, cuts, file, raw_residual)?;
            log::info!(
                "Planning {} request(s) on {} boards",
                list.len(),
                format_length(config.board_length)
            );
            let plan = CutPlanner::new(config).plan(list.cuts())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", report::render_plan(&plan)?);
            }
        }

        Commands::Convert { value, precision } => {
            let fraction = parse_fraction(&value)
                .with_context(|| format!("cannot read '{}' as a fraction or decimal", value))?;
            let fraction = if value.contains('.') {
                let decimal = fraction_input_decimal(&value)?;
                Fraction::from_decimal_with_precision(decimal, precision)?
            } else {
                fraction.normalized()?
            };
            println!("{} = {:.4}\"", fraction, fraction.to_decimal());
        }

        Commands::Calc { a, op, b } => {
            let left = parse_fraction(&a).with_context(|| format!("invalid fraction '{}'", a))?;
            let right = parse_fraction(&b).with_context(|| format!("invalid fraction '{}'", b))?;
            let result = op.apply(left, right)?;
            println!(
                "{} {} {} = {} ({:.4}\")",
                left,
                op.symbol(),
                right,
                result,
                result.to_decimal()
            );
        }

        Commands::Length { value } => {
            let inches = parse_length(&value)
                .with_context(|| format!("cannot read '{}' as a length", value))?;
            println!("{}\" = {}", inches, format_length(inches));
        }

        Commands::Presets => {
            println!("Board lengths:");
            for preset in COMMON_BOARD_LENGTHS {
                println!("  {:>3}'  = {}\"", preset.feet, preset.inches);
            }
            println!("\nSaw kerfs:");
            for preset in COMMON_SAW_KERFS {
                println!("  {:<22} {}\"", preset.name, preset.inches);
            }
            println!("\nCommon fractions:");
            for fraction in COMMON_FRACTIONS {
                println!("  {:>5}\" = {}\"", fraction.to_string(), fraction.to_decimal());
            }
        }
    }

    Ok(())
}

/// Resolves planner settings and cuts from a job file and/or flags.
fn build_plan_input(
    board: Option<String>,
    kerf: Option<String>,
    cuts: Vec<String>,
    file: Option<PathBuf>,
    raw_residual: bool,
) -> Result<(PlannerConfig, CutList)> {
    let job = match &file {
        Some(path) => Some(
            CutJob::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => None,
    };
    merge_plan_input(
        job.as_ref(),
        board.as_deref(),
        kerf.as_deref(),
        &cuts,
        raw_residual,
    )
}

/// Flags override the job's board length, kerf and residual policy; `--cut`
/// entries are appended after the job's cuts. Every cut is checked against
/// the final board length.
fn merge_plan_input(
    job: Option<&CutJob>,
    board: Option<&str>,
    kerf: Option<&str>,
    cuts: &[String],
    raw_residual: bool,
) -> Result<(PlannerConfig, CutList)> {
    let mut config = PlannerConfig::new();
    if let Some(job) = job {
        if let Some(kerf) = job.kerf {
            config.kerf = kerf;
        }
        if let Some(policy) = job.residual_policy {
            config.residual_policy = policy;
        }
    }

    config.board_length = match (board, job) {
        (Some(board), _) => parse_board(board)?,
        (None, Some(job)) => job.board_length.to_inches()?,
        (None, None) => config.board_length,
    };
    if let Some(kerf) = kerf {
        config.kerf = parse_kerf(kerf)?;
    }
    if raw_residual {
        config.residual_policy = ResidualPolicy::Raw;
    }
    config.validate()?;

    let mut list = CutList::for_board(config.board_length);
    if let Some(job) = job {
        job.append_cuts(&mut list)?;
    }
    for text in cuts {
        let cut = parse_cut_arg(text)?;
        list.add(cut.length, cut.quantity, &cut.label)?;
    }

    if list.is_empty() {
        bail!("no cuts given; use --cut or --file");
    }
    Ok((config, list))
}

/// Decimal value of a decimal-notation argument, before snapping.
fn fraction_input_decimal(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid decimal '{}'", value))
}

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use quotient::prelude::*;
use quotient_solve::TracingObserver;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every elimination step at trace level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a linear system given as a total matrix `[A | b]`.
    Solve {
        /// Do not print the elimination steps.
        #[arg(short, long)]
        silent: bool,

        /// Digits after the decimal point in approximations.
        #[arg(short, long, default_value_t = 2)]
        digits: usize,

        /// Number of coefficient columns; defaults to all but the last.
        #[arg(short = 'w', long)]
        coefficient_width: Option<usize>,

        /// Give up once any numerator or denominator exceeds this many bits.
        #[arg(long)]
        max_bits: Option<usize>,
    },
    /// Combine two matrices with `+`, `-`, `*`, `/` or sum one with `s`.
    Calc {
        /// Print matrices as LaTeX.
        #[arg(long)]
        latex: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_matrix(input: &mut impl BufRead, prompt: &str) -> Result<FractionMatrix> {
    eprintln!("{prompt}");
    let text = read_block(input).context("could not read input")?;
    parse_matrix(&text).with_context(|| format!("could not read {}", prompt.trim_end_matches(':')))
}

fn run_solve(
    silent: bool,
    verbose: bool,
    digits: usize,
    coefficient_width: Option<usize>,
    max_bits: Option<usize>,
) -> Result<bool> {
    let mut input = io::stdin().lock();
    let matrix = read_matrix(&mut input, "Linear System (Total Matrix):")?;
    let width = coefficient_width.unwrap_or(matrix.num_cols().saturating_sub(1));
    let mut system = LinearSystem::new(matrix, width)?;

    let config = SolverConfig {
        trace_steps: verbose,
        magnitude_limit_bits: max_bits,
    };
    let outcome = if silent {
        let mut observer: Box<dyn StepObserver> = if config.trace_steps {
            Box::new(TracingObserver)
        } else {
            Box::new(NoopObserver)
        };
        solve_system_with(&mut system, observer.as_mut(), &config)
    } else {
        println!("Solving...\n");
        let mut observer = WriterObserver::new(io::stdout().lock());
        let outcome = solve_system_with(&mut system, &mut observer, &config);
        if let Some(err) = observer.take_error() {
            return Err(err).context("could not print elimination steps");
        }
        outcome
    };

    match outcome {
        Outcome::Solved => {
            print_solution(&mut io::stdout().lock(), &system, digits)?;
            Ok(true)
        }
        Outcome::Inconsistent { row, value } => {
            tracing::info!(row, value = %value, "system has no solution");
            eprint!(
                "Could not solve linear system; an inconsistency occurred:\n{}",
                render_system(&system, &RenderConfig::plain())
            );
            Ok(false)
        }
        Outcome::MagnitudeExceeded { row, bits } => {
            bail!("entries in row {row} grew to {bits} bits, beyond the --max-bits limit")
        }
        Outcome::Pending => bail!("elimination did not run"),
    }
}

fn print_solution(out: &mut impl Write, system: &LinearSystem, digits: usize) -> io::Result<()> {
    let approx = RenderConfig::approximate(digits);
    writeln!(
        out,
        "Solved Linear System (Total Matrix):\n{}",
        render_system(system, &RenderConfig::plain())
    )?;
    writeln!(out, "Approx ({digits} digits):\n{}", render_system(system, &approx))?;
    writeln!(out, "Latex:\n{}", render_system(system, &RenderConfig::latex()))?;

    let solution = system.equality();
    writeln!(
        out,
        "Linear System Solution:\n{}",
        render_matrix(&solution, &RenderConfig::plain())
    )?;
    writeln!(out, "Solution Latex:\n{}", render_matrix(&solution, &RenderConfig::latex()))?;
    writeln!(
        out,
        "Solution Approximation ({digits} digits):\n{}",
        render_matrix(&solution, &approx)
    )
}

/// A 1×1 matrix is shown as its bare value.
fn show(matrix: &FractionMatrix, config: &RenderConfig) -> String {
    match matrix.as_scalar() {
        Some(value) if config.style == RenderStyle::Latex => format!("{}\n", value.to_latex()),
        Some(value) => format!("{value}\n"),
        None => render_matrix(matrix, config),
    }
}

fn run_calc(latex: bool) -> Result<bool> {
    let mut input = io::stdin().lock();
    let a = read_matrix(&mut input, "Matrix A:")?;

    eprintln!("Operator:");
    let mut line = String::new();
    input.read_line(&mut line).context("could not read operator")?;
    let operator: Operator = line.parse()?;

    let b = if operator.is_binary() {
        Some(read_matrix(&mut input, "Matrix B:")?)
    } else {
        None
    };
    let c = operator.apply(&a, b.as_ref())?;

    let config = if latex {
        RenderConfig::latex()
    } else {
        RenderConfig::plain()
    };
    let mut out = io::stdout().lock();
    match &b {
        Some(b) => write!(
            out,
            "Matrix C = A {operator} B:\n{}{operator}\n{}=\n{}",
            show(&a, &config),
            show(b, &config),
            show(&c, &config)
        )?,
        None => write!(
            out,
            "Matrix C = {operator}(A):\n{}=\n{}",
            show(&a, &config),
            show(&c, &config)
        )?,
    }
    Ok(true)
}

fn run(args: Args) -> Result<bool> {
    match args.command {
        Command::Solve {
            silent,
            digits,
            coefficient_width,
            max_bits,
        } => run_solve(silent, args.verbose, digits, coefficient_width, max_bits),
        Command::Calc { latex } => run_calc(latex),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("Running with: {args:?}");
    match run(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("quotient: {err:?}");
            process::exit(1)
        }
    }
}

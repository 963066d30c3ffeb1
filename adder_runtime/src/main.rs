//! binadd: gate-level binary adder simulator.
//!
//! Adds two integers through half adders, full adders and a ripple-carry
//! chain, in unsigned or two's-complement mode.
//!
//! Operands come from the command line or, when omitted, from an
//! interactive prompt on stdin.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use adder_kernel::Adder;
use adder_runtime::config::ConfigArgs;
use adder_runtime::console::{render_result, run_session, Console};
use adder_runtime::report::{build_report, encode_report, export_report_to_file, import_report_from_file};
use adder_runtime::verify::compare_with_native;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "binadd")]
#[command(version)]
#[command(about = "Gate-level binary adder simulator", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    add: AddArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers (the default command)
    Add(AddArgs),

    /// Re-run a saved report and check its digest
    Verify {
        /// Report file written by `add --output`
        #[arg(value_name = "REPORT")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct AddArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the JSON report instead of the column view
    #[arg(long)]
    json: bool,

    /// Show every full-adder step and enable kernel trace logging
    #[arg(long)]
    trace: bool,

    /// Also write the JSON report to this file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Two integers; prompted for when omitted
    #[arg(value_name = "INTEGER", num_args = 0..=2, allow_negative_numbers = true)]
    operands: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = match &cli.command {
        Some(Commands::Add(args)) => args.trace,
        Some(Commands::Verify { .. }) => false,
        None => cli.add.trace,
    };
    init_tracing(trace);

    let outcome = match cli.command {
        Some(Commands::Add(args)) => cmd_add(args),
        Some(Commands::Verify { path }) => cmd_verify(&path),
        None => cmd_add(cli.add),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(trace: bool) {
    let default_filter = if trace {
        "binadd=info,adder_runtime=debug,adder_kernel=trace"
    } else {
        "binadd=info,adder_runtime=info,adder_kernel=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn cmd_add(args: AddArgs) -> Result<()> {
    let config = args.config.to_config().context("invalid configuration")?;
    let adder = Adder::new(config);

    let result = match args.operands.as_slice() {
        [] => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            run_session(&adder, &mut console)?
        }
        [first, second] => adder.add_text(first, second)?,
        _ => bail!("expected two integers, got {}", args.operands.len()),
    };

    let check = compare_with_native(&result);
    if !check.matches {
        warn!(simulated = check.simulated, native = check.native, "simulated sum differs from native arithmetic");
    }

    let report = build_report(&adder, result);
    if let Some(path) = &args.output {
        export_report_to_file(&report, path)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), digest = %report.digest, "report written");
    }

    if args.json {
        println!("{}", encode_report(&report)?);
    } else {
        print!("{}", render_result(&report.result, args.trace));
    }
    Ok(())
}

fn cmd_verify(path: &Path) -> Result<()> {
    let report = import_report_from_file(path)
        .with_context(|| format!("report {} failed verification", path.display()))?;
    let check = compare_with_native(&report.result);

    println!("[OK] {} verified", path.display());
    println!("  digest:    {}", report.digest);
    println!("  mode:      {}", report.config.mode);
    println!("  result:    {} ({})", report.result.bits, report.result.value);
    println!(
        "  native:    {} (exact {}){}",
        check.native,
        check.exact,
        if check.matches { "" } else { "  MISMATCH" }
    );
    if !check.matches {
        bail!("simulated result differs from native arithmetic");
    }
    Ok(())
}

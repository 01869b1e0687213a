// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::Parser;
use cnot_optimal::algebra::Qubits;
use cnot_optimal::circuit::{
    read_qubit_count, CircuitDisplay, CircuitReader, MatrixDisplay,
};
use cnot_optimal::error::OptimizeError;
use cnot_optimal::optimizer::{optimize, Verdict};
use cnot_optimal::oracle::{group_order, CayleyTable};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{Cli, Commands, OptimizeArgs};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Census { qubits }) => run_census(&qubits),
        Some(Commands::Optimize(args)) => run_optimize(&args),
        None => run_optimize(&cli.optimize),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report_failure(&mut io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

fn report_failure<W: Write>(out: &mut W, err: &OptimizeError) -> io::Result<()> {
    writeln!(out, "error: {}", err)
}

fn report_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Identity => writeln!(
            out,
            "\nThe circuit computes the identity; the optimal circuit is empty."
        ),
        Verdict::AlreadyOptimal { length } => {
            writeln!(out, "\nThe circuit is already optimal ({} gates).", length)
        }
        Verdict::Reduced {
            circuit: optimal,
            input_length,
        } => writeln!(
            out,
            "\nOptimal circuit of length {} (input had {} gates): {}",
            optimal.len(),
            input_length,
            CircuitDisplay(optimal.generators())
        ),
    }
}

fn run_optimize(args: &OptimizeArgs) -> Result<(), OptimizeError> {
    let config = args.search_config();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let qubits = match &args.qubits {
        Some(text) => Qubits::parse(text)?,
        None => read_qubit_count(&mut input, &mut stdout)?,
    };
    let circuit = {
        let mut reader = CircuitReader::new(
            &mut input,
            stdout.lock(),
            qubits,
            config.max_circuit_length,
        );
        reader.read_circuit()?
    };

    let mut out = stdout.lock();
    writeln!(out, "\nInput circuit: {}", CircuitDisplay::from(&circuit))?;
    writeln!(out, "\nMatrix of the circuit:")?;
    write!(out, "{}", MatrixDisplay::new(circuit.matrix(), qubits))?;
    out.flush()?;

    let result = optimize(&circuit, &config)?;
    report_verdict(&mut out, &result.verdict)?;
    if let Some(statistics) = &result.statistics {
        writeln!(
            out,
            "Peak nodes in memory: {}",
            statistics.peak_nodes_in_memory()
        )?;
    }
    Ok(())
}

fn run_census(qubits: &str) -> Result<(), OptimizeError> {
    let qubits = Qubits::parse(qubits)?;
    let table = CayleyTable::build(qubits)?;
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "GL({}, F2) has {} elements (expected {})",
        qubits,
        table.len(),
        group_order(qubits)
    )?;
    for (length, size) in table.level_sizes().iter().enumerate() {
        writeln!(out, "{:>3} gates: {}", length, size)?;
    }
    let report = table.check_cyclic_conjecture();
    writeln!(
        out,
        "Longest optimal circuits: {} gates, {} elements; {} cyclic permutations; bound 3(n-1) = {}",
        report.max_length,
        report.longest.len(),
        report.cycles.len(),
        report.bound
    )?;
    if report.holds() {
        writeln!(out, "The longest elements are exactly the {}-cycles.", qubits)?;
    } else {
        writeln!(out, "The cyclic-permutation conjecture FAILS for {} qubits:", qubits)?;
        for m in &report.longest {
            write!(out, "\n{}", MatrixDisplay::new(*m, qubits))?;
        }
    }
    Ok(())
}

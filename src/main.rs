//! Phasor - complex calculator and series circuit solver
//!
//! # Usage
//!
//! ```bash
//! phasor calc multiply 3 4 2 -1 --polar
//! phasor polar 3 4
//! phasor solve circuit.phl --frequency 50
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use phasor_lab::{
    circuit::CircuitSession,
    complex::{to_polar, Complex, Operation},
    components::ReactanceMode,
    dsl,
    error::Result,
    report,
};

/// Complex-number calculator and single-loop AC circuit solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply one operation to z1 = a + bi and z2 = c + di
    Calc {
        /// add, subtract, multiply, divide, conjugate or power
        operation: Operation,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
        c: f64,
        #[arg(allow_negative_numbers = true, default_value_t = 0.0)]
        d: f64,
        /// Also print the result in polar form
        #[arg(short, long)]
        polar: bool,
    },

    /// Convert a rectangular value to polar form
    Polar {
        #[arg(allow_negative_numbers = true)]
        real: f64,
        #[arg(allow_negative_numbers = true)]
        imag: f64,
    },

    /// Solve a circuit description file
    Solve {
        /// Path to the circuit description
        #[arg(value_name = "CIRCUIT_FILE")]
        circuit_file: PathBuf,

        /// Excitation frequency in Hz (overrides .freq)
        #[arg(short, long)]
        frequency: Option<f64>,

        /// coefficient or physical (overrides .mode)
        #[arg(short, long)]
        mode: Option<ReactanceMode>,
    },
}

fn run(command: Command) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Calc {
            operation,
            a,
            b,
            c,
            d,
            polar,
        } => {
            let z1 = Complex::new(a, b);
            let z2 = Complex::new(c, d);
            let result = operation.apply(z1, z2)?;
            report::write_calculation(&mut stdout, operation, z1, z2, result, polar)
        }

        Command::Polar { real, imag } => {
            report::write_polar(&mut stdout, Complex::new(real, imag), to_polar(real, imag))
        }

        Command::Solve {
            circuit_file,
            frequency,
            mode,
        } => {
            let ast = dsl::parse_file(&circuit_file)?;
            let mut session = CircuitSession::from_ast(&ast)?;
            phasor_lab::circuit::validate_session(&session)?;

            let mut config = ast.solver_config();
            if let Some(f) = frequency {
                config = config.with_frequency(f);
            }
            if let Some(m) = mode {
                config = config.with_reactance_mode(m);
            }

            let result = session.solve(&config)?.clone();
            report::write_circuit_report(&mut stdout, &session, &config, &result)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::{ArgAction, Args, Parser, Subcommand};
use cnot_optimal::config::{
    DepthLimits, SearchConfig, DEFAULT_MAX_CIRCUIT_LENGTH, MAX_CIRCUIT_LENGTH_LIMIT,
};

#[derive(Parser, Debug)]
#[command(name = "cnot-opt")]
#[command(author, version, about = "Find an optimal CNOT circuit equivalent to a given one")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub optimize: OptimizeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a circuit and search for an optimal equivalent (the default)
    Optimize(OptimizeArgs),

    /// Enumerate GL(n, F2) and check the cyclic-permutation conjecture
    Census {
        /// Number of qubits (2 to 5)
        qubits: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// Number of qubits (2 to 8); asked for interactively when omitted
    #[arg(short, long)]
    pub qubits: Option<String>,

    /// Depth ceiling for 2 to 5 qubits
    #[arg(long, default_value_t = 12)]
    pub max_depth_small: u8,

    /// Depth ceiling for 6 qubits
    #[arg(long, default_value_t = 7)]
    pub max_depth_6: u8,

    /// Depth ceiling for 7 qubits
    #[arg(long, default_value_t = 6)]
    pub max_depth_7: u8,

    /// Depth ceiling for 8 qubits
    #[arg(long, default_value_t = 5)]
    pub max_depth_8: u8,

    /// Stop with an allocation failure once this many nodes are held
    #[arg(long)]
    pub node_budget: Option<u64>,

    /// Maximum number of gates read for the input circuit
    #[arg(long, default_value_t = DEFAULT_MAX_CIRCUIT_LENGTH as u16,
          value_parser = clap::value_parser!(u16).range(1..=MAX_CIRCUIT_LENGTH_LIMIT as i64))]
    pub max_gates: u16,
}

impl OptimizeArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth_limits: DepthLimits {
                up_to_five_qubits: self.max_depth_small,
                six_qubits: self.max_depth_6,
                seven_qubits: self.max_depth_7,
                eight_qubits: self.max_depth_8,
            },
            node_budget: self.node_budget,
            max_circuit_length: self.max_gates as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_search_config() {
        let cli = Cli::try_parse_from(["cnot-opt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.optimize.search_config(), SearchConfig::default());
    }

    #[test]
    fn test_census_subcommand() {
        let cli = Cli::try_parse_from(["cnot-opt", "-vv", "census", "4"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Census { ref qubits }) if qubits == "4"));
    }

    #[test]
    fn test_max_gates_range() {
        assert!(Cli::try_parse_from(["cnot-opt", "--max-gates", "255"]).is_err());
        let cli = Cli::try_parse_from(["cnot-opt", "optimize", "-q", "3", "--max-gates", "254"])
            .unwrap();
        match cli.command {
            Some(Commands::Optimize(args)) => {
                assert_eq!(args.qubits.as_deref(), Some("3"));
                assert_eq!(args.search_config().max_circuit_length, 254);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

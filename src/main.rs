use clap::Parser;

use smatch_digest::cli::{Cli, Commands};
use smatch_digest::commands::{run_analyze, run_config, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

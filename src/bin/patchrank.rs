use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use patchrank_core::cli::{self, Cli};
use patchrank_core::exit::PatchRankExit;

fn main() -> PatchRankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(PatchRankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            PatchRankExit::from_error(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "patchrank_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

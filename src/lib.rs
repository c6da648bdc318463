use anyhow::Result;
use clap::CommandFactory;

pub mod cli;
pub mod env;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod validate;

use cli::CmdConfig;
use env::HostEnv;
use error::ResolveError;
use resolve::{resolve, ResolvedConfig};

/// Resolves the process command line. Exits with status 1 after printing
/// usage when the module path or function name is missing.
pub fn get_args() -> Result<ResolvedConfig> {
    let env = HostEnv::from_process()?;

    match resolve(std::env::args_os().skip(1), &env) {
        Ok(config) => Ok(config),
        Err(ResolveError::Usage) => {
            eprintln!("ERROR: {}", ResolveError::Usage);
            eprint!("{}", CmdConfig::command().render_help());
            std::process::exit(1)
        }
        Err(ResolveError::Cli(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}

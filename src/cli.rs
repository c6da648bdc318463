use std::path::PathBuf;

use clap::Parser;

/// Raw command line, before any path validation.
///
/// `-b` and `-w` take an optional value: `Some(None)` means the flag was given bare.
#[derive(Debug, Parser)]
#[command(name = "writ", version, about = "WASI Reactor Interface Tester")]
pub struct CmdConfig {
    #[arg(
        short = 'b',
        long = "bindings",
        value_name = "BINDING_PATH",
        help = "directory path to use for the binding cache",
    )]
    pub binding_path: Option<Option<PathBuf>>,
    #[arg(
        short = 'w',
        long = "wit",
        value_name = "WIT_PATH",
        help = "path to the WIT file",
    )]
    pub wit_path: Option<Option<PathBuf>>,
    #[arg(short = 'v', long = "verbose", help = "enable debug output")]
    pub is_verbose: bool,
    #[arg(
        value_name = "INPUT_ARGS",
        trailing_var_arg = true,
        help = "path to the Wasm module, function name, and arguments in JSON format",
    )]
    pub input_args: Vec<String>,
}

use std::{ffi::OsString, path::{Path, PathBuf}};

use clap::{CommandFactory, FromArgMatches};
use tracing::{debug, instrument};

use crate::{cli::CmdConfig, env::HostEnv, error::ResolveError, validate::{check_binding_path, valid_path}};

/// Validated invocation handed to the reactor runner.
///
/// `input_args` always holds at least the module path and the function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    binding_path: PathBuf,
    wit_path: Option<PathBuf>,
    is_verbose: bool,
    input_args: Vec<String>,
}

impl ResolvedConfig {
    pub fn binding_path(&self) -> &Path {
        &self.binding_path
    }

    pub fn wit_path(&self) -> Option<&Path> {
        self.wit_path.as_deref()
    }

    pub fn is_verbose(&self) -> bool {
        self.is_verbose
    }

    pub fn input_args(&self) -> &[String] {
        &self.input_args
    }

    pub fn module_path(&self) -> &Path {
        Path::new(&self.input_args[0])
    }

    pub fn function_name(&self) -> &str {
        &self.input_args[1]
    }

    /// JSON-encoded arguments, passed through unparsed.
    pub fn function_args(&self) -> &[String] {
        &self.input_args[2..]
    }

    pub fn into_parts(self) -> (PathBuf, Option<PathBuf>, bool, Vec<String>) {
        (self.binding_path, self.wit_path, self.is_verbose, self.input_args)
    }
}

/// Parses `tokens` (program name excluded) and validates them against `env`.
pub fn resolve<I, T>(tokens: I, env: &HostEnv) -> Result<ResolvedConfig, ResolveError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(env!("CARGO_PKG_NAME")))
        .chain(tokens.into_iter().map(Into::into));

    let matches = CmdConfig::command().try_get_matches_from(argv)?;
    let config = CmdConfig::from_arg_matches(&matches)?;

    // explicit flags are validated in command-line order; the default cache comes last
    let binding_first = match (matches.index_of("binding_path"), matches.index_of("wit_path")) {
        (Some(binding), Some(wit)) => binding < wit,
        _ => false,
    };

    resolve_config(config, binding_first, env)
}

#[instrument(level = "debug", skip(config, env))]
pub fn resolve_config(config: CmdConfig, binding_first: bool, env: &HostEnv) -> Result<ResolvedConfig, ResolveError> {
    let CmdConfig { binding_path, wit_path, is_verbose, input_args } = config;

    let binding_path = binding_path.flatten().unwrap_or_else(|| env.default_binding_path());
    let wit_path = wit_path.flatten();

    let (binding_path, wit_path) = if binding_first {
        let binding_path = check_binding_path(&binding_path, &env.current_dir)?;
        (binding_path, check_wit_path(wit_path, env)?)
    } else {
        let wit_path = check_wit_path(wit_path, env)?;
        (check_binding_path(&binding_path, &env.current_dir)?, wit_path)
    };

    if input_args.len() < 2 {
        return Err(ResolveError::Usage);
    }

    debug!(binding_path = %binding_path.display(), ?wit_path, is_verbose, ?input_args, "resolved");

    Ok(ResolvedConfig { binding_path, wit_path, is_verbose, input_args })
}

fn check_wit_path(wit_path: Option<PathBuf>, env: &HostEnv) -> Result<Option<PathBuf>, ResolveError> {
    wit_path.map(|path| valid_path(&path, &env.current_dir)).transpose()
}

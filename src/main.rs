use anyhow::Result;
use tracing::{debug, info};
use writ::{get_args, logging};

fn main() -> Result<()> {
    let config = get_args()?;
    logging::init(config.is_verbose())?;

    info!(
        module = %config.module_path().display(),
        function = config.function_name(),
        args = config.function_args().len(),
        "resolved reactor invocation"
    );
    debug!(
        bindings = %config.binding_path().display(),
        wit = ?config.wit_path(),
        args = ?config.function_args(),
        "invocation details"
    );

    Ok(())
}

use std::process::{Command, Output};

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn writ(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_writ")).args(args).env_remove("RUST_LOG").output()?)
}

#[test]
fn missing_function_name_exits_with_usage() -> Result<()> {
    let cache = tempdir()?;
    let bindings = cache.path().to_string_lossy().into_owned();

    let output = writ(&["-b", &bindings, "module.wasm"])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(Some(1), output.status.code());
    assert!(stderr.starts_with("ERROR: Missing either wasm file path or function name.\n"));
    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("WASI Reactor Interface Tester"));
    Ok(())
}

#[test]
fn missing_wit_file_fails() -> Result<()> {
    let cache = tempdir()?;
    let bindings = cache.path().to_string_lossy().into_owned();

    let output = writ(&["-b", &bindings, "-w", "/path/does/not/exist", "module.wasm", "run"])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(!output.status.success());
    assert!(stderr.contains("/path/does/not/exist does not exist!"));
    Ok(())
}

#[test]
fn resolved_invocation_succeeds() -> Result<()> {
    let root = tempdir()?;
    let bindings = root.path().join("cache");
    let bindings = bindings.to_string_lossy().into_owned();

    let output = writ(&["-b", &bindings, "module.wasm", "run", "[1,2]"])?;

    assert!(output.status.success());
    assert!(root.path().join("cache").is_dir());
    Ok(())
}

//! dicttree dump example
//!
//! Loads a JSON or TOML file and prints it as the key/value tree a view
//! would display.
//!
//! Run with: cargo run -p dicttree --example dump -- path/to/file.json [config.toml]
//!
//! Set `RUST_LOG=dicttree=debug` to see construction logs.

use std::process::ExitCode;

use dicttree::logging::{ModelTreeDebug, TreeFormatOptions};
use dicttree::{ModelConfig, ValueTreeModel, source};
use tracing_subscriber::EnvFilter;

fn run(path: &str, config_path: Option<&str>) -> dicttree::Result<()> {
    let config = match config_path {
        Some(config_path) => ModelConfig::load(config_path)?,
        None => ModelConfig::default(),
    };

    let value = source::read_path(path)?;
    let model = ValueTreeModel::builder().config(config).build(value)?;
    tracing::info!(nodes = model.tree().len(), "loaded {path}");

    let options = TreeFormatOptions {
        show_headers: true,
        ..Default::default()
    };
    print!("{}", ModelTreeDebug::with_options(options).format_model(&model));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: dump <file.json|file.toml> [config.toml]");
        return ExitCode::from(2);
    };

    match run(path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

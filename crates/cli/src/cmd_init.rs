//! Init command implementation.

use std::path::Path;

use chatwatch::cli::InitArgs;
use chatwatch::config::{CONFIG_FILE_NAME, DEFAULT_TEMPLATE};
use chatwatch::error::{Error, ExitCode};

/// Write the default config file into the working directory.
pub fn run(args: &InitArgs) -> anyhow::Result<ExitCode> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        eprintln!("chatwatch: {CONFIG_FILE_NAME} already exists (use --force to overwrite)");
        return Ok(ExitCode::ConfigError);
    }

    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    println!("Wrote {CONFIG_FILE_NAME}");
    Ok(ExitCode::Success)
}

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};

use crate::config::{ConfigPaths, LoggingConfig};

const DEFAULT_BASENAME: &str = "catseek";

/// Starts file logging. Logs never go to the terminal; the alternate
/// screen owns it.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<()> {
    Logger::try_with_env_or_str(&config.level)?
        .log_to_file(file_spec(config, paths))
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    log::info!("logging started at level '{}'", config.level);
    Ok(())
}

fn file_spec(config: &LoggingConfig, paths: &ConfigPaths) -> FileSpec {
    let spec = FileSpec::default();
    match config.path.as_deref().map(Path::new) {
        Some(path) => {
            let directory = path.parent().filter(|dir| !dir.as_os_str().is_empty());
            let basename = path.file_stem().and_then(|stem| stem.to_str());
            spec.directory(directory.unwrap_or(&paths.logs_dir))
                .basename(basename.unwrap_or(DEFAULT_BASENAME))
        }
        None => spec.directory(&paths.logs_dir).basename(DEFAULT_BASENAME),
    }
}

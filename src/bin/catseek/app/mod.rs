mod oneshot;
mod tui;

use clap::Parser;
use std::io::IsTerminal;

use catseek::EnginePreset;

use crate::args::CliArgs;
use crate::config::{load_config, AppConfig};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    init_logging(&loaded.config.logging, &loaded.paths)?;

    if args.list_engines {
        list_engines();
        return Ok(());
    }

    let mut config = loaded.config;
    apply_overrides(&mut config, &args)?;

    if args.prompt.is_some() || !std::io::stdin().is_terminal() {
        return oneshot::run_oneshot(&args, &config);
    }

    tui::run_tui(config).await
}

fn list_engines() {
    for preset in EnginePreset::ALL {
        println!("{:<10} {}", preset.name(), preset.describe());
    }
}

/// Flags win over the config file for this run; nothing is written back.
fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> anyhow::Result<()> {
    if let Some(name) = &args.engine {
        config.engine.preset = name.parse::<EnginePreset>()?;
    }
    if let Some(seed) = args.seed {
        config.engine.seed = Some(seed);
    }
    if let Some(theme) = &args.theme {
        config.ui.theme = theme.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(engine: Option<&str>, seed: Option<u64>, theme: Option<&str>) -> CliArgs {
        CliArgs {
            engine: engine.map(String::from),
            seed,
            theme: theme.map(String::from),
            config: None,
            prompt: None,
            list_engines: false,
        }
    }

    #[test]
    fn engine_flag_replaces_the_configured_preset() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args_with(Some("copycat"), None, None)).unwrap();
        assert_eq!(config.engine.preset, EnginePreset::Copycat);
    }

    #[test]
    fn unknown_engine_names_are_rejected() {
        let mut config = AppConfig::default();
        let err = apply_overrides(&mut config, &args_with(Some("dogpt"), None, None));
        assert!(err.is_err());
    }

    #[test]
    fn seed_and_theme_overrides_apply_together() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args_with(None, Some(7), Some("paper"))).unwrap();
        assert_eq!(config.engine.seed, Some(7));
        assert_eq!(config.ui.theme, "paper");
    }

    #[test]
    fn absent_flags_leave_the_config_alone() {
        let mut config = AppConfig::default();
        let before = config.engine.preset;
        apply_overrides(&mut config, &args_with(None, None, None)).unwrap();
        assert_eq!(config.engine.preset, before);
        assert_eq!(config.engine.seed, None);
    }
}

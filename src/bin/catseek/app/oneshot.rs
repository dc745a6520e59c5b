use std::io::{self, IsTerminal, Read};

use catseek::Engine;

use crate::args::CliArgs;
use crate::config::AppConfig;

/// Answers a single prompt on stdout and exits. Reached via --prompt or
/// whenever stdin is a pipe.
pub(super) fn run_oneshot(args: &CliArgs, config: &AppConfig) -> anyhow::Result<()> {
    let prompt = resolve_prompt(args)?;
    let mut engine = match config.engine.seed {
        Some(seed) => Engine::with_seed(config.engine.preset, seed),
        None => Engine::new(config.engine.preset),
    };
    println!("{}", engine.generate(&prompt));
    Ok(())
}

fn resolve_prompt(args: &CliArgs) -> anyhow::Result<String> {
    if let Some(prompt) = &args.prompt {
        return Ok(prompt.clone());
    }
    if let Some(prompt) = prompt_from_stdin()? {
        return Ok(prompt);
    }
    Err(anyhow::anyhow!(
        "no prompt provided; use --prompt or pipe input"
    ))
}

fn prompt_from_stdin() -> anyhow::Result<Option<String>> {
    if io::stdin().is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let trimmed = input.trim_end();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

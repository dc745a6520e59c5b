#[path = "catseek/app/mod.rs"]
mod app;
#[path = "catseek/args.rs"]
mod args;
#[path = "catseek/config/mod.rs"]
mod config;
#[path = "catseek/input.rs"]
mod input;
#[path = "catseek/logging.rs"]
mod logging;
#[path = "catseek/runtime/mod.rs"]
mod runtime;
#[path = "catseek/terminal.rs"]
mod terminal;
#[path = "catseek/ui/mod.rs"]
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}

use std::time::{Duration, Instant};

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::runtime::controller::AppController;
use crate::runtime::events::{AppEvent, InputEvent};
use crate::runtime::terminal::Tui;
use crate::ui::{render_app, MessageRenderer};

const TICK_MS: u64 = 50;
const SLOW_FRAME_MS: u64 = 100;

pub async fn run_app(
    controller: AppController,
    terminal: &mut Tui,
    rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
) -> anyhow::Result<()> {
    let mut runner = AppRunner::new(controller, terminal, rx, event_tx);
    runner.run().await
}

struct AppRunner<'a> {
    controller: AppController,
    terminal: &'a mut Tui,
    rx: mpsc::Receiver<AppEvent>,
    renderer: MessageRenderer,
    tick: tokio::time::Interval,
    dirty: bool,
}

impl<'a> AppRunner<'a> {
    fn new(
        mut controller: AppController,
        terminal: &'a mut Tui,
        rx: mpsc::Receiver<AppEvent>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            controller.state.terminal_size = (size.width, size.height);
        }
        spawn_event_reader(event_tx);
        Self {
            controller,
            terminal,
            rx,
            renderer: MessageRenderer::default(),
            tick: tokio::time::interval(Duration::from_millis(TICK_MS)),
            dirty: true,
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        while !self.controller.state.should_quit {
            if self.wait_for_event().await {
                self.draw()?;
                self.dirty = false;
            }
        }
        self.controller.cancel_all_tasks();
        Ok(())
    }

    async fn wait_for_event(&mut self) -> bool {
        tokio::select! {
            Some(event) = self.rx.recv() => {
                if self.controller.handle_event(event) {
                    self.dirty = true;
                }
            }
            _ = self.tick.tick() => {
                if self.controller.handle_event(AppEvent::Tick) {
                    self.dirty = true;
                }
            }
        }
        self.dirty
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        let started = Instant::now();
        self.terminal
            .draw(|frame| render_app(frame, &self.controller.state, &mut self.renderer))?;
        if started.elapsed() > Duration::from_millis(SLOW_FRAME_MS) {
            // Frames falling behind the tick rate read as stutter, so
            // the blink freezes instead.
            self.controller.state.animation.disable();
        }
        Ok(())
    }
}

/// Blocking crossterm reads live on their own thread; events cross into
/// the async loop over the channel.
fn spawn_event_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(_) => continue,
        };
        let mapped = match event {
            Event::Key(key) => Some(InputEvent::Key(key)),
            Event::Paste(text) => Some(InputEvent::Paste(text)),
            Event::Resize(width, height) => Some(InputEvent::Resize(width, height)),
            _ => None,
        };
        if let Some(input) = mapped {
            if sender.blocking_send(AppEvent::Input(input)).is_err() {
                return;
            }
        }
    });
}

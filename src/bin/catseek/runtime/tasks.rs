use std::collections::HashMap;
use std::time::Duration;

use catseek::SandboxRunner;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::runtime::events::{AppEvent, BootEvent, ReplyEvent, RunEvent, SandboxHealth};

/// Tracks the delayed reply pending for each conversation.
///
/// At most one reply is in flight per conversation; scheduling a new one
/// replaces the old. Cancellation drops the timer without sending.
pub struct ReplyScheduler {
    sender: mpsc::Sender<AppEvent>,
    active: HashMap<usize, CancellationToken>,
}

impl ReplyScheduler {
    pub fn new(sender: mpsc::Sender<AppEvent>) -> Self {
        Self {
            sender,
            active: HashMap::new(),
        }
    }

    pub fn is_pending(&self, conversation: usize) -> bool {
        self.active.contains_key(&conversation)
    }

    pub fn cancel(&mut self, conversation: usize) {
        if let Some(token) = self.active.remove(&conversation) {
            token.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, token) in self.active.drain() {
            token.cancel();
        }
    }

    /// Clears the bookkeeping entry once the reply event has landed.
    pub fn finish(&mut self, conversation: usize) {
        self.active.remove(&conversation);
    }

    pub fn schedule(&mut self, conversation: usize, text: String, delay: Duration) {
        self.cancel(conversation);
        let token = CancellationToken::new();
        self.active.insert(conversation, token.clone());
        let sender = self.sender.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = sender
                        .send(AppEvent::Reply(ReplyEvent { conversation, text }))
                        .await;
                }
            }
        });
    }
}

/// Runs the startup checks off the UI loop and reports back as events.
pub fn spawn_boot(sender: mpsc::Sender<AppEvent>, runner: Option<SandboxRunner>) {
    tokio::spawn(async move {
        let sandbox = match runner {
            None => SandboxHealth::Disabled,
            Some(runner) => {
                let _ = sender
                    .send(AppEvent::Boot(BootEvent::Notice(
                        "checking code runner...".into(),
                    )))
                    .await;
                match runner.probe().await {
                    Ok(version) => SandboxHealth::Ready(version),
                    Err(err) => SandboxHealth::Unavailable(err.to_string()),
                }
            }
        };
        let _ = sender
            .send(AppEvent::Boot(BootEvent::Ready { sandbox }))
            .await;
    });
}

/// Executes one code block in the sandbox and delivers its output.
pub fn spawn_run(sender: mpsc::Sender<AppEvent>, runner: SandboxRunner, code: String) {
    tokio::spawn(async move {
        let output = runner.run(&code).await;
        let _ = sender.send(AppEvent::Run(RunEvent { output })).await;
    });
}

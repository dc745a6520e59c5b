use crossterm::event::KeyEvent;

/// Raw terminal input forwarded from the reader thread.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Everything the runtime loop can wake up on.
#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    Tick,
    Boot(BootEvent),
    Reply(ReplyEvent),
    Run(RunEvent),
}

/// Progress of the startup checks that run behind the splash greeting.
#[derive(Debug)]
pub enum BootEvent {
    Notice(String),
    Ready { sandbox: SandboxHealth },
    Failed(String),
}

/// Outcome of probing the code runner at startup.
#[derive(Debug, Clone)]
pub enum SandboxHealth {
    Unknown,
    Ready(String),
    Unavailable(String),
    Disabled,
}

/// A finished reply, tagged with the conversation that asked for it.
#[derive(Debug)]
pub struct ReplyEvent {
    pub conversation: usize,
    pub text: String,
}

/// Output of a sandboxed code run.
#[derive(Debug)]
pub struct RunEvent {
    pub output: String,
}

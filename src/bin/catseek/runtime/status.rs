/// What the app is doing right now, as shown in the status line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AppStatus {
    /// Startup checks have not finished; input is held back.
    Booting,
    Idle,
    /// A reply is pending for the active conversation.
    Thinking,
    /// A code block is executing in the sandbox.
    Running,
    /// Startup failed; input stays off for the rest of the session.
    Disabled(String),
}

impl AppStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Thinking | Self::Running)
    }

    pub fn input_blocked(&self) -> bool {
        matches!(self, Self::Booting | Self::Disabled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_states_are_the_transient_ones() {
        assert!(AppStatus::Thinking.is_busy());
        assert!(AppStatus::Running.is_busy());
        assert!(!AppStatus::Idle.is_busy());
        assert!(!AppStatus::Booting.is_busy());
    }

    #[test]
    fn input_is_blocked_before_boot_and_after_failure() {
        assert!(AppStatus::Booting.input_blocked());
        assert!(AppStatus::Disabled("no terminal".into()).input_blocked());
        assert!(!AppStatus::Idle.input_blocked());
        assert!(!AppStatus::Thinking.input_blocked());
    }
}

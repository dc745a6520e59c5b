use crate::runtime::state::Notice;

use super::AppController;

impl AppController {
    /// Replaces the status-line hint; it fades out on a later tick.
    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.state.notice = Some(Notice::new(text));
    }
}

/// Scrollable read-only text shown in a modal box.
#[derive(Debug)]
pub struct PagerState {
    pub title: String,
    pub lines: Vec<String>,
    pub scroll: usize,
}

impl PagerState {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
        }
    }

    pub fn from_text(title: impl Into<String>, text: &str) -> Self {
        Self::new(title, text.lines().map(str::to_string).collect())
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.lines.len().saturating_sub(viewport_height.max(1))
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, viewport_height: usize) {
        self.scroll = (self.scroll + amount).min(self.max_scroll(viewport_height));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self, viewport_height: usize) {
        self.scroll = self.max_scroll(viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(lines: usize) -> PagerState {
        PagerState::new("out", (0..lines).map(|i| format!("line {i}")).collect())
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let mut state = pager(10);
        state.scroll_down(100, 4);
        assert_eq!(state.scroll, 6);
        state.scroll_up(100);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut state = pager(3);
        state.scroll_down(5, 10);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.max_scroll(10), 0);
    }

    #[test]
    fn bottom_jump_shows_the_last_page() {
        let mut state = pager(20);
        state.scroll_to_bottom(5);
        assert_eq!(state.scroll, 15);
        state.scroll_to_top();
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn from_text_splits_on_newlines() {
        let state = PagerState::from_text("out", "a\nb\nc");
        assert_eq!(state.lines, vec!["a", "b", "c"]);
    }
}

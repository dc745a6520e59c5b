use ratatui::style::{Modifier, Style, Stylize};

use super::super::theme::Theme;

/// Inline and block styles for rendered markdown.
///
/// Text decorations are modifier-only so they read on any bubble
/// background; accents and code chrome come from the active theme.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    pub h1: Style,
    pub h2: Style,
    pub h3: Style,
    pub emphasis: Style,
    pub strong: Style,
    pub strikethrough: Style,
    pub list_marker: Style,
    pub link: Style,
    pub blockquote: Style,
    pub inline_code: Style,
    pub code_bg: Style,
    pub code_border: Style,
    pub code_header: Style,
}

impl MarkdownStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            h1: theme.accent.add_modifier(Modifier::UNDERLINED),
            h2: theme.accent,
            h3: Style::new().bold().italic(),
            emphasis: Style::new().italic(),
            strong: Style::new().bold(),
            strikethrough: Style::new().crossed_out(),
            list_marker: theme.accent,
            link: theme.accent.add_modifier(Modifier::UNDERLINED),
            blockquote: theme.muted.add_modifier(Modifier::ITALIC),
            inline_code: theme.inline_code,
            code_bg: theme.code_bg,
            code_border: theme.code_border,
            code_header: theme.code_header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{ColorLevel, TerminalPalette};

    #[test]
    fn code_styles_follow_the_theme() {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        let theme = Theme::from_name("deepsea", &palette);
        let styles = MarkdownStyles::from_theme(&theme);
        assert_eq!(styles.code_bg, theme.code_bg);
        assert_ne!(styles.inline_code, Style::default());
    }

    #[test]
    fn text_decorations_carry_no_colors() {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        let theme = Theme::from_name("deepsea", &palette);
        let styles = MarkdownStyles::from_theme(&theme);
        assert_eq!(styles.strong.fg, None);
        assert_eq!(styles.emphasis.bg, None);
    }
}

use ratatui::style::{Color, Modifier, Style};

use crate::terminal::{Rgb, TerminalPalette};

pub mod borders {
    pub const LEFT_BORDER: &str = "▎";
}

pub mod indicators {
    pub const PROMPT: &str = "❯";
    pub const BULLET: &str = "●";
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
}

#[derive(Debug, Clone)]
pub struct Theme {
    // Message bubbles: colored left border plus a background tint
    pub user_border: Style,
    pub user_bg: Style,
    pub assistant_border: Style,
    pub assistant_bg: Style,
    pub system_border: Style,
    pub system_bg: Style,
    pub selected_border: Style,
    // Status line
    pub status: Style,
    pub status_ok: Style,
    pub status_warn: Style,
    pub status_error: Style,
    pub status_indicator: Style,
    // Chrome
    pub accent: Style,
    pub muted: Style,
    pub border: Style,
    pub border_focused: Style,
    // Code
    pub code_bg: Style,
    pub code_border: Style,
    pub code_header: Style,
    pub inline_code: Style,
    // Input
    pub prompt: Style,
}

impl Theme {
    pub fn from_name(name: &str, palette: &TerminalPalette) -> Self {
        match name.to_lowercase().as_str() {
            "mono" => Self::mono(palette),
            "paper" => Self::paper(palette),
            _ => Self::deepsea(palette),
        }
    }

    /// Default theme. Deep navy background tints with a bright blue for
    /// the user's side of the conversation.
    pub fn deepsea(palette: &TerminalPalette) -> Self {
        let blue = Rgb::new(58, 142, 239);
        let slate = Rgb::new(150, 160, 200);
        let amber = Rgb::new(233, 182, 89);
        let green = Rgb::new(120, 200, 140);
        let ice = Rgb::new(150, 205, 235);
        let bright = Rgb::new(230, 232, 240);
        let muted_gray = Rgb::new(130, 135, 155);
        let dim_gray = Rgb::new(88, 92, 112);

        let user_bg = Rgb::new(28, 36, 56);
        let assistant_bg = Rgb::new(40, 40, 56);
        let system_bg = Rgb::new(48, 44, 30);
        let code_bg = Rgb::new(24, 26, 40);

        Self {
            user_border: Style::default().fg(palette.map(blue)),
            user_bg: Style::default().bg(palette.map(user_bg)),
            assistant_border: Style::default().fg(palette.map(slate)),
            assistant_bg: Style::default().bg(palette.map(assistant_bg)),
            system_border: Style::default().fg(palette.map(amber)),
            system_bg: Style::default().bg(palette.map(system_bg)),
            selected_border: Style::default()
                .fg(palette.map(bright))
                .add_modifier(Modifier::BOLD),
            status: Style::default()
                .fg(palette.map(dim_gray))
                .add_modifier(Modifier::DIM),
            status_ok: Style::default().fg(palette.map(green)),
            status_warn: Style::default().fg(palette.map(amber)),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_indicator: Style::default().fg(palette.map(blue)),
            accent: Style::default()
                .fg(palette.map(blue))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(palette.map(muted_gray)),
            border: Style::default().fg(palette.map(dim_gray)),
            border_focused: Style::default().fg(palette.map(blue)),
            code_bg: Style::default().bg(palette.map(code_bg)),
            code_border: Style::default().fg(palette.map(dim_gray)),
            code_header: Style::default()
                .fg(palette.map(muted_gray))
                .add_modifier(Modifier::DIM),
            inline_code: Style::default()
                .fg(palette.map(ice))
                .bg(palette.map(code_bg)),
            prompt: Style::default()
                .fg(palette.map(blue))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Green-tinted bubbles after the classic messenger look.
    pub fn paper(palette: &TerminalPalette) -> Self {
        let green = Rgb::new(150, 205, 120);
        let chalk = Rgb::new(190, 190, 185);
        let teal = Rgb::new(94, 180, 160);
        let yellow = Rgb::new(210, 170, 80);
        let bright = Rgb::new(235, 235, 230);
        let muted_gray = Rgb::new(140, 145, 135);
        let dim_gray = Rgb::new(90, 95, 85);

        let user_bg = Rgb::new(36, 48, 30);
        let assistant_bg = Rgb::new(42, 42, 40);
        let system_bg = Rgb::new(30, 42, 40);
        let code_bg = Rgb::new(32, 36, 32);

        Self {
            user_border: Style::default().fg(palette.map(green)),
            user_bg: Style::default().bg(palette.map(user_bg)),
            assistant_border: Style::default().fg(palette.map(chalk)),
            assistant_bg: Style::default().bg(palette.map(assistant_bg)),
            system_border: Style::default().fg(palette.map(teal)),
            system_bg: Style::default().bg(palette.map(system_bg)),
            selected_border: Style::default()
                .fg(palette.map(bright))
                .add_modifier(Modifier::BOLD),
            status: Style::default()
                .fg(palette.map(dim_gray))
                .add_modifier(Modifier::DIM),
            status_ok: Style::default().fg(palette.map(green)),
            status_warn: Style::default().fg(palette.map(yellow)),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_indicator: Style::default().fg(palette.map(green)),
            accent: Style::default()
                .fg(palette.map(green))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(palette.map(muted_gray)),
            border: Style::default().fg(palette.map(dim_gray)),
            border_focused: Style::default().fg(palette.map(green)),
            code_bg: Style::default().bg(palette.map(code_bg)),
            code_border: Style::default().fg(palette.map(dim_gray)),
            code_header: Style::default()
                .fg(palette.map(muted_gray))
                .add_modifier(Modifier::DIM),
            inline_code: Style::default()
                .fg(palette.map(teal))
                .bg(palette.map(code_bg)),
            prompt: Style::default()
                .fg(palette.map(green))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// High contrast monochrome for accessibility.
    fn mono(palette: &TerminalPalette) -> Self {
        let white = Rgb::new(220, 220, 220);
        let light_gray = Rgb::new(180, 180, 180);
        let mid_gray = Rgb::new(140, 140, 140);
        let dark_gray = Rgb::new(80, 80, 80);
        let darker_gray = Rgb::new(50, 50, 50);
        let base_bg = Rgb::new(35, 35, 35);

        Self {
            user_border: Style::default().fg(palette.map(white)),
            user_bg: Style::default().bg(palette.map(base_bg)),
            assistant_border: Style::default().fg(palette.map(light_gray)),
            assistant_bg: Style::default(),
            system_border: Style::default().fg(palette.map(mid_gray)),
            system_bg: Style::default().bg(palette.map(darker_gray)),
            selected_border: Style::default()
                .fg(palette.map(white))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            status: Style::default()
                .fg(palette.map(dark_gray))
                .add_modifier(Modifier::DIM),
            status_ok: Style::default().fg(palette.map(mid_gray)),
            status_warn: Style::default().fg(Color::Yellow),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_indicator: Style::default().fg(palette.map(white)),
            accent: Style::default()
                .fg(palette.map(white))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(palette.map(mid_gray)),
            border: Style::default().fg(palette.map(dark_gray)),
            border_focused: Style::default().fg(palette.map(white)),
            code_bg: Style::default().bg(palette.map(darker_gray)),
            code_border: Style::default().fg(palette.map(dark_gray)),
            code_header: Style::default()
                .fg(palette.map(mid_gray))
                .add_modifier(Modifier::DIM),
            inline_code: Style::default()
                .fg(palette.map(light_gray))
                .bg(palette.map(darker_gray)),
            prompt: Style::default()
                .fg(palette.map(white))
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ColorLevel;

    #[test]
    fn unknown_names_fall_back_to_deepsea() {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        let fallback = Theme::from_name("lasagna", &palette);
        let deepsea = Theme::deepsea(&palette);
        assert_eq!(
            format!("{:?}", fallback.accent),
            format!("{:?}", deepsea.accent)
        );
    }

    #[test]
    fn themes_differ_in_their_accent() {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        let deepsea = Theme::from_name("deepsea", &palette);
        let paper = Theme::from_name("paper", &palette);
        let mono = Theme::from_name("mono", &palette);
        assert_ne!(
            format!("{:?}", deepsea.accent),
            format!("{:?}", paper.accent)
        );
        assert_ne!(format!("{:?}", mono.accent), format!("{:?}", paper.accent));
    }

    #[test]
    fn colorless_terminals_get_reset_styles() {
        let palette = TerminalPalette::new(ColorLevel::None);
        let theme = Theme::deepsea(&palette);
        assert_eq!(theme.user_border.fg, Some(Color::Reset));
    }
}

use std::env;

use ratatui::style::Color;

/// How many colors the terminal can be trusted with.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    None,
}

/// What the environment tells us about the terminal before raw mode starts.
#[derive(Debug, Clone, Copy)]
pub struct TerminalProfile {
    pub color_level: ColorLevel,
    pub animate: bool,
}

impl TerminalProfile {
    pub fn detect() -> Self {
        let term = env::var("TERM").ok();
        let colorterm = env::var("COLORTERM").ok();
        let no_color = env::var("NO_COLOR").is_ok();
        let ssh = env::var("SSH_CONNECTION").is_ok() || env::var("SSH_TTY").is_ok();
        Self::from_env(term.as_deref(), colorterm.as_deref(), no_color, ssh)
    }

    fn from_env(term: Option<&str>, colorterm: Option<&str>, no_color: bool, ssh: bool) -> Self {
        let color_level = color_level(term, colorterm, no_color);
        // Low-color links over ssh redraw too slowly for a spinner.
        let animate = color_level != ColorLevel::None
            && !(ssh && matches!(color_level, ColorLevel::Ansi16));
        Self {
            color_level,
            animate,
        }
    }
}

fn color_level(term: Option<&str>, colorterm: Option<&str>, no_color: bool) -> ColorLevel {
    if no_color {
        return ColorLevel::None;
    }
    let term = term.unwrap_or_default();
    if term == "dumb" {
        return ColorLevel::None;
    }
    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorLevel::TrueColor;
    }
    if term.contains("256color") {
        return ColorLevel::Ansi256;
    }
    ColorLevel::Ansi16
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Maps theme colors down to whatever the terminal supports.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPalette {
    level: ColorLevel,
}

impl TerminalPalette {
    pub fn new(level: ColorLevel) -> Self {
        Self { level }
    }

    pub fn map(&self, rgb: Rgb) -> Color {
        match self.level {
            ColorLevel::TrueColor => Color::Rgb(rgb.r, rgb.g, rgb.b),
            ColorLevel::Ansi256 => Color::Indexed(nearest_ansi(rgb, 256)),
            ColorLevel::Ansi16 => Color::Indexed(nearest_ansi(rgb, 16)),
            ColorLevel::None => Color::Reset,
        }
    }
}

fn nearest_ansi(rgb: Rgb, palette_size: u16) -> u8 {
    let mut best = 0u8;
    let mut best_distance = u32::MAX;
    for index in 0..palette_size.min(256) {
        let candidate = ansi_color(index as u8);
        let distance = rgb_distance(rgb, candidate);
        if distance < best_distance {
            best_distance = distance;
            best = index as u8;
        }
    }
    best
}

fn rgb_distance(a: Rgb, b: Rgb) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    // Weighted squared distance; green dominates perceived brightness.
    (2 * dr * dr + 4 * dg * dg + 3 * db * db) as u32
}

const CUBE_FIRST: u8 = 16;
const CUBE_LAST: u8 = 231;
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
const GRAY_FIRST: u8 = 232;

fn ansi_color(index: u8) -> Rgb {
    if usize::from(index) < ANSI16.len() {
        return ANSI16[usize::from(index)];
    }
    if (CUBE_FIRST..=CUBE_LAST).contains(&index) {
        let offset = index - CUBE_FIRST;
        let r = offset / 36;
        let g = (offset % 36) / 6;
        let b = offset % 6;
        return Rgb::new(
            CUBE_LEVELS[usize::from(r)],
            CUBE_LEVELS[usize::from(g)],
            CUBE_LEVELS[usize::from(b)],
        );
    }
    let gray = 8 + (index - GRAY_FIRST) * 10;
    Rgb::new(gray, gray, gray)
}

const ANSI16: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

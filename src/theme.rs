//! Calendar theme: colors, border style, and locale

use crate::i18n::Locale;

/// Color representation with degradation to 256-color terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// True color RGB
    Rgb(u8, u8, u8),
    /// 256-color palette index
    Palette256(u8),
}

impl Color {
    /// Create a color from RGB values
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn white() -> Self {
        Color::Rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Color::Rgb(0, 0, 0)
    }

    pub fn dark_gray() -> Self {
        Color::Rgb(128, 128, 128)
    }

    /// Foreground escape sequence
    pub fn fg(&self, truecolor: bool) -> String {
        match (self, truecolor) {
            (Color::Rgb(r, g, b), true) => format!("\x1b[38;2;{};{};{}m", r, g, b),
            _ => format!("\x1b[38;5;{}m", self.palette_index()),
        }
    }

    /// Background escape sequence
    pub fn bg(&self, truecolor: bool) -> String {
        match (self, truecolor) {
            (Color::Rgb(r, g, b), true) => format!("\x1b[48;2;{};{};{}m", r, g, b),
            _ => format!("\x1b[48;5;{}m", self.palette_index()),
        }
    }

    fn palette_index(&self) -> u8 {
        match *self {
            Color::Palette256(idx) => idx,
            Color::Rgb(r, g, b) => rgb_to_256(r, g, b),
        }
    }
}

/// Map RGB onto the 6x6x6 cube or the grayscale ramp
fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r as u16 - 8) * 24 / 247) as u8;
    }

    let scale = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

/// Border characters of the calendar popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    Single,
    Double,
    #[default]
    Rounded,
}

/// Box-drawing characters for one border style
#[derive(Debug, Clone, Copy)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Single => BorderChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
            BorderStyle::Double => BorderChars {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
            },
            BorderStyle::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Theme for calendar widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub text_fg: Color,
    pub label_fg: Color,
    pub placeholder_fg: Color,
    pub title_fg: Color,

    pub selected_fg: Color,
    pub selected_bg: Color,
    pub today_fg: Color,
    pub cursor_bg: Color,

    pub border_color: Color,
    pub focus_border_color: Color,
    pub border_style: BorderStyle,

    pub locale: Locale,

    truecolor: bool,
}

impl Theme {
    /// Create a theme for the given locale
    pub fn new(locale: Locale) -> Self {
        Theme {
            text_fg: Color::white(),
            label_fg: Color::dark_gray(),
            placeholder_fg: Color::dark_gray(),
            title_fg: Color::white(),

            selected_fg: Color::black(),
            selected_bg: Color::rgb(100, 150, 255),
            today_fg: Color::rgb(255, 200, 100),
            cursor_bg: Color::rgb(58, 48, 68),

            border_color: Color::dark_gray(),
            focus_border_color: Color::rgb(100, 150, 255),
            border_style: BorderStyle::Rounded,

            locale,

            truecolor: true,
        }
    }

    /// Theme using the environment's locale and color support
    pub fn from_env() -> Self {
        let mut theme = Theme::new(Locale::from_env());
        theme.truecolor = detect_truecolor();
        theme
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_truecolor(mut self, truecolor: bool) -> Self {
        self.truecolor = truecolor;
        self
    }

    /// Foreground style for a color
    pub fn fg(&self, color: Color) -> String {
        color.fg(self.truecolor)
    }

    /// Style for a selected cell
    pub fn selected_style(&self) -> String {
        format!(
            "{}{}",
            self.selected_fg.fg(self.truecolor),
            self.selected_bg.bg(self.truecolor)
        )
    }

    /// Style for the keyboard cursor cell
    pub fn cursor_style(&self) -> String {
        format!("\x1b[4m{}", self.cursor_bg.bg(self.truecolor))
    }

    /// Style for today's cell when not selected
    pub fn today_style(&self) -> String {
        format!("\x1b[1m{}", self.today_fg.fg(self.truecolor))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(Locale::default())
    }
}

fn detect_truecolor() -> bool {
    std::env::var("COLORTERM")
        .map(|v| v == "truecolor" || v == "24bit")
        .unwrap_or(false)
}

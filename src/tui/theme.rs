// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

/// Form styling with an optional terminal-palette override.
///
/// Without an override the dark/light toggle switches between the terminal
/// defaults and a black-on-white scheme; with an override the palette's
/// fg/bg pair is used as-is and the toggle swaps the pair.
#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self, dark: bool) -> Style {
        match &self.palette {
            Some(palette) if dark => Style::default().fg(palette.fg).bg(palette.bg),
            Some(palette) => Style::default().fg(palette.bg).bg(palette.fg),
            None if dark => Style::default(),
            None => Style::default().fg(Color::Black).bg(Color::White),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi_color(color.idx()),
            None => color.into(),
        }
    }

    pub(crate) fn field_border_style(&self, dark: bool, focused: bool) -> Style {
        if focused {
            self.base_style(dark).fg(self.ansi_color(Ansi16::Yellow))
        } else {
            self.base_style(dark)
        }
    }

    pub(crate) fn label_style(&self, dark: bool) -> Style {
        self.base_style(dark).fg(self.ansi_color(Ansi16::Cyan))
    }

    pub(crate) fn selection_style(&self, dark: bool) -> Style {
        self.base_style(dark)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn toast_style(&self, dark: bool) -> Style {
        self.base_style(dark).fg(self.ansi_color(Ansi16::Green))
    }

    pub(crate) fn warn_style(&self, dark: bool) -> Style {
        self.base_style(dark).fg(self.ansi_color(Ansi16::Red))
    }

    pub(crate) fn button_style(&self, dark: bool, focused: bool) -> Style {
        if focused {
            self.selection_style(dark)
        } else {
            self.base_style(dark).fg(self.ansi_color(Ansi16::Green))
        }
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg followed by the 16 ANSI slots), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (idx, part) in parts.iter().skip(2).enumerate() {
            ansi[idx] = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }

    fn ansi_color(&self, idx: usize) -> Color {
        self.ansi[idx]
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let (name, value) = match env::var("GALATEA_TUI_PALETTE") {
        Ok(value) => ("GALATEA_TUI_PALETTE", value),
        Err(env::VarError::NotPresent) => match env::var("GALATEA_PALETTE") {
            Ok(value) => ("GALATEA_PALETTE", value),
            Err(env::VarError::NotPresent) => return Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: "GALATEA_PALETTE".to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        },
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: "GALATEA_TUI_PALETTE".to_string(),
                value: "<non-unicode>".to_string(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: name.to_string(),
        value: format!("{trimmed} ({error})"),
    })?;

    Ok(Some(parsed))
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ansi16 {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl Ansi16 {
    const fn idx(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Cyan => 6,
        }
    }
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Cyan => Color::Cyan,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::{TuiPalette, TuiTheme};
    use ratatui::style::{Color, Style};

    #[test]
    fn palette_override_parses_valid_csv() {
        let palette = TuiPalette::parse_csv(
            "#111111,#222222,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,#fefefe",
        )
        .expect("palette");

        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi_color(1), Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi_color(15), Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[test]
    fn palette_override_rejects_invalid_csv() {
        let err = TuiPalette::parse_csv("nope").unwrap_err();
        assert!(err.contains("expected"));
    }

    #[test]
    fn dark_and_light_base_styles_differ_without_a_palette() {
        let theme = TuiTheme::default();
        assert_eq!(theme.base_style(true), Style::default());
        assert_eq!(
            theme.base_style(false),
            Style::default().fg(Color::Black).bg(Color::White)
        );
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Focus order, layout, and footer helpers used by TUI rendering.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Author,
    Date,
    Category,
    Tags,
    Body,
    Save,
}

impl FormField {
    fn cycle(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Tags,
            Self::Tags => Self::Body,
            Self::Body => Self::Save,
            Self::Save => Self::Title,
        }
    }

    fn cycle_back(self) -> Self {
        match self {
            Self::Title => Self::Save,
            Self::Author => Self::Title,
            Self::Date => Self::Author,
            Self::Category => Self::Date,
            Self::Tags => Self::Category,
            Self::Body => Self::Tags,
            Self::Save => Self::Body,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Tags => "Tags",
            Self::Body => "Article",
            Self::Save => "Save",
        }
    }
}

fn field_title(label: &str) -> String {
    format!("─ {label} ")
}

/// Five single-line fields, the body editor, and the save button.
fn form_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area)
}

fn split_off_sidebar(area: Rect) -> (Rect, Rect) {
    let side = (area.width / 3).clamp(24, 48).min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(side)])
        .split(area);
    (chunks[0], chunks[1])
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn footer_help_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (key, label) in [
        ("^S", "Zen"),
        ("^Z", "Cheat Sheet"),
        ("^T", "Theme"),
        ("^W", "Save"),
        ("^Q", "Quit"),
    ] {
        spans.push(Span::styled(key, Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    ));
    Line::from(spans)
}

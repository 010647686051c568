// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::state::StatusMessage;

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn with_controls(lead: String, controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw(lead)];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn page(active_label: &str, progress: u16) -> Self {
        Self::with_controls(
            format!(" {active_label} · {progress}%  |  "),
            &[
                ("[↑↓]", " Scroll"),
                ("[Tab]", " Section"),
                ("[1-6]", " Jump"),
                ("[O]", "pen"),
                ("[R]", "esume"),
                ("[H]", "elp"),
                ("[Q]", "uit"),
            ],
        )
    }

    pub fn detail(kind: &str) -> Self {
        Self::with_controls(
            format!(" {kind}  |  "),
            &[
                ("[↑↓]", " Scroll"),
                ("[1-2]", " More"),
                ("[Esc]", " Back"),
                ("[H]", "elp"),
                ("[Q]", "uit"),
            ],
        )
    }

    pub fn status(message: &StatusMessage) -> Self {
        let color = if message.is_error {
            Color::Red
        } else {
            Color::Green
        };
        Self {
            content: Line::from(Span::styled(
                format!(" {}", message.text),
                Style::default().fg(color),
            )),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

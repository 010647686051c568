// Page document: the single scrolling page, laid out into terminal rows

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::content::{ContentStore, ImageUrls};
use crate::tracker::AnchorSource;
use crate::ui::text::wrap;

mod sections;

/// The page rendered into rows for one terminal width.
///
/// Row 0 is the top of the document. The first `header_height` rows are
/// blank so the fixed header never hides content at offset 0, and the tail
/// is padded so every section can be scrolled to the top of the body.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    anchors: Vec<(String, u32)>,
    width: u16,
}

impl PageLayout {
    pub fn build(
        content: &ContentStore,
        images: &ImageUrls,
        width: u16,
        header_height: u32,
        viewport_height: u32,
    ) -> Self {
        let mut builder = PageBuilder::new(width, header_height);
        sections::write_page(&mut builder, content, images);
        builder.finish(header_height, viewport_height)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total document height in rows
    pub fn height(&self) -> u32 {
        self.lines.len() as u32
    }

    pub fn anchors(&self) -> &[(String, u32)] {
        &self.anchors
    }

    /// Rows `offset..offset + rows`, clipped to the document
    pub fn visible(&self, offset: u32, rows: u32) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(offset as usize)
            .take(rows as usize)
            .cloned()
            .collect()
    }
}

impl AnchorSource for PageLayout {
    fn anchor_offset(&self, id: &str) -> Option<u32> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, row)| *row)
    }
}

/// Accumulates document rows and records where each section starts.
pub(crate) struct PageBuilder {
    width: u16,
    lines: Vec<Line<'static>>,
    anchors: Vec<(String, u32)>,
}

impl PageBuilder {
    fn new(width: u16, top_padding: u32) -> Self {
        let mut builder = Self {
            width,
            lines: Vec::new(),
            anchors: Vec::new(),
        };
        for _ in 0..top_padding {
            builder.blank();
        }
        builder
    }

    fn text_width(&self) -> usize {
        // one column of margin on each side
        usize::from(self.width.saturating_sub(2)).max(1)
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Start a section: its heading row is the anchor.
    pub(crate) fn section(&mut self, id: &str, label: &str) {
        self.anchors.push((id.to_string(), self.lines.len() as u32));
        self.lines.push(Line::from(Span::styled(
            format!(" {}", label.to_uppercase()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        let rule_len = self.text_width().min(label.chars().count() + 4);
        self.lines.push(Line::from(Span::styled(
            format!(" {}", "─".repeat(rule_len)),
            Style::default().fg(Color::DarkGray),
        )));
        self.blank();
    }

    pub(crate) fn text(&mut self, text: &str, style: Style) {
        self.prefixed("", "", text, style);
    }

    /// Wrap `text` after `first_prefix`, continuing rows under `rest_prefix`
    pub(crate) fn prefixed(&mut self, first_prefix: &str, rest_prefix: &str, text: &str, style: Style) {
        let prefix_len = first_prefix.chars().count().max(rest_prefix.chars().count());
        let width = self.text_width().saturating_sub(prefix_len).max(1);
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let prefix = if i == 0 { first_prefix } else { rest_prefix };
            self.lines.push(Line::from(vec![
                Span::raw(format!(" {prefix}")),
                Span::styled(row, style),
            ]));
        }
    }

    pub(crate) fn line(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ")];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn finish(mut self, header_height: u32, viewport_height: u32) -> PageLayout {
        if let Some(last_anchor) = self.anchors.iter().map(|(_, row)| *row).max() {
            let needed = last_anchor.saturating_sub(header_height) + viewport_height;
            while (self.lines.len() as u32) < needed {
                self.blank();
            }
        }
        PageLayout {
            lines: self.lines,
            anchors: self.anchors,
            width: self.width,
        }
    }
}

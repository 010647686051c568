// Post / project detail screen

use std::cell::Cell;
use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::content::{
    ContentError, ContentStore, DocumentMetadata, EntryDetail, EntryKind, EntrySummary, ImageUrls,
    Settings,
};
use crate::host::{SmoothScroll, Viewport};
use crate::tracker::Subscription;
use crate::ui::components::Footer;
use crate::ui::constants::{DETAIL_SCROLLED_AFTER, MORE_ENTRIES};
use crate::ui::text::wrap;

pub const DETAIL_HEADER_HEIGHT: u16 = 3;

pub struct DetailState {
    pub entry: EntryDetail,
    pub metadata: DocumentMetadata,
    pub more: Vec<EntrySummary>,
    pub viewport: Viewport,
    lines: Vec<Line<'static>>,
    width: u16,
    scrolled: Rc<Cell<bool>>,
    _scroll_watch: Subscription,
}

impl std::fmt::Debug for DetailState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailState")
            .field("slug", &self.entry.summary.slug)
            .field("offset", &self.viewport.offset())
            .field("scrolled", &self.scrolled.get())
            .finish()
    }
}

impl DetailState {
    pub fn open(
        content: &ContentStore,
        images: &ImageUrls,
        kind: EntryKind,
        slug: &str,
        smooth: SmoothScroll,
    ) -> Result<Self, ContentError> {
        let entry = content.entry(kind, slug)?;
        let metadata = DocumentMetadata::for_entry(&entry, &content.settings(), images);
        let more = match kind {
            EntryKind::Post => content.more_posts(&entry.summary.id, MORE_ENTRIES),
            EntryKind::Project => content.more_projects(&entry.summary.id, MORE_ENTRIES),
        };

        let viewport = Viewport::new(smooth);
        let scrolled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&scrolled);
        let scroll_watch = viewport.on_scroll(move |event| {
            flag.set(event.offset > DETAIL_SCROLLED_AFTER);
        });

        tracing::info!(kind = kind.label(), slug, "opened entry");

        Ok(Self {
            entry,
            metadata,
            more,
            viewport,
            lines: Vec::new(),
            width: 0,
            scrolled,
            _scroll_watch: scroll_watch,
        })
    }

    pub fn kind(&self) -> EntryKind {
        self.entry.summary.kind
    }

    /// Header switches to its compact style once the body has scrolled
    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Re-wrap the body for `width` and size the viewport to `body_height`.
    pub fn layout(&mut self, width: u16, body_height: u32) {
        if width != self.width || self.lines.is_empty() {
            self.lines = build_lines(&self.entry, &self.metadata, &self.more, width);
            self.width = width;
        }
        if body_height != self.viewport.height() || self.lines.len() as u32 != self.viewport.content_height() {
            self.viewport.resize(body_height, self.lines.len() as u32);
        }
    }
}

fn build_lines(
    entry: &EntryDetail,
    metadata: &DocumentMetadata,
    more: &[EntrySummary],
    width: u16,
) -> Vec<Line<'static>> {
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let mut lines = Vec::new();
    let push_wrapped = |lines: &mut Vec<Line<'static>>, prefix: &str, text: &str, style: Style| {
        let indent = " ".repeat(prefix.chars().count());
        for (i, row) in wrap(text, text_width.saturating_sub(indent.len()).max(1))
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 { prefix.to_string() } else { indent.clone() };
            lines.push(Line::from(vec![
                Span::raw(format!("  {lead}")),
                Span::styled(row, style),
            ]));
        }
    };

    lines.push(Line::default());
    push_wrapped(
        &mut lines,
        "",
        &entry.summary.title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let mut byline: Vec<String> = Vec::new();
    if !metadata.authors.is_empty() {
        byline.push(metadata.authors.join(", "));
    }
    let date = entry.summary.display_date();
    if !date.is_empty() {
        byline.push(date);
    }
    if !byline.is_empty() {
        push_wrapped(&mut lines, "", &byline.join(" · "), Style::default().fg(Color::DarkGray));
    }
    if let Some(description) = &metadata.description {
        lines.push(Line::default());
        push_wrapped(
            &mut lines,
            "",
            description,
            Style::default().add_modifier(Modifier::ITALIC),
        );
    }
    if let Some(image) = &metadata.og_image {
        push_wrapped(&mut lines, "▣ ", image, Style::default().fg(Color::Blue));
    }
    lines.push(Line::default());

    let text_blocks: Vec<_> = entry.content.iter().filter(|b| b.is_text()).collect();
    if text_blocks.is_empty() {
        push_wrapped(&mut lines, "", "Nothing here yet.", Style::default().fg(Color::DarkGray));
    }
    for block in text_blocks {
        let text = block.plain_text();
        if let Some(level) = block.heading_level() {
            lines.push(Line::default());
            let marker = "#".repeat(usize::from(level));
            push_wrapped(
                &mut lines,
                &format!("{marker} "),
                &text,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        } else if block.list_item.is_some() {
            push_wrapped(&mut lines, "• ", &text, Style::default());
        } else {
            push_wrapped(&mut lines, "", &text, Style::default());
            lines.push(Line::default());
        }
    }

    if !more.is_empty() {
        lines.push(Line::default());
        let heading = match entry.summary.kind {
            EntryKind::Post => "MORE POSTS",
            EntryKind::Project => "MORE PROJECTS",
        };
        lines.push(Line::from(Span::styled(
            format!("  {heading}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (i, summary) in more.iter().enumerate() {
            let date = summary.display_date();
            let label = if date.is_empty() {
                summary.title.clone()
            } else {
                format!("{} ({date})", summary.title)
            };
            push_wrapped(&mut lines, &format!("[{}] ", i + 1), &label, Style::default());
        }
    }
    lines.push(Line::default());
    lines
}

pub struct DetailScreen;

impl DetailScreen {
    pub fn render(frame: &mut Frame, state: &mut DetailState, settings: &Settings) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DETAIL_HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        state.layout(chunks[1].width, u32::from(chunks[1].height));

        Self::render_header(frame, chunks[0], state, settings);

        let visible: Vec<Line> = state
            .lines()
            .iter()
            .skip(state.viewport.offset() as usize)
            .take(chunks[1].height as usize)
            .cloned()
            .collect();
        frame.render_widget(Paragraph::new(visible), chunks[1]);

        Footer::detail(state.kind().label()).render(chunks[2], frame.buffer_mut());
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &DetailState, settings: &Settings) {
        if state.is_scrolled() {
            // compact: title only, inverted
            let line = Line::from(vec![
                Span::raw(" ← "),
                Span::styled(
                    state.entry.summary.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(vec![Line::default(), line])
                    .style(Style::default().fg(Color::Black).bg(Color::Cyan)),
                area,
            );
        } else {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", state.metadata.window_title(settings)));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" ← Esc ", Style::default().fg(Color::Yellow)),
                    Span::raw(state.entry.summary.path()),
                ])),
                inner,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(slug: &str) -> DetailState {
        let store = ContentStore::sample().unwrap();
        DetailState::open(
            &store,
            &ImageUrls::new("pid", "production"),
            EntryKind::Post,
            slug,
            SmoothScroll::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let store = ContentStore::sample().unwrap();
        let err = DetailState::open(
            &store,
            &ImageUrls::new("pid", "production"),
            EntryKind::Project,
            "nope",
            SmoothScroll::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[test]
    fn test_more_entries_exclude_current() {
        let state = open("tiny-wal");
        assert_eq!(state.more.len(), 2);
        assert!(state.more.iter().all(|m| m.slug != "tiny-wal"));
    }

    #[test]
    fn test_header_compacts_after_scrolling() {
        let mut state = open("incremental-parsing");
        state.layout(40, 5);
        assert!(!state.is_scrolled());

        state.viewport.scroll_by(3);
        assert!(state.is_scrolled());

        state.viewport.scroll_to(0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_layout_rewraps_on_width_change() {
        let mut state = open("incremental-parsing");
        state.layout(100, 10);
        let wide = state.lines().len();
        state.layout(30, 10);
        assert!(state.lines().len() > wide);
        assert_eq!(state.viewport.content_height(), state.lines().len() as u32);
    }
}

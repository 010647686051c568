// Help modal implementation

use super::navigation::{HelpModalState, HelpSection};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct HelpModal;

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )])
}

fn key(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
        Span::raw(format!("- {description}")),
    ])
}

impl HelpModal {
    pub fn render(frame: &mut Frame, state: &mut HelpModalState) {
        let area = frame.area();

        // 80% width, 90% height, clamped to the terminal
        let modal_width = ((area.width * 80) / 100).max(60).min(area.width);
        let modal_height = ((area.height * 90) / 100).max(20).min(area.height);

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("Help - {}", state.current_section.title()))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section tabs
                Constraint::Min(1),    // Content area
                Constraint::Length(1), // Footer/navigation hints
            ])
            .split(inner);

        Self::render_tabs(frame, chunks[0], state.current_section);

        let content = Self::get_section_content(state);
        let content_height = content.len() as u16;
        let viewport_height = chunks[1].height;

        state.max_scroll = content_height.saturating_sub(viewport_height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll);

        let visible_content: Vec<Line> = content
            .into_iter()
            .skip(state.scroll_offset as usize)
            .take(viewport_height as usize)
            .collect();

        let paragraph = Paragraph::new(visible_content)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, chunks[1]);

        Self::render_footer(frame, chunks[2], state);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, current: HelpSection) {
        let mut spans = Vec::new();

        for (i, section) in HelpSection::all_sections().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            let style = if *section == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            spans.push(Span::styled(section.title().to_string(), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Left), area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, state: &HelpModalState) {
        let mut hints = vec![
            Span::styled("[Tab/Arrows]", Style::default().fg(Color::Yellow)),
            Span::raw(" Switch  "),
            Span::styled("[↑↓/jk]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll  "),
            Span::styled("[Esc/H/?]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ];

        if state.scroll_offset > 0 {
            hints.insert(0, Span::styled("↑ ", Style::default().fg(Color::Cyan)));
        }
        if state.scroll_offset < state.max_scroll {
            hints.push(Span::styled(" ↓", Style::default().fg(Color::Cyan)));
        }

        let footer = Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        frame.render_widget(footer, area);
    }

    pub(crate) fn get_section_content(state: &HelpModalState) -> Vec<Line<'static>> {
        match state.current_section {
            HelpSection::About => Self::about_content(state),
            HelpSection::Navigation => Self::navigation_content(state),
            HelpSection::KeyboardShortcuts => Self::keyboard_shortcuts_content(),
        }
    }

    fn about_content(state: &HelpModalState) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                format!("folio - {}", state.site_title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(format!("Version: {}", state.app_version)),
            Line::from(""),
            Line::from("A portfolio and blog laid out as one scrolling page."),
            Line::from("The header always shows which section you are reading;"),
            Line::from("posts and projects open on their own detail page."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Config: ", Style::default().fg(Color::Yellow)),
                Span::raw("run 'folio init-config' to locate or create config.toml"),
            ]),
        ]
    }

    fn navigation_content(state: &HelpModalState) -> Vec<Line<'static>> {
        let smooth = if state.smooth_scroll { "on" } else { "off" };
        vec![
            heading("ACTIVE SECTION"),
            Line::from("  The highlighted tab is the last section whose top edge"),
            Line::from("  has scrolled to within the threshold of the viewport top."),
            Line::from("  Above the first section, the first tab stays active."),
            Line::from(""),
            Line::from(format!("  Threshold:      {} rows", state.offset_threshold)),
            Line::from(format!("  Header height:  {} rows", state.header_height)),
            Line::from(""),
            heading("JUMPING TO A SECTION"),
            Line::from("  Selecting a tab scrolls so the section starts just below"),
            Line::from("  the header. The tab is highlighted immediately and stays"),
            Line::from("  put while the page animates past other sections."),
            Line::from("  Scrolling by hand during the animation cancels it."),
            Line::from(""),
            Line::from(format!("  Smooth scrolling: {smooth}")),
        ]
    }

    fn keyboard_shortcuts_content() -> Vec<Line<'static>> {
        vec![
            heading("GLOBAL KEYS"),
            key("H / ?", "Toggle this help screen"),
            key("Q / Ctrl+C", "Quit application"),
            key("Esc", "Back / Close dialog"),
            Line::from(""),
            heading("PAGE"),
            key("↑/↓  j/k", "Scroll one row"),
            key("PgUp/PgDn", "Scroll one screen"),
            key("Home/End", "Top / bottom of the page"),
            key("Tab/S-Tab", "Next / previous section"),
            key("1-6", "Jump to section"),
            key("O", "Open a post or project"),
            key("R", "Show resume"),
            key("Mouse", "Wheel scrolls, click a tab to jump"),
            Line::from(""),
            heading("POST / PROJECT"),
            key("↑/↓  j/k", "Scroll"),
            key("PgUp/PgDn", "Scroll one screen"),
            key("1-2", "Open a \"more\" entry"),
            key("Esc/Bksp", "Back to the page"),
        ]
    }
}

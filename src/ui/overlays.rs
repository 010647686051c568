// Modal overlays drawn on top of the page: entry picker and resume

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::content::{About, Status};
use crate::ui::components::centered;
use crate::ui::state::PickerState;

pub struct PickerOverlay;

impl PickerOverlay {
    pub fn render(frame: &mut Frame, state: &mut PickerState) {
        let height = (state.entries.len() as u16).saturating_add(4).max(6);
        let modal_area = centered(frame.area(), 72, height);

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Open ")
            .title_bottom(Line::from(" [Enter] Open  [Esc] Close ").centered())
            .style(Style::default().bg(Color::Black));

        if state.entries.is_empty() {
            let inner = block.inner(modal_area);
            frame.render_widget(block, modal_area);
            frame.render_widget(
                Paragraph::new("No posts or projects yet.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = state
            .entries
            .iter()
            .map(|entry| {
                let mut spans = vec![
                    Span::styled(
                        format!("{:<8}", entry.kind.label()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(entry.title.clone()),
                ];
                if entry.status == Status::Draft {
                    spans.push(Span::styled(" [draft]", Style::default().fg(Color::Magenta)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, modal_area, &mut state.list_state);
    }
}

pub struct ResumeOverlay;

impl ResumeOverlay {
    pub fn render(frame: &mut Frame, about: &About) {
        let modal_area = centered(frame.area(), 64, 9);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Resume ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let name = about.name.clone().unwrap_or_default();
        let link = about
            .resume_url
            .clone()
            .unwrap_or_else(|| "No resume available.".to_string());

        let lines = vec![
            Line::from(Span::styled(
                name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(link, Style::default().fg(Color::Blue))),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
                Span::raw(" Close"),
            ]),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
    }
}

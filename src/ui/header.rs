// Fixed navigation header: site title plus one tab per section

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tracker::SectionSpec;

/// Screen rectangle of each tab, in section order
pub fn tab_areas(area: Rect, sections: &[SectionSpec]) -> Vec<Rect> {
    // bordered headers put the tabs on the middle row, inside the border
    let bordered = area.height >= 3;
    let row = if bordered { area.y + 1 } else { area.y };
    let right = area.x + area.width.saturating_sub(u16::from(bordered));
    let mut x = area.x + 1 + u16::from(bordered);
    let mut rects = Vec::with_capacity(sections.len());

    for (i, section) in sections.iter().enumerate() {
        let width = tab_label(i, section).chars().count() as u16;
        let clipped = width.min(right.saturating_sub(x));
        rects.push(Rect::new(x, row, clipped, 1));
        x = x.saturating_add(width + 1).min(right);
    }
    rects
}

/// Index of the tab under the terminal cell (`column`, `row`)
pub fn tab_at(area: Rect, sections: &[SectionSpec], column: u16, row: u16) -> Option<usize> {
    tab_areas(area, sections).iter().position(|rect| {
        rect.width > 0
            && row == rect.y
            && column >= rect.x
            && column < rect.x + rect.width
    })
}

fn tab_label(index: usize, section: &SectionSpec) -> String {
    format!(" {} {} ", index + 1, section.label)
}

pub struct NavHeader;

impl NavHeader {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, sections: &[SectionSpec], active: &str) {
        let tabs: Vec<Span> = sections
            .iter()
            .enumerate()
            .flat_map(|(i, section)| {
                let style = if section.id == active {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                [Span::styled(tab_label(i, section), style), Span::raw(" ")]
            })
            .collect();

        let mut line = vec![Span::raw(" ")];
        line.extend(tabs);

        if area.height >= 3 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(Color::Black));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new(Line::from(line)), inner);
        } else {
            frame.render_widget(
                Paragraph::new(Line::from(line)).style(Style::default().bg(Color::Black)),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::constants::page_section_specs;

    #[test]
    fn test_tabs_laid_out_left_to_right() {
        let area = Rect::new(0, 0, 120, 3);
        let rects = tab_areas(area, &page_section_specs());
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], Rect::new(2, 1, 9, 1)); // " 1 About "
        assert!(rects.windows(2).all(|w| w[0].x + w[0].width < w[1].x));
    }

    #[test]
    fn test_hit_testing() {
        let area = Rect::new(0, 0, 120, 3);
        let specs = page_section_specs();
        assert_eq!(tab_at(area, &specs, 3, 1), Some(0));
        assert_eq!(tab_at(area, &specs, 12, 1), Some(1));
        assert_eq!(tab_at(area, &specs, 3, 0), None);
        assert_eq!(tab_at(area, &specs, 119, 1), None);
    }

    #[test]
    fn test_narrow_header_clips_tabs() {
        let area = Rect::new(0, 0, 20, 3);
        let rects = tab_areas(area, &page_section_specs());
        assert!(rects.iter().all(|r| r.x + r.width <= 19));
        assert_eq!(tab_at(area, &page_section_specs(), 18, 1), Some(1));
        assert_eq!(tab_at(area, &page_section_specs(), 19, 1), None);
    }
}

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use super::PageBuilder;
use crate::content::{ContentStore, EntrySummary, ImageUrls, Settings, Status, format_date};
use crate::ui::constants::PAGE_SECTIONS;

fn label_for(id: &str) -> &'static str {
    PAGE_SECTIONS
        .iter()
        .find(|(section, _)| *section == id)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn strong() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn write_page(page: &mut PageBuilder, content: &ContentStore, images: &ImageUrls) {
    let settings = content.settings();

    write_about(page, &settings);
    write_experience(page, &settings);
    write_entries(page, "projects", &content.all_projects(), "No projects yet.");
    write_gallery(page, content, images);
    write_certificates(page, content, images);
    write_entries(page, "blog", &content.all_posts(), "No posts yet.");
    write_footer(page, &settings);
}

fn write_about(page: &mut PageBuilder, settings: &Settings) {
    let about = &settings.about;
    page.section("about", label_for("about"));

    let name = about.name.as_deref().unwrap_or(&settings.title);
    page.text(name, strong().fg(Color::Yellow));
    if let Some(headline) = &about.headline {
        page.text(headline, Style::default().fg(Color::Cyan));
    }
    page.blank();

    if about.bio.is_empty() {
        page.text("Nothing here yet.", dim());
    }
    for paragraph in &about.bio {
        page.text(paragraph, Style::default());
        page.blank();
    }

    if !about.skills.is_empty() {
        page.prefixed("Skills: ", "        ", &about.skills.join(" · "), Style::default().fg(Color::Green));
    }
    if about.resume_url.is_some() {
        page.line(vec![
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::raw(" View resume"),
        ]);
    }
    page.blank();
}

fn write_experience(page: &mut PageBuilder, settings: &Settings) {
    page.section("experience", label_for("experience"));

    if settings.experience.is_empty() {
        page.text("No experience listed yet.", dim());
        page.blank();
        return;
    }

    for entry in &settings.experience {
        page.line(vec![
            Span::styled(entry.role.clone(), strong()),
            Span::raw(" · "),
            Span::styled(entry.company.clone(), Style::default().fg(Color::Cyan)),
        ]);
        if let Some(duration) = &entry.duration {
            page.text(duration, dim());
        }
        if let Some(description) = &entry.description {
            page.prefixed("  ", "  ", description, Style::default());
        }
        page.blank();
    }
}

fn write_entries(page: &mut PageBuilder, id: &str, entries: &[EntrySummary], empty: &str) {
    page.section(id, label_for(id));

    if entries.is_empty() {
        page.text(empty, dim());
        page.blank();
        return;
    }

    for entry in entries {
        let mut title = vec![Span::styled(entry.title.clone(), strong())];
        if entry.status == Status::Draft {
            title.push(Span::styled(" [draft]", Style::default().fg(Color::Magenta)));
        }
        page.line(title);

        let mut meta = entry.display_date();
        if let Some(name) = entry.author.as_ref().and_then(|a| a.full_name()) {
            if !meta.is_empty() {
                meta.push_str(" · ");
            }
            meta.push_str(&name);
        }
        if !meta.is_empty() {
            page.text(&meta, dim());
        }
        if let Some(excerpt) = &entry.excerpt {
            page.prefixed("  ", "  ", excerpt, Style::default());
        }
        page.text(&entry.path(), Style::default().fg(Color::Blue));
        page.blank();
    }
}

fn write_gallery(page: &mut PageBuilder, content: &ContentStore, images: &ImageUrls) {
    page.section("gallery", label_for("gallery"));

    let gallery = content.gallery();
    if gallery.is_empty() {
        page.text("No images yet.", dim());
        page.blank();
        return;
    }

    for item in gallery {
        page.prefixed("▣ ", "  ", &item.description, Style::default());
        let credit = match (&item.caption, &item.credit) {
            (Some(caption), Some(credit)) => Some(format!("{caption} (photo: {credit})")),
            (Some(caption), None) => Some(caption.clone()),
            (None, Some(credit)) => Some(format!("photo: {credit}")),
            (None, None) => None,
        };
        if let Some(credit) = credit {
            page.prefixed("  ", "  ", &credit, dim());
        }
        page.prefixed("  ", "  ", &images.url(Some(&item.image)), Style::default().fg(Color::Blue));
        page.blank();
    }
}

fn write_certificates(page: &mut PageBuilder, content: &ContentStore, images: &ImageUrls) {
    page.section("certificates", label_for("certificates"));

    let certificates = content.certificates();
    if certificates.is_empty() {
        page.text("No certificates yet.", dim());
        page.blank();
        return;
    }

    for certificate in certificates {
        page.prefixed("✓ ", "  ", &certificate.description, strong());
        let issued: Vec<String> = [
            certificate.issuer.clone(),
            certificate.date.as_deref().map(format_date),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !issued.is_empty() {
            page.prefixed("  ", "  ", &issued.join(" · "), dim());
        }
        page.prefixed("  ", "  ", &images.url(Some(&certificate.image)), Style::default().fg(Color::Blue));
        page.blank();
    }
}

fn write_footer(page: &mut PageBuilder, settings: &Settings) {
    page.blank();
    let mut spans = vec![Span::styled(format!("© {}", settings.title), dim())];
    for link in &settings.links {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{}: {}", link.label, link.url),
            Style::default().fg(Color::Blue),
        ));
    }
    page.line(spans);
}

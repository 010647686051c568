use crate::cli::{Cli, Commands};
use folio::config::Config;
use folio::content::{ContentStore, DocumentMetadata, EntryDetail, EntrySummary, SitemapEntry};
use folio::tracker::{SectionList, SectionTracker, resolve_active_section};
use folio::ui::{self, PageLayout, constants::page_section_specs};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;

pub fn run(cli: Cli, config: Config) {
    let content = load_content(cli.content.as_ref(), &config);

    if let Some(command) = cli.command {
        match command {
            Commands::Sections { width, height } => handle_sections(&content, &config, width, height),
            Commands::Resolve {
                offset,
                width,
                height,
            } => handle_resolve(&content, &config, offset, width, height),
            Commands::Goto {
                section,
                width,
                height,
            } => handle_goto(&content, &config, &section, width, height),
            Commands::Posts => print!("{}", entries_report(&content.all_posts())),
            Commands::Projects => print!("{}", entries_report(&content.all_projects())),
            Commands::Show { slug } => handle_show(&content, &config, &slug),
            Commands::Sitemap => print!("{}", sitemap_report(&content.sitemap())),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    // Launch TUI (default behavior)
    if let Err(e) = ui::run_ui(content, &config) {
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }
}

/// The CLI path wins over the configured one; without either the bundled
/// sample is shown.
fn load_content(cli_path: Option<&PathBuf>, config: &Config) -> ContentStore {
    let path = cli_path.or(config.content.path.as_ref());
    let loaded = match path {
        Some(path) => ContentStore::load(path),
        None => ContentStore::sample(),
    };

    match loaded {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::new(e));
            process::exit(1);
        }
    }
}

/// Lay the page out headlessly the way the TUI would for a terminal of
/// `width` x `height` (one row goes to the footer).
fn headless_layout(
    content: &ContentStore,
    config: &Config,
    width: u16,
    height: u16,
) -> (PageLayout, SectionTracker) {
    let body_height = u32::from(height.saturating_sub(1).max(1));
    let layout = PageLayout::build(
        content,
        &config.image_urls(),
        width.max(1),
        config.navigation.header_height,
        body_height,
    );

    match SectionTracker::new(page_section_specs(), config.tracker_options()) {
        Ok(tracker) => (layout, tracker),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_sections(content: &ContentStore, config: &Config, width: u16, height: u16) {
    let (layout, tracker) = headless_layout(content, config, width, height);
    let sections = tracker.measure(&layout);
    print!(
        "{}",
        sections_report(&sections, config.navigation.effective_threshold(), layout.height())
    );
}

fn handle_resolve(content: &ContentStore, config: &Config, offset: u32, width: u16, height: u16) {
    let (layout, tracker) = headless_layout(content, config, width, height);
    let sections = tracker.measure(&layout);
    let active = resolve_active_section(offset, &sections, config.navigation.effective_threshold());
    println!("{}", active);
}

fn handle_goto(content: &ContentStore, config: &Config, section: &str, width: u16, height: u16) {
    let (layout, tracker) = headless_layout(content, config, width, height);
    match tracker.navigate(section, &layout) {
        Ok(command) => {
            println!("target offset: {}", command.target_offset);
            println!("active: {}", tracker.active_section());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn handle_show(content: &ContentStore, config: &Config, slug: &str) {
    let Some(entry) = content.find(slug) else {
        eprintln!("Error: no post or project with slug '{}'", slug);
        process::exit(1);
    };
    let settings = content.settings();
    let metadata = DocumentMetadata::for_entry(&entry, &settings, &config.image_urls());
    print!("{}", show_report(&entry, &metadata));
}

fn handle_init_config() {
    match Config::load() {
        Ok(cfg) => {
            match Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}

fn sections_report(sections: &SectionList, threshold: u32, document_height: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {:<14} {:>6}", "ID", "LABEL", "ANCHOR");
    for section in sections.iter() {
        let _ = writeln!(
            out,
            "{:<14} {:<14} {:>6}",
            section.id, section.label, section.anchor_offset
        );
    }
    let _ = writeln!(out, "threshold: {}  document rows: {}", threshold, document_height);
    out
}

fn entries_report(entries: &[EntrySummary]) -> String {
    if entries.is_empty() {
        return "(none)\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let date = entry.display_date();
        let _ = writeln!(
            out,
            "{:<20} {:<9} {:<28} {}",
            if date.is_empty() { "-" } else { date.as_str() },
            entry.status.label(),
            entry.slug,
            entry.title
        );
    }
    out
}

fn show_report(entry: &EntryDetail, metadata: &DocumentMetadata) -> String {
    let summary = &entry.summary;
    let mut out = String::new();
    let _ = writeln!(out, "title:       {}", metadata.title);
    let _ = writeln!(out, "path:        {}", summary.path());
    let _ = writeln!(out, "status:      {}", summary.status.label());
    if let Some(date) = &summary.date {
        let _ = writeln!(out, "date:        {}", date);
    }
    if !metadata.authors.is_empty() {
        let _ = writeln!(out, "authors:     {}", metadata.authors.join(", "));
    }
    if let Some(description) = &metadata.description {
        let _ = writeln!(out, "description: {}", description);
    }
    if let Some(image) = &metadata.og_image {
        let _ = writeln!(out, "og image:    {}", image);
    }
    let _ = writeln!(out, "blocks:      {}", entry.content.len());
    out
}

fn sitemap_report(entries: &[SitemapEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<8} {:<28} {}",
            entry.kind,
            entry.slug,
            entry.updated_at.as_deref().unwrap_or("-")
        );
    }
    out
}

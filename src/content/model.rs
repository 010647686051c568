// Content model: documents as exported from the CMS dataset, and the views
// the queries derive from them

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One document of the content export, discriminated by `_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type", rename_all = "lowercase")]
pub enum Document {
    Settings(Settings),
    Post(EntryDocument),
    Project(EntryDocument),
    Person(Person),
    Page(Page),
    Gallery(GalleryImage),
    #[serde(rename = "certificates", alias = "certificate")]
    Certificate(Certificate),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub asset: Option<Reference>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A span of portable text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// A portable-text block. Only `_type == "block"` carries text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
}

impl Block {
    pub fn is_text(&self) -> bool {
        self.kind == "block"
    }

    pub fn plain_text(&self) -> String {
        self.children.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.style.as_deref() {
            Some("h1") => Some(1),
            Some("h2") => Some(2),
            Some("h3") => Some(3),
            Some("h4") => Some(4),
            _ => None,
        }
    }
}

/// Raw post or project document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub cover_image: Option<Image>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: Option<Reference>,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl EntryDocument {
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_ref().and_then(|s| s.current.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub picture: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub subheading: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryImage {
    pub description: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub credit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Certificate {
    pub description: String,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Site-wide singleton: title, the About block, the experience timeline
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: None,
            about: About::default(),
            experience: Vec::new(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Post,
    Project,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Project => "project",
        }
    }

    /// Route prefix of the detail pages for this kind
    pub fn route(self) -> &'static str {
        match self {
            Self::Post => "/posts",
            Self::Project => "/projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Published,
}

impl Status {
    pub fn of_id(id: &str) -> Self {
        if id.starts_with("drafts.") {
            Self::Draft
        } else {
            Self::Published
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture: Option<Image>,
}

impl Author {
    /// "First Last" when both names are known
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }
}

/// A post or project as listed on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub id: String,
    pub kind: EntryKind,
    pub status: Status,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<Image>,
    /// Publication date, falling back to the last update
    pub date: Option<String>,
    pub author: Option<Author>,
}

impl EntrySummary {
    pub fn path(&self) -> String {
        format!("{}/{}", self.kind.route(), self.slug)
    }

    pub fn display_date(&self) -> String {
        self.date.as_deref().map(format_date).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub summary: EntrySummary,
    pub content: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub slug: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<String>,
}

/// Parse an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Render a date as e.g. "March 4, 2024"; unparseable input is returned as-is.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

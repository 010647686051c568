// Document metadata for detail pages (title, description, authors, share image)

use serde::Serialize;

use super::image::ImageUrls;
use super::model::{EntryDetail, Settings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: Option<String>,
    pub authors: Vec<String>,
    pub og_image: Option<String>,
}

impl DocumentMetadata {
    pub fn for_entry(entry: &EntryDetail, settings: &Settings, images: &ImageUrls) -> Self {
        let summary = &entry.summary;
        let authors = summary
            .author
            .as_ref()
            .and_then(|a| a.full_name())
            .into_iter()
            .collect();
        let og_image = summary
            .cover_image
            .as_ref()
            .filter(|img| img.asset.is_some())
            .map(|img| images.url(Some(img)));

        Self {
            title: summary.title.clone(),
            description: summary
                .excerpt
                .clone()
                .or_else(|| settings.description.clone()),
            authors,
            og_image,
        }
    }

    /// Terminal window title: "Entry | Site"
    pub fn window_title(&self, settings: &Settings) -> String {
        format!("{} | {}", self.title, settings.title)
    }
}

// Content store: loads a dataset export and answers the named page queries

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use super::error::ContentError;
use super::model::{
    Author, Certificate, Document, EntryDetail, EntryDocument, EntryKind, EntrySummary, GalleryImage,
    Page, Person, SitemapEntry, Settings, Status, parse_date,
};

/// Maximum number of gallery images the page shows
pub const GALLERY_LIMIT: usize = 20;

const SAMPLE_EXPORT: &str = include_str!("sample.json");

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    settings: Option<Settings>,
    posts: Vec<EntryDocument>,
    projects: Vec<EntryDocument>,
    people: HashMap<String, Person>,
    pages: Vec<Page>,
    gallery: Vec<GalleryImage>,
    certificates: Vec<Certificate>,
}

impl ContentStore {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut store = Self::default();
        for document in documents {
            match document {
                // Later settings documents win, like a singleton being re-published
                Document::Settings(settings) => store.settings = Some(settings),
                Document::Post(post) => store.posts.push(post),
                Document::Project(project) => store.projects.push(project),
                Document::Person(person) => {
                    store.people.insert(person.id.clone(), person);
                }
                Document::Page(page) => store.pages.push(page),
                Document::Gallery(image) => store.gallery.push(image),
                Document::Certificate(certificate) => store.certificates.push(certificate),
                Document::Unknown => {}
            }
        }
        store
    }

    /// Parse an export: either a JSON array of documents or an object with a
    /// `documents` array.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(ContentError::Parse)?;
        let documents = match value {
            serde_json::Value::Object(mut map) => map
                .remove("documents")
                .unwrap_or_else(|| serde_json::Value::Array(Vec::new())),
            other => other,
        };
        let documents: Vec<Document> = serde_json::from_value(documents).map_err(ContentError::Parse)?;
        Ok(Self::from_documents(documents))
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            posts = store.posts.len(),
            projects = store.projects.len(),
            "content loaded"
        );
        Ok(store)
    }

    /// The export bundled with the binary, used when no content file is configured
    pub fn sample() -> Result<Self, ContentError> {
        Self::from_json(SAMPLE_EXPORT)
    }

    pub fn settings(&self) -> Settings {
        self.settings.clone().unwrap_or_default()
    }

    pub fn all_posts(&self) -> Vec<EntrySummary> {
        self.summaries(EntryKind::Post)
    }

    pub fn all_projects(&self) -> Vec<EntrySummary> {
        self.summaries(EntryKind::Project)
    }

    /// Newest posts other than the one with id `skip_id`, at most `limit`
    pub fn more_posts(&self, skip_id: &str, limit: usize) -> Vec<EntrySummary> {
        more(self.all_posts(), skip_id, limit)
    }

    pub fn more_projects(&self, skip_id: &str, limit: usize) -> Vec<EntrySummary> {
        more(self.all_projects(), skip_id, limit)
    }

    pub fn post(&self, slug: &str) -> Option<EntryDetail> {
        self.detail(EntryKind::Post, slug)
    }

    pub fn project(&self, slug: &str) -> Option<EntryDetail> {
        self.detail(EntryKind::Project, slug)
    }

    /// Look up a post or project, reporting a missing slug as an error.
    pub fn entry(&self, kind: EntryKind, slug: &str) -> Result<EntryDetail, ContentError> {
        self.detail(kind, slug).ok_or_else(|| ContentError::NotFound {
            kind: kind.label(),
            slug: slug.to_string(),
        })
    }

    /// Find an entry by slug, posts first
    pub fn find(&self, slug: &str) -> Option<EntryDetail> {
        self.post(slug).or_else(|| self.project(slug))
    }

    pub fn post_slugs(&self) -> Vec<String> {
        slugs(&self.posts)
    }

    pub fn project_slugs(&self) -> Vec<String> {
        slugs(&self.projects)
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery[..self.gallery.len().min(GALLERY_LIMIT)]
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Every routable document with a slug, grouped by type.
    pub fn sitemap(&self) -> Vec<SitemapEntry> {
        let mut entries: Vec<SitemapEntry> = Vec::new();
        for (kind, docs) in [("post", &self.posts), ("project", &self.projects)] {
            entries.extend(docs.iter().filter_map(|doc| {
                doc.slug().map(|slug| SitemapEntry {
                    slug: slug.to_string(),
                    kind: kind.to_string(),
                    updated_at: doc.updated_at.clone(),
                })
            }));
        }
        entries.extend(self.pages.iter().filter_map(|page| {
            page.slug.as_ref().and_then(|s| s.current.clone()).map(|slug| SitemapEntry {
                slug,
                kind: "page".to_string(),
                updated_at: page.updated_at.clone(),
            })
        }));
        entries.sort_by(|a, b| a.kind.cmp(&b.kind));
        entries
    }

    fn documents(&self, kind: EntryKind) -> &[EntryDocument] {
        match kind {
            EntryKind::Post => &self.posts,
            EntryKind::Project => &self.projects,
        }
    }

    fn summaries(&self, kind: EntryKind) -> Vec<EntrySummary> {
        let mut docs: Vec<&EntryDocument> = self
            .documents(kind)
            .iter()
            .filter(|doc| doc.slug().is_some())
            .collect();
        docs.sort_by(|a, b| newest_first(a, b));
        docs.into_iter()
            .filter_map(|doc| self.summarize(kind, doc))
            .collect()
    }

    fn detail(&self, kind: EntryKind, slug: &str) -> Option<EntryDetail> {
        let doc = self.documents(kind).iter().find(|doc| doc.slug() == Some(slug))?;
        Some(EntryDetail {
            summary: self.summarize(kind, doc)?,
            content: doc.content.clone(),
        })
    }

    fn summarize(&self, kind: EntryKind, doc: &EntryDocument) -> Option<EntrySummary> {
        let slug = doc.slug()?.to_string();
        let author = doc
            .author
            .as_ref()
            .and_then(|r| self.people.get(&r.reference))
            .map(|person| Author {
                first_name: person.first_name.clone(),
                last_name: person.last_name.clone(),
                picture: person.picture.clone(),
            });

        Some(EntrySummary {
            id: doc.id.clone(),
            kind,
            status: Status::of_id(&doc.id),
            title: doc.title.clone().unwrap_or_else(|| "Untitled".to_string()),
            slug,
            excerpt: doc.excerpt.clone(),
            cover_image: doc.cover_image.clone(),
            date: doc.date.clone().or_else(|| doc.updated_at.clone()),
            author,
        })
    }
}

fn more(entries: Vec<EntrySummary>, skip_id: &str, limit: usize) -> Vec<EntrySummary> {
    entries
        .into_iter()
        .filter(|e| e.id != skip_id)
        .take(limit)
        .collect()
}

fn slugs(docs: &[EntryDocument]) -> Vec<String> {
    docs.iter().filter_map(|d| d.slug().map(str::to_string)).collect()
}

// date desc, then _updatedAt desc; undated entries sort last
fn newest_first(a: &EntryDocument, b: &EntryDocument) -> Ordering {
    let key = |doc: &EntryDocument| {
        (
            doc.date.as_deref().or(doc.updated_at.as_deref()).and_then(parse_date),
            doc.updated_at.as_deref().and_then(parse_date),
        )
    };
    key(b).cmp(&key(a))
}

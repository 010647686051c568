// Integration tests for the content store over a fixture export

use folio::content::{
    ContentError, ContentStore, DocumentMetadata, EntryKind, GALLERY_LIMIT, ImageUrls, Status,
};

use crate::common::helpers::*;

#[test]
fn test_posts_newest_first_without_unrouted() {
    let store = fixture_store();
    let slugs: Vec<String> = store.all_posts().into_iter().map(|p| p.slug).collect();

    // the draft has no date, so its last update orders it
    assert_eq!(slugs, vec!["new-notes", "mid-draft", "old-notes"]);
}

#[test]
fn test_draft_summary_defaults() {
    let store = fixture_store();
    let draft = store.post("mid-draft").unwrap().summary;

    assert_eq!(draft.status, Status::Draft);
    assert_eq!(draft.title, "Untitled");
    assert_eq!(draft.date.as_deref(), Some("2023-06-15T00:00:00Z"));
    assert_eq!(draft.display_date(), "June 15, 2023");
    assert!(draft.author.is_none());
}

#[test]
fn test_author_is_resolved() {
    let store = fixture_store();
    let post = store.post("new-notes").unwrap();
    let author = post.summary.author.unwrap();

    assert_eq!(author.full_name().as_deref(), Some("Sam Okafor"));
}

#[test]
fn test_more_posts_skips_current() {
    let store = fixture_store();
    let more: Vec<String> = store
        .more_posts("post-new", 2)
        .into_iter()
        .map(|p| p.slug)
        .collect();

    assert_eq!(more, vec!["mid-draft", "old-notes"]);
}

#[test]
fn test_projects_and_lookup() {
    let store = fixture_store();
    let slugs: Vec<String> = store.all_projects().into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["project-b", "project-a"]);

    assert!(store.post("project-a").is_none());
    assert_eq!(
        store.find("project-a").map(|e| e.summary.kind),
        Some(EntryKind::Project)
    );
    assert_eq!(store.project("project-b").unwrap().summary.path(), "/projects/project-b");
}

#[test]
fn test_missing_entry_is_an_error() {
    let store = fixture_store();
    let err = store.entry(EntryKind::Post, "nope").unwrap_err();

    assert!(matches!(err, ContentError::NotFound { kind: "post", .. }));
    assert_eq!(err.to_string(), "post not found: nope");
}

#[test]
fn test_sitemap_groups_by_type() {
    let store = fixture_store();
    let kinds: Vec<String> = store.sitemap().into_iter().map(|e| e.kind).collect();

    assert_eq!(kinds, vec!["page", "post", "post", "post", "project", "project"]);
}

#[test]
fn test_static_paths_cover_every_slugged_entry() {
    let store = fixture_store();
    let mut posts = store.post_slugs();
    posts.sort();

    assert_eq!(posts, vec!["mid-draft", "new-notes", "old-notes"]);
    assert_eq!(store.project_slugs(), vec!["project-a", "project-b"]);
}

#[test]
fn test_settings_and_collections() {
    let store = fixture_store();
    let settings = store.settings();

    assert_eq!(settings.title, "Fixture Folio");
    assert_eq!(settings.about.name.as_deref(), Some("Sam Okafor"));
    assert_eq!(settings.experience.len(), 2);
    assert_eq!(store.gallery().len(), 1);
    assert_eq!(store.certificates()[0].issuer.as_deref(), Some("CNCF"));
}

#[test]
fn test_gallery_is_capped() {
    let documents: Vec<String> = (0..GALLERY_LIMIT + 5)
        .map(|i| format!(r#"{{"_type": "gallery", "_id": "g{i}", "description": "image {i}"}}"#))
        .collect();
    let store = ContentStore::from_json(&format!("[{}]", documents.join(","))).unwrap();

    assert_eq!(store.gallery().len(), GALLERY_LIMIT);
    assert_eq!(store.gallery()[0].description, "image 0");
}

#[test]
fn test_metadata_for_post_with_cover() {
    let store = fixture_store();
    let post = store.post("new-notes").unwrap();
    let images = ImageUrls::new("pid", "production");
    let metadata = DocumentMetadata::for_entry(&post, &store.settings(), &images);

    assert_eq!(metadata.title, "New notes");
    assert_eq!(metadata.description.as_deref(), Some("The newest post."));
    assert_eq!(metadata.authors, vec!["Sam Okafor".to_string()]);
    assert_eq!(
        metadata.og_image.as_deref(),
        Some("https://cdn.sanity.io/images/pid/production/abc123-800x600.png")
    );
}

#[test]
fn test_metadata_falls_back_to_site_description() {
    let store = fixture_store();
    let post = store.post("old-notes").unwrap();
    let metadata =
        DocumentMetadata::for_entry(&post, &store.settings(), &ImageUrls::new("pid", "production"));

    assert_eq!(
        metadata.description.as_deref(),
        Some("A portfolio used by the integration tests.")
    );
    assert_eq!(metadata.og_image, None);
}

#[test]
fn test_invalid_export_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ContentStore::load(&path).unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

// Portfolio content: the CMS export, its page queries and presentation helpers

pub mod error;
pub mod image;
pub mod metadata;
pub mod model;
pub mod store;

pub use error::ContentError;
pub use image::{ImageUrls, PLACEHOLDER_IMAGE, image_url};
pub use metadata::DocumentMetadata;
pub use model::{
    About, Author, Block, Certificate, Document, EntryDetail, EntryKind, EntrySummary,
    ExperienceEntry, FooterLink, GalleryImage, Image, Settings, SitemapEntry, Status, format_date,
};
pub use store::{ContentStore, GALLERY_LIMIT};

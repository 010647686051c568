// Image CDN URLs for asset references

use super::model::Image;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Builds CDN URLs for the images of one project/dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    pub project_id: String,
    pub dataset: String,
}

impl ImageUrls {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    /// URL of `image`, or the placeholder when it has no asset.
    pub fn url(&self, image: Option<&Image>) -> String {
        image
            .and_then(|img| img.asset.as_ref())
            .map(|asset| image_url(&self.project_id, &self.dataset, &asset.reference))
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }
}

/// Turn an asset reference like `image-<hash>-1200x800-jpg` into its CDN URL.
pub fn image_url(project_id: &str, dataset: &str, asset_ref: &str) -> String {
    if asset_ref.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    let file = asset_ref.strip_prefix("image-").unwrap_or(asset_ref);
    let file = ["jpg", "jpeg", "png", "webp", "gif", "svg"]
        .iter()
        .find_map(|ext| {
            file.strip_suffix(&format!("-{ext}"))
                .map(|stem| format!("{stem}.{ext}"))
        })
        .unwrap_or_else(|| file.to_string());
    format!("https://cdn.sanity.io/images/{project_id}/{dataset}/{file}")
}

//! Image references and alt text policy.

use serde::{Deserialize, Serialize};

/// Reference to an image in the media library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image identifier.
    pub id: u64,
    /// Image title, used as default alt text.
    pub title: String,
}

/// Pick alt text for an image.
///
/// Decorative images get empty alt text. Otherwise a non-blank override wins,
/// then the image title, then the empty string.
#[must_use]
pub fn resolve_alt_text(image: Option<&ImageInfo>, alt_text: Option<&str>, decorative: bool) -> String {
    if decorative {
        return String::new();
    }
    if let Some(alt) = alt_text.filter(|a| !a.trim().is_empty()) {
        return alt.to_owned();
    }
    image.map(|i| i.title.clone()).unwrap_or_default()
}

/// Image content block.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageBlock {
    /// Chosen image, `None` when it was deleted.
    #[serde(default)]
    pub image: Option<ImageInfo>,
    /// Caption shown below the image.
    #[serde(default)]
    pub caption: Option<String>,
    /// Alt text override.
    #[serde(default)]
    pub alt_text: Option<String>,
    /// Image is decorative and gets empty alt text.
    #[serde(default)]
    pub image_is_decorative: bool,
}

/// Render context of an [`ImageBlock`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageContext {
    /// Image to render.
    pub image: ImageInfo,
    /// Caption.
    pub caption: Option<String>,
    /// Resolved alt text.
    pub alt_text: String,
}

impl ImageBlock {
    /// Build the render context, `None` when there is no image to show.
    #[must_use]
    pub fn context(&self) -> Option<ImageContext> {
        let image = self.image.as_ref()?;
        Some(ImageContext {
            image: image.clone(),
            caption: self.caption.clone(),
            alt_text: resolve_alt_text(
                Some(image),
                self.alt_text.as_deref(),
                self.image_is_decorative,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageInfo {
        ImageInfo {
            id: 1,
            title: "Archive reading room".to_owned(),
        }
    }

    #[test]
    fn test_alt_text_defaults_to_image_title() {
        assert_eq!(
            resolve_alt_text(Some(&image()), None, false),
            "Archive reading room"
        );
    }

    #[test]
    fn test_alt_text_override_wins() {
        assert_eq!(
            resolve_alt_text(Some(&image()), Some("Readers"), false),
            "Readers"
        );
    }

    #[test]
    fn test_alt_text_blank_override_ignored() {
        assert_eq!(
            resolve_alt_text(Some(&image()), Some(" "), false),
            "Archive reading room"
        );
    }

    #[test]
    fn test_alt_text_decorative_is_empty() {
        assert_eq!(resolve_alt_text(Some(&image()), Some("Readers"), true), "");
    }

    #[test]
    fn test_alt_text_without_image_is_empty() {
        assert_eq!(resolve_alt_text(None, None, false), "");
    }

    #[test]
    fn test_image_block_context() {
        let block = ImageBlock {
            image: Some(image()),
            caption: Some("The reading room in 1998".to_owned()),
            alt_text: None,
            image_is_decorative: false,
        };

        let context = block.context().unwrap();

        assert_eq!(context.alt_text, "Archive reading room");
        assert_eq!(context.caption.as_deref(), Some("The reading room in 1998"));
    }

    #[test]
    fn test_image_block_without_image_has_no_context() {
        let block = ImageBlock {
            image: None,
            caption: None,
            alt_text: Some("Ignored".to_owned()),
            image_is_decorative: false,
        };

        assert!(block.context().is_none());
    }
}

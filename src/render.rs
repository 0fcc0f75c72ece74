//! Preview rendering: turns one classified attachment into a preview unit.

use serde::Serialize;

use crate::classify::{classify, PreviewStrategy};
use crate::gallery::{Gallery, PreviewShown};
use crate::model::Attachment;
use crate::resolve::{FileResolver, Icon};

/// MIME hint attached to every inline player.
pub const VIDEO_MIME_HINT: &str = "video/mp4";

/// Options shared by every preview in one list.
#[derive(Clone, Default)]
pub struct PreviewOptions {
    /// Render images bare, without the metadata wrapper.
    pub simple: bool,
    /// Vertical spacing after each slot.
    pub margin_bottom: u32,
    /// Invoked whenever a new image becomes visible (load or navigation).
    pub scroll_bottom: Option<PreviewShown>,
    /// Extra text appended to every metadata block.
    pub additional_item: Option<String>,
}

impl std::fmt::Debug for PreviewOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewOptions")
            .field("simple", &self.simple)
            .field("margin_bottom", &self.margin_bottom)
            .field("scroll_bottom", &self.scroll_bottom.is_some())
            .field("additional_item", &self.additional_item)
            .finish()
    }
}

/// Name, download link, and size shown next to an icon or thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataBlock {
    pub name: String,
    pub download: String,
    pub size_label: Option<String>,
    pub additional_item: Option<String>,
}

/// Inline player for mp4 attachments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoPlayer {
    pub src: String,
    pub mime_hint: &'static str,
    pub controls: bool,
    pub looped: bool,
}

/// A gallery-linked image, optionally wrapped in a metadata block.
#[derive(Debug, Clone)]
pub struct ImagePreview<'a> {
    pub gallery: Gallery<'a>,
    /// `None` for bare (simple) rendering.
    pub metadata: Option<MetadataBlock>,
}

impl ImagePreview<'_> {
    /// The image loader finished loading the visible image.
    pub fn image_loaded(&self) {
        self.gallery.image_loaded();
    }

    pub fn is_bare(&self) -> bool {
        self.metadata.is_none()
    }
}

/// Everything a layout engine needs to draw one attachment.
#[derive(Debug, Clone)]
pub enum PreviewUnit<'a> {
    Image(ImagePreview<'a>),
    Video(VideoPlayer),
    File { icon: Icon, metadata: MetadataBlock },
}

impl PreviewUnit<'_> {
    /// Short label for the unit's shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image(image) if image.is_bare() => "image",
            Self::Image(_) => "image_with_metadata",
            Self::Video(_) => "video",
            Self::File { .. } => "file",
        }
    }

    pub fn metadata(&self) -> Option<&MetadataBlock> {
        match self {
            Self::Image(image) => image.metadata.as_ref(),
            Self::Video(_) => None,
            Self::File { metadata, .. } => Some(metadata),
        }
    }
}

/// Render the attachment at `index` of `attachments`.
///
/// The whole list is needed because an image preview links to every image
/// in it. Returns `None` for attachments without a declared type (and for an
/// out-of-range index).
pub fn render<'a>(
    attachments: &'a [Attachment],
    index: usize,
    options: &PreviewOptions,
    resolver: &dyn FileResolver,
) -> Option<PreviewUnit<'a>> {
    let attachment = attachments.get(index)?;
    let strategy = match classify(attachment) {
        Some(s) => s,
        None => {
            tracing::debug!(index, "Attachment has no type, skipping preview");
            return None;
        }
    };

    let unit = match strategy {
        PreviewStrategy::Image => {
            let gallery = Gallery::open(attachments, index)?
                .with_on_shown(options.scroll_bottom.clone());
            let metadata = if options.simple {
                None
            } else {
                Some(metadata_block(attachment, options, resolver))
            };
            PreviewUnit::Image(ImagePreview { gallery, metadata })
        }
        PreviewStrategy::Video => PreviewUnit::Video(VideoPlayer {
            src: attachment.url_or_empty().to_string(),
            mime_hint: VIDEO_MIME_HINT,
            controls: true,
            looped: true,
        }),
        other => PreviewUnit::File {
            icon: icon_for(other),
            metadata: metadata_block(attachment, options, resolver),
        },
    };
    Some(unit)
}

/// Icon drawn for a strategy that renders as an icon block.
pub fn icon_for(strategy: PreviewStrategy) -> Icon {
    match strategy {
        PreviewStrategy::AudioIcon => Icon::Music,
        PreviewStrategy::ArchiveIcon => Icon::Cube,
        PreviewStrategy::VideoIcon => Icon::VideoCamera,
        PreviewStrategy::DocumentIcon | PreviewStrategy::Image | PreviewStrategy::Video => {
            Icon::File
        }
    }
}

/// Build the metadata block for `attachment`.
pub fn metadata_block(
    attachment: &Attachment,
    options: &PreviewOptions,
    resolver: &dyn FileResolver,
) -> MetadataBlock {
    MetadataBlock {
        name: attachment.display_name().to_string(),
        download: resolver.resolve(attachment.url_or_empty()),
        size_label: attachment.size.map(size_label),
        additional_item: options.additional_item.clone(),
    }
}

/// Size in decimal kilobytes, rounded half away from zero.
pub fn kilobytes(size: u64) -> u64 {
    size / 1000 + u64::from(size % 1000 >= 500)
}

/// `"Size: {n}kB"` for a byte count.
pub fn size_label(size: u64) -> String {
    format!("Size: {}kB", kilobytes(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{ApiFileResolver, PassthroughResolver};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_kilobyte_rounding() {
        assert_eq!(kilobytes(0), 0);
        assert_eq!(kilobytes(499), 0);
        assert_eq!(kilobytes(500), 1);
        assert_eq!(kilobytes(1499), 1);
        assert_eq!(kilobytes(1500), 2);
        assert_eq!(kilobytes(2500), 3);
        assert_eq!(kilobytes(4999), 5);
        assert_eq!(kilobytes(u64::MAX), u64::MAX / 1000 + 1);
        assert_eq!(size_label(1500), "Size: 2kB");
    }

    #[test]
    fn test_untyped_attachment_renders_nothing() {
        let atts = vec![Attachment::new("c.zip").with_size(10)];
        assert!(render(&atts, 0, &PreviewOptions::default(), &PassthroughResolver).is_none());
        assert!(render(&atts, 5, &PreviewOptions::default(), &PassthroughResolver).is_none());
    }

    #[test]
    fn test_icon_strategies() {
        let atts = vec![
            Attachment::new("a.mp3").with_type("audio/mpeg"),
            Attachment::new("b.zip").with_type("application/zip"),
            Attachment::new("c.avi").with_type("video/x-msvideo"),
            Attachment::new("d.pdf").with_type("application/pdf"),
            Attachment::new("e.weird").with_type("application/octet-stream"),
        ];
        let expected = [Icon::Music, Icon::Cube, Icon::VideoCamera, Icon::File, Icon::File];
        for (i, icon) in expected.into_iter().enumerate() {
            match render(&atts, i, &PreviewOptions::default(), &PassthroughResolver) {
                Some(PreviewUnit::File { icon: got, .. }) => assert_eq!(got, icon, "index {i}"),
                other => panic!("unexpected unit at {i}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_video_player() {
        let atts = vec![Attachment::new("b.mp4").with_type("video/mp4").with_size(9000)];
        match render(&atts, 0, &PreviewOptions::default(), &PassthroughResolver) {
            Some(PreviewUnit::Video(player)) => {
                assert_eq!(player.src, "b.mp4");
                assert_eq!(player.mime_hint, "video/mp4");
                assert!(player.controls && player.looped);
            }
            other => panic!("expected video, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_block_contents() {
        let atts = vec![Attachment::new("uploads/doc.pdf")
            .with_name("Quarterly.pdf")
            .with_type("application/pdf")
            .with_size(1500)];
        let options = PreviewOptions {
            additional_item: Some("seen".into()),
            ..PreviewOptions::default()
        };
        let resolver = ApiFileResolver::new("https://api.example.com");
        let unit = render(&atts, 0, &options, &resolver).expect("preview");
        let meta = unit.metadata().expect("metadata");
        assert_eq!(meta.name, "Quarterly.pdf");
        assert_eq!(
            meta.download,
            "https://api.example.com/read-file?key=uploads%2Fdoc.pdf"
        );
        assert_eq!(meta.size_label.as_deref(), Some("Size: 2kB"));
        assert_eq!(meta.additional_item.as_deref(), Some("seen"));
    }

    #[test]
    fn test_metadata_without_size_or_name() {
        let att = Attachment {
            mime_type: Some("text/plain".into()),
            ..Attachment::default()
        };
        let meta = metadata_block(&att, &PreviewOptions::default(), &PassthroughResolver);
        assert_eq!(meta.name, "");
        assert_eq!(meta.download, "");
        assert_eq!(meta.size_label, None);
    }

    #[test]
    fn test_image_wrapped_and_bare() {
        let atts = vec![
            Attachment::new("a.jpg").with_type("image/jpeg"),
            Attachment::new("b.jpg").with_type("image/jpeg"),
        ];
        let wrapped = render(&atts, 1, &PreviewOptions::default(), &PassthroughResolver)
            .expect("preview");
        assert_eq!(wrapped.kind(), "image_with_metadata");

        let simple = PreviewOptions {
            simple: true,
            ..PreviewOptions::default()
        };
        match render(&atts, 1, &simple, &PassthroughResolver) {
            Some(PreviewUnit::Image(image)) => {
                assert!(image.is_bare());
                assert_eq!(image.gallery.len(), 2);
                assert_eq!(image.gallery.current_index(), 1);
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_image_load_forwards_to_scroll_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let options = PreviewOptions {
            scroll_bottom: Some(Arc::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            })),
            ..PreviewOptions::default()
        };
        let atts = vec![
            Attachment::new("a.jpg").with_type("image/jpeg"),
            Attachment::new("b.jpg").with_type("image/jpeg"),
        ];
        let Some(PreviewUnit::Image(mut image)) =
            render(&atts, 0, &options, &PassthroughResolver)
        else {
            panic!("expected image");
        };
        image.image_loaded();
        assert!(image.gallery.next());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}

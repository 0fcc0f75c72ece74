//! Image gallery: the ordered image subset of an attachment list and a
//! cursor that steps through it.
//!
//! A gallery is always rebuilt from the current list. It borrows the
//! attachments and never outlives the composition that produced it.

use std::sync::Arc;

use crate::classify::is_image;
use crate::model::Attachment;

/// Notification fired when a new image becomes visible.
pub type PreviewShown = Arc<dyn Fn() + Send + Sync>;

/// The image attachments of `attachments`, in their original order.
///
/// Only the declared MIME type is consulted. Duplicates are kept.
pub fn collect_images(attachments: &[Attachment]) -> Vec<&Attachment> {
    attachments.iter().filter(|a| is_image(a)).collect()
}

/// Positions in `attachments` of every image, in order.
pub fn image_positions(attachments: &[Attachment]) -> Vec<usize> {
    attachments
        .iter()
        .enumerate()
        .filter(|(_, a)| is_image(a))
        .map(|(i, _)| i)
        .collect()
}

/// One gallery entry together with its index in the parent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryMember<'a> {
    pub source_index: usize,
    pub attachment: &'a Attachment,
}

/// Navigable view over the images of one attachment list.
///
/// Navigation wraps around at both ends. Every step that brings a different
/// image into view fires the `on_shown` notification exactly once.
#[derive(Clone)]
pub struct Gallery<'a> {
    members: Vec<GalleryMember<'a>>,
    current: usize,
    on_shown: Option<PreviewShown>,
}

impl<'a> Gallery<'a> {
    /// Open the gallery of `attachments` on the image at `source_index`.
    ///
    /// Returns `None` when that index is out of range or not an image.
    pub fn open(attachments: &'a [Attachment], source_index: usize) -> Option<Self> {
        let members: Vec<GalleryMember<'a>> = image_positions(attachments)
            .into_iter()
            .map(|i| GalleryMember {
                source_index: i,
                attachment: &attachments[i],
            })
            .collect();
        let current = members
            .iter()
            .position(|m| m.source_index == source_index)?;

        Some(Self {
            members,
            current,
            on_shown: None,
        })
    }

    /// Attach the notification fired when a new image is shown.
    pub fn with_on_shown(mut self, on_shown: Option<PreviewShown>) -> Self {
        self.on_shown = on_shown;
        self
    }

    /// Number of images in the gallery (at least one).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a gallery is opened on an existing image.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Position of the visible image within the gallery.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The visible image.
    pub fn current(&self) -> &'a Attachment {
        self.members[self.current].attachment
    }

    /// Index of the visible image in the parent attachment list.
    pub fn current_source_index(&self) -> usize {
        self.members[self.current].source_index
    }

    /// All gallery members in order.
    pub fn members(&self) -> &[GalleryMember<'a>] {
        &self.members
    }

    /// Attachments in gallery order.
    pub fn images(&self) -> impl Iterator<Item = &'a Attachment> + '_ {
        self.members.iter().map(|m| m.attachment)
    }

    /// Step to the next image, wrapping to the first.
    ///
    /// Returns `false` (and stays silent) when there is only one image.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let target = (self.current + 1) % self.members.len();
        self.show(target)
    }

    /// Step to the previous image, wrapping to the last.
    pub fn previous(&mut self) -> bool {
        let len = self.members.len();
        let target = (self.current + len - 1) % len;
        self.show(target)
    }

    /// Jump to gallery position `position`.
    ///
    /// Out-of-range positions and the already visible position are no-ops.
    pub fn select(&mut self, position: usize) -> bool {
        if position >= self.members.len() {
            return false;
        }
        self.show(position)
    }

    /// Forward an image-load completion from the image loader.
    ///
    /// Each call produces exactly one notification; nothing is coalesced.
    pub fn image_loaded(&self) {
        self.notify();
    }

    fn show(&mut self, target: usize) -> bool {
        if target == self.current {
            return false;
        }
        self.current = target;
        tracing::debug!(
            position = self.current,
            source_index = self.current_source_index(),
            "Gallery moved"
        );
        self.notify();
        true
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_shown {
            cb();
        }
    }
}

impl std::fmt::Debug for Gallery<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("members", &self.members)
            .field("current", &self.current)
            .field("on_shown", &self.on_shown.is_some())
            .finish()
    }
}

//! Viewer state (the "Model" in Elm architecture).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::compose::{compose, Slot};
use crate::config::Config;
use crate::gallery::{Gallery, PreviewShown};
use crate::model::Attachment;
use crate::render::PreviewOptions;
use crate::resolve::FileResolver;

/// Complete viewer state.
pub struct App {
    // ── Data ──────────────────────────────────
    /// Attachments being previewed, in input order.
    pub attachments: Vec<Attachment>,
    /// Options shared by every preview.
    pub options: PreviewOptions,
    /// Download link resolver.
    pub resolver: Box<dyn FileResolver>,
    /// Maximum display width for names.
    pub name_width: usize,

    // ── Navigation ────────────────────────────
    /// Index of the highlighted slot.
    pub selected: usize,
    /// First visible row of the list.
    pub scroll_offset: usize,
    /// Keep the selected slot in view when drawing.
    pub follow_selection: bool,
    /// Source index of the image shown in the gallery popup.
    pub gallery_source: Option<usize>,

    // ── UI state ──────────────────────────────
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,

    // ── Scroll notifications ──────────────────
    /// Notifications raised by previews and not yet handled.
    pending_scrolls: Arc<AtomicUsize>,
    /// Total notifications handled since start.
    pub scroll_events: usize,
}

impl App {
    pub fn new(attachments: Vec<Attachment>, config: &Config, simple: bool) -> Self {
        let pending_scrolls = Arc::new(AtomicUsize::new(0));
        let pending = Arc::clone(&pending_scrolls);
        let scroll_bottom: PreviewShown = Arc::new(move || {
            pending.fetch_add(1, Ordering::SeqCst);
        });

        let mut options = config.preview_options();
        options.simple = options.simple || simple;
        options.scroll_bottom = Some(scroll_bottom);

        Self {
            attachments,
            options,
            resolver: config.file_resolver(),
            name_width: config.display.name_width,
            selected: 0,
            scroll_offset: 0,
            follow_selection: true,
            gallery_source: None,
            show_help: false,
            should_quit: false,
            status_message: None,
            pending_scrolls,
            scroll_events: 0,
        }
    }

    /// Compose the current list. Recomputed on every call.
    pub fn slots(&self) -> Vec<Slot<'_>> {
        compose(&self.attachments, &self.options, &*self.resolver)
    }

    /// Gallery for the popup, rebuilt from the current attachments.
    pub fn gallery(&self) -> Option<Gallery<'_>> {
        let source = self.gallery_source?;
        Gallery::open(&self.attachments, source)
            .map(|g| g.with_on_shown(self.options.scroll_bottom.clone()))
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.attachments.len() {
            self.selected += 1;
        }
        self.follow_selection = true;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.follow_selection = true;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.follow_selection = true;
    }

    pub fn select_last(&mut self) {
        self.selected = self.attachments.len().saturating_sub(1);
        self.follow_selection = true;
    }

    /// Open the gallery on the selected attachment, if it is an image.
    pub fn open_selected(&mut self) {
        let Some(gallery) = Gallery::open(&self.attachments, self.selected)
            .map(|g| g.with_on_shown(self.options.scroll_bottom.clone()))
        else {
            self.status_message = Some("No gallery for this attachment".to_string());
            return;
        };
        // The loader reports the first image as soon as the popup shows it.
        gallery.image_loaded();
        self.gallery_source = Some(gallery.current_source_index());
        self.status_message = None;
    }

    pub fn close_gallery(&mut self) {
        self.gallery_source = None;
    }

    /// Step the open gallery forward or backward.
    pub fn step_gallery(&mut self, forward: bool) {
        let Some(mut gallery) = self.gallery() else {
            return;
        };
        let moved = if forward {
            gallery.next()
        } else {
            gallery.previous()
        };
        if moved {
            let source = gallery.current_source_index();
            self.gallery_source = Some(source);
            self.selected = source;
        }
    }

    pub fn toggle_simple(&mut self) {
        self.options.simple = !self.options.simple;
    }

    /// Handle notifications raised since the last tick by scrolling the
    /// list to its end.
    pub fn tick(&mut self) {
        let pending = self.pending_scrolls.swap(0, Ordering::SeqCst);
        if pending > 0 {
            self.scroll_events += pending;
            self.scroll_offset = usize::MAX;
            self.follow_selection = false;
            tracing::trace!(pending, "Scroll to bottom requested");
        }
    }
}

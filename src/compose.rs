//! List composition: one positioned slot per attachment, in input order.

use sha2::{Digest, Sha256};

use crate::model::Attachment;
use crate::render::{render, PreviewOptions, PreviewUnit};
use crate::resolve::FileResolver;

/// Stable identity of a slot: its index plus a fingerprint of the metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub index: usize,
    pub fingerprint: String,
}

impl SlotKey {
    pub fn new(index: usize, attachment: &Attachment) -> Self {
        Self {
            index,
            fingerprint: fingerprint(attachment),
        }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.index, self.fingerprint)
    }
}

/// One positioned entry of the composed list. `preview` is `None` for
/// attachments that get no preview; the slot itself is still present.
#[derive(Debug, Clone)]
pub struct Slot<'a> {
    pub key: SlotKey,
    pub margin_bottom: u32,
    pub preview: Option<PreviewUnit<'a>>,
}

impl Slot<'_> {
    pub fn is_empty(&self) -> bool {
        self.preview.is_none()
    }
}

/// Compose previews for every attachment, preserving count and order.
pub fn compose<'a>(
    attachments: &'a [Attachment],
    options: &PreviewOptions,
    resolver: &dyn FileResolver,
) -> Vec<Slot<'a>> {
    let slots: Vec<Slot<'a>> = attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| Slot {
            key: SlotKey::new(index, attachment),
            margin_bottom: options.margin_bottom,
            preview: render(attachments, index, options, resolver),
        })
        .collect();

    tracing::debug!(
        total = slots.len(),
        empty = slots.iter().filter(|s| s.is_empty()).count(),
        simple = options.simple,
        "Composed attachment list"
    );
    slots
}

/// Short SHA-256 fingerprint over the attachment's metadata fields.
fn fingerprint(attachment: &Attachment) -> String {
    let mut hasher = Sha256::new();
    for field in [
        attachment.name.as_deref(),
        attachment.url.as_deref(),
        attachment.mime_type.as_deref(),
    ] {
        match field {
            Some(value) => {
                hasher.update([1u8]);
                hasher.update((value.len() as u64).to_le_bytes());
                hasher.update(value.as_bytes());
            }
            None => hasher.update([0u8]),
        }
    }
    match attachment.size {
        Some(size) => {
            hasher.update([1u8]);
            hasher.update(size.to_le_bytes());
        }
        None => hasher.update([0u8]),
    }
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::PassthroughResolver;

    #[test]
    fn test_compose_keeps_count_and_order() {
        let atts = vec![
            Attachment::new("x.bin"),
            Attachment::new("a.jpg").with_type("image/jpeg"),
            Attachment::new("y.bin"),
        ];
        let slots = compose(&atts, &PreviewOptions::default(), &PassthroughResolver);
        assert_eq!(slots.len(), 3);
        let indices: Vec<usize> = slots.iter().map(|s| s.key.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(slots[0].is_empty());
        assert!(!slots[1].is_empty());
        assert!(slots[2].is_empty());
    }

    #[test]
    fn test_margin_applied_to_every_slot() {
        let atts = vec![Attachment::new("a"), Attachment::new("b").with_type("text/plain")];
        let options = PreviewOptions {
            margin_bottom: 12,
            ..PreviewOptions::default()
        };
        let slots = compose(&atts, &options, &PassthroughResolver);
        assert!(slots.iter().all(|s| s.margin_bottom == 12));
    }

    #[test]
    fn test_empty_input() {
        let slots = compose(&[], &PreviewOptions::default(), &PassthroughResolver);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_fingerprint_is_stable_and_content_sensitive() {
        let a = Attachment::new("a.jpg").with_type("image/jpeg");
        let b = Attachment::new("a.jpg").with_type("image/png");
        assert_eq!(SlotKey::new(0, &a), SlotKey::new(0, &a.clone()));
        assert_ne!(SlotKey::new(0, &a).fingerprint, SlotKey::new(0, &b).fingerprint);
        assert_eq!(SlotKey::new(0, &a).fingerprint.len(), 16);

        // Field boundaries are not ambiguous.
        let split1 = Attachment::new("bc").with_name("a");
        let split2 = Attachment::new("c").with_name("ab");
        assert_ne!(fingerprint(&split1), fingerprint(&split2));
    }

    #[test]
    fn test_duplicates_share_fingerprint_not_index() {
        let att = Attachment::new("a.jpg").with_type("image/jpeg");
        let atts = vec![att.clone(), att];
        let slots = compose(&atts, &PreviewOptions::default(), &PassthroughResolver);
        assert_eq!(slots[0].key.fingerprint, slots[1].key.fingerprint);
        assert_ne!(slots[0].key, slots[1].key);
        assert_eq!(slots[1].key.to_string(), format!("1:{}", slots[1].key.fingerprint));
    }
}

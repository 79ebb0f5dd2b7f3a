//! Gallery/modal viewer state.
//!
//! Tracks at most one active selection over a fixed, ordered list of opaque
//! item identifiers. Selecting replaces, dismissing clears; there is no
//! stacking and no history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryViewer {
    items: Vec<String>,
    active: Option<String>,
}

impl GalleryViewer {
    /// Build a viewer over a fixed item list. The ids are opaque references
    /// supplied by the asset layer; order is preserved.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            active: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Activate `id`. Unknown ids are silently ignored; selecting while
    /// another item is active simply replaces it.
    pub fn select(&mut self, id: &str) -> Option<Event> {
        if !self.items.iter().any(|item| item == id) {
            return None;
        }
        self.active = Some(id.to_string());
        Some(Event::GallerySelected {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Clear the active selection. Idempotent; `None` when nothing was
    /// active.
    pub fn dismiss(&mut self) -> Option<Event> {
        let id = self.active.take()?;
        Some(Event::GalleryDismissed {
            id,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> GalleryViewer {
        GalleryViewer::new(vec!["img1.jpg".into(), "img2.jpg".into(), "img4.jpg".into()])
    }

    #[test]
    fn select_and_dismiss() {
        let mut gallery = viewer();
        assert!(gallery.active().is_none());

        assert!(matches!(
            gallery.select("img2.jpg"),
            Some(Event::GallerySelected { .. })
        ));
        assert_eq!(gallery.active(), Some("img2.jpg"));

        match gallery.dismiss() {
            Some(Event::GalleryDismissed { id, .. }) => assert_eq!(id, "img2.jpg"),
            other => panic!("Expected GalleryDismissed, got {other:?}"),
        }
        assert!(gallery.active().is_none());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut gallery = viewer();
        gallery.select("img1.jpg");

        assert!(gallery.select("nope.jpg").is_none());
        assert_eq!(gallery.active(), Some("img1.jpg"));
    }

    #[test]
    fn selecting_replaces_without_stacking() {
        let mut gallery = viewer();
        gallery.select("img1.jpg");
        gallery.select("img4.jpg");
        assert_eq!(gallery.active(), Some("img4.jpg"));

        gallery.dismiss();
        // One dismiss clears everything; nothing was stacked underneath.
        assert!(gallery.active().is_none());
        assert!(gallery.dismiss().is_none());
    }

    #[test]
    fn dismiss_with_no_selection_is_a_noop() {
        let mut gallery = viewer();
        assert!(gallery.dismiss().is_none());
        assert!(gallery.dismiss().is_none());
    }
}

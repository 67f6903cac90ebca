// SPDX-License-Identifier: MPL-2.0
//! Collection model: ordered records plus a wrapping cursor.
//!
//! Records keep manifest document order and are never reordered. They are
//! stored in a shared immutable slice so a slideshow can be handed the list
//! without copying it.

pub mod cursor;
pub mod record;

pub use cursor::Cursor;
pub use record::{ImageRecord, MediaRecord, VideoRecord};

use std::sync::Arc;

/// An opened collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    title: String,
    records: Arc<[MediaRecord]>,
    cursor: Cursor,
}

impl Collection {
    /// Creates a collection with the cursor on the first record.
    #[must_use]
    pub fn new(title: impl Into<String>, records: Vec<MediaRecord>) -> Self {
        let records: Arc<[MediaRecord]> = records.into();
        Self {
            title: title.into(),
            cursor: Cursor::new(records.len()),
            records,
        }
    }

    /// Creates an empty collection carrying only a title.
    #[must_use]
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Shared read-only handle to the records.
    #[must_use]
    pub fn records(&self) -> Arc<[MediaRecord]> {
        Arc::clone(&self.records)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Record at the cursor, or `None` when the collection is empty.
    #[must_use]
    pub fn current(&self) -> Option<&MediaRecord> {
        self.cursor.index().and_then(|index| self.records.get(index))
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn home(&mut self) {
        self.cursor.home();
    }

    /// Selects `index`; out-of-range indices are rejected.
    pub fn jump(&mut self, index: usize) -> bool {
        self.cursor.jump(index)
    }

    /// One-based position and total of the current record.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample(len: usize) -> Collection {
        let records = (0..len)
            .map(|i| {
                MediaRecord::Image(ImageRecord {
                    path: PathBuf::from(format!("{i}.jpg")),
                    caption: format!("Photo {i}"),
                    ..ImageRecord::default()
                })
            })
            .collect();
        Collection::new("Holidays", records)
    }

    #[test]
    fn empty_collection_has_no_current() {
        let mut collection = Collection::empty("Image Viewer");
        collection.next();
        collection.previous();
        collection.home();
        assert!(collection.current().is_none());
        assert_eq!(collection.position(), None);
        assert_eq!(collection.title(), "Image Viewer");
    }

    #[test]
    fn navigation_follows_document_order() {
        let mut collection = sample(3);
        assert_eq!(collection.current().map(MediaRecord::caption), Some("Photo 0"));
        collection.next();
        assert_eq!(collection.current().map(MediaRecord::caption), Some("Photo 1"));
        collection.previous();
        collection.previous();
        assert_eq!(collection.current().map(MediaRecord::caption), Some("Photo 2"));
        assert_eq!(collection.position(), Some((3, 3)));
        collection.home();
        assert_eq!(collection.position(), Some((1, 3)));
    }

    #[test]
    fn jump_moves_only_when_in_range() {
        let mut collection = sample(4);
        assert!(collection.jump(3));
        assert!(!collection.jump(4));
        assert_eq!(collection.current().map(MediaRecord::caption), Some("Photo 3"));
    }

    #[test]
    fn records_are_shared_not_copied() {
        let collection = sample(2);
        let first = collection.records();
        let second = collection.records();
        assert!(Arc::ptr_eq(&first, &second));
    }
}

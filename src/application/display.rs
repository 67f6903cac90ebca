// SPDX-License-Identifier: MPL-2.0
//! Display controller: decode, fit, render.
//!
//! The controller owns the bitmap currently on screen. Each successful
//! redraw replaces it; a failed decode leaves both the controller and the
//! surface untouched.

use crate::application::port::Surface;
use crate::domain::collection::MediaRecord;
use crate::domain::media::RawImage;
use crate::domain::metadata::MetadataPayload;
use crate::error::AssetLoadError;
use crate::media::{load_image, resize_to_fit};

/// The bitmap on screen and the full-size source it was fitted from.
#[derive(Debug, Clone)]
struct Displayed {
    source: RawImage,
    fitted: RawImage,
}

/// Shows records and video frames on a [`Surface`].
#[derive(Debug, Default)]
pub struct DisplayController {
    current: Option<Displayed>,
}

impl DisplayController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes the record's image file and shows it with its metadata.
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if the file is missing or cannot be
    /// decoded. The previous bitmap stays on screen.
    pub fn show_image(
        &mut self,
        record: &MediaRecord,
        surface: &mut dyn Surface,
    ) -> Result<(), AssetLoadError> {
        let source = load_image(record.path())?;
        self.present(source, surface);
        surface.set_metadata(MetadataPayload::for_record(record));
        Ok(())
    }

    /// Shows one frame pulled from a playing video.
    pub fn show_frame(&mut self, frame: RawImage, surface: &mut dyn Surface) {
        self.present(frame, surface);
    }

    /// Re-fits the current bitmap to the surface's viewport after a resize.
    ///
    /// Returns false when nothing is displayed.
    pub fn refresh(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(displayed) = self.current.take() else {
            return false;
        };
        self.present(displayed.source, surface);
        true
    }

    /// Drops the current bitmap and clears the surface.
    pub fn clear(&mut self, surface: &mut dyn Surface) {
        self.current = None;
        surface.clear();
    }

    /// The bitmap currently on screen, as fitted to the viewport.
    #[must_use]
    pub fn current(&self) -> Option<&RawImage> {
        self.current.as_ref().map(|displayed| &displayed.fitted)
    }

    fn present(&mut self, source: RawImage, surface: &mut dyn Surface) {
        let fitted = resize_to_fit(&source, surface.viewport());
        surface.render(fitted.clone());
        self.current = Some(Displayed { source, fitted });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::ImageRecord;
    use crate::domain::viewport::Viewport;
    use crate::test_utils::FakeFrontend;
    use image_rs::{Rgba, RgbaImage};
    use std::path::Path;
    use tempfile::tempdir;

    fn record_for(path: &Path) -> MediaRecord {
        MediaRecord::Image(ImageRecord {
            path: path.to_path_buf(),
            caption: "Dunes".into(),
            sensitivity: Some("200".into()),
            ..ImageRecord::default()
        })
    }

    #[test]
    fn shows_fitted_image_and_metadata() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(1600, 400, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("write png");

        let mut surface = FakeFrontend::new(Viewport::new(800, 600));
        let mut display = DisplayController::new();
        display
            .show_image(&record_for(&path), &mut surface)
            .expect("image loads");

        let rendered = surface.last_render().expect("rendered");
        assert_eq!((rendered.width(), rendered.height()), (800, 200));
        assert!(display
            .current()
            .is_some_and(|current| current.shares_buffer_with(rendered)));
        let metadata = surface.metadata.as_ref().expect("metadata set");
        assert_eq!(metadata.caption, "Dunes");
        assert_eq!(metadata.sensitivity_label.as_deref(), Some("ASA: 200"));
    }

    #[test]
    fn failed_decode_keeps_previous_bitmap() {
        let dir = tempdir().expect("tempdir");
        let good = dir.path().join("good.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]))
            .save(&good)
            .expect("write png");

        let mut surface = FakeFrontend::new(Viewport::new(800, 600));
        let mut display = DisplayController::new();
        display
            .show_image(&record_for(&good), &mut surface)
            .expect("image loads");

        let err = display
            .show_image(&record_for(&dir.path().join("gone.png")), &mut surface)
            .unwrap_err();
        assert!(matches!(err, AssetLoadError::Io { .. }));
        assert_eq!(surface.renders.len(), 1);
        assert_eq!(display.current().map(RawImage::width), Some(4));
    }

    #[test]
    fn refresh_refits_to_new_viewport() {
        let mut surface = FakeFrontend::new(Viewport::new(800, 600));
        let mut display = DisplayController::new();
        assert!(!display.refresh(&mut surface));

        display.show_frame(RawImage::from_rgba(400, 400, vec![0; 400 * 400 * 4]), &mut surface);
        surface.viewport = Viewport::new(200, 100);
        assert!(display.refresh(&mut surface));

        let rendered = surface.last_render().expect("rendered");
        assert_eq!((rendered.width(), rendered.height()), (100, 100));
    }

    #[test]
    fn clear_drops_bitmap() {
        let mut surface = FakeFrontend::new(Viewport::new(10, 10));
        let mut display = DisplayController::new();
        display.show_frame(RawImage::from_rgba(1, 1, vec![0; 4]), &mut surface);
        display.clear(&mut surface);
        assert!(display.current().is_none());
        assert_eq!(surface.clears, 1);
    }
}

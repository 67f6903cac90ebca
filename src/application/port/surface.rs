// SPDX-License-Identifier: MPL-2.0
//! Display surface port definition.
//!
//! The GUI adapter implements [`Surface`] to receive render and metadata
//! commands from the display controller and playback drivers.

use crate::domain::media::RawImage;
use crate::domain::metadata::MetadataPayload;
use crate::domain::viewport::Viewport;

/// Port for the on-screen area showing the current item.
///
/// # Ownership
///
/// `render` receives a handle sharing the pixel buffer owned by the display
/// controller. Implementations may keep it for as long as they need.
pub trait Surface {
    /// Area available for the current item, excluding reserved bars.
    fn viewport(&self) -> Viewport;

    /// Replaces the displayed bitmap.
    fn render(&mut self, image: RawImage);

    /// Replaces the metadata bar content.
    fn set_metadata(&mut self, payload: MetadataPayload);

    /// Removes the bitmap and metadata.
    fn clear(&mut self);
}

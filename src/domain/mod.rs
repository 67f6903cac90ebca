// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`collection`]: Records, the wrapping [`Cursor`](collection::Cursor) and
//!   the [`Collection`](collection::Collection)
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind),
//!   [`RawImage`](media::RawImage), [`VideoMetadata`](media::VideoMetadata))
//! - [`metadata`]: [`MetadataPayload`](metadata::MetadataPayload) for the metadata bar
//! - [`playback`]: Slideshow and video states, [`Generation`](playback::Generation)
//! - [`viewport`]: [`Viewport`](viewport::Viewport) and fit scaling

pub mod collection;
pub mod media;
pub mod metadata;
pub mod playback;
pub mod viewport;

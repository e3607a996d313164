// SPDX-License-Identifier: MPL-2.0
//! Astronomy Picture of the Day domain and transport.
//!
//! - [`record`] - The `PictureRecord` schema, validated at the fetch boundary
//! - [`client`] - HTTP fetchers for the today / by-date / recent endpoints
//! - [`fetch`] - Loading/error/success tri-state with request generations
//! - [`media`] - Remote image download and LRU handle cache

pub mod client;
pub mod fetch;
pub mod media;
pub mod record;

pub use client::{ApodClient, RecentCount, DEFAULT_BASE_URL};
pub use fetch::{FetchState, Fetcher, RequestId};
pub use record::{DateBounds, MediaType, PictureRecord};
pub use media::{Preview, PreviewCache};

/// Public APOD archive, opened by the "APOD website" actions.
pub const APOD_WEBSITE: &str = "https://apod.nasa.gov/";

/// NASA open API portal, linked from the footer.
pub const NASA_API_WEBSITE: &str = "https://api.nasa.gov/";

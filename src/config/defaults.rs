// SPDX-License-Identifier: MPL-2.0
//! Centralized default values shared across the application.
//!
//! # Categories
//!
//! - **Backend**: where pictures are fetched from
//! - **Gallery**: recent gallery sizing and layout
//! - **Runtime**: tick cadence for animations and toast expiry

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Backend base URL when neither the CLI nor `settings.toml` provides one.
pub const DEFAULT_API_BASE_URL: &str = crate::apod::DEFAULT_BASE_URL;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of recent pictures requested when the gallery first opens.
pub const DEFAULT_RECENT_COUNT: u32 = 10;

/// Tiles per row in the recent and favorites galleries.
pub const GALLERY_COLUMNS: usize = 3;

/// Number of downloaded previews kept in memory.
pub const PREVIEW_CACHE_CAPACITY: usize = 64;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Interval between ticks while something animates or a toast is visible.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Spinner rotation applied per tick (radians).
pub const SPINNER_STEP_RADIANS: f32 = 0.35;

const _: () = {
    assert!(GALLERY_COLUMNS > 0);
    assert!(PREVIEW_CACHE_CAPACITY > 0);
    assert!(TICK_INTERVAL_MS > 0);
};

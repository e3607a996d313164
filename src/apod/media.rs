// SPDX-License-Identifier: MPL-2.0
//! Remote picture previews.
//!
//! Image records only carry a URL, so previews are downloaded on demand and
//! kept as decoded-ready Iced handles in a bounded LRU cache keyed by URL.

use super::client::ApodClient;
use crate::config::PREVIEW_CACHE_CAPACITY;
use crate::error::Error;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Download state of one preview.
#[derive(Debug, Clone)]
pub enum Preview {
    Loading,
    Ready(Handle),
    Failed(String),
}

pub struct PreviewCache {
    entries: LruCache<String, Preview>,
    headroom: NonZeroUsize,
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(PREVIEW_CACHE_CAPACITY)
    }
}

impl PreviewCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            headroom: capacity,
        }
    }

    /// Grows the cache so `visible` previews fit alongside the initial
    /// capacity. Entries shown together are never evicted by each other.
    /// The cache never shrinks.
    pub fn reserve(&mut self, visible: usize) {
        let wanted = self.headroom.saturating_add(visible);
        if wanted > self.entries.cap() {
            tracing::debug!(capacity = wanted.get(), "growing preview cache");
            self.entries.resize(wanted);
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Registers interest in `url`.
    ///
    /// Returns `true` when the caller should start a download: the URL is
    /// unknown, or its previous download failed.
    pub fn request(&mut self, url: &str) -> bool {
        match self.entries.get(url) {
            Some(Preview::Loading | Preview::Ready(_)) => false,
            Some(Preview::Failed(_)) | None => {
                self.entries.put(url.to_string(), Preview::Loading);
                true
            }
        }
    }

    /// Stores the outcome of a download.
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, Error>) {
        let preview = match result {
            Ok(bytes) => Preview::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, error = %err, "preview download failed");
                Preview::Failed(err.user_message())
            }
        };
        self.entries.put(url, preview);
    }

    /// Looks up a preview without touching recency (usable from `view`).
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Preview> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Downloads a preview, returning the URL alongside the result so the
/// completion message can be routed back to the right cache entry.
pub async fn download(client: ApodClient, url: String) -> (String, Result<Vec<u8>, Error>) {
    let result = client.fetch_bytes(&url).await;
    (url, result)
}

// SPDX-License-Identifier: MPL-2.0
//! Picture record schema.
//!
//! Every payload coming back from the backend is turned into a
//! [`PictureRecord`] here, so the rest of the application never handles
//! untyped JSON. Records are identified by their `date`: two records with the
//! same date are the same APOD entry as far as deduplication is concerned.

use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Kind of media referenced by a record's `url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Returns the i18n key for the media type label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MediaType::Image => "media-type-image",
            MediaType::Video => "media-type-video",
        }
    }
}

/// One day's APOD metadata and media reference.
///
/// Field names follow the backend's snake_case JSON (`media_type`). Unknown
/// fields such as `service_version` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureRecord {
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub media_type: MediaType,
    pub url: String,
    /// High resolution variant, only provided for some images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// Still frame for video entries, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl PictureRecord {
    /// Validates a JSON value against the record schema.
    ///
    /// Missing required fields, an unknown `media_type`, a malformed date or
    /// an empty `url`/`title` reject the value. Copyright text is trimmed and
    /// dropped when blank.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: PictureRecord = serde_json::from_value(value)?;
        record.normalized()
    }

    fn normalized(mut self) -> Result<Self> {
        if self.title.trim().is_empty() {
            return Err(Error::Parse(format!("record {} has no title", self.date)));
        }
        if self.url.trim().is_empty() {
            return Err(Error::Parse(format!("record {} has no media url", self.date)));
        }
        self.copyright = self
            .copyright
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Ok(self)
    }

    /// Returns true when `other` refers to the same APOD entry.
    #[must_use]
    pub fn same_entry(&self, other: &PictureRecord) -> bool {
        self.date == other.date
    }

    /// Locator opened by "view full resolution".
    #[must_use]
    pub fn full_resolution_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }

    /// Locator of a still image suitable for a card or gallery tile.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        match self.media_type {
            MediaType::Image => Some(&self.url),
            MediaType::Video => self.thumbnail_url.as_deref(),
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Date formatted as e.g. "Monday, June 16, 1995".
    #[must_use]
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// First day published by APOD.
#[must_use]
pub fn first_apod_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

/// Range of dates the backend can serve: 1995-06-16 through today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl DateBounds {
    /// Bounds ending at the current local date.
    #[must_use]
    pub fn today() -> Self {
        Self::ending(Local::now().date_naive())
    }

    #[must_use]
    pub fn ending(latest: NaiveDate) -> Self {
        Self {
            earliest: first_apod_date(),
            latest,
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest && date <= self.latest
    }

    #[must_use]
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest, self.latest)
    }
}

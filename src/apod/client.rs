// SPDX-License-Identifier: MPL-2.0
//! HTTP fetchers for the APOD backend.
//!
//! The backend exposes three endpoints:
//!
//! - `GET /api/apod/today`
//! - `GET /api/apod?date=YYYY-MM-DD`
//! - `GET /api/apod/recent?count=N`
//!
//! Each call is a single request with no retry, no response caching and no
//! explicit timeout. Bodies are read as text and validated into
//! [`PictureRecord`]s before they leave this module.

use super::record::PictureRecord;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend used when neither the CLI nor `settings.toml` names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const USER_AGENT: &str = concat!("apod_explorer/", env!("CARGO_PKG_VERSION"));

/// Number of entries the recent gallery can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RecentCount {
    Five,
    #[default]
    Ten,
    Twenty,
    Thirty,
}

impl RecentCount {
    pub const ALL: [RecentCount; 4] = [
        RecentCount::Five,
        RecentCount::Ten,
        RecentCount::Twenty,
        RecentCount::Thirty,
    ];

    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            RecentCount::Five => 5,
            RecentCount::Ten => 10,
            RecentCount::Twenty => 20,
            RecentCount::Thirty => 30,
        }
    }
}

impl TryFrom<u32> for RecentCount {
    type Error = String;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        RecentCount::ALL
            .into_iter()
            .find(|count| count.get() == value)
            .ok_or_else(|| format!("unsupported recent count: {value} (expected 5, 10, 20 or 30)"))
    }
}

impl From<RecentCount> for u32 {
    fn from(count: RecentCount) -> Self {
        count.get()
    }
}

impl fmt::Display for RecentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Stateless request/response wrapper around the backend.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so a clone can be moved into each spawned request.
#[derive(Debug, Clone)]
pub struct ApodClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApodClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn today_url(&self) -> String {
        format!("{}/api/apod/today", self.base_url)
    }

    #[must_use]
    pub fn date_url(&self, date: NaiveDate) -> String {
        format!("{}/api/apod?date={}", self.base_url, date.format("%Y-%m-%d"))
    }

    #[must_use]
    pub fn recent_url(&self, count: RecentCount) -> String {
        format!("{}/api/apod/recent?count={}", self.base_url, count.get())
    }

    /// Fetches today's record.
    pub async fn today(&self) -> Result<PictureRecord> {
        let body = self.get_text(&self.today_url()).await?;
        parse_record(&body)
    }

    /// Fetches the record published on `date`.
    pub async fn by_date(&self, date: NaiveDate) -> Result<PictureRecord> {
        let body = self.get_text(&self.date_url(date)).await?;
        parse_record(&body)
    }

    /// Fetches the most recent `count` records.
    pub async fn recent(&self, count: RecentCount) -> Result<Vec<PictureRecord>> {
        let body = self.get_text(&self.recent_url(count)).await?;
        parse_recent(&body)
    }

    /// Downloads raw bytes (used for picture previews).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::from_status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "requesting");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "backend returned an error status");
            return Err(Error::from_status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Parses a single-record response body.
pub fn parse_record(body: &str) -> Result<PictureRecord> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    PictureRecord::from_value(value)
}

/// Parses a recent-records response body.
///
/// A bare object is accepted and normalized to a one-element list. Entries
/// that fail validation are skipped; if every entry of a non-empty payload is
/// invalid, the whole response is rejected.
pub fn parse_recent(body: &str) -> Result<Vec<PictureRecord>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        object @ serde_json::Value::Object(_) => vec![object],
        other => {
            return Err(Error::Parse(format!(
                "expected a record or a list of records, got {other}"
            )))
        }
    };

    let total = entries.len();
    let mut last_error = None;
    let records: Vec<PictureRecord> = entries
        .into_iter()
        .filter_map(|entry| match PictureRecord::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "skipping invalid recent entry");
                last_error = Some(err);
                None
            }
        })
        .collect();

    match last_error {
        Some(err) if records.is_empty() && total > 0 => Err(err),
        _ => Ok(records),
    }
}

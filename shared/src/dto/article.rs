use crate::dto::common::null_as_default;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Article authored by a user, as served by `/api/user/articles/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    /// `None` when the backend sent `null` or left the field out; a `null`
    /// is written back as `null`.
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub view_count: u64,
    /// Timestamp string exactly as the backend sent it.
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleDto {
    /// `created_at` as `YYYY-MM-DD HH:MM`, or the raw string when it is
    /// neither RFC 3339 nor a naive ISO-8601 timestamp.
    pub fn created_at_display(&self) -> String {
        const FORMAT: &str = "%Y-%m-%d %H:%M";
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return dt.format(FORMAT).to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return dt.format(FORMAT).to_string();
        }
        self.created_at.clone()
    }

    /// Cover image URL, if the article has a non-empty one.
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_image.as_deref().filter(|url| !url.is_empty())
    }
}

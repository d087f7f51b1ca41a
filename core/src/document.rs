use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type DocumentId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "actual" => Ok(DocumentStatus::Actual),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "banned" => Ok(DocumentStatus::Banned),
            "removed" => Ok(DocumentStatus::Removed),
            other => Err(format!("unknown document status: {other}")),
        }
    }
}

/// Per-document metadata captured at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// A ranked search hit. Produced per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Truncating integer mean; an empty list rates 0.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[1, 2, 3]), 2);
        assert_eq!(average_rating(&[2, 3, 7]), 4);
        assert_eq!(average_rating(&[-6, 3, 0]), -1);
        assert_eq!(average_rating(&[8, -3]), 2);
    }

    #[test]
    fn average_rating_of_nothing_is_zero() {
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn average_rating_does_not_overflow() {
        assert_eq!(average_rating(&[i32::MAX, i32::MAX]), i32::MAX);
    }

    #[test]
    fn document_prints_in_console_format() {
        let doc = Document { id: 3, relevance: 0.5, rating: -1 };
        assert_eq!(doc.to_string(), "{ document_id = 3, relevance = 0.5, rating = -1 }");
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("BANNED".parse::<DocumentStatus>(), Ok(DocumentStatus::Banned));
        assert_eq!("actual".parse::<DocumentStatus>(), Ok(DocumentStatus::Actual));
        assert!("deleted".parse::<DocumentStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Irrelevant).unwrap();
        assert_eq!(json, "\"irrelevant\"");
        let back: DocumentStatus = serde_json::from_str("\"removed\"").unwrap();
        assert_eq!(back, DocumentStatus::Removed);
    }
}

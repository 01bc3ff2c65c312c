use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Opaque identifier of a visit record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(String);

impl VisitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VisitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One record of presence in a country on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryVisit {
    pub id: VisitId,

    /// ISO 3166 alpha-2 style code, opaque to the ledger
    pub country_code: String,

    /// Calendar day of the visit
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
}

impl CountryVisit {
    pub fn new(id: VisitId, country_code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            country_code: country_code.into(),
            date,
        }
    }
}

/// A stored record that breaks the ledger's data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecord {
    #[error("visit at position {position} has a blank id")]
    BlankId { position: usize },

    #[error("visit {id} has a blank country code")]
    BlankCountryCode { id: VisitId },

    #[error("visit id {id} appears more than once")]
    DuplicateId { id: VisitId },
}

/// Persisted ledger document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub visits: Vec<CountryVisit>,
}

impl LedgerDocument {
    /// Check every record and hand back the visits.
    ///
    /// The first bad record rejects the whole document; nothing is skipped.
    pub fn into_visits(self) -> Result<Vec<CountryVisit>, InvalidRecord> {
        let mut seen: HashSet<&VisitId> = HashSet::with_capacity(self.visits.len());
        for (position, visit) in self.visits.iter().enumerate() {
            if visit.id.as_str().trim().is_empty() {
                return Err(InvalidRecord::BlankId { position });
            }
            if visit.country_code.trim().is_empty() {
                return Err(InvalidRecord::BlankCountryCode {
                    id: visit.id.clone(),
                });
            }
            if !seen.insert(&visit.id) {
                return Err(InvalidRecord::DuplicateId {
                    id: visit.id.clone(),
                });
            }
        }
        drop(seen);
        Ok(self.visits)
    }
}

/// Parse a stored date as a calendar day.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; the timestamp is reduced to
/// the day in its own offset. A `Z` timestamp therefore lands on its UTC day:
/// local midnight written with JavaScript's `toISOString()` east of UTC reads
/// back as the previous day. Writers should store plain `YYYY-MM-DD`.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn deserialize_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_serializes_as_calendar_day() {
        let visit = CountryVisit::new(
            VisitId::from("a1"),
            "US",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );

        let json = serde_json::to_value(&visit).unwrap();
        assert_eq!(json["id"], "a1");
        assert_eq!(json["countryCode"], "US");
        assert_eq!(json["date"], "2024-01-15");
    }

    #[test]
    fn test_timestamp_is_reduced_to_its_day() {
        let json = r#"{"id":"x","countryCode":"FR","date":"2024-02-10T23:30:00+01:00"}"#;
        let visit: CountryVisit = serde_json::from_str(json).unwrap();
        assert_eq!(visit.date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let json = r#"{"id":"x","countryCode":"FR","date":"next tuesday"}"#;
        let result: Result<CountryVisit, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_utc_timestamp_keeps_its_utc_day() {
        // Local midnight in UTC+9 serialized by toISOString()
        let json = r#"{"id":"x","countryCode":"JP","date":"2024-03-31T15:00:00.000Z"}"#;
        let visit: CountryVisit = serde_json::from_str(json).unwrap();
        assert_eq!(visit.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    fn document(records: &[(&str, &str)]) -> LedgerDocument {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        LedgerDocument {
            visits: records
                .iter()
                .map(|(id, code)| CountryVisit::new(VisitId::from(*id), *code, date))
                .collect(),
        }
    }

    #[test]
    fn test_valid_document_yields_visits() {
        let visits = document(&[("a", "US"), ("b", "FR")]).into_visits().unwrap();
        assert_eq!(visits.len(), 2);
    }

    #[test]
    fn test_blank_country_code_is_rejected() {
        assert_eq!(
            document(&[("a", "US"), ("b", "  ")]).into_visits(),
            Err(InvalidRecord::BlankCountryCode { id: VisitId::from("b") })
        );
        assert_eq!(
            document(&[("a", "")]).into_visits(),
            Err(InvalidRecord::BlankCountryCode { id: VisitId::from("a") })
        );
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        assert_eq!(
            document(&[("a", "US"), ("b", "FR"), ("a", "DE")]).into_visits(),
            Err(InvalidRecord::DuplicateId { id: VisitId::from("a") })
        );
    }

    #[test]
    fn test_blank_id_is_rejected() {
        assert_eq!(
            document(&[("a", "US"), (" ", "FR")]).into_visits(),
            Err(InvalidRecord::BlankId { position: 1 })
        );
    }

    #[test]
    fn test_missing_visits_field_is_empty_ledger() {
        let doc: LedgerDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.visits.is_empty());
    }
}

//! Offer view entity returned by the top-offers listing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an offer as reported by the analytics service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OfferStatus {
    Vigente,
    Expirado,
}

impl OfferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vigente => "VIGENTE",
            Self::Expirado => "EXPIRADO",
        }
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VIGENTE" => Ok(Self::Vigente),
            "EXPIRADO" => Ok(Self::Expirado),
            other => Err(format!(
                "unknown offer status '{other}', expected VIGENTE or EXPIRADO"
            )),
        }
    }
}

/// Company that publishes an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    /// Business category (rubro) of the company.
    pub rubro: String,
}

/// A single row of the top-viewed offers listing.
///
/// `views` and `redeemed` are totals computed by the service; the client never
/// aggregates them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferViewRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub status: OfferStatus,
    pub company: Company,
    pub views: u64,
    pub redeemed: u64,
}

impl OfferViewRecord {
    pub fn rubro(&self) -> &str {
        &self.company.rubro
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("vigente".parse::<OfferStatus>(), Ok(OfferStatus::Vigente));
        assert_eq!("EXPIRADO".parse::<OfferStatus>(), Ok(OfferStatus::Expirado));
        assert!("paused".parse::<OfferStatus>().is_err());
    }

    #[test]
    fn test_record_deserializes_without_image() {
        let json = r#"{
            "id": 7,
            "title": "2x1 cinema",
            "status": "VIGENTE",
            "company": { "name": "Cine Sur", "rubro": "Entretenimiento" },
            "views": 120,
            "redeemed": 14
        }"#;

        let record: OfferViewRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 7);
        assert!(record.image.is_none());
        assert_eq!(record.status, OfferStatus::Vigente);
        assert_eq!(record.rubro(), "Entretenimiento");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{
            "id": 1, "title": "x", "status": "PAUSED",
            "company": { "name": "a", "rubro": "b" },
            "views": 0, "redeemed": 0
        }"#;

        assert!(serde_json::from_str::<OfferViewRecord>(json).is_err());
    }
}

//! Rubro/status filtering of the offers listing.
//!
//! The same filter is used two ways: serialized into the `search`/`status`
//! query parameters of the listing request, and applied locally to an already
//! fetched page via [`filter_offers`].

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::{OfferStatus, OfferViewRecord};

/// Wire value meaning "do not filter on this attribute".
pub const ALL: &str = "All";

/// Either no restriction or a single accepted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(ALL) {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

/// Filter applied to the offers listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    pub rubro: Choice<String>,
    pub status: Choice<OfferStatus>,
}

impl OfferFilter {
    /// The identity filter (`All`/`All`).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_rubro(mut self, rubro: impl Into<String>) -> Self {
        self.rubro = Choice::Only(rubro.into());
        self
    }

    pub fn with_status(mut self, status: OfferStatus) -> Self {
        self.status = Choice::Only(status);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.rubro == Choice::All && self.status == Choice::All
    }

    pub fn matches(&self, record: &OfferViewRecord) -> bool {
        let rubro_ok = match &self.rubro {
            Choice::All => true,
            Choice::Only(rubro) => record.rubro() == rubro,
        };
        rubro_ok && self.status.accepts(&record.status)
    }
}

/// Returns the records of `base` accepted by `filter`, in their original order.
///
/// `base` is never modified.
pub fn filter_offers(base: &[OfferViewRecord], filter: &OfferFilter) -> Vec<OfferViewRecord> {
    base.iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

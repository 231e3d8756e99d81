//! Query string of the listing endpoint.

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::OfferStatus;
use crate::domain::filter::{Choice, OfferFilter};

/// `?pag=<n>&search=<rubro|All>&status=<status|All>`
///
/// Filter choices are written through their `Display` form so that an
/// unrestricted attribute goes on the wire as the literal `All`.
#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct OffersViewsQuery {
    pub pag: u32,

    #[serde_as(as = "DisplayFromStr")]
    pub search: Choice<String>,

    #[serde_as(as = "DisplayFromStr")]
    pub status: Choice<OfferStatus>,
}

impl OffersViewsQuery {
    pub fn new(page: u32, filter: &OfferFilter) -> Self {
        Self {
            pag: page,
            search: filter.rubro.clone(),
            status: filter.status.clone(),
        }
    }
}

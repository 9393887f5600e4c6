//! Domain types for reseller units.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, serialized as a two-element array `[lat, lng]`.
///
/// Both coordinates are always replaced together; there is no way to update
/// only one of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    #[must_use]
    pub fn lat(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn lng(self) -> f64 {
        self.1
    }

    /// Whether latitude is in [-90, 90] and longitude in [-180, 180].
    ///
    /// This is a form-level check, not a constructor invariant: the domain
    /// model itself does not reject out-of-range coordinates.
    #[must_use]
    pub fn in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.0) && (-180.0..=180.0).contains(&self.1)
    }
}

/// A reseller unit as exposed by the API and held in the store.
///
/// `unit_type` is a category by convention ("Sede Principal",
/// "Unidade Regional"); it drives filtering and presentation only, never
/// structural differences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reseller {
    /// Assigned by the persistence layer, immutable once created.
    pub id: i64,
    pub name: String,
    /// Free-text address; also the haystack for region substring filtering.
    pub address: String,
    pub phone: String,
    pub email: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Data URI or URL.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
    /// Coverage circle radius in kilometers.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coverage_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub show_coverage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub covered_cities: Option<Vec<String>>,
}

/// Input for creating a reseller; the persistence layer assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReseller {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub position: Position,
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coverage_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub show_coverage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub covered_cities: Option<Vec<String>>,
}

/// Partial update: only present fields change. A present `position` replaces
/// both coordinates atomically.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResellerPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub position: Option<Position>,
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub coverage_radius: Option<f64>,
    pub show_coverage: Option<bool>,
    pub covered_cities: Option<Vec<String>>,
}

impl ResellerPatch {
    /// True when no field is present, i.e. the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

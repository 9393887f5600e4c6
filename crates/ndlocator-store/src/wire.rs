//! Wire representation of the `resellers` collection.
//!
//! The remote store flattens the coordinate pair into two scalar columns
//! (`position_lat`, `position_lng`); translation between that shape and the
//! domain `Position` happens here, in both directions. The coverage columns
//! (`coverageRadius`, `showCoverage`, `coveredCities`) keep their camelCase
//! names on the wire.

use ndlocator_core::{NewReseller, Position, Reseller, ResellerPatch};
use serde::{Deserialize, Serialize};

/// A row of the `resellers` collection as the remote returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResellerRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub position_lat: f64,
    pub position_lng: f64,
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, rename = "coverageRadius")]
    pub coverage_radius: Option<f64>,
    #[serde(default, rename = "showCoverage")]
    pub show_coverage: Option<bool>,
    #[serde(default, rename = "coveredCities")]
    pub covered_cities: Option<Vec<String>>,
}

impl ResellerRow {
    /// Reconstructs the domain record, rebuilding the coordinate pair.
    #[must_use]
    pub fn into_domain(self) -> Reseller {
        Reseller {
            id: self.id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            position: Position(self.position_lat, self.position_lng),
            unit_type: self.unit_type,
            website: self.website,
            description: self.description,
            photo: self.photo,
            coverage_radius: self.coverage_radius,
            show_coverage: self.show_coverage,
            covered_cities: self.covered_cities,
        }
    }
}

/// Insert payload: a new record with the pair already flattened.
#[derive(Debug, Clone, Serialize)]
pub struct NewResellerRow {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub position_lat: f64,
    pub position_lng: f64,
    #[serde(rename = "type")]
    pub unit_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "coverageRadius", skip_serializing_if = "Option::is_none")]
    pub coverage_radius: Option<f64>,
    #[serde(rename = "showCoverage", skip_serializing_if = "Option::is_none")]
    pub show_coverage: Option<bool>,
    #[serde(rename = "coveredCities", skip_serializing_if = "Option::is_none")]
    pub covered_cities: Option<Vec<String>>,
}

impl From<&NewReseller> for NewResellerRow {
    fn from(new: &NewReseller) -> Self {
        Self {
            name: new.name.clone(),
            address: new.address.clone(),
            phone: new.phone.clone(),
            email: new.email.clone(),
            position_lat: new.position.lat(),
            position_lng: new.position.lng(),
            unit_type: new.unit_type.clone(),
            website: new.website.clone(),
            description: new.description.clone(),
            photo: new.photo.clone(),
            coverage_radius: new.coverage_radius,
            show_coverage: new.show_coverage,
            covered_cities: new.covered_cities.clone(),
        }
    }
}

/// Update payload: only present fields are serialized. A present `position`
/// in the domain patch becomes both scalar columns here, so the pair is
/// always replaced atomically.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_lng: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "coverageRadius", skip_serializing_if = "Option::is_none")]
    pub coverage_radius: Option<f64>,
    #[serde(rename = "showCoverage", skip_serializing_if = "Option::is_none")]
    pub show_coverage: Option<bool>,
    #[serde(rename = "coveredCities", skip_serializing_if = "Option::is_none")]
    pub covered_cities: Option<Vec<String>>,
}

impl From<&ResellerPatch> for PatchRow {
    fn from(patch: &ResellerPatch) -> Self {
        Self {
            name: patch.name.clone(),
            address: patch.address.clone(),
            phone: patch.phone.clone(),
            email: patch.email.clone(),
            position_lat: patch.position.map(Position::lat),
            position_lng: patch.position.map(Position::lng),
            unit_type: patch.unit_type.clone(),
            website: patch.website.clone(),
            description: patch.description.clone(),
            photo: patch.photo.clone(),
            coverage_radius: patch.coverage_radius,
            show_coverage: patch.show_coverage,
            covered_cities: patch.covered_cities.clone(),
        }
    }
}

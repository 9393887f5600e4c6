//! Branding/customization settings.
//!
//! A single JSON document read once at startup and written wholesale on every
//! change. Missing or unreadable files fall back to defaults; unknown fields
//! are ignored and missing fields defaulted, so there is no schema versioning.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CustomizationError;

/// File name of the persisted customization document, under the data dir.
pub const CUSTOMIZATION_FILE: &str = "nddrones_custom.json";

/// Which tile provider the map uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Traditional,
    Satellite,
}

impl MapType {
    /// Tile URL template for the selected provider.
    #[must_use]
    pub fn tile_url(self) -> &'static str {
        match self {
            MapType::Traditional => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            MapType::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }

    #[must_use]
    pub fn attribution(self) -> &'static str {
        match self {
            MapType::Traditional => "© OpenStreetMap contributors",
            MapType::Satellite => "© Esri © DigitalGlobe © GeoEye",
        }
    }
}

/// UI branding options managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    pub logo: String,
    pub home_title: String,
    pub home_subtitle: String,
    pub btn_buscar: String,
    pub select_estado: String,
    pub select_cidade: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub map_type: MapType,
    pub show_coverage_circles: bool,
    pub color_theme: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            logo: "/nd-logo.svg".to_string(),
            home_title: "Localizador de Unidades".to_string(),
            home_subtitle: "Encontre nossa unidade mais próxima".to_string(),
            btn_buscar: "Buscar Unidades".to_string(),
            select_estado: "Selecione o estado".to_string(),
            select_cidade: "Todas as cidades".to_string(),
            whatsapp_number: String::new(),
            whatsapp_message: String::new(),
            map_type: MapType::Traditional,
            show_coverage_circles: false,
            color_theme: "light".to_string(),
        }
    }
}

/// Loads the customization document, falling back to defaults when the file
/// is absent or unreadable. A parse failure is logged and also degrades to
/// defaults rather than blocking startup.
#[must_use]
pub fn load_customization(path: &Path) -> Customization {
    let Ok(raw) = fs::read_to_string(path) else {
        return Customization::default();
    };

    match serde_json::from_str(&raw) {
        Ok(custom) => custom,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "invalid customization file, using defaults");
            Customization::default()
        }
    }
}

/// Writes the whole document, replacing any previous contents.
///
/// # Errors
///
/// Returns [`CustomizationError`] if serialization or the file write fails.
pub fn save_customization(path: &Path, custom: &Customization) -> Result<(), CustomizationError> {
    let raw = serde_json::to_string_pretty(custom).map_err(CustomizationError::Serialize)?;
    fs::write(path, raw).map_err(|source| CustomizationError::Io {
        path: path.display().to_string(),
        source,
    })
}

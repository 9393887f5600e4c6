pub mod app_config;
pub mod config;
pub mod customization;
pub mod error;
pub mod filter;
pub mod reseller;
pub mod search;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use customization::{
    load_customization, save_customization, Customization, MapType, CUSTOMIZATION_FILE,
};
pub use error::{ConfigError, CustomizationError};
pub use filter::{
    apply_filters, free_text_search, FilterCriteria, RegionCode, RegionFilter, SortKey, TypeFilter,
};
pub use reseller::{NewReseller, Position, Reseller, ResellerPatch};
pub use search::{SearchController, Viewport, CLOSE_ZOOM, DEFAULT_ZOOM, REGIONAL_ZOOM};

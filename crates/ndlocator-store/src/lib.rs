pub mod client;
pub mod error;
pub mod fallback;
pub mod store;
pub mod wire;

pub use client::RecordClient;
pub use error::StoreError;
pub use fallback::fallback_resellers;
pub use store::{FetchOutcome, ResellerStore};
pub use wire::{NewResellerRow, PatchRow, ResellerRow};

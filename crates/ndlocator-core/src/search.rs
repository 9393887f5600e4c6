//! Search orchestration: bridges query events to filter state and the map
//! viewport.
//!
//! Filter criteria and viewport are independent pieces of state updated by
//! disjoint event classes; the only ordering rule is that a filter recompute
//! always precedes display.

use serde::Serialize;

use crate::filter::{apply_filters, free_text_search, FilterCriteria};
use crate::reseller::{Position, Reseller};

/// Zoom applied when a text search hits at least one unit.
pub const CLOSE_ZOOM: u8 = 15;

/// Zoom applied when the user asks to center on a supplied coordinate.
pub const REGIONAL_ZOOM: u8 = 12;

/// Initial country-overview zoom.
pub const DEFAULT_ZOOM: u8 = 6;

/// Map viewport: center coordinate and zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Position,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        // ND Drones home region (Patos de Minas), the original map's start point.
        Self {
            center: Position(-18.5833, -46.5167),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Holds the current filter criteria and viewport, and recomputes the visible
/// subset on each event.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    pub criteria: FilterCriteria,
    pub viewport: Viewport,
}

impl SearchController {
    /// Text query submit: recomputes via the free-text variant. With at least
    /// one hit, the viewport recenters on the first result at [`CLOSE_ZOOM`];
    /// with zero hits the viewport is left unchanged and the empty result set
    /// is returned.
    pub fn submit_query(&mut self, resellers: &[Reseller], query: &str) -> Vec<Reseller> {
        let results = free_text_search(resellers, query);
        if let Some(first) = results.first() {
            self.viewport = Viewport {
                center: first.position,
                zoom: CLOSE_ZOOM,
            };
        }
        results
    }

    /// Coordinate query ("search near this address"): moves the viewport to
    /// the supplied pair at [`REGIONAL_ZOOM`] without touching the result list.
    pub fn locate(&mut self, position: Position) {
        self.viewport = Viewport {
            center: position,
            zoom: REGIONAL_ZOOM,
        };
    }

    /// Advanced-filter change: recomputes via the structured variant. The
    /// viewport is not altered.
    pub fn set_criteria(
        &mut self,
        resellers: &[Reseller],
        criteria: FilterCriteria,
    ) -> Vec<Reseller> {
        self.criteria = criteria;
        apply_filters(resellers, &self.criteria)
    }

    /// Resets all filter state to defaults and returns the full list.
    pub fn clear_filters(&mut self, resellers: &[Reseller]) -> Vec<Reseller> {
        self.criteria = FilterCriteria::default();
        resellers.to_vec()
    }
}

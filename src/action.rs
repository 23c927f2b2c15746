//! Actions, grouped into categories by name prefix

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::{OfficeLeaf, RegionCatalog};
use crate::forecast::ForecastCard;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Catalog category =====
    /// Intent: fetch the area catalog (dispatched once at startup)
    CatalogFetch,

    /// Result: catalog loaded (empty when the fetch failed)
    CatalogDidLoad(RegionCatalog),

    // ===== Sidebar category =====
    /// Move the cursor to a visible row
    SidebarSelect(usize),

    /// Toggle the center under the cursor, or select the office under it
    SidebarActivate,

    /// Expand the center under the cursor
    SidebarExpand,

    /// Collapse the center under (or containing) the cursor
    SidebarCollapse,

    // ===== Forecast category =====
    /// Intent: show the forecast for an office (clears the panel, triggers fetch)
    ForecastFetch(OfficeLeaf),

    /// Re-fetch the currently selected office
    ForecastRefresh,

    /// Result: cards built for `code`
    ForecastDidLoad { code: String, cards: Vec<ForecastCard> },

    /// Result: no forecast data for `code`
    ForecastDidError { code: String, error: String },

    /// Scroll the card area by `delta` rows. `last_row` is the index of the
    /// final card row at the width the panel was last drawn with.
    ForecastScroll { delta: i16, last_row: u16 },

    // ===== UI category =====
    /// Move focus between sidebar and forecast panel
    UiFocusToggle,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}

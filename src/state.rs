//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::catalog::{self, CenterNode, OfficeLeaf, RegionCatalog, TreeRow};
use crate::forecast::ForecastCard;

/// Window header text
pub const APP_TITLE: &str = "Weather Forecast App";

/// Which pane receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Sidebar,
    Forecast,
}

impl Focus {
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Sidebar => Focus::Forecast,
            Focus::Forecast => Focus::Sidebar,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Catalog (read-only once loaded) ---
    /// Catalog lifecycle: Empty → Loading → Loaded
    #[debug(skip)]
    pub catalog: DataResource<RegionCatalog>,

    /// Sidebar tree built from the catalog
    #[debug(skip)]
    pub tree: Vec<CenterNode>,

    /// Cursor position in the visible sidebar rows
    #[debug(section = "Sidebar", label = "Cursor", debug_fmt)]
    pub sidebar_selected: usize,

    // --- Forecast ---
    /// Office whose forecast is shown (or being fetched)
    #[debug(section = "Forecast", label = "Office", debug_fmt)]
    pub selected: Option<OfficeLeaf>,

    /// Cards for the selected office; replaced wholesale on every selection
    #[debug(section = "Forecast", label = "Cards", debug_fmt)]
    pub forecast: DataResource<Vec<ForecastCard>>,

    /// First visible card row
    #[debug(section = "Forecast", label = "Scroll", debug_fmt)]
    pub card_scroll: u16,

    #[debug(section = "UI", label = "Focus", debug_fmt)]
    pub focus: Focus,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: DataResource::Empty,
            tree: Vec::new(),
            sidebar_selected: 0,
            selected: None,
            forecast: DataResource::Empty,
            card_scroll: 0,
            focus: Focus::default(),
        }
    }

    /// State with a catalog already loaded, as after startup
    pub fn with_catalog(catalog: RegionCatalog) -> Self {
        Self {
            tree: catalog.build_tree(),
            catalog: DataResource::Loaded(catalog),
            ..Self::new()
        }
    }

    pub fn visible_rows(&self) -> Vec<TreeRow> {
        catalog::visible_rows(&self.tree)
    }

    pub fn cursor_row(&self) -> Option<TreeRow> {
        self.visible_rows().get(self.sidebar_selected).copied()
    }

    /// Cards currently on screen (none while loading or after a failure)
    pub fn cards(&self) -> &[ForecastCard] {
        self.forecast.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.as_ref().is_some_and(|leaf| leaf.code == code)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

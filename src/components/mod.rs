pub mod app_view;
pub mod forecast_panel;
pub mod region_tree;
pub mod theme;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_view::{AppLayout, AppView, AppViewProps, SIDEBAR_WIDTH};
pub use forecast_panel::{ForecastPanel, ForecastPanelProps, card_grid, cards_per_row};
pub use region_tree::{RegionTree, RegionTreeProps, SIDEBAR_HEADING};

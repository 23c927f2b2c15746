//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::catalog::{self, OfficeLeaf, TreeRow};
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Catalog actions =====
        Action::CatalogFetch => {
            state.catalog = DataResource::Loading;
            DispatchResult::changed_with(Effect::LoadCatalog)
        }

        Action::CatalogDidLoad(catalog) => {
            state.tree = catalog.build_tree();
            state.sidebar_selected = 0;
            state.catalog = DataResource::Loaded(catalog);
            DispatchResult::changed()
        }

        // ===== Sidebar actions =====
        Action::SidebarSelect(index) => {
            if index < state.visible_rows().len() && index != state.sidebar_selected {
                state.sidebar_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SidebarActivate => match state.cursor_row() {
            Some(TreeRow::Center(center)) => {
                let node = &mut state.tree[center];
                node.expanded = !node.expanded;
                DispatchResult::changed()
            }
            Some(row @ TreeRow::Office { .. }) => {
                match catalog::leaf_at(&state.tree, row).cloned() {
                    Some(leaf) => select_office(state, leaf),
                    None => DispatchResult::unchanged(),
                }
            }
            None => DispatchResult::unchanged(),
        },

        Action::SidebarExpand => match state.cursor_row() {
            Some(TreeRow::Center(center)) if !state.tree[center].expanded => {
                state.tree[center].expanded = true;
                DispatchResult::changed()
            }
            _ => DispatchResult::unchanged(),
        },

        Action::SidebarCollapse => {
            let center = match state.cursor_row() {
                Some(TreeRow::Center(center)) => center,
                Some(TreeRow::Office { center, .. }) => center,
                None => return DispatchResult::unchanged(),
            };
            if !state.tree[center].expanded {
                return DispatchResult::unchanged();
            }
            state.tree[center].expanded = false;
            state.sidebar_selected = catalog::center_row_index(&state.tree, center);
            DispatchResult::changed()
        }

        // ===== Forecast actions =====
        Action::ForecastFetch(leaf) => select_office(state, leaf),

        Action::ForecastRefresh => match state.selected.clone() {
            Some(leaf) => select_office(state, leaf),
            None => DispatchResult::unchanged(),
        },

        Action::ForecastDidLoad { code, cards } => {
            if !state.is_selected(&code) {
                return DispatchResult::unchanged();
            }
            state.forecast = DataResource::Loaded(cards);
            state.card_scroll = 0;
            DispatchResult::changed()
        }

        Action::ForecastDidError { code, error } => {
            if !state.is_selected(&code) {
                return DispatchResult::unchanged();
            }
            state.forecast = DataResource::Failed(error);
            DispatchResult::changed()
        }

        Action::ForecastScroll { delta, last_row } => {
            let max = (state.cards().len().saturating_sub(1) as i32).min(last_row as i32);
            let next = (state.card_scroll as i32 + delta as i32).clamp(0, max) as u16;
            if next != state.card_scroll {
                state.card_scroll = next;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI actions =====
        Action::UiFocusToggle => {
            state.focus = state.focus.toggle();
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Clear the panel and request the office's forecast.
fn select_office(state: &mut AppState, leaf: OfficeLeaf) -> DispatchResult<Effect> {
    let code = leaf.code.clone();
    state.selected = Some(leaf);
    state.forecast = DataResource::Loading;
    state.card_scroll = 0;
    DispatchResult::changed_with(Effect::LoadForecast { code })
}

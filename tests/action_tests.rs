//! Action and reducer tests using EffectStore and TestHarness

use jma_forecast::{
    action::Action,
    catalog::{Center, Office, OfficeLeaf, RegionCatalog},
    components::{Component, ForecastPanel, ForecastPanelProps, RegionTree, RegionTreeProps},
    effect::Effect,
    forecast::ForecastCard,
    reducer::reducer,
    state::{AppState, Focus},
};
use tui_dispatch::testing::*;
use tui_dispatch::{
    DataResource, EffectStore, NumericComponentId, assert_emitted, assert_not_emitted,
};

fn catalog() -> RegionCatalog {
    RegionCatalog {
        centers: vec![Center {
            code: "010300".into(),
            name: "Tohoku".into(),
            children: vec!["020000".into(), "030000".into()],
        }],
        offices: [("020000", "Aomori"), ("030000", "Iwate")]
            .into_iter()
            .map(|(code, name)| (code.to_string(), Office { name: name.into() }))
            .collect(),
    }
}

fn aomori() -> OfficeLeaf {
    OfficeLeaf {
        code: "020000".into(),
        name: "Aomori".into(),
    }
}

fn card(date: &str, weather: &str) -> ForecastCard {
    ForecastCard {
        date: date.into(),
        weather: weather.into(),
        min_temp: "--".into(),
        max_temp: "--".into(),
    }
}

#[test]
fn test_reducer_catalog_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().catalog.is_empty());

    let result = store.dispatch(Action::CatalogFetch);
    assert!(result.changed, "State should change");
    assert!(store.state().catalog.is_loading());
    assert_eq!(result.effects, vec![Effect::LoadCatalog]);
}

#[test]
fn test_reducer_empty_catalog_still_loads() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::CatalogFetch);
    store.dispatch(Action::CatalogDidLoad(RegionCatalog::default()));

    assert!(store.state().catalog.is_loaded());
    assert!(store.state().tree.is_empty());
    assert!(store.state().cursor_row().is_none());
}

#[test]
fn test_reducer_forecast_fetch_clears_previous_cards() {
    let mut store = EffectStore::new(
        AppState {
            selected: Some(aomori()),
            forecast: DataResource::Loaded(vec![card("2024-05-01", "Sunny")]),
            card_scroll: 1,
            ..Default::default()
        },
        reducer,
    );

    let iwate = OfficeLeaf {
        code: "030000".into(),
        name: "Iwate".into(),
    };
    let result = store.dispatch(Action::ForecastFetch(iwate.clone()));

    assert!(store.state().forecast.is_loading());
    assert!(store.state().cards().is_empty());
    assert_eq!(store.state().card_scroll, 0);
    assert_eq!(store.state().selected.as_ref(), Some(&iwate));
    assert_eq!(
        result.effects,
        vec![Effect::LoadForecast {
            code: "030000".into()
        }]
    );
}

#[test]
fn test_reducer_refresh_refetches_selection() {
    let mut store = EffectStore::new(AppState::with_catalog(catalog()), reducer);

    store.dispatch(Action::ForecastFetch(aomori()));
    store.dispatch(Action::ForecastDidLoad {
        code: "020000".into(),
        cards: vec![card("2024-05-01", "Sunny")],
    });

    let result = store.dispatch(Action::ForecastRefresh);

    assert!(store.state().forecast.is_loading());
    assert_eq!(
        result.effects,
        vec![Effect::LoadForecast {
            code: "020000".into()
        }]
    );
}

#[test]
fn test_reducer_focus_toggle() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().focus, Focus::Sidebar);
    store.dispatch(Action::UiFocusToggle);
    assert_eq!(store.state().focus, Focus::Forecast);
    store.dispatch(Action::UiFocusToggle);
    assert_eq!(store.state().focus, Focus::Sidebar);
}

#[test]
fn test_sidebar_keys() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::with_catalog(catalog()));
    let mut component = RegionTree::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l h", |state, event| {
        let props = RegionTreeProps {
            tree: &state.tree,
            selected: state.sidebar_selected,
            is_focused: true,
            is_loading: false,
            on_select: Action::SidebarSelect,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(2);
    actions.assert_first(Action::SidebarExpand);
    assert_eq!(actions[1], Action::SidebarCollapse);
}

#[test]
fn test_sidebar_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::new(AppState::with_catalog(catalog()));
    let mut component = RegionTree::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l h j", |state, event| {
        let props = RegionTreeProps {
            tree: &state.tree,
            selected: state.sidebar_selected,
            is_focused: false,
            is_loading: false,
            on_select: Action::SidebarSelect,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_forecast_panel_scroll_keys() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = ForecastPanel::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("j k", |state, event| {
        let props = ForecastPanelProps {
            selected: state.selected.as_ref(),
            forecast: &state.forecast,
            scroll: state.card_scroll,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // No cards, so the last row is the first one
    actions.assert_count(2);
    actions.assert_first(Action::ForecastScroll {
        delta: 1,
        last_row: 0,
    });
    assert_eq!(
        actions[1],
        Action::ForecastScroll {
            delta: -1,
            last_row: 0
        }
    );
}

#[test]
fn test_action_categories() {
    let did_load = Action::ForecastDidLoad {
        code: "020000".into(),
        cards: Vec::new(),
    };
    let toggle = Action::UiFocusToggle;
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("forecast_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(Action::SidebarActivate.category(), Some("sidebar"));
    assert_eq!(quit.category(), None);

    assert!(did_load.is_forecast_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::ForecastFetch(aomori()),
        Action::ForecastDidError {
            code: "020000".into(),
            error: "forecast unavailable".into(),
        },
    ];

    assert_emitted!(actions, Action::ForecastFetch(_));
    assert_emitted!(actions, Action::ForecastDidError { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::ForecastDidLoad { .. });
}

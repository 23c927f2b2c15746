//! Render tests using RenderHarness

use jma_forecast::{
    catalog::{Center, Office, OfficeLeaf, RegionCatalog},
    components::{AppView, AppViewProps, Component, SIDEBAR_HEADING},
    forecast::ForecastCard,
    state::{APP_TITLE, AppState},
};
use tui_dispatch::{DataResource, testing::*};

fn catalog() -> RegionCatalog {
    RegionCatalog {
        centers: vec![
            Center {
                code: "010100".into(),
                name: "Hokkaido".into(),
                children: vec!["016000".into()],
            },
            Center {
                code: "010300".into(),
                name: "Tohoku".into(),
                children: vec!["020000".into(), "030000".into()],
            },
        ],
        offices: [("016000", "Ishikari"), ("020000", "Aomori"), ("030000", "Iwate")]
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

fn render(state: &AppState) -> String {
    let mut render = RenderHarness::new(100, 30);
    let mut view = AppView::new();
    render.render_to_string_plain(|frame| {
        let props = AppViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_initial_screen() {
    let output = render(&AppState::default());

    assert!(output.contains(APP_TITLE), "Should show header");
    assert!(output.contains(SIDEBAR_HEADING), "Should show sidebar heading");
    assert!(
        output.contains("Select a region from the sidebar"),
        "Should show hint before any selection:\n{output}"
    );
}

#[test]
fn test_render_catalog_loading() {
    let state = AppState {
        catalog: DataResource::Loading,
        ..Default::default()
    };

    let output = render(&state);

    assert!(output.contains("Loading regions..."), "Should show loading:\n{output}");
}

#[test]
fn test_render_collapsed_tree() {
    let output = render(&AppState::with_catalog(catalog()));

    assert!(output.contains("Hokkaido"));
    assert!(output.contains("Tohoku"));
    assert!(output.contains("010300"), "Center code should be shown");
    assert!(!output.contains("Aomori"), "Collapsed children stay hidden");
}

#[test]
fn test_render_expanded_tree() {
    let mut state = AppState::with_catalog(catalog());
    state.tree[1].expanded = true;

    let output = render(&state);

    assert!(output.contains("Aomori"), "Expanded children shown:\n{output}");
    assert!(output.contains("Iwate"), "Expanded children shown:\n{output}");
    assert!(!output.contains("Ishikari"), "Other center stays collapsed");
}

#[test]
fn test_render_forecast_loading() {
    let state = AppState {
        selected: Some(aomori()),
        forecast: DataResource::Loading,
        ..AppState::with_catalog(catalog())
    };

    let output = render(&state);

    assert!(output.contains("Aomori (020000)"), "Title names the office");
    assert!(output.contains("Loading..."), "Should show placeholder:\n{output}");
}

#[test]
fn test_render_forecast_cards() {
    let state = AppState {
        selected: Some(aomori()),
        forecast: DataResource::Loaded(vec![
            ForecastCard {
                date: "2024-05-01".into(),
                weather: "Sunny".into(),
                min_temp: "8".into(),
                max_temp: "19".into(),
            },
            ForecastCard {
                date: "2024-05-02".into(),
                weather: "Rain".into(),
                min_temp: "--".into(),
                max_temp: "--".into(),
            },
        ]),
        ..AppState::with_catalog(catalog())
    };

    let output = render(&state);

    assert!(output.contains("2024-05-01"));
    assert!(output.contains("2024-05-02"));
    assert!(output.contains("Sunny"));
    assert!(output.contains("Rain"));
    assert!(output.contains("8°C / 19°C"), "Today's temperatures:\n{output}");
    assert!(output.contains("--°C / --°C"), "Placeholder temperatures:\n{output}");
}

#[test]
fn test_render_failed_forecast_is_blank() {
    let state = AppState {
        selected: Some(aomori()),
        forecast: DataResource::Failed("forecast unavailable".into()),
        ..AppState::with_catalog(catalog())
    };

    let output = render(&state);

    assert!(output.contains("Aomori (020000)"));
    assert!(!output.contains("forecast unavailable"), "Errors are not shown");
    assert!(!output.contains("Loading..."));
    assert!(!output.contains("Select a region from the sidebar"));
}

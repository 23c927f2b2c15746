use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout, Position};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::theme::{APP_BG, DIVIDER, HEADER_BG, TEXT_MAIN};
use super::{Component, ForecastPanel, ForecastPanelProps, RegionTree, RegionTreeProps};
use crate::action::Action;
use crate::state::{APP_TITLE, AppState, Focus};

/// Fixed sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 28;

/// Screen regions of the root view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub divider: Rect,
    pub forecast: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(1),    // Panes
            Constraint::Length(1), // Help bar
        ])
        .split(area);
        let panes = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(rows[1]);

        Self {
            header: rows[0],
            sidebar: panes[0],
            divider: panes[1],
            forecast: panes[2],
            status: rows[2],
        }
    }
}

/// Props for AppView - read-only view of state
pub struct AppViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root view: title, region sidebar, forecast cards and help bar
#[derive(Default)]
pub struct AppView {
    sidebar: RegionTree,
    panel: ForecastPanel,
    /// Regions from the last draw, used to route mouse wheel events
    layout: Option<AppLayout>,
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    fn sidebar_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        self.sidebar
            .handle_event(event, sidebar_props(state, true))
            .into_iter()
            .collect()
    }

    fn panel_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        self.panel
            .handle_event(event, panel_props(state, true))
            .into_iter()
            .collect()
    }
}

fn sidebar_props(state: &AppState, is_focused: bool) -> RegionTreeProps<'_> {
    RegionTreeProps {
        tree: &state.tree,
        selected: state.sidebar_selected,
        is_focused,
        is_loading: state.catalog.is_loading(),
        on_select: Action::SidebarSelect,
    }
}

fn panel_props(state: &AppState, is_focused: bool) -> ForecastPanelProps<'_> {
    ForecastPanelProps {
        selected: state.selected.as_ref(),
        forecast: &state.forecast,
        scroll: state.card_scroll,
        is_focused,
    }
}

impl Component<Action> for AppView {
    type Props<'a> = AppViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => return vec![Action::UiFocusToggle],
                KeyCode::Char('r') | KeyCode::F(5) => return vec![Action::ForecastRefresh],
                KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
                _ => {}
            }
        }

        let state = props.state;

        // The wheel scrolls the pane under the pointer, whatever has focus
        if let (EventKind::Scroll { column, row, .. }, Some(layout)) = (event, self.layout) {
            let pointer = Position::new(*column, *row);
            if layout.sidebar.contains(pointer) {
                return self.sidebar_event(event, state);
            }
            if layout.forecast.contains(pointer) {
                return self.panel_event(event, state);
            }
            return Vec::new();
        }

        match state.focus {
            Focus::Sidebar => self.sidebar_event(event, state),
            Focus::Forecast => self.panel_event(event, state),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: AppViewProps<'_>) {
        let state = props.state;
        let layout = AppLayout::new(area);
        self.layout = Some(layout);

        frame.render_widget(Block::default().style(Style::default().bg(APP_BG)), area);

        frame.render_widget(
            Paragraph::new(
                Line::from(Span::styled(
                    APP_TITLE,
                    Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
                ))
                .centered(),
            )
            .style(Style::default().bg(HEADER_BG)),
            layout.header,
        );

        let sidebar_focused = props.is_focused && state.focus == Focus::Sidebar;
        self.sidebar
            .render(frame, layout.sidebar, sidebar_props(state, sidebar_focused));

        frame.render_widget(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(DIVIDER)),
            layout.divider,
        );

        let panel_focused = props.is_focused && state.focus == Focus::Forecast;
        self.panel
            .render(frame, layout.forecast, panel_props(state, panel_focused));

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            layout.status,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("\u{2191}\u{2193}", "move"),
                    StatusBarHint::new("enter", "select"),
                    StatusBarHint::new("tab", "focus"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

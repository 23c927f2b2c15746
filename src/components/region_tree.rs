use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle,
};

use super::Component;
use super::theme::{ACCENT_BLUE, HIGHLIGHT_BG, SIDEBAR_BG, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::catalog::{self, CenterNode, TreeRow};

/// Sidebar heading
pub const SIDEBAR_HEADING: &str = "Select a region";

/// Collapsible center → office tree
pub struct RegionTree {
    list: SelectList,
}

pub struct RegionTreeProps<'a> {
    pub tree: &'a [CenterNode],
    pub selected: usize,
    pub is_focused: bool,
    pub is_loading: bool,
    pub on_select: fn(usize) -> Action,
}

impl Default for RegionTree {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl RegionTree {
    pub fn new() -> Self {
        Self::default()
    }
}

fn row_items(tree: &[CenterNode]) -> Vec<Line<'static>> {
    catalog::visible_rows(tree)
        .into_iter()
        .map(|row| match row {
            TreeRow::Center(idx) => {
                let node = &tree[idx];
                let marker = if node.expanded { "\u{25be} " } else { "\u{25b8} " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(TEXT_DIM)),
                    Span::styled(
                        node.name.clone(),
                        Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", node.code), Style::default().fg(TEXT_DIM)),
                ])
            }
            TreeRow::Office { center, office } => {
                let leaf = &tree[center].offices[office];
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(leaf.name.clone(), Style::default().fg(TEXT_MAIN)),
                ])
            }
        })
        .collect()
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(SIDEBAR_BG),
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(HIGHLIGHT_BG)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        scrollbar: ScrollbarStyle::default(),
    }
}

fn list_behavior() -> SelectListBehavior {
    SelectListBehavior {
        show_scrollbar: true,
        wrap_navigation: false,
    }
}

impl Component<Action> for RegionTree {
    type Props<'a> = RegionTreeProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => vec![Action::SidebarActivate],
                KeyCode::Right | KeyCode::Char('l') => vec![Action::SidebarExpand],
                KeyCode::Left | KeyCode::Char('h') => vec![Action::SidebarCollapse],
                _ => {
                    let items = row_items(props.tree);
                    if items.is_empty() {
                        return Vec::new();
                    }
                    let list_props = SelectListProps {
                        items: &items,
                        count: items.len(),
                        selected: props.selected.min(items.len() - 1),
                        is_focused: true,
                        style: list_style(),
                        behavior: list_behavior(),
                        on_select: props.on_select,
                        render_item: &|item| item.clone(),
                    };
                    self.list.handle_event(event, list_props).into_iter().collect()
                }
            },
            EventKind::Scroll { delta, .. } => {
                let count = catalog::visible_rows(props.tree).len();
                if count == 0 {
                    return Vec::new();
                }
                let next = (props.selected as isize + *delta as isize).clamp(0, count as isize - 1);
                if next as usize == props.selected {
                    Vec::new()
                } else {
                    vec![(props.on_select)(next as usize)]
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(SIDEBAR_BG)), area);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Heading + spacer
            Constraint::Min(1),    // Tree
        ])
        .split(area);

        let heading_style = if props.is_focused {
            Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(SIDEBAR_HEADING, heading_style),
            ])),
            chunks[0],
        );

        let items = row_items(props.tree);
        if items.is_empty() {
            if props.is_loading {
                let loading = Line::from(Span::styled(
                    " Loading regions...",
                    Style::default().fg(TEXT_DIM),
                ));
                frame.render_widget(Paragraph::new(loading), chunks[1]);
            }
            return;
        }

        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.selected.min(items.len() - 1),
            is_focused: props.is_focused,
            style: list_style(),
            behavior: list_behavior(),
            on_select: props.on_select,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, chunks[1], list_props);
    }
}

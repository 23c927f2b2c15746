use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tui_dispatch::{DataResource, EventKind};

use super::Component;
use super::theme::{ACCENT_BLUE, APP_BG, CARD_BG, CARD_BORDER, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::catalog::OfficeLeaf;
use crate::forecast::ForecastCard;
use crate::icons::WeatherCondition;

pub const CARD_WIDTH: u16 = 24;
/// Border 2 + date 1 + icon 1 + weather 3 + temperature 1
pub const CARD_HEIGHT: u16 = 8;
const CARD_GAP: u16 = 2;
const ROW_GAP: u16 = 1;
const PAGE_ROWS: i16 = 3;

pub const SELECT_HINT: &str = "Select a region from the sidebar";

pub struct ForecastPanelProps<'a> {
    pub selected: Option<&'a OfficeLeaf>,
    pub forecast: &'a DataResource<Vec<ForecastCard>>,
    /// First visible card row
    pub scroll: u16,
    pub is_focused: bool,
}

/// Wrapping grid of forecast cards
pub struct ForecastPanel {
    /// Cards per row at the last drawn width
    columns: usize,
}

impl Default for ForecastPanel {
    fn default() -> Self {
        Self { columns: 1 }
    }
}

impl ForecastPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn scroll(&self, delta: i16, card_count: usize) -> Action {
        Action::ForecastScroll {
            delta,
            last_row: last_row(card_count, self.columns),
        }
    }
}

/// Number of cards that fit side by side in `width` columns (at least one).
pub fn cards_per_row(width: u16) -> usize {
    ((width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1) as usize
}

/// Index of the final card row when `per_row` cards fit side by side.
pub fn last_row(count: usize, per_row: usize) -> u16 {
    count.div_ceil(per_row.max(1)).saturating_sub(1) as u16
}

/// Place `count` cards in `area`, skipping the first `scroll` rows.
///
/// Returns `(card index, rect)` for every card at least partly visible.
/// Cards in the last visible row are clipped to the area.
pub fn card_grid(area: Rect, count: usize, scroll: u16) -> Vec<(usize, Rect)> {
    let per_row = cards_per_row(area.width);
    let rows = count.div_ceil(per_row);
    let first_row = (scroll as usize).min(rows.saturating_sub(1));

    let mut placed = Vec::new();
    for index in first_row * per_row..count {
        let row = (index / per_row - first_row) as u16;
        let col = (index % per_row) as u16;

        let y = area.y + row * (CARD_HEIGHT + ROW_GAP);
        if y >= area.bottom() {
            break;
        }
        let x = area.x + col * (CARD_WIDTH + CARD_GAP);
        let width = CARD_WIDTH.min(area.right().saturating_sub(x));
        let height = CARD_HEIGHT.min(area.bottom() - y);
        placed.push((index, Rect::new(x, y, width, height)));
    }
    placed
}

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let count = props.forecast.data().map_or(0, Vec::len);
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(self.scroll(-1, count)),
                KeyCode::Down | KeyCode::Char('j') => Some(self.scroll(1, count)),
                KeyCode::PageUp => Some(self.scroll(-PAGE_ROWS, count)),
                KeyCode::PageDown => Some(self.scroll(PAGE_ROWS, count)),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => Some(self.scroll(*delta as i16, count)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let title = match props.selected {
            Some(leaf) => format!(" {} ({}) ", leaf.name, leaf.code),
            None => " Forecast ".to_string(),
        };
        let title_style = if props.is_focused {
            Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD)
        };
        let block = Block::default()
            .title(Line::from(Span::styled(title, title_style)))
            .padding(ratatui::widgets::Padding::uniform(1))
            .style(Style::default().bg(APP_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.columns = cards_per_row(inner.width);

        match props.forecast {
            DataResource::Empty => render_message(frame, inner, SELECT_HINT),
            DataResource::Loading => render_message(frame, inner, "Loading..."),
            // Failures are only logged; the panel stays blank.
            DataResource::Failed(_) => {}
            DataResource::Loaded(cards) => {
                for (index, rect) in card_grid(inner, cards.len(), props.scroll) {
                    render_card(frame, rect, &cards[index]);
                }
            }
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(TEXT_DIM),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &ForecastCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(CARD_BORDER))
        .style(Style::default().bg(CARD_BG).fg(TEXT_MAIN));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Date
        Constraint::Length(1), // Icon
        Constraint::Min(1),    // Weather text
        Constraint::Length(1), // Temperatures
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                card.date.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        chunks[0],
    );

    let condition = WeatherCondition::from_text(&card.weather);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                condition.icon(),
                Style::default().fg(condition.color()),
            ))
            .centered(),
        ),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(card.weather.clone())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                card.temperature_label(),
                Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        chunks[3],
    );
}

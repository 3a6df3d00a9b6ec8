//! Pure layout functions
//!
//! Rendering and mouse hit-testing both go through these, so a card is hovered
//! exactly where it is drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 5;

/// Top-level areas of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub tabs: Rect,
    pub main: Rect,
    pub status: Rect,
}

pub fn page_layout(area: Rect) -> PageLayout {
    let [tabs, main, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    PageLayout { tabs, main, status }
}

/// Areas of the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsLayout {
    pub header: Rect,
    pub filters: Rect,
    pub grid: Rect,
    /// "+N more" line under the grid
    pub overflow: Rect,
    pub summary: Rect,
}

pub fn skills_layout(area: Rect) -> SkillsLayout {
    let [header, filters, _, grid, overflow, summary] = Layout::vertical([
        Constraint::Length(3), // title + subtitle
        Constraint::Length(1), // filter buttons
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(4), // summary stats
    ])
    .areas(area);
    SkillsLayout {
        header,
        filters,
        grid,
        overflow,
        summary,
    }
}

/// Grid area when the whole `viewport` shows the skills section
pub fn skills_grid(viewport: Rect) -> Rect {
    skills_layout(page_layout(viewport).main).grid
}

/// The rows of the card grid that fit on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWindow {
    pub columns: usize,
    /// Card rows that fit in the grid
    pub rows: usize,
    /// First row on screen, after clamping the requested scroll
    pub first_row: usize,
    /// Card index and its rectangle, for every card on screen
    pub cards: Vec<(usize, Rect)>,
    pub hidden_above: usize,
    pub hidden_below: usize,
}

impl GridWindow {
    /// Largest useful scroll offset for the same grid and card count
    pub fn max_first_row(&self, count: usize) -> usize {
        count.div_ceil(self.columns).saturating_sub(self.rows)
    }

    /// Text for the overflow line, if any card is off screen
    pub fn overflow_label(&self) -> Option<String> {
        match (self.hidden_above, self.hidden_below) {
            (0, 0) => None,
            (0, below) => Some(format!("+{below} more below")),
            (above, 0) => Some(format!("+{above} more above")),
            (above, below) => Some(format!("+{above} more above, +{below} more below")),
        }
    }
}

/// Lay out `count` cards row-major, starting at card row `scroll`.
///
/// `scroll` is clamped so the last row of cards ends the window. Cards
/// outside the window get no rectangle and are counted as hidden.
pub fn grid_window(grid: Rect, count: usize, scroll: usize) -> GridWindow {
    let columns = usize::from((grid.width / CARD_WIDTH).max(1));
    let rows = usize::from(grid.height / CARD_HEIGHT);
    let total_rows = count.div_ceil(columns);
    let first_row = scroll.min(total_rows.saturating_sub(rows));

    let first = (first_row * columns).min(count);
    let shown = (count - first).min(rows * columns);
    let cards = (first..first + shown)
        .map(|index| {
            let column = ((index - first) % columns) as u16;
            let row = ((index - first) / columns) as u16;
            let area = Rect {
                x: grid.x + column * CARD_WIDTH,
                y: grid.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(grid.width),
                height: CARD_HEIGHT,
            };
            (index, area)
        })
        .collect();

    GridWindow {
        columns,
        rows,
        first_row,
        cards,
        hidden_above: first,
        hidden_below: count - first - shown,
    }
}

/// Scroll offset that brings card `index` on screen, moving as little as
/// possible from `scroll`
pub fn scroll_to_card(grid: Rect, count: usize, scroll: usize, index: usize) -> usize {
    let window = grid_window(grid, count, scroll);
    let row = index / window.columns;
    if window.rows == 0 || row < window.first_row {
        row
    } else if row >= window.first_row + window.rows {
        row + 1 - window.rows
    } else {
        window.first_row
    }
}

/// Card window when the whole `viewport` shows the skills section
pub fn grid_window_in(viewport: Rect, count: usize, scroll: usize) -> GridWindow {
    grid_window(skills_grid(viewport), count, scroll)
}

/// Index of the card drawn at the terminal cell (`column`, `row`)
pub fn card_index_at(
    viewport: Rect,
    count: usize,
    scroll: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let position = Position::new(column, row);
    grid_window_in(viewport, count, scroll)
        .cards
        .into_iter()
        .find(|(_, area)| area.contains(position))
        .map(|(index, _)| index)
}

/// Equal-width columns for the summary stats
pub fn summary_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }
    Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_layout() {
        let page = page_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(page.tabs, Rect::new(0, 0, 80, 1));
        assert_eq!(page.main, Rect::new(0, 1, 80, 22));
        assert_eq!(page.status, Rect::new(0, 23, 80, 1));
    }

    fn areas(window: &GridWindow) -> Vec<Rect> {
        window.cards.iter().map(|(_, area)| *area).collect()
    }

    #[test]
    fn test_grid_window_row_major() {
        let grid = Rect::new(0, 10, 50, 20);
        let window = grid_window(grid, 3, 0);
        assert_eq!(
            areas(&window),
            vec![
                Rect::new(0, 10, CARD_WIDTH, CARD_HEIGHT),
                Rect::new(CARD_WIDTH, 10, CARD_WIDTH, CARD_HEIGHT),
                Rect::new(0, 10 + CARD_HEIGHT, CARD_WIDTH, CARD_HEIGHT),
            ]
        );
        assert_eq!(window.overflow_label(), None);
    }

    #[test]
    fn test_grid_window_counts_hidden_cards() {
        let grid = Rect::new(0, 0, 48, CARD_HEIGHT);
        let window = grid_window(grid, 10, 0);
        assert_eq!(window.cards.len(), 2);
        assert_eq!(window.hidden_below, 8);
        assert_eq!(window.overflow_label(), Some("+8 more below".to_owned()));

        let window = grid_window(Rect::new(0, 0, 48, 2), 10, 0);
        assert!(window.cards.is_empty());
        assert_eq!(window.hidden_below, 10);
    }

    #[test]
    fn test_grid_window_scrolls_by_rows() {
        // 3 columns, 2 rows on screen, 14 cards in 5 rows
        let grid = Rect::new(0, 0, 80, 12);
        let window = grid_window(grid, 14, 2);
        let indices: Vec<usize> = window.cards.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(window.cards[0].1, Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT));
        assert_eq!(
            window.overflow_label(),
            Some("+6 more above, +2 more below".to_owned())
        );

        // Scrolling past the end keeps the last row at the bottom
        let window = grid_window(grid, 14, 99);
        assert_eq!(window.first_row, 3);
        assert_eq!(window.max_first_row(14), 3);
        assert_eq!(window.hidden_below, 0);
        assert_eq!(window.overflow_label(), Some("+9 more above".to_owned()));
    }

    #[test]
    fn test_scroll_to_card() {
        let grid = Rect::new(0, 0, 80, 12);
        assert_eq!(scroll_to_card(grid, 14, 0, 4), 0);
        assert_eq!(scroll_to_card(grid, 14, 0, 9), 2);
        assert_eq!(scroll_to_card(grid, 14, 3, 2), 0);
        assert_eq!(scroll_to_card(grid, 14, 2, 7), 2);
    }

    #[test]
    fn test_card_index_at_matches_grid_window() {
        let viewport = Rect::new(0, 0, 100, 40);
        let window = grid_window_in(viewport, 5, 0);
        for (index, area) in &window.cards {
            assert_eq!(
                card_index_at(viewport, 5, 0, area.x, area.y),
                Some(*index)
            );
            assert_eq!(
                card_index_at(viewport, 5, 0, area.right() - 1, area.bottom() - 1),
                Some(*index)
            );
        }
        assert_eq!(card_index_at(viewport, 5, 0, 0, 0), None);
    }

    #[test]
    fn test_card_index_at_follows_scroll() {
        let viewport = Rect::new(0, 0, 80, 24);
        let window = grid_window_in(viewport, 14, 2);
        let (first, area) = window.cards[0];
        assert_eq!(first, 6);
        assert_eq!(card_index_at(viewport, 14, 2, area.x, area.y), Some(6));
        assert_eq!(card_index_at(viewport, 14, 0, area.x, area.y), Some(0));
    }

    #[test]
    fn test_summary_columns() {
        let columns = summary_columns(Rect::new(0, 0, 90, 4), 3);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].width, 30);
        assert!(summary_columns(Rect::new(0, 0, 90, 4), 0).is_empty());
    }
}

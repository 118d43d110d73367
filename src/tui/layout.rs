use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed sidebar width, matching the original layout's narrow nav column.
const SIDEBAR_WIDTH: u16 = 24;

/// Browse-screen layout:
/// - Header bar: top 3 rows (title, username, clock)
/// - Sidebar: fixed-width category nav (left)
/// - Search bar: 3 rows above the content
/// - Content: dashboard sections or category detail
/// - Status bar: bottom row
pub struct BrowseLayout {
    pub header_area: Rect,
    pub sidebar_area: Rect,
    pub search_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
}

impl BrowseLayout {
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header bar
                Constraint::Min(3),    // Body (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_WIDTH), // Category nav
                Constraint::Min(20),               // Main column
            ])
            .split(vertical_chunks[1]);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Content
            ])
            .split(body_chunks[1]);

        Self {
            header_area: vertical_chunks[0],
            sidebar_area: body_chunks[0],
            search_area: main_chunks[0],
            content_area: main_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}

/// A rect of at most `width` x `height`, centered in `area`. Used by the
/// loading, login, and error screens.
pub fn centered_panel(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = BrowseLayout::new(area);

        // Header takes the top 3 rows
        assert_eq!(layout.header_area.y, 0);
        assert_eq!(layout.header_area.height, 3);

        // Status bar is 1 row at the bottom
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Sidebar is fixed width on the left, full body height
        assert_eq!(layout.sidebar_area.x, 0);
        assert_eq!(layout.sidebar_area.width, SIDEBAR_WIDTH);
        assert_eq!(layout.sidebar_area.y, 3);
        assert_eq!(layout.sidebar_area.height, 26);

        // Search bar sits atop the main column
        assert_eq!(layout.search_area.x, SIDEBAR_WIDTH);
        assert_eq!(layout.search_area.y, 3);
        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.width, 76);

        // Content fills the rest
        assert_eq!(layout.content_area.y, 6);
        assert_eq!(layout.content_area.height, 23);
        assert_eq!(layout.content_area.width, 76);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = BrowseLayout::new(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        // Body gets the remaining rows
        assert_eq!(layout.sidebar_area.height, 3);
    }

    #[test]
    fn test_centered_panel_is_centered() {
        let area = Rect::new(0, 0, 100, 30);
        let panel = centered_panel(area, 40, 10);

        assert_eq!(panel, Rect::new(30, 10, 40, 10));
    }

    #[test]
    fn test_centered_panel_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let panel = centered_panel(area, 40, 10);

        assert_eq!(panel, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_centered_panel_respects_area_offset() {
        let area = Rect::new(10, 4, 60, 20);
        let panel = centered_panel(area, 20, 10);

        assert_eq!(panel, Rect::new(30, 9, 20, 10));
    }
}

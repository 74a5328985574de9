//! Render functions for the TUI.
//!
//! Lays out the header, profile sidebar, feed panel and status bar, then
//! draws the composer and help overlays on top when they are open.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{composer, help, posts, profile, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 16;

/// Main render entry point.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[1]);

    profile::render(f, app, columns[0]);
    posts::render(f, app, columns[1]);
    status::render(f, app, rows[2]);

    if app.store.is_composer_open() {
        composer::render(f, app);
    }

    // Help sits above everything, including the composer
    if app.show_help {
        help::render(f, app);
    }
}

/// Brand on the left, help hint on the right.
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" Imago", app.style("brand")),
        Span::styled("  share what you see", app.style("metadata")),
    ]));
    f.render_widget(brand, area);

    let hint = Paragraph::new(Span::styled("[n] new post  [?] help ", app.style("metadata")))
        .alignment(Alignment::Right);
    f.render_widget(hint, area);
}

/// Centered rectangle of at most `width` x `height`, leaving a small margin.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedStore, ImageRef, Tab};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn feed_shows_seed_posts() {
        let app = App::new(FeedStore::seeded());
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Imago"));
        assert!(screen.contains("Maria Santos"));
        assert!(screen.contains("Administrador"));
        assert!(screen.contains("For You"));
    }

    #[test]
    fn following_tab_shows_empty_state() {
        let mut app = App::new(FeedStore::seeded());
        app.set_tab(Tab::Following);
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Follow people to see their posts here!"));
        assert!(!screen.contains("Maria Santos"));
    }

    #[test]
    fn composer_overlay_renders_fields() {
        let mut app = App::new(FeedStore::seeded());
        app.open_composer();
        app.store
            .stage_image(ImageRef::new("data:image/png;base64,AAAA"));
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("New Post"));
        assert!(screen.contains("Caption"));
        assert!(screen.contains("Publish"));
        assert!(screen.contains("image/png"));
    }

    #[test]
    fn tiny_terminal_shows_size_message() {
        let app = App::new(FeedStore::seeded());
        let screen = draw(&app, 40, 10);
        assert!(screen.contains("Terminal too small"));
    }

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 50, 20);
        let rect = centered_rect(80, 30, area);
        assert_eq!(rect.width, 46);
        assert_eq!(rect.height, 18);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 1);
    }
}

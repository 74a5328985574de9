//! Help overlay: feed keys on the left, composer keys and a short
//! "posting a photo" walkthrough on the right.
//!
//! Keys come from the live registry, so config overrides show up here.

use crate::app::App;
use crate::keybindings::{Action, Context};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::render::centered_rect;

const OVERLAY_WIDTH: u16 = 84;
const OVERLAY_HEIGHT: u16 = 24;
const KEY_COLUMN: usize = 14;

/// Bindings as (context, key label, action, description).
type Bindings = Vec<(Context, String, Action, &'static str)>;

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, f.area());
    if overlay.width < 40 || overlay.height < 8 {
        return;
    }

    f.render_widget(Clear, overlay);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(" Imago help (? or Esc to close) ");
    let inner = outer.inner(overlay);
    f.render_widget(outer, overlay);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let bindings = app.keybindings.all_bindings();

    let feed = key_lines(app, &bindings, Context::Global);
    render_pane(f, app, panes[0], " Feed ", feed);

    let mut composer = key_lines(app, &bindings, Context::Composer);
    composer.push(Line::default());
    composer.extend(posting_steps(app, &bindings));
    render_pane(f, app, panes[1], " Composer ", composer);
}

fn render_pane(f: &mut Frame, app: &App, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.style("panel_border"))
        .title(Span::styled(
            title.to_string(),
            app.style("heading").add_modifier(Modifier::BOLD),
        ));
    let visible = block.inner(area).height as usize;
    let scroll = app
        .help_scroll_offset
        .min(lines.len().saturating_sub(visible));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(app.style("body"))
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// One line per action, with every key bound to it joined by " / ".
fn key_lines<'a>(app: &App, bindings: &Bindings, context: Context) -> Vec<Line<'a>> {
    let mut actions: Vec<Action> = Vec::new();
    for (ctx, _, action, _) in bindings {
        if *ctx == context && !actions.contains(action) {
            actions.push(*action);
        }
    }

    actions
        .into_iter()
        .map(|action| {
            let keys = keys_for(bindings, context, action);
            Line::from(vec![
                Span::styled(format!(" {:<w$}", keys, w = KEY_COLUMN), app.style("post_tag")),
                Span::raw(action.describe()),
            ])
        })
        .collect()
}

fn keys_for(bindings: &Bindings, context: Context, action: Action) -> String {
    bindings
        .iter()
        .filter(|(ctx, _, a, _)| *ctx == context && *a == action)
        .map(|(_, key, _, _)| key.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Walkthrough of publishing a post, using whatever keys are bound.
fn posting_steps<'a>(app: &App, bindings: &Bindings) -> Vec<Line<'a>> {
    let new_post = keys_for(bindings, Context::Global, Action::NewPost);
    let confirm = keys_for(bindings, Context::Composer, Action::Confirm);
    let next_field = keys_for(bindings, Context::Composer, Action::NextField);
    let submit = keys_for(bindings, Context::Composer, Action::SubmitPost);

    let steps = [
        format!("1. {} opens the composer", new_post),
        format!("2. Type an image path, {} loads it", confirm),
        format!("3. {} to the caption, write one", next_field),
        "4. Tags are optional: art, travel".to_string(),
        format!("5. {} publishes once image and", submit),
        "   caption are both set".to_string(),
    ];

    let mut lines = vec![Line::from(Span::styled(
        " Posting a photo",
        app.style("heading"),
    ))];
    lines.extend(
        steps
            .into_iter()
            .map(|step| Line::from(Span::styled(format!(" {}", step), app.style("metadata")))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::collections::HashMap;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn help_shows_both_panes_and_walkthrough() {
        let mut app = App::new(FeedStore::seeded());
        app.show_help = true;

        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Feed"));
        assert!(screen.contains("Composer"));
        assert!(screen.contains("Like / unlike post"));
        assert!(screen.contains("Posting a photo"));
    }

    #[test]
    fn keys_for_one_action_share_a_line() {
        let app = App::new(FeedStore::seeded());
        let bindings = app.keybindings.all_bindings();
        let lines = key_lines(&app, &bindings, Context::Global);

        let like = lines
            .iter()
            .map(line_text)
            .find(|l| l.contains("Like / unlike post"))
            .unwrap();
        assert!(like.contains("l / Space"));
    }

    #[test]
    fn walkthrough_follows_overrides() {
        let mut app = App::new(FeedStore::seeded());
        let mut overrides = HashMap::new();
        overrides.insert("new_post".to_string(), "p".to_string());
        app.keybindings.apply_overrides(&overrides);

        let bindings = app.keybindings.all_bindings();
        let steps: Vec<String> = posting_steps(&app, &bindings).iter().map(line_text).collect();
        assert!(steps.iter().any(|s| s.contains("1. p opens the composer")));
    }

    #[test]
    fn very_wide_terminal_does_not_overflow() {
        let mut app = App::new(FeedStore::seeded());
        app.show_help = true;
        let screen = draw(&app, 20_000, 30);
        assert!(screen.contains("Posting a photo"));
    }
}

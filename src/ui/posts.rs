use crate::app::App;
use crate::feed::{Post, Tab};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

const EMPTY_FOLLOWING: &str = "Follow people to see their posts here!";
const LIKED_HEART: &str = "♥";
const UNLIKED_HEART: &str = "♡";

/// Render the feed panel: tab strip plus the post list for the active tab.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_tabs(f, app, chunks[0]);

    match app.store.tab() {
        Tab::ForYou => render_post_list(f, app, chunks[1]),
        Tab::Following => render_empty_following(f, app, chunks[1]),
    }
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.store.tab().index())
        .style(app.style("tab_idle"))
        .highlight_style(app.style("tab_active"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border")),
        );
    f.render_widget(tabs, area);
}

fn render_empty_following(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border"));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Vertically center the single line
    let y = inner.y + inner.height / 2;
    let line_area = Rect::new(inner.x, y, inner.width, 1.min(inner.height));
    let msg = Paragraph::new(Span::styled(EMPTY_FOLLOWING, app.style("empty_state")))
        .alignment(Alignment::Center);
    f.render_widget(msg, line_area);
}

fn render_post_list(f: &mut Frame, app: &App, area: Rect) {
    let posts = app.store.visible_posts();
    // Borders plus the two-column indent
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = if posts.is_empty() {
        vec![ListItem::new(Span::styled("No posts yet", app.style("empty_state")))]
    } else {
        posts
            .iter()
            .map(|post| ListItem::new(post_card(app, post, text_width)))
            .collect()
    };

    let title = format!(" {} ({}) ", app.store.tab().title(), posts.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("panel_border_focused"))
                .title(title),
        )
        .highlight_style(app.style("body").add_modifier(Modifier::REVERSED))
        .highlight_symbol("▌");

    let mut state = ListState::default();
    if !posts.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// One post as a block of lines: author, image, counters, caption, tags.
fn post_card<'a>(app: &App, post: &'a Post, width: usize) -> Text<'a> {
    let mut lines = Vec::with_capacity(6);

    lines.push(Line::from(vec![
        Span::styled(post.author.name.as_str(), app.style("post_author")),
        Span::styled(format!(" · {}", post.timestamp), app.style("post_meta")),
    ]));

    lines.push(Line::from(Span::styled(
        format!("  [{}]", post.image.describe()),
        app.style("post_image"),
    )));

    let (heart, heart_style) = if post.is_liked() {
        (LIKED_HEART, app.style("post_liked"))
    } else {
        (UNLIKED_HEART, app.style("post_counter"))
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{} {}", heart, post.likes()), heart_style),
        Span::styled(format!("   {} comments", post.comments), app.style("post_counter")),
    ]));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            truncate_to_width(&post.caption, width).into_owned(),
            app.style("post_caption"),
        ),
    ]));

    if !post.tags.is_empty() {
        let tags = post
            .tags
            .iter()
            .map(|t| format!("#{}", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate_to_width(&tags, width).into_owned(), app.style("post_tag")),
        ]));
    }

    lines.push(Line::default());
    Text::from(lines)
}

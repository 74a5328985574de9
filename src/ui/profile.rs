use crate::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the current user's sidebar card
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let profile = app.store.profile();
    let width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&profile.name, width).into_owned(),
            app.style("profile_name"),
        )),
        Line::from(Span::styled(
            format!("[{}]", profile.avatar.describe()),
            app.style("post_image"),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(profile.followers.to_string(), app.style("profile_stat")),
            Span::styled(" followers", app.style("metadata")),
        ]),
        Line::from(vec![
            Span::styled(profile.following.to_string(), app.style("profile_stat")),
            Span::styled(" following", app.style("metadata")),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("{} posts in feed", app.store.posts().len()),
            app.style("metadata"),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border"))
            .title(" Profile "),
    );
    f.render_widget(paragraph, area);
}

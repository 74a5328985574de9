//! Composer overlay: image path, caption and tags fields plus the
//! publish button.

use crate::app::{App, ComposerField};
use crate::util::tail_to_width;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::render::centered_rect;

const LABEL_WIDTH: usize = 10;

pub fn render(f: &mut Frame, app: &App) {
    let overlay = centered_rect(64, 16, f.area());
    if overlay.width < 30 || overlay.height < 12 {
        return;
    }

    f.render_widget(Clear, overlay);

    let draft = app.store.draft();
    let focus = app.composer.focus;
    // Borders, label column, cursor
    let field_width = (overlay.width as usize).saturating_sub(2 + LABEL_WIDTH + 1);

    let image_status = if app.composer.pending_reads > 0 {
        Span::styled("loading...", app.style("metadata"))
    } else if let Some(image) = &draft.image {
        Span::styled(format!("✓ {}", image.describe()), app.style("post_image"))
    } else {
        Span::styled("no image yet, Enter to load", app.style("metadata"))
    };

    let publish_style = if app.store.can_submit() {
        app.style("button_enabled")
    } else {
        app.style("button_disabled")
    };

    let lines = vec![
        field_line(
            app,
            "Image",
            &app.composer.image_path,
            field_width,
            focus == ComposerField::Image,
        ),
        Line::from(vec![Span::raw(" ".repeat(LABEL_WIDTH)), image_status]),
        Line::default(),
        field_line(
            app,
            "Caption",
            &draft.caption,
            field_width,
            focus == ComposerField::Caption,
        ),
        Line::default(),
        field_line(
            app,
            "Tags",
            &draft.tags,
            field_width,
            focus == ComposerField::Tags,
        ),
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled("comma separated", app.style("metadata")),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("[ Publish ]", publish_style),
            Span::styled("  Ctrl+S publish  Esc cancel", app.style("metadata")),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.style("composer_border"))
                .title(" New Post "),
        )
        .style(app.style("body"));

    f.render_widget(paragraph, overlay);
}

/// A labelled single-line input. Long values show their tail so the
/// cursor end stays visible.
fn field_line<'a>(
    app: &App,
    label: &str,
    value: &'a str,
    width: usize,
    focused: bool,
) -> Line<'a> {
    let (style, cursor): (Style, &str) = if focused {
        (app.style("field_focused"), "_")
    } else {
        (app.style("field_idle"), "")
    };
    Line::from(vec![
        Span::styled(format!("{:<w$}", label, w = LABEL_WIDTH), app.style("heading")),
        Span::styled(tail_to_width(value, width), style),
        Span::styled(cursor, style),
    ])
}

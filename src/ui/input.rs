//! Input handling for the TUI.
//!
//! Routes key presses to the help overlay, the composer, or the feed,
//! depending on what is on screen.

use crate::app::{App, AppEvent, ComposerField};
use crate::feed::Tab;
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::helpers::spawn_image_read;
use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if app.show_help {
        return handle_help_input(app, code);
    }

    if app.store.is_composer_open() {
        handle_composer_input(app, code, modifiers, event_tx);
        return Action::Continue;
    }

    handle_feed_input(app, code, modifiers)
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input on the feed screen.
fn handle_feed_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let action = app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Global);

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::ToggleLike) => {
            if app.toggle_selected_like().is_none() {
                app.set_status("Nothing to like here");
            }
        }
        Some(KbAction::ShowForYou) => app.set_tab(Tab::ForYou),
        Some(KbAction::ShowFollowing) => app.set_tab(Tab::Following),
        Some(KbAction::NextTab) => app.next_tab(),
        Some(KbAction::NewPost) => app.open_composer(),
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        // Composer-only actions are never bound in the feed context
        Some(_) | None => {}
    }
    Action::Continue
}

/// Handle input while the composer is open.
///
/// Bound keys act on the composer; any other printable character is typed
/// into the focused field.
fn handle_composer_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let action = app
        .keybindings
        .action_for_key(code, modifiers, KbContext::Composer);

    match action {
        Some(KbAction::CancelComposer) => app.cancel_composer(),
        Some(KbAction::NextField) => app.composer.focus = app.composer.focus.next(),
        Some(KbAction::PrevField) => app.composer.focus = app.composer.focus.prev(),
        Some(KbAction::SubmitPost) => try_submit(app),
        Some(KbAction::Confirm) => match app.composer.focus {
            ComposerField::Image => spawn_image_read(app, event_tx),
            ComposerField::Caption | ComposerField::Tags => try_submit(app),
        },
        Some(_) => {}
        None => match code {
            KeyCode::Backspace => app.composer_backspace(),
            KeyCode::Char(c)
                if !c.is_control()
                    && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                app.composer_insert(c)
            }
            _ => {}
        },
    }
}

/// Publish if the draft is complete; otherwise the submit control is inert.
fn try_submit(app: &mut App) {
    if app.submit_post().is_none() {
        tracing::debug!(
            has_image = app.store.draft().image.is_some(),
            caption_len = app.store.draft().caption.len(),
            "Publish unavailable"
        );
    }
}

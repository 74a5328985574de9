use crate::config::Config;
use crate::feed::{FeedStore, ImageRef, Post, PostId, Tab};
use crate::keybindings::KeybindingRegistry;
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::borrow::Cow;
use std::path::PathBuf;
use tokio::time::Instant;

/// How long a status message stays visible.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Composer State
// ============================================================================

/// Input field focused in the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerField {
    #[default]
    Image,
    Caption,
    Tags,
}

impl ComposerField {
    pub fn next(self) -> Self {
        match self {
            Self::Image => Self::Caption,
            Self::Caption => Self::Tags,
            Self::Tags => Self::Image,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Image => Self::Tags,
            Self::Caption => Self::Image,
            Self::Tags => Self::Caption,
        }
    }
}

/// Terminal-side composer state that is not part of the draft itself.
///
/// The draft (image, caption, tags) lives in the store. This holds the file
/// path being typed and which field has focus.
#[derive(Debug, Default)]
pub struct ComposerUi {
    pub focus: ComposerField,
    /// Path typed into the image field, read when the user confirms.
    pub image_path: String,
    /// Image reads spawned and not yet reported back.
    pub pending_reads: usize,
}

// ============================================================================
// Events
// ============================================================================

/// Events from background tasks, applied on the UI loop.
pub enum AppEvent {
    /// An image file was read and encoded.
    ImageStaged { path: PathBuf, image: ImageRef },
    /// Reading or encoding an image failed.
    ImageStageFailed { path: PathBuf, error: String },
    /// A background task panicked.
    TaskPanicked { task: &'static str, error: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    pub store: FeedStore,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    pub keybindings: KeybindingRegistry,

    /// Limit passed to image reads.
    pub max_image_bytes: u64,

    // UI State
    /// Index into `store.visible_posts()`.
    pub selected: usize,
    pub composer: ComposerUi,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,

    /// Whether the help overlay is currently displayed.
    pub show_help: bool,
    /// Scroll offset in the help screen for long keybinding lists.
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(store: FeedStore) -> Self {
        Self {
            store,
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings: KeybindingRegistry::new(),
            max_image_bytes: crate::feed::DEFAULT_MAX_IMAGE_BYTES,
            selected: 0,
            composer: ComposerUi::default(),
            status_message: None,
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
        }
    }

    /// Apply theme, image limit and keybinding overrides from config.
    ///
    /// Returns warnings for anything that could not be applied.
    pub fn apply_config(&mut self, config: &Config) -> Vec<String> {
        let mut warnings = Vec::new();

        match ThemeVariant::from_str_name(&config.theme) {
            Some(variant) => self.set_theme(variant),
            None => warnings.push(format!("Unknown theme '{}', using dark", config.theme)),
        }
        self.max_image_bytes = config.max_image_bytes;
        warnings.extend(self.keybindings.apply_overrides(&config.keybindings));

        warnings
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant. Returns its name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ------------------------------------------------------------------------
    // Feed navigation
    // ------------------------------------------------------------------------

    pub fn selected_post(&self) -> Option<&Post> {
        self.store.visible_posts().get(self.selected)
    }

    pub fn nav_down(&mut self) {
        let len = self.store.visible_posts().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the visible list.
    pub fn clamp_selection(&mut self) {
        let len = self.store.visible_posts().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.store.set_tab(tab);
        self.clamp_selection();
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.store.tab().next());
    }

    /// Toggle like on the highlighted post. Returns the post id if one was selected.
    pub fn toggle_selected_like(&mut self) -> Option<PostId> {
        let id = self.selected_post()?.id;
        self.store.toggle_like(id);
        Some(id)
    }

    // ------------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------------

    pub fn open_composer(&mut self) {
        self.store.open_composer();
        self.composer.focus = ComposerField::Image;
    }

    /// Close the composer, discarding the draft and the typed path.
    ///
    /// Reads still in flight are not cancelled; their result lands in the
    /// (now hidden) draft.
    pub fn cancel_composer(&mut self) {
        self.store.cancel_composer();
        self.composer.focus = ComposerField::Image;
        self.composer.image_path.clear();
    }

    /// Publish the draft. Inert when the draft is incomplete.
    pub fn submit_post(&mut self) -> Option<PostId> {
        let id = self.store.submit_post()?;
        self.composer.focus = ComposerField::Image;
        self.composer.image_path.clear();
        self.selected = 0;
        self.set_status("Post published");
        Some(id)
    }

    /// Append typed text to the focused field.
    pub fn composer_insert(&mut self, c: char) {
        match self.composer.focus {
            ComposerField::Image => self.composer.image_path.push(c),
            ComposerField::Caption => self.store.draft_mut().caption.push(c),
            ComposerField::Tags => self.store.draft_mut().tags.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn composer_backspace(&mut self) {
        match self.composer.focus {
            ComposerField::Image => {
                self.composer.image_path.pop();
            }
            ComposerField::Caption => {
                self.store.draft_mut().caption.pop();
            }
            ComposerField::Tags => {
                self.store.draft_mut().tags.pop();
            }
        }
    }

    /// Apply a finished image read to the draft.
    pub fn apply_staged_image(&mut self, image: ImageRef) {
        self.composer.pending_reads = self.composer.pending_reads.saturating_sub(1);
        self.store.stage_image(image);
    }

    pub fn image_read_failed(&mut self) {
        self.composer.pending_reads = self.composer.pending_reads.saturating_sub(1);
    }

    // ------------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

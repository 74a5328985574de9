//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette: semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub brand: Style,

    // -- Post cards --
    pub post_author: Style,
    pub post_meta: Style,
    pub post_image: Style,
    pub post_caption: Style,
    pub post_tag: Style,
    pub post_liked: Style,
    pub post_counter: Style,

    // -- Tabs --
    pub tab_active: Style,
    pub tab_idle: Style,
    pub empty_state: Style,

    // -- Profile --
    pub profile_name: Style,
    pub profile_stat: Style,

    // -- Composer --
    pub field_focused: Style,
    pub field_idle: Style,
    pub button_enabled: Style,
    pub button_disabled: Style,

    // -- Chrome --
    pub body: Style,
    pub heading: Style,
    pub metadata: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),

            post_author: Style::default().add_modifier(Modifier::BOLD),
            post_meta: Style::default().fg(Color::DarkGray),
            post_image: Style::default().fg(Color::Blue),
            post_caption: Style::default(),
            post_tag: Style::default().fg(Color::Yellow),
            post_liked: Style::default().fg(Color::LightMagenta),
            post_counter: Style::default().fg(Color::Gray),

            tab_active: Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_idle: Style::default().fg(Color::Gray),
            empty_state: Style::default().fg(Color::DarkGray),

            profile_name: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            profile_stat: Style::default().fg(Color::Gray),

            field_focused: Style::default().fg(Color::LightRed),
            field_idle: Style::default().fg(Color::DarkGray),
            button_enabled: Style::default()
                .bg(Color::LightRed)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().bg(Color::DarkGray).fg(Color::Gray),

            body: Style::default(),
            heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            metadata: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::LightRed),
        }
    }

    /// Light palette, adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            brand: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),

            post_author: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_meta: Style::default().fg(Color::DarkGray),
            post_image: Style::default().fg(Color::Blue),
            post_caption: Style::default().fg(Color::Black),
            post_tag: Style::default().fg(Color::Red),
            post_liked: Style::default().fg(Color::Magenta),
            post_counter: Style::default().fg(Color::DarkGray),

            tab_active: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_idle: Style::default().fg(Color::DarkGray),
            empty_state: Style::default().fg(Color::DarkGray),

            profile_name: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            profile_stat: Style::default().fg(Color::DarkGray),

            field_focused: Style::default().fg(Color::Red),
            field_idle: Style::default().fg(Color::Gray),
            button_enabled: Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().bg(Color::Gray).fg(Color::White),

            body: Style::default().fg(Color::Black),
            heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            metadata: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Red),
        }
    }
}

// ============================================================================
// Style Map: string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 24] = [
    "brand",
    "post_author",
    "post_meta",
    "post_image",
    "post_caption",
    "post_tag",
    "post_liked",
    "post_counter",
    "tab_active",
    "tab_idle",
    "empty_state",
    "profile_name",
    "profile_stat",
    "field_focused",
    "field_idle",
    "button_enabled",
    "button_disabled",
    "body",
    "heading",
    "metadata",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "composer_border",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 24] = [
            p.brand,
            p.post_author,
            p.post_meta,
            p.post_image,
            p.post_caption,
            p.post_tag,
            p.post_liked,
            p.post_counter,
            p.tab_active,
            p.tab_idle,
            p.empty_state,
            p.profile_name,
            p.profile_stat,
            p.field_focused,
            p.field_idle,
            p.button_enabled,
            p.button_disabled,
            p.body,
            p.heading,
            p.metadata,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            // The composer overlay reuses the focused border
            p.panel_border_focused,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Terminal User Interface module.
//!
//! This module provides the TUI for the feed, including:
//! - Main event loop (`run`)
//! - Input handling for the feed, the composer and the help overlay
//! - Rendering for the profile sidebar, post list and composer
//! - Background image read event processing
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and overlay dispatch
//! - `helpers` - Task spawning and panic capture
//! - `posts` - Tab strip and post list widget
//! - `profile` - Current user sidebar
//! - `composer` - New post overlay
//! - `status` - Status bar widget
//! - `help` - Keybinding overlay

mod composer;
mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod posts;
mod profile;
mod render;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};

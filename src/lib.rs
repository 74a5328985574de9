//! Imago: a single-user photo feed in the terminal.
//!
//! The feed store in [`feed`] owns all state (posts, likes, the active tab
//! and the composer draft). [`app`] adds terminal-side selection and status,
//! and [`ui`] drives the event loop and rendering.

pub mod app;
pub mod config;
pub mod feed;
pub mod keybindings;
pub mod theme;
pub mod ui;
pub mod util;

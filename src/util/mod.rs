//! Unicode-aware text helpers for terminal rendering.
//!
//! ```
//! use imago::util::{display_width, truncate_to_width};
//!
//! assert_eq!(display_width("Hello"), 5);
//! assert_eq!(truncate_to_width("Long caption here", 10), "Long ca...");
//! ```

mod text;

pub use text::{display_width, tail_to_width, truncate_to_width};

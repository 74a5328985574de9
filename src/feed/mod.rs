//! Feed domain: posts, the upload draft, and the in-memory store.
//!
//! # Components
//!
//! - **Types** (`types`): `Post`, `UploadDraft`, `UserProfile`, `Tab`, `ImageRef`
//! - **Store** (`store`): `FeedStore`, the single owner of all feed state
//! - **Tags** (`tags`): comma-separated tag splitting
//! - **Image** (`image`): file bytes to embedded `data:` URIs
//! - **Seed** (`seed`): starter profile and posts

pub mod image;
mod seed;
mod store;
mod tags;
mod types;

pub use image::{encode_data_uri, read_image, ImageError, DEFAULT_MAX_IMAGE_BYTES};
pub use seed::{default_profile, seed_posts};
pub use store::FeedStore;
pub use tags::split_tags;
pub use types::{Author, ImageRef, Post, PostId, Tab, UploadDraft, UserProfile, NOW_LABEL};

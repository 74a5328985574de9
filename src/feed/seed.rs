//! Hardcoded session content: the current user and the three starter posts.

use super::types::{Author, ImageRef, Post, PostId, UserProfile};

pub fn default_profile() -> UserProfile {
    UserProfile {
        name: "Administrador".to_string(),
        avatar: ImageRef::placeholder(40, 40),
        followers: 234,
        following: 189,
    }
}

fn author(name: &str) -> Author {
    Author {
        name: name.to_string(),
        avatar: ImageRef::placeholder(40, 40),
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Starter posts, newest first.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId(1),
            author("Maria Santos"),
            ImageRef::placeholder(400, 300),
            "Um lindo pôr do sol na praia! 🌅",
            42,
            8,
            false,
            tags(&["natureza", "praia", "sunset"]),
            "2h",
        ),
        Post::new(
            PostId(2),
            author("Pedro Costa"),
            ImageRef::placeholder(400, 400),
            "Café da manhã perfeito ☕",
            18,
            3,
            true,
            tags(&["comida", "café", "manhã"]),
            "4h",
        ),
        Post::new(
            PostId(3),
            author("Ana Lima"),
            ImageRef::placeholder(400, 350),
            "Nova arte que criei hoje! 🎨",
            73,
            12,
            false,
            tags(&["arte", "criativo", "pintura"]),
            "6h",
        ),
    ]
}

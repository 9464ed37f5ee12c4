//! Avatar identity - initial and background color derived from a username

use serde::{Deserialize, Serialize};

use crate::value_objects::{AvatarColor, AvatarSize};

/// Label shown when the username is empty
pub const SENTINEL_INITIAL: char = '?';

/// Everything needed to draw a placeholder avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarIdentity {
    pub initial: char,
    pub color: AvatarColor,
    pub size: AvatarSize,
}

impl AvatarIdentity {
    /// Background CSS class
    #[inline]
    pub fn color_class(&self) -> &'static str {
        self.color.css_class()
    }

    /// Box and font CSS classes
    #[inline]
    pub fn size_class(&self) -> &'static str {
        self.size.css_class()
    }

    /// Combined class list for the avatar element
    pub fn class_list(&self) -> String {
        format!("{} {}", self.color_class(), self.size_class())
    }
}

/// Derive the avatar for `username` at the given size.
///
/// Pure and total: the same input always yields the same output, and an
/// empty username renders as [`SENTINEL_INITIAL`] instead of failing.
pub fn resolve_avatar(username: &str, size: AvatarSize) -> AvatarIdentity {
    AvatarIdentity {
        initial: initial_for(username),
        color: AvatarColor::for_username(username),
        size,
    }
}

/// Upper-cased first character of `username`, or the sentinel
pub fn initial_for(username: &str) -> char {
    username
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(SENTINEL_INITIAL)
}

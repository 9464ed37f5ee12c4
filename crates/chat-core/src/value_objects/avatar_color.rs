//! Avatar background palette
//!
//! A username maps onto one of eight fixed colors by summing its UTF-16
//! code units and taking the remainder. Collisions are expected.

use serde::{Deserialize, Serialize};

/// Fixed palette of avatar background colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Teal,
}

impl AvatarColor {
    /// Palette in index order
    pub const ALL: [AvatarColor; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Pink,
        Self::Indigo,
        Self::Teal,
    ];

    /// Number of palette entries
    pub const COUNT: usize = Self::ALL.len();

    /// Derive the color for a username
    pub fn for_username(username: &str) -> Self {
        let sum: u64 = username.encode_utf16().map(u64::from).sum();
        Self::ALL[(sum % Self::COUNT as u64) as usize]
    }

    /// Position in the palette (0-7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Palette entry at `index`, wrapping around
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// CSS class applied to the avatar background
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Red => "bg-red-500",
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Purple => "bg-purple-500",
            Self::Pink => "bg-pink-500",
            Self::Indigo => "bg-indigo-500",
            Self::Teal => "bg-teal-500",
        }
    }

    /// Hex value for renderers without the stylesheet
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Purple => "#a855f7",
            Self::Pink => "#ec4899",
            Self::Indigo => "#6366f1",
            Self::Teal => "#14b8a6",
        }
    }
}

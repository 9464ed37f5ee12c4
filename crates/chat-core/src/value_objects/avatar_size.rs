//! Avatar size presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Rendered avatar size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    /// Compact inline use (message lists, mentions)
    Small,
    #[default]
    Medium,
    /// Profile emphasis
    Large,
}

impl AvatarSize {
    /// Edge length in pixels
    pub fn dimension_px(self) -> u16 {
        match self {
            Self::Small => 32,
            Self::Medium => 40,
            Self::Large => 64,
        }
    }

    /// Font size of the initial in pixels
    pub fn font_size_px(self) -> u16 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 24,
        }
    }

    /// CSS classes for the avatar box
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Small => "w-8 h-8 text-sm",
            Self::Medium => "w-10 h-10 text-base",
            Self::Large => "w-16 h-16 text-2xl",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Parse a size token, falling back to `Medium` for anything unrecognized
    pub fn parse_lenient(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            tracing::debug!(token, "Unrecognized avatar size, using medium");
            Self::default()
        })
    }
}

impl fmt::Display for AvatarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvatarSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(Self::Small),
            "medium" | "md" => Ok(Self::Medium),
            "large" | "lg" => Ok(Self::Large),
            _ => Err(DomainError::InvalidAvatarSize(s.to_string())),
        }
    }
}

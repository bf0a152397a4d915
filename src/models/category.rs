//! Catalog categories
//!
//! The closed set of category identifiers, each mapped to exactly one
//! remote path on the catalog origin.

use std::fmt;
use std::str::FromStr;

use crate::error::TrendingError;

/// A supported catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Art,
    Logos,
    Graphics,
    Productivity,
    Marketing,
    Photo,
    Games,
}

impl Category {
    /// Every supported category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Art,
        Category::Logos,
        Category::Graphics,
        Category::Productivity,
        Category::Marketing,
        Category::Photo,
        Category::Games,
    ];

    /// Identifier used in query parameters and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Art => "art",
            Category::Logos => "logos",
            Category::Graphics => "graphics",
            Category::Productivity => "productivity",
            Category::Marketing => "marketing",
            Category::Photo => "photo",
            Category::Games => "games",
        }
    }

    /// Path of the category's trending page on the catalog origin.
    pub fn path(&self) -> &'static str {
        match self {
            Category::Art => "/art-and-illustrations",
            Category::Logos => "/logos-and-icons",
            Category::Graphics => "/graphics-and-design",
            Category::Productivity => "/productivity-and-writing",
            Category::Marketing => "/marketing-and-business",
            Category::Photo => "/photography",
            Category::Games => "/games-and-3d",
        }
    }

    /// Cache key under which this category's listings are stored.
    pub fn cache_key(&self) -> String {
        format!("trending_prompts_{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "art" => Ok(Category::Art),
            "logos" => Ok(Category::Logos),
            "graphics" => Ok(Category::Graphics),
            "productivity" => Ok(Category::Productivity),
            "marketing" => Ok(Category::Marketing),
            "photo" => Ok(Category::Photo),
            "games" => Ok(Category::Games),
            other => Err(TrendingError::InvalidCategory(other.to_string())),
        }
    }
}

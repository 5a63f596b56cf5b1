use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a layer colour is not a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid colour '{value}': expected #rrggbb")]
pub struct ColorParseError {
    pub value: String,
}

/// 24-bit colour of an ingredient layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (the leading `#` is required).
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            value: value.to_string(),
        };
        let hex = value.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| err())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Mix towards white. `amount` is clamped to `0.0..=1.0`.
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Self {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// Physical form of a layer. Only affects the legend glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    #[default]
    Liquid,
    Foam,
    Solid,
}

impl Texture {
    pub fn glyph(self) -> &'static str {
        match self {
            Texture::Liquid => "≈",
            Texture::Foam => "∴",
            Texture::Solid => "■",
        }
    }
}

/// One band of a drink, listed bottom to top in a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLayer {
    pub name: String,
    pub color: Rgb,
    /// Share of the vessel height, 0-100. Sums across a recipe are not
    /// required to reach 100.
    pub height_percent: f32,
    #[serde(default)]
    pub texture: Texture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Classic,
    Milk,
    Specialty,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Classic => "Classic",
            Category::Milk => "Milk",
            Category::Specialty => "Specialty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeRecipe {
    pub id: String,
    pub name: String,
    pub english_name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: Category,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    /// Bottom to top.
    pub ingredients: Vec<IngredientLayer>,
}

/// Category filter of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Classic,
    Milk,
    Specialty,
}

impl CategoryFilter {
    /// Tab order of the list screen.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Classic,
        CategoryFilter::Milk,
        CategoryFilter::Specialty,
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Classic => category == Category::Classic,
            CategoryFilter::Milk => category == Category::Milk,
            CategoryFilter::Specialty => category == Category::Specialty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Classic => Category::Classic.label(),
            CategoryFilter::Milk => Category::Milk.label(),
            CategoryFilter::Specialty => Category::Specialty.label(),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Step through the tabs, wrapping at both ends.
    pub fn cycle(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let next = (self.index() as i32 + delta).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

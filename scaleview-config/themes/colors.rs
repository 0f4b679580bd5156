use ratatui_core::style::{Color, Style};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self};
use std::str::FromStr;

#[cfg(test)]
#[path = "./colors.tests.rs"]
mod colors_tests;

/// Represents foreground, dim foreground and background colors for UI text.\
/// Table rows use the `dim` color for cells with unknown values, `Reset` keeps them in `fg`.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct TextColors {
    pub fg: Color,
    pub dim: Color,
    pub bg: Color,
}

impl TextColors {
    /// Returns new [`TextColors`] instance.
    pub fn new(fg: Color) -> Self {
        TextColors::dim(fg, Color::Reset, Color::Reset)
    }

    /// Returns new [`TextColors`] instance with `bg` color set.
    pub fn bg(fg: Color, bg: Color) -> Self {
        TextColors::dim(fg, Color::Reset, bg)
    }

    /// Returns new [`TextColors`] instance with `bg` and `dim` colors set.
    pub fn dim(fg: Color, dim: Color, bg: Color) -> Self {
        Self { fg, dim, bg }
    }
}

impl From<&TextColors> for Style {
    fn from(value: &TextColors) -> Self {
        Style::default().fg(value.fg).bg(value.bg)
    }
}

impl Serialize for TextColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text_colors = if self.bg == Color::Reset && self.dim == Color::Reset {
            format!("{}", self.fg)
        } else if self.dim == Color::Reset {
            format!("{}:{}", self.fg, self.bg)
        } else {
            format!("{}:{}:{}", self.fg, self.dim, self.bg)
        };
        serializer.serialize_str(&text_colors)
    }
}

impl<'de> Deserialize<'de> for TextColors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextColorsVisitor;

        impl Visitor<'_> for TextColorsVisitor {
            type Value = TextColors;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string containing 1-3 colors each separated by a colon")
            }

            fn visit_str<E>(self, value: &str) -> Result<TextColors, E>
            where
                E: de::Error,
            {
                let parts: Vec<&str> = value.split(':').collect();
                if parts.len() > 3 {
                    return Err(de::Error::invalid_length(parts.len(), &self));
                }

                let mut colors = [Color::Reset; 3];
                for (i, part) in parts.iter().enumerate() {
                    let Ok(color) = Color::from_str(part.trim()) else {
                        return Err(de::Error::custom(format_args!("invalid color value on pos {}: {}", i + 1, part)));
                    };

                    colors[i] = color;
                }

                Ok(match parts.len() {
                    1 => TextColors::new(colors[0]),
                    2 => TextColors::bg(colors[0], colors[1]),
                    _ => TextColors::dim(colors[0], colors[1], colors[2]),
                })
            }
        }

        deserializer.deserialize_str(TextColorsVisitor)
    }
}

/// Colors used to draw the resources table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TableColors {
    #[serde(default = "default_header")]
    pub header: TextColors,

    #[serde(default = "default_row")]
    pub row: TextColors,

    /// Colors for rows that have at least one unknown value.
    #[serde(default = "default_incomplete")]
    pub incomplete: TextColors,
}

impl Default for TableColors {
    fn default() -> Self {
        Self {
            header: default_header(),
            row: default_row(),
            incomplete: default_incomplete(),
        }
    }
}

fn default_header() -> TextColors {
    TextColors::bg(Color::Black, Color::Gray)
}

fn default_row() -> TextColors {
    TextColors::new(Color::Gray)
}

fn default_incomplete() -> TextColors {
    TextColors::dim(Color::Yellow, Color::DarkGray, Color::Reset)
}

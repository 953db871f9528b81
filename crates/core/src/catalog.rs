//! Fixed trait catalogs: backgrounds, shapes, patterns, styles, and color
//! palettes.
//!
//! The order of every table is part of the reproducibility contract: a
//! seeded draw selects an index, so reordering a catalog changes which
//! traits an existing seed produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enumerated trait categories
// ---------------------------------------------------------------------------

/// Declares a catalog enum with a lowercase wire name per variant, an `ALL`
/// table in catalog order, and `Display`/`FromStr` implementations.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase catalog name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} '{other}'",
                        $label
                    ))),
                }
            }
        }
    };
}

catalog_enum! {
    /// Background mood of an artifact.
    Background, "background" {
        Cosmic => "cosmic",
        Gradient => "gradient",
        Geometric => "geometric",
        Organic => "organic",
        Digital => "digital",
        Abstract => "abstract",
        Crystalline => "crystalline",
        Flowing => "flowing",
        Structured => "structured",
        Chaotic => "chaotic",
    }
}

catalog_enum! {
    /// Geometric primitive drawn at the centre of the canvas.
    Shape, "shape" {
        Circle => "circle",
        Hexagon => "hexagon",
        Diamond => "diamond",
        Star => "star",
        Spiral => "spiral",
        Wave => "wave",
        Triangle => "triangle",
        Pentagon => "pentagon",
        Infinity => "infinity",
        Mandala => "mandala",
    }
}

catalog_enum! {
    /// Tile motif repeated across the canvas.
    Pattern, "pattern" {
        Dots => "dots",
        Lines => "lines",
        Waves => "waves",
        Grid => "grid",
        Spiral => "spiral",
        Fractal => "fractal",
        Organic => "organic",
        Geometric => "geometric",
        Flowing => "flowing",
        Structured => "structured",
    }
}

catalog_enum! {
    /// Rendering mood; some styles add extra layers to the image.
    Style, "style" {
        Minimalist => "minimalist",
        Vibrant => "vibrant",
        Ethereal => "ethereal",
        Bold => "bold",
        Subtle => "subtle",
        Dynamic => "dynamic",
        Serene => "serene",
        Energetic => "energetic",
        Mystical => "mystical",
        Futuristic => "futuristic",
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// A `#RRGGBB` color literal.
///
/// Case is preserved as written in the palette table, so serialized traits
/// show exactly the palette entry that was drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validate and wrap a `#RRGGBB` string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let digits = value.strip_prefix('#').ok_or_else(|| {
            CoreError::Validation(format!("Color '{value}' must start with '#'"))
        })?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::Validation(format!(
                "Color '{value}' must be a 6-digit hex literal"
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// A named, ordered set of colors that trait colors are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [&'static str; PALETTE_SIZE],
}

impl Palette {
    /// The palette color at `index` as a validated [`HexColor`].
    pub fn color(&self, index: usize) -> Result<HexColor, CoreError> {
        let raw = self.colors.get(index).ok_or_else(|| {
            CoreError::Internal(format!(
                "Color index {index} out of range for palette '{}'",
                self.name
            ))
        })?;
        HexColor::parse(raw)
    }
}

/// All palettes, in catalog order.
pub static PALETTES: [Palette; 7] = [
    Palette {
        name: "Sunset",
        colors: ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
    },
    Palette {
        name: "Ocean",
        colors: ["#0984e3", "#74b9ff", "#00b894", "#00cec9", "#6c5ce7"],
    },
    Palette {
        name: "Forest",
        colors: ["#00b894", "#55a3ff", "#fd79a8", "#fdcb6e", "#6c5ce7"],
    },
    Palette {
        name: "Cosmic",
        colors: ["#a29bfe", "#fd79a8", "#fdcb6e", "#e17055", "#74b9ff"],
    },
    Palette {
        name: "Neon",
        colors: ["#ff7675", "#74b9ff", "#55a3ff", "#00b894", "#ffeaa7"],
    },
    Palette {
        name: "Aurora",
        colors: ["#00b894", "#74b9ff", "#fd79a8", "#6c5ce7", "#fdcb6e"],
    },
    Palette {
        name: "Fire",
        colors: ["#ff7675", "#e17055", "#fdcb6e", "#fd79a8", "#FF6B6B"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn every_catalog_has_ten_entries() {
        assert_eq!(Background::ALL.len(), 10);
        assert_eq!(Shape::ALL.len(), 10);
        assert_eq!(Pattern::ALL.len(), 10);
        assert_eq!(Style::ALL.len(), 10);
    }

    #[test]
    fn catalog_order_is_stable() {
        assert_eq!(Background::ALL[0], Background::Cosmic);
        assert_eq!(Background::ALL[9], Background::Chaotic);
        assert_eq!(Shape::ALL[8], Shape::Infinity);
        assert_eq!(Pattern::ALL[5], Pattern::Fractal);
        assert_eq!(Style::ALL[8], Style::Mystical);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>().unwrap(), *shape);
        }
        for pattern in Pattern::ALL {
            assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), *pattern);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_matches!("hexagram".parse::<Shape>(), Err(CoreError::Validation(_)));
        assert_matches!("Dots".parse::<Pattern>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn enums_serialize_as_lowercase_names() {
        let json = serde_json::to_string(&Style::Futuristic).unwrap();
        assert_eq!(json, "\"futuristic\"");
        let back: Background = serde_json::from_str("\"crystalline\"").unwrap();
        assert_eq!(back, Background::Crystalline);
    }

    #[test]
    fn every_palette_color_is_valid_hex() {
        for palette in &PALETTES {
            for i in 0..PALETTE_SIZE {
                assert!(palette.color(i).is_ok(), "{} #{i}", palette.name);
            }
        }
    }

    #[test]
    fn palette_color_out_of_range_is_internal_error() {
        assert_matches!(PALETTES[0].color(PALETTE_SIZE), Err(CoreError::Internal(_)));
    }

    #[test]
    fn hex_color_rejects_malformed_values() {
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("123456").is_err());
        assert!(HexColor::parse("#12345g").is_err());
        assert_eq!(HexColor::parse("#a1B2c3").unwrap().as_str(), "#a1B2c3");
    }

    #[test]
    fn hex_color_deserialization_validates() {
        assert!(serde_json::from_str::<HexColor>("\"#fdcb6e\"").is_ok());
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }

    #[test]
    fn palettes_are_in_catalog_order() {
        let names: Vec<&str> = PALETTES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Sunset", "Ocean", "Forest", "Cosmic", "Neon", "Aurora", "Fire"]
        );
        assert_eq!(PALETTES[5].colors[3], "#6c5ce7");
    }
}

//! Reference material table
//!
//! Ambient, diffuse and specular reflectance for 24 real-world materials,
//! with shininess given as a fraction of 128. Values follow the classic
//! OpenGL material reference table.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use super::phong::PhongMaterial;

/// Named entry of the reference material table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    Emerald,
    Jade,
    Obsidian,
    Pearl,
    Ruby,
    Turquoise,
    Brass,
    Bronze,
    Chrome,
    Copper,
    Gold,
    Silver,
    BlackPlastic,
    CyanPlastic,
    GreenPlastic,
    RedPlastic,
    WhitePlastic,
    YellowPlastic,
    BlackRubber,
    CyanRubber,
    GreenRubber,
    RedRubber,
    WhiteRubber,
    YellowRubber,
}

impl MaterialPreset {
    /// Every preset in table order
    pub const ALL: [MaterialPreset; 24] = [
        Self::Emerald,
        Self::Jade,
        Self::Obsidian,
        Self::Pearl,
        Self::Ruby,
        Self::Turquoise,
        Self::Brass,
        Self::Bronze,
        Self::Chrome,
        Self::Copper,
        Self::Gold,
        Self::Silver,
        Self::BlackPlastic,
        Self::CyanPlastic,
        Self::GreenPlastic,
        Self::RedPlastic,
        Self::WhitePlastic,
        Self::YellowPlastic,
        Self::BlackRubber,
        Self::CyanRubber,
        Self::GreenRubber,
        Self::RedRubber,
        Self::WhiteRubber,
        Self::YellowRubber,
    ];

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Emerald => "Emerald",
            Self::Jade => "Jade",
            Self::Obsidian => "Obsidian",
            Self::Pearl => "Pearl",
            Self::Ruby => "Ruby",
            Self::Turquoise => "Turquoise",
            Self::Brass => "Brass",
            Self::Bronze => "Bronze",
            Self::Chrome => "Chrome",
            Self::Copper => "Copper",
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::BlackPlastic => "Black Plastic",
            Self::CyanPlastic => "Cyan Plastic",
            Self::GreenPlastic => "Green Plastic",
            Self::RedPlastic => "Red Plastic",
            Self::WhitePlastic => "White Plastic",
            Self::YellowPlastic => "Yellow Plastic",
            Self::BlackRubber => "Black Rubber",
            Self::CyanRubber => "Cyan Rubber",
            Self::GreenRubber => "Green Rubber",
            Self::RedRubber => "Red Rubber",
            Self::WhiteRubber => "White Rubber",
            Self::YellowRubber => "Yellow Rubber",
        }
    }

    /// The Phong material for this preset, shininess already scaled to an
    /// exponent
    pub fn material(self) -> PhongMaterial {
        let (ambient, diffuse, specular, coefficient) = self.reference();
        PhongMaterial::from_reference(ambient, diffuse, specular, coefficient)
    }

    /// Raw table row: ambient, diffuse, specular, shininess coefficient
    fn reference(self) -> ([f32; 3], [f32; 3], [f32; 3], f32) {
        match self {
            Self::Emerald => (
                [0.0215, 0.1745, 0.0215],
                [0.07568, 0.61424, 0.07568],
                [0.633, 0.727811, 0.633],
                0.6,
            ),
            Self::Jade => (
                [0.135, 0.2225, 0.1575],
                [0.54, 0.89, 0.63],
                [0.316228, 0.316228, 0.316228],
                0.1,
            ),
            Self::Obsidian => (
                [0.05375, 0.05, 0.06625],
                [0.18275, 0.17, 0.22525],
                [0.332741, 0.328634, 0.346435],
                0.3,
            ),
            Self::Pearl => (
                [0.25, 0.20725, 0.20725],
                [1.0, 0.829, 0.829],
                [0.296648, 0.296648, 0.296648],
                0.088,
            ),
            Self::Ruby => (
                [0.1745, 0.01175, 0.01175],
                [0.61424, 0.04136, 0.04136],
                [0.727811, 0.626959, 0.626959],
                0.6,
            ),
            Self::Turquoise => (
                [0.1, 0.18725, 0.1745],
                [0.396, 0.74151, 0.69102],
                [0.297254, 0.30829, 0.306678],
                0.1,
            ),
            Self::Brass => (
                [0.329412, 0.223529, 0.027451],
                [0.780392, 0.568627, 0.113725],
                [0.992157, 0.941176, 0.807843],
                0.21794872,
            ),
            Self::Bronze => (
                [0.2125, 0.1275, 0.054],
                [0.714, 0.4284, 0.18144],
                [0.393548, 0.271906, 0.166721],
                0.2,
            ),
            Self::Chrome => (
                [0.25, 0.25, 0.25],
                [0.4, 0.4, 0.4],
                [0.774597, 0.774597, 0.774597],
                0.6,
            ),
            Self::Copper => (
                [0.19125, 0.0735, 0.0225],
                [0.7038, 0.27048, 0.0828],
                [0.256777, 0.137622, 0.086014],
                0.1,
            ),
            Self::Gold => (
                [0.24725, 0.1995, 0.0745],
                [0.75164, 0.60648, 0.22648],
                [0.628281, 0.555802, 0.366065],
                0.4,
            ),
            Self::Silver => (
                [0.19225, 0.19225, 0.19225],
                [0.50754, 0.50754, 0.50754],
                [0.508273, 0.508273, 0.508273],
                0.4,
            ),
            Self::BlackPlastic => (
                [0.0, 0.0, 0.0],
                [0.01, 0.01, 0.01],
                [0.5, 0.5, 0.5],
                0.25,
            ),
            Self::CyanPlastic => (
                [0.0, 0.1, 0.06],
                [0.0, 0.50980392, 0.50980392],
                [0.50196078, 0.50196078, 0.50196078],
                0.25,
            ),
            Self::GreenPlastic => (
                [0.0, 0.0, 0.0],
                [0.1, 0.35, 0.1],
                [0.45, 0.55, 0.45],
                0.25,
            ),
            Self::RedPlastic => (
                [0.0, 0.0, 0.0],
                [0.5, 0.0, 0.0],
                [0.7, 0.6, 0.6],
                0.25,
            ),
            Self::WhitePlastic => (
                [0.0, 0.0, 0.0],
                [0.55, 0.55, 0.55],
                [0.7, 0.7, 0.7],
                0.25,
            ),
            Self::YellowPlastic => (
                [0.0, 0.0, 0.0],
                [0.5, 0.5, 0.0],
                [0.6, 0.6, 0.5],
                0.25,
            ),
            Self::BlackRubber => (
                [0.02, 0.02, 0.02],
                [0.01, 0.01, 0.01],
                [0.4, 0.4, 0.4],
                0.078125,
            ),
            Self::CyanRubber => (
                [0.0, 0.05, 0.05],
                [0.4, 0.5, 0.5],
                [0.04, 0.7, 0.7],
                0.078125,
            ),
            Self::GreenRubber => (
                [0.0, 0.05, 0.0],
                [0.4, 0.5, 0.4],
                [0.04, 0.7, 0.04],
                0.078125,
            ),
            Self::RedRubber => (
                [0.05, 0.0, 0.0],
                [0.5, 0.4, 0.4],
                [0.7, 0.04, 0.04],
                0.078125,
            ),
            Self::WhiteRubber => (
                [0.05, 0.05, 0.05],
                [0.5, 0.5, 0.5],
                [0.7, 0.7, 0.7],
                0.078125,
            ),
            Self::YellowRubber => (
                [0.05, 0.05, 0.0],
                [0.5, 0.5, 0.4],
                [0.7, 0.7, 0.04],
                0.078125,
            ),
        }
    }
}

impl fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset name is not in the table
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown material preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for MaterialPreset {
    type Err = UnknownPreset;

    /// Accepts `"black_rubber"`, `"Black Rubber"` and `"black-rubber"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().to_ascii_lowercase().replace(' ', "_") == normalized)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

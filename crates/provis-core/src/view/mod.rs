//! Rendering-boundary vocabulary for external 3-D viewers.
//!
//! The core never renders structures itself. It hands the raw, unmodified
//! PDB text across this boundary together with a [`ViewConfig`], and the
//! external viewer is treated as an opaque sink. The core does not validate
//! that a viewer supports a given style/color combination; a style with no
//! viewer directive (currently [`Style::Surface`]) is simply a no-op at the
//! boundary.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Representation style understood by the external viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Cartoon,
    Stick,
    Sphere,
    Surface,
}

#[derive(Debug, Error)]
#[error("Invalid style string")]
pub struct ParseStyleError;

impl FromStr for Style {
    type Err = ParseStyleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartoon" => Ok(Style::Cartoon),
            "stick" => Ok(Style::Stick),
            "sphere" => Ok(Style::Sphere),
            "surface" => Ok(Style::Surface),
            _ => Err(ParseStyleError),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Style::Cartoon => "cartoon",
                Style::Stick => "stick",
                Style::Sphere => "sphere",
                Style::Surface => "surface",
            }
        )
    }
}

impl Style {
    /// The style selector the viewer understands, if any.
    ///
    /// `Surface` has no selector and returns `None`; the viewer is left with
    /// its default representation in that case.
    pub fn directive(&self) -> Option<&'static str> {
        match self {
            Style::Cartoon => Some("cartoon"),
            Style::Stick => Some("stick"),
            Style::Sphere => Some("sphere"),
            Style::Surface => None,
        }
    }
}

/// Color scheme understood by the external viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Chain,
    SsPymol,
    Element,
    Hydrophobicity,
    Bfactor,
    Spectrum,
    Rainbow,
}

#[derive(Debug, Error)]
#[error("Invalid color scheme string")]
pub struct ParseColorSchemeError;

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chain" => Ok(ColorScheme::Chain),
            "sspymol" => Ok(ColorScheme::SsPymol),
            "element" => Ok(ColorScheme::Element),
            "hydrophobicity" => Ok(ColorScheme::Hydrophobicity),
            "bfactor" => Ok(ColorScheme::Bfactor),
            "spectrum" => Ok(ColorScheme::Spectrum),
            "rainbow" => Ok(ColorScheme::Rainbow),
            _ => Err(ParseColorSchemeError),
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // These spellings are the viewer's scheme names, case included.
        write!(
            f,
            "{}",
            match self {
                ColorScheme::Chain => "chain",
                ColorScheme::SsPymol => "ssPyMol",
                ColorScheme::Element => "element",
                ColorScheme::Hydrophobicity => "hydrophobicity",
                ColorScheme::Bfactor => "bfactor",
                ColorScheme::Spectrum => "spectrum",
                ColorScheme::Rainbow => "rainbow",
            }
        )
    }
}

/// Style and color configuration for one rendering hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewConfig {
    pub style: Style,
    pub color_scheme: ColorScheme,
}

/// Bundles raw PDB text with its rendering configuration.
///
/// The text is borrowed and passed through unchanged; this type exists so
/// the hand-off to the viewer carries exactly what was parsed, byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRequest<'a> {
    pdb_text: &'a str,
    pub config: ViewConfig,
}

impl<'a> ViewRequest<'a> {
    pub fn new(pdb_text: &'a str, config: ViewConfig) -> Self {
        Self { pdb_text, config }
    }

    /// The raw PDB text, unmodified.
    pub fn pdb_text(&self) -> &'a str {
        self.pdb_text
    }
}

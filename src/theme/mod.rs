//! Color theme generation for the project's `globals.css`.

mod stylesheet;

pub use stylesheet::{render_globals_css, TEMPLATE};

use serde::Serialize;

use crate::color::Rgb;

/// Blend factor used for the light and dark variants.
pub const DEFAULT_BLEND_FACTOR: f64 = 0.2;

/// The two colors a user supplies for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary: Rgb,
    pub secondary: Rgb,
}

/// The six color slots substituted into the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub primary: Rgb,
    pub primary_light: Rgb,
    pub primary_dark: Rgb,
    pub secondary: Rgb,
    pub secondary_light: Rgb,
    pub secondary_dark: Rgb,
}

impl ThemePalette {
    /// Derive light and dark tints of both colors.
    pub fn derive(colors: ThemeColors, blend_factor: f64) -> Self {
        Self {
            primary: colors.primary,
            primary_light: colors.primary.lighten(blend_factor),
            primary_dark: colors.primary.darken(blend_factor),
            secondary: colors.secondary,
            secondary_light: colors.secondary.lighten(blend_factor),
            secondary_dark: colors.secondary.darken(blend_factor),
        }
    }

    /// Slots in template order, paired with their CSS variable names.
    pub fn slots(&self) -> [(&'static str, Rgb); 6] {
        [
            ("primary", self.primary),
            ("primary-light", self.primary_light),
            ("primary-dark", self.primary_dark),
            ("secondary", self.secondary),
            ("secondary-light", self.secondary_light),
            ("secondary-dark", self.secondary_dark),
        ]
    }
}

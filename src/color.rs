//! Bar color definitions.
//!
//! [`BarColor`] is the closed set of colors offered by the UI dropdown. The
//! selection is read, never owned, by the chart model: the current value is
//! re-applied to every series on every render frame, so a change made by the
//! user between frames takes effect on the next redraw.

use egui::Color32;

/// Closed enumeration of selectable bar colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    Red,
    Pink,
    Magenta,
    RebeccaPurple,
    Cyan,
    Blue,
    Green,
    Yellow,
}

impl Default for BarColor {
    fn default() -> Self {
        BarColor::Red
    }
}

impl BarColor {
    /// All selectable colors (useful for combo-box UIs).
    pub fn all() -> &'static [BarColor] {
        &[
            BarColor::Red,
            BarColor::Pink,
            BarColor::Magenta,
            BarColor::RebeccaPurple,
            BarColor::Cyan,
            BarColor::Blue,
            BarColor::Green,
            BarColor::Yellow,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BarColor::Red => "Red",
            BarColor::Pink => "Pink",
            BarColor::Magenta => "Magenta",
            BarColor::RebeccaPurple => "Rebecca Purple",
            BarColor::Cyan => "Cyan",
            BarColor::Blue => "Blue",
            BarColor::Green => "Green",
            BarColor::Yellow => "Yellow",
        }
    }

    /// The egui fill color (CSS named-color values).
    pub fn color32(&self) -> Color32 {
        match self {
            BarColor::Red => Color32::from_rgb(255, 0, 0),
            BarColor::Pink => Color32::from_rgb(255, 192, 203),
            BarColor::Magenta => Color32::from_rgb(255, 0, 255),
            BarColor::RebeccaPurple => Color32::from_rgb(102, 51, 153),
            BarColor::Cyan => Color32::from_rgb(0, 255, 255),
            BarColor::Blue => Color32::from_rgb(0, 0, 255),
            BarColor::Green => Color32::from_rgb(0, 128, 0),
            BarColor::Yellow => Color32::from_rgb(255, 255, 0),
        }
    }
}

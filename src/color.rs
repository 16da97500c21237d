use eframe::egui::{Color32, Stroke};
use palette::{Hsl, IntoColor, Srgb};

use crate::data::chart::Role;

// ---------------------------------------------------------------------------
// Waterfall styling constants
// ---------------------------------------------------------------------------

/// Fixed colours and strokes of the waterfall. Not derived from data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterfallStyle {
    pub increasing: Color32,
    pub decreasing: Color32,
    pub total: Color32,
    /// Outline drawn around total bars.
    pub total_outline: Stroke,
    /// Line joining the top of one bar to the start of the next.
    pub connector: Stroke,
}

impl Default for WaterfallStyle {
    fn default() -> Self {
        Self {
            increasing: Color32::from_rgb(0x8F, 0x27, 0x38),
            decreasing: Color32::from_rgb(0x5E, 0x8D, 0xB0),
            total: Color32::from_rgb(0xFF, 0xB0, 0x1F),
            // CSS "gold"
            total_outline: Stroke::new(3.0, Color32::from_rgb(0xFF, 0xD7, 0x00)),
            connector: Stroke::new(1.0, Color32::from_rgb(0xC0, 0xC0, 0xC0)),
        }
    }
}

impl WaterfallStyle {
    pub fn fill_for(&self, role: Role) -> Color32 {
        match role {
            Role::Increase => self.increasing,
            Role::Decrease => self.decreasing,
            Role::Total => self.total,
        }
    }

    /// Outline for a bar; only totals get one.
    pub fn stroke_for(&self, role: Role) -> Stroke {
        match role {
            Role::Total => self.total_outline,
            Role::Increase | Role::Decrease => Stroke::NONE,
        }
    }
}

// ---------------------------------------------------------------------------
// Label contrast
// ---------------------------------------------------------------------------

/// Pick black or white text for a label drawn on top of `fill`.
pub fn label_color_on(fill: Color32) -> Color32 {
    let rgb = Srgb::new(
        fill.r() as f32 / 255.0,
        fill.g() as f32 / 255.0,
        fill.b() as f32 / 255.0,
    );
    let hsl: Hsl = rgb.into_color();
    if hsl.lightness > 0.55 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

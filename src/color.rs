use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::TitleCount;

// Dashboard theme.
pub const SALARY_LINE: Color32 = Color32::from_rgb(0xff, 0xb7, 0x03);
pub const SALARY_POINT: Color32 = Color32::from_rgb(0xfb, 0x85, 0x00);
pub const HEADING: Color32 = Color32::from_rgb(0xff, 0xb7, 0x03);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Job title → colour
// ---------------------------------------------------------------------------

/// One colour per title of the current breakdown, assigned in breakdown
/// order so a title keeps its colour however the table is sorted.
#[derive(Debug, Clone, Default)]
pub struct TitlePalette {
    mapping: HashMap<String, Color32>,
}

impl TitlePalette {
    pub fn new(counts: &[TitleCount]) -> Self {
        let mapping = counts
            .iter()
            .zip(generate_palette(counts.len()))
            .map(|(tc, c)| (tc.job_title.clone(), c))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, title: &str) -> Color32 {
        self.mapping.get(title).copied().unwrap_or(Color32::GRAY)
    }
}

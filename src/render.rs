use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

use crate::panel::Panel;

// ---------------------------------------------------------------------------
// Rendering collaborator boundary
// ---------------------------------------------------------------------------

/// The external drawing collaborator. It receives finalized panel payloads
/// and must not alter them; everything visual (chrome, widgets, plotting)
/// lives behind this trait.
pub trait PanelRenderer {
    /// Called once per render pass, before any panel, with the
    /// presentation options for the pass.
    fn begin_pass(&mut self, config: &RenderConfig) -> anyhow::Result<()> {
        let _ = config;
        Ok(())
    }

    fn draw_panel(&mut self, panel: &Panel) -> anyhow::Result<()>;
}

/// Presentation options handed to the renderer with each render pass.
/// There is no global styling state; this struct is the whole of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Padding around each panel, in points.
    pub panel_padding: f32,
    /// Number of grid columns the panels flow into.
    pub layout_columns: usize,
    /// Colormap for the heatmap panels.
    pub color_scheme: ColorScheme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            panel_padding: 20.0,
            layout_columns: 2,
            color_scheme: ColorScheme::Viridis,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Viridis,
    Coolwarm,
}

// ---------------------------------------------------------------------------
// Series palette generator
// ---------------------------------------------------------------------------

/// An sRGB color as 8-bit channels.
pub type Rgb8 = [u8; 3];

/// Generates `n` visually distinct colours using evenly spaced hues,
/// for scatter-series legends.
pub fn series_palette(n: usize) -> Vec<Rgb8> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            [
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            ]
        })
        .collect()
}

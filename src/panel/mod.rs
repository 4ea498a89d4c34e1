/// Panel layer: one module per derivation, plus the renderable `Panel` type.
///
/// Every derivation is a pure function of the loaded [`Table`]: nothing is
/// cached, nothing is mutated, each render pass recomputes from scratch.
pub mod correlation;
pub mod missingness;
pub mod regional;
pub mod relation;
pub mod summary;

use serde::{Deserialize, Serialize};

use self::correlation::CorrelationMatrix;
use self::missingness::MissingnessMatrix;
use self::regional::RegionSeries;
use self::relation::RelationSeries;
use self::summary::ReferenceTotals;

// ---------------------------------------------------------------------------
// Panel – one renderable unit of the dashboard
// ---------------------------------------------------------------------------

/// How a panel's payload should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Heatmap,
    Pie,
    HorizontalBars,
    Scatter,
    CorrelationHeatmap,
}

/// The finalized dataset behind one panel.
#[derive(Debug, Clone)]
pub enum PanelPayload {
    Missingness(MissingnessMatrix),
    Summary(ReferenceTotals),
    Regions(RegionSeries),
    Correlation(CorrelationMatrix),
    Relations(Vec<RelationSeries>),
}

/// One renderable unit: a title, a visualization kind, optional axis
/// titles, and the derived dataset to draw.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub kind: PanelKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub payload: PanelPayload,
}

impl Panel {
    pub fn new(title: &str, kind: PanelKind, payload: PanelPayload) -> Self {
        Panel {
            title: title.to_string(),
            kind,
            x_label: None,
            y_label: None,
            payload,
        }
    }

    pub fn with_axes(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self.y_label = Some(y_label.to_string());
        self
    }
}

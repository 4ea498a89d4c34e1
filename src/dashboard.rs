use anyhow::Context;

use crate::data::model::Table;
use crate::error::DashboardError;
use crate::panel::regional::{Metric, SelectionPolicy};
use crate::panel::{correlation, missingness, regional, relation, summary};
use crate::panel::{Panel, PanelKind, PanelPayload};
use crate::render::{PanelRenderer, RenderConfig};
use crate::schema;

// ---------------------------------------------------------------------------
// Fixed dashboard composition
// ---------------------------------------------------------------------------

/// Rows shown in the confirmed/death bar charts.
const HEAD_WINDOW: usize = 20;
/// Rows sampled for the cured bar chart.
const SAMPLE_WINDOW: usize = 50;

/// Derive all seven panels from the table, in the dashboard's fixed grid
/// order. This is configuration, not computation: no conditional logic,
/// and the first failing component aborts the whole composition.
pub fn compose(table: &Table) -> Result<Vec<Panel>, DashboardError> {
    log::debug!("composing dashboard from {} rows", table.len());

    let panels = vec![
        Panel::new(
            "Missing Values Heatmap",
            PanelKind::Heatmap,
            PanelPayload::Missingness(missingness::project(table)),
        ),
        Panel::new(
            "Pie Chart: COVID-19 Data",
            PanelKind::Pie,
            PanelPayload::Summary(summary::summarize()),
        ),
        Panel::new(
            "Confirmed Cases by Region",
            PanelKind::HorizontalBars,
            PanelPayload::Regions(regional::extract(
                table,
                Metric::Confirmed,
                SelectionPolicy::DeterministicHead,
                HEAD_WINDOW,
            )?),
        )
        .with_axes("Confirmed Cases", "Region"),
        Panel::new(
            "Cured Cases by Region",
            PanelKind::HorizontalBars,
            PanelPayload::Regions(regional::extract(
                table,
                Metric::Cured,
                SelectionPolicy::RandomSample,
                SAMPLE_WINDOW,
            )?),
        )
        .with_axes("Cured Cases", "Region"),
        Panel::new(
            "Heatmap of Selected Features",
            PanelKind::CorrelationHeatmap,
            PanelPayload::Correlation(correlation::project(table, &schema::DOSE_COLUMNS)?),
        )
        .with_axes("Features", "Features"),
        Panel::new(
            "Death Cases by Region",
            PanelKind::HorizontalBars,
            PanelPayload::Regions(regional::extract(
                table,
                Metric::Deaths,
                SelectionPolicy::DeterministicHead,
                HEAD_WINDOW,
            )?),
        )
        .with_axes("Death Cases", "Region"),
        Panel::new(
            "Scatter Plot: Relationship between Total Individuals and Vaccine Types",
            PanelKind::Scatter,
            PanelPayload::Relations(relation::extract(
                table,
                schema::TOTAL_VACCINATED,
                &schema::DOSE_COLUMNS,
            )?),
        )
        .with_axes("Total Individuals Vaccinated", "Number of Doses Administered"),
    ];

    Ok(panels)
}

/// Compose the dashboard and dispatch every panel to the rendering
/// collaborator, in grid order. No panel is drawn if any derivation fails.
pub fn render(
    table: &Table,
    config: &RenderConfig,
    renderer: &mut dyn PanelRenderer,
) -> anyhow::Result<()> {
    let panels = compose(table)?;
    log::info!(
        "Rendering {} panels in a {}-column grid",
        panels.len(),
        config.layout_columns
    );

    renderer.begin_pass(config).context("starting render pass")?;
    for panel in &panels {
        renderer
            .draw_panel(panel)
            .with_context(|| format!("drawing panel {:?}", panel.title))?;
    }
    Ok(())
}

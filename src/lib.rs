//! Data transformation and panel composition for a COVID-19 regional
//! statistics dashboard.
//!
//! The pipeline is one-way: the loader materializes an immutable [`Table`],
//! five independent projectors/extractors derive one finalized dataset per
//! panel, and the composer arranges them into a fixed grid and hands each
//! to the external rendering collaborator. Nothing is cached and nothing
//! is mutated after load; every render pass recomputes from the table.

pub mod dashboard;
pub mod data;
pub mod error;
pub mod panel;
pub mod render;
pub mod schema;

pub use data::loader::load_file;
pub use data::model::{CellValue, Row, Table};
pub use error::DashboardError;
pub use panel::{Panel, PanelKind, PanelPayload};
pub use render::{ColorScheme, PanelRenderer, RenderConfig};

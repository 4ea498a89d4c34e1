//! Column names of the cleaned COVID-19 dataset.
//!
//! These are the exact header strings of the published CSV, including the
//! leading space in the Covaxin column.

pub const REGION: &str = "State/UnionTerritory";
pub const CONFIRMED: &str = "Confirmed";
pub const CURED: &str = "Cured";
pub const DEATHS: &str = "Deaths";
pub const TOTAL_VACCINATED: &str = "Total Individuals Vaccinated";
pub const COVAXIN_DOSES: &str = " Covaxin (Doses Administered)";
pub const COVISHIELD_DOSES: &str = "CoviShield (Doses Administered)";
pub const SPUTNIK_DOSES: &str = "Sputnik V (Doses Administered)";

/// The three per-product dose columns, in legend order.
pub const DOSE_COLUMNS: [&str; 3] = [COVAXIN_DOSES, COVISHIELD_DOSES, SPUTNIK_DOSES];

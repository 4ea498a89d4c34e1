use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use covid_dash::schema;

const STATES: [&str; 24] = [
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Puducherry",
];

/// Box-Muller transform for normal distribution.
fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(1e-15);
    let u2 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);

    let output_path = "covid_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        schema::REGION,
        schema::CONFIRMED,
        schema::CURED,
        schema::DEATHS,
        schema::TOTAL_VACCINATED,
        schema::COVAXIN_DOSES,
        schema::COVISHIELD_DOSES,
        schema::SPUTNIK_DOSES,
    ])?;

    // Three cumulative snapshots per state, each wave roughly doubling the
    // counts, with a sprinkling of empty cells so the missingness panel has
    // something to show.
    let mut n_rows = 0usize;
    for wave in 1..=3u32 {
        let scale = (1 << wave) as f64;
        for state in STATES {
            let confirmed = gauss(&mut rng, 400_000.0 * scale, 90_000.0).max(0.0) as u64;
            let cured = (confirmed as f64 * rng.gen_range(0.75..0.95)) as u64;
            let deaths = (confirmed as f64 * rng.gen_range(0.005..0.02)) as u64;
            let vaccinated = gauss(&mut rng, 3_000_000.0 * scale, 500_000.0).max(0.0) as u64;
            let covishield = (vaccinated as f64 * rng.gen_range(0.6..0.8)) as u64;
            let covaxin = (vaccinated as f64 * rng.gen_range(0.15..0.3)) as u64;
            let sputnik = vaccinated.saturating_sub(covishield + covaxin);

            let cured_cell = if rng.gen_bool(0.04) {
                String::new()
            } else {
                cured.to_string()
            };
            let sputnik_cell = if rng.gen_bool(0.08) {
                String::new()
            } else {
                sputnik.to_string()
            };

            writer.write_record([
                state.to_string(),
                confirmed.to_string(),
                cured_cell,
                deaths.to_string(),
                vaccinated.to_string(),
                covaxin.to_string(),
                covishield.to_string(),
                sputnik_cell,
            ])?;
            n_rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {n_rows} rows ({} regions, 3 waves) to {output_path}", STATES.len());
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic salary dataset for the dashboard
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version)]
struct Args {
    /// Output CSV path
    #[arg(default_value = "salaries.csv")]
    out: PathBuf,
}

const HEADER: [&str; 7] = [
    "work_year",
    "experience_level",
    "employment_type",
    "job_title",
    "salary",
    "salary_currency",
    "salary_in_usd",
];

/// Base USD salary per title for 2020; later years drift upward.
const TITLES: [(&str, f64); 6] = [
    ("ML Engineer", 118_000.0),
    ("Data Scientist", 104_000.0),
    ("Data Engineer", 98_000.0),
    ("Research Scientist", 131_000.0),
    ("Data Analyst", 72_000.0),
    ("MLOps Engineer", 110_000.0),
];

const LEVELS: [(&str, f64); 4] = [("EN", 0.65), ("MI", 0.9), ("SE", 1.2), ("EX", 1.6)];

const CURRENCIES: [(&str, f64); 3] = [("USD", 1.0), ("EUR", 0.92), ("GBP", 0.79)];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output_path = args.out.display();

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&args.out)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADER)?;

    let mut written = 0usize;
    for year in 2020..=2024 {
        // More postings every year.
        let postings = 40 + (year - 2020) * 25;
        let growth = 1.0 + 0.06 * (year - 2020) as f64;

        for _ in 0..postings {
            let &(title, base) = rng.pick(&TITLES);
            let &(level, level_factor) = rng.pick(&LEVELS);
            let &(currency, rate) = rng.pick(&CURRENCIES);

            let usd = (base * growth * level_factor * rng.gauss(1.0, 0.12)).max(15_000.0).round();
            let local = (usd * rate).round();

            writer.write_record([
                year.to_string(),
                level.to_string(),
                "FT".to_string(),
                title.to_string(),
                local.to_string(),
                currency.to_string(),
                usd.to_string(),
            ])?;
            written += 1;
        }
    }

    // A few lines the dashboard is expected to drop or partially ignore.
    let odd_rows: [[&str; 7]; 4] = [
        ["2023", "SE", "FT", "ML Engineer", "", "USD", "N/A"],
        ["unknown", "MI", "FT", "Data Scientist", "90000", "USD", "90000"],
        ["2022", "EN", "FT", "", "50000", "USD", "50000"],
        ["2024", "SE", "PT", "Data Engineer", "abc", "USD", ""],
    ];
    for row in odd_rows {
        writer.write_record(row)?;
    }

    writer.flush().with_context(|| format!("writing {output_path}"))?;

    println!(
        "Wrote {written} salary records plus {} malformed rows to {output_path}",
        odd_rows.len()
    );
    Ok(())
}

use anyhow::{Context, Result};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate a synthetic pre-cleaned diagnostic table shaped like the
/// Wisconsin breast-cancer dataset: malignant tumors run larger on every
/// size measurement.
fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let hospitals = ["General", "Universitario", "San Rafael"];

    let mut writer = csv::Writer::from_path("sample_cases.csv")
        .context("creating sample_cases.csv")?;
    writer.write_record([
        "ID_Paciente",
        "Diagnosis",
        "Radius_Mean",
        "Texture_Mean",
        "Perimeter_Mean",
        "Area_Mean",
        "Hospital",
    ])?;

    for i in 0..300 {
        let malignant = rng.next_f64() < 0.4;
        let (radius_mu, texture_mu) = if malignant { (17.5, 21.5) } else { (12.0, 17.5) };

        let radius = rng.gauss(radius_mu, 2.2).max(6.0);
        let texture = rng.gauss(texture_mu, 3.5).max(9.0);
        let perimeter = radius * std::f64::consts::TAU / 2.0 + rng.gauss(0.0, 3.0);
        let area = radius * radius * std::f64::consts::PI * rng.gauss(1.0, 0.04).max(0.8);
        let hospital = hospitals[(rng.next_u64() % hospitals.len() as u64) as usize];

        writer.write_record([
            format!("P{:04}", i + 1),
            if malignant { "Malignant" } else { "Benign" }.to_string(),
            round2(radius).to_string(),
            round2(texture).to_string(),
            round2(perimeter).to_string(),
            round2(area).to_string(),
            hospital.to_string(),
        ])?;
    }

    writer.flush().context("writing sample_cases.csv")?;
    println!("Wrote sample_cases.csv (300 cases)");
    Ok(())
}

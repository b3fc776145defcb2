use std::io::Write;

use anyhow::{Context, Result};

const POSITIVE_PHRASES: &[&str] = &[
    "great product, I love it",
    "excellent sustainability report",
    "the company is transparent and responsible",
    "pelayanan sangat baik dan saya puas",
    "program hijau perusahaan ini bagus",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "terrible service, very disappointed",
    "another pollution scandal, awful",
    "the board is not responsible at all",
    "laporan keuangan buruk, investor kecewa",
    "kasus korupsi ini parah",
];

const SOURCES: &[&str] = &["twitter", "news", "survey"];

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_reviews.csv";

    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["id", "text", "source"])?;

    let n_rows = 30;
    for id in 0..n_rows {
        let text = match id {
            // A blank review and a numeric code exercise the UNKNOWN and
            // coercion paths.
            7 => "".to_string(),
            13 => "404".to_string(),
            _ if rng.next_u64() % 2 == 0 => rng.pick(POSITIVE_PHRASES).to_string(),
            _ => rng.pick(NEGATIVE_PHRASES).to_string(),
        };
        writer.write_record([id.to_string(), text, rng.pick(SOURCES).to_string()])?;
    }
    writer.flush()?;
    drop(writer);

    // One row with an extra column; the app skips and reports it.
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(output_path)
        .context("reopening output file")?;
    writeln!(file, "{n_rows},broken row,survey,unexpected")?;

    println!("Wrote {} reviews (1 malformed) to {output_path}", n_rows + 1);
    Ok(())
}

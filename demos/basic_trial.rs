//! Basic trial example: one input through every code that accepts it

use eccstudio_core::{NoiseKind, NoisePlan, Studio, StudioConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ECC Studio Basic Trial Example\n");

    let studio = Studio::new(StudioConfig::default())?;
    let mut rng = StdRng::seed_from_u64(7);
    let plan = NoisePlan::Adaptive(NoiseKind::Random);

    for input in ["1011", "110100111", "hello"] {
        let comparison = studio.compare_all(input, &plan, &mut rng)?;
        for row in &comparison.rows {
            if let eccstudio_core::simulation::ComparisonOutcome::Ran { report } = &row.outcome {
                println!("{}\n", report);
            }
        }
        println!("{}", comparison);
    }

    println!("=== Statistics ===");
    for row in studio.stats().snapshot().entries {
        println!(
            "{:<14} {:>3}/{:<3} ({:.1}%)",
            row.scheme, row.entry.corrected, row.entry.tested, row.success_rate
        );
    }

    Ok(())
}

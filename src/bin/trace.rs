//! Headless trace of the lamp simulation.
//! Steps a seeded lamp for a fixed stretch of simulated time and prints
//! where the wax ends up, plus a coarse height histogram over the run.

use lava_core::constants::DEFAULT_DT;
use lava_core::LampConfig;
use lava_physics::spawn;
use lava_sim::LampState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const BLOB_COUNT: usize = 8;
const SIM_SECONDS: f32 = 120.0;
const HISTOGRAM_BANDS: usize = 8;

fn main() {
    let config = LampConfig {
        lamp_size: [2.0, 4.0],
        top_narrowing: 0.6,
        ..LampConfig::default()
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let blobs = spawn::scatter_blobs(BLOB_COUNT, &config, &mut rng);
    let mut lamp = match LampState::new(config, blobs) {
        Ok(lamp) => lamp,
        Err(err) => {
            eprintln!("bad lamp config: {err}");
            std::process::exit(1);
        }
    };
    lamp.randomize(&mut rng);

    let height = lamp.config().height();
    let steps = (SIM_SECONDS / DEFAULT_DT) as usize;
    let mut band_counts = [0u64; HISTOGRAM_BANDS];

    eprintln!(
        "Tracing {} blobs for {SIM_SECONDS} s at dt = {DEFAULT_DT} ({steps} steps)...",
        lamp.blobs().len()
    );

    for _ in 0..steps {
        if let Err(err) = lamp.step(DEFAULT_DT) {
            eprintln!("step failed: {err}");
            std::process::exit(1);
        }
        for blob in lamp.blobs() {
            let t = (blob.position[1] / height).clamp(0.0, 1.0);
            let band = ((t * HISTOGRAM_BANDS as f32) as usize).min(HISTOGRAM_BANDS - 1);
            band_counts[band] += 1;
        }
    }

    println!();
    println!("FINAL BLOB STATE (t = {:.0} s)", lamp.elapsed);
    println!(
        "{:>4}  {:>8}  {:>8}  {:>7}  {:>7}",
        "blob", "x", "y", "size", "temp"
    );
    for (i, blob) in lamp.blobs().iter().enumerate() {
        println!(
            "{:>4}  {:>8.3}  {:>8.3}  {:>7.3}  {:>7.3}",
            i, blob.position[0], blob.position[1], blob.size, blob.temperature
        );
    }

    let total: u64 = band_counts.iter().sum();
    println!();
    println!("TIME SPENT PER HEIGHT BAND (bottom → top)");
    for (band, &count) in band_counts.iter().enumerate() {
        let share = count as f64 / total.max(1) as f64;
        let bar = "█".repeat((share * 120.0) as usize);
        let lo = band as f32 / HISTOGRAM_BANDS as f32 * height;
        let hi = (band + 1) as f32 / HISTOGRAM_BANDS as f32 * height;
        println!("{lo:>5.2}-{hi:<5.2} {:>5.1}% {bar}", share * 100.0);
    }
}

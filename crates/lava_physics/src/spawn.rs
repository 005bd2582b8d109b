use lava_core::constants::{INITIAL_TEMPERATURE_RANGE, INITIAL_VELOCITY_RANGE};
use lava_core::{Blob, LampConfig};
use rand::Rng;

/// Give every blob a random starting temperature and drift velocity.
///
/// Positions and sizes are authored by the caller and left untouched. The
/// RNG is injected so hosts and tests control determinism with a seed.
pub fn randomize_blobs(blobs: &mut [Blob], rng: &mut impl Rng) {
    for blob in blobs.iter_mut() {
        blob.temperature =
            rng.gen_range(-INITIAL_TEMPERATURE_RANGE..INITIAL_TEMPERATURE_RANGE);
        blob.velocity = [
            rng.gen_range(-INITIAL_VELOCITY_RANGE..INITIAL_VELOCITY_RANGE),
            rng.gen_range(-INITIAL_VELOCITY_RANGE..INITIAL_VELOCITY_RANGE),
        ];
    }
}

/// Author a starting layout for hosts that don't hand-place blobs:
/// assorted sizes, scattered through the lower half of the lamp where the
/// heater would have melted the wax.
pub fn scatter_blobs(count: usize, config: &LampConfig, rng: &mut impl Rng) -> Vec<Blob> {
    let half_width = config.half_width();
    let height = config.height();

    (0..count)
        .map(|_| {
            let size = rng.gen_range(0.15..0.5f32);
            let x = rng.gen_range(-half_width * 0.8..half_width * 0.8);
            let y = rng.gen_range(height * 0.05..height * 0.5);
            Blob::new([x, y], size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn randomize_stays_within_documented_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut blobs = vec![Blob::new([0.3, 1.0], 0.4); 64];
        randomize_blobs(&mut blobs, &mut rng);

        for blob in &blobs {
            assert!(blob.temperature >= -1.0 && blob.temperature < 1.0);
            assert!(blob.velocity[0] >= -0.5 && blob.velocity[0] < 0.5);
            assert!(blob.velocity[1] >= -0.5 && blob.velocity[1] < 0.5);
            // authored fields untouched
            assert_eq!(blob.position, [0.3, 1.0]);
            assert_eq!(blob.size, 0.4);
        }
    }

    #[test]
    fn randomize_is_deterministic_per_seed() {
        let mut a = vec![Blob::new([0.0, 1.0], 0.3); 8];
        let mut b = a.clone();

        randomize_blobs(&mut a, &mut ChaCha8Rng::seed_from_u64(99));
        randomize_blobs(&mut b, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_places_blobs_inside_the_lower_glass() {
        let config = LampConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let blobs = scatter_blobs(12, &config, &mut rng);

        assert_eq!(blobs.len(), 12);
        for blob in &blobs {
            assert!(blob.position[0].abs() <= config.half_width());
            assert!(blob.position[1] >= 0.0 && blob.position[1] <= config.height() * 0.5);
            assert!(blob.size > 0.0);
        }
    }
}

use lava_core::LampConfig;

/// Rate of temperature drift toward the height-implied equilibrium.
///
/// Blobs below the lamp's vertical center heat up, blobs above it cool
/// down. The pull is clamped to ±`temperature_gradient` so it stays bounded
/// no matter how far a blob has strayed from center.
pub fn temperature_delta(y: f32, config: &LampConfig) -> f32 {
    let center = config.height() * 0.5;
    let delta = (center - y) * config.temperature_gradient / center;
    delta.clamp(-config.temperature_gradient, config.temperature_gradient)
}

/// Vertical acceleration from stored heat. Positive temperature lifts,
/// negative sinks; lighter blobs accelerate more for the same temperature.
pub fn buoyant_acceleration(temperature: f32, mass: f32) -> f32 {
    temperature / mass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LampConfig {
        LampConfig {
            lamp_size: [2.0, 4.0],
            temperature_gradient: 0.5,
            ..LampConfig::default()
        }
    }

    #[test]
    fn heats_below_center_cools_above() {
        let config = config();
        assert!(temperature_delta(0.5, &config) > 0.0);
        assert!(temperature_delta(3.5, &config) < 0.0);
        assert_eq!(temperature_delta(2.0, &config), 0.0);
    }

    #[test]
    fn drift_is_clamped_far_from_center() {
        let config = config();
        assert_eq!(temperature_delta(-100.0, &config), 0.5);
        assert_eq!(temperature_delta(100.0, &config), -0.5);
    }

    #[test]
    fn lighter_blobs_accelerate_more() {
        let heavy = buoyant_acceleration(1.0, 1.0);
        let light = buoyant_acceleration(1.0, 0.25);
        assert!(light > heavy);
        assert_eq!(light, 4.0 * heavy);
    }
}

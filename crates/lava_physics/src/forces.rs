use lava_core::LampConfig;

/// Velocity change on blob `i` from repulsion against blob `j` over `dt`.
///
/// The force falls off as 1/r³ along the displacement (d / r⁴ in vector
/// form). It is computed one-sided per blob and is deliberately not
/// momentum-conserving; the lamp's visual behavior depends on this exact
/// formulation. Coincident blobs contribute nothing — anything else would
/// divide by zero.
pub fn repulsion(pos_i: [f32; 2], pos_j: [f32; 2], strength: f32, dt: f32) -> [f32; 2] {
    let dx = pos_i[0] - pos_j[0];
    let dy = pos_i[1] - pos_j[1];
    let r2 = dx * dx + dy * dy;
    if r2 <= 0.0 {
        return [0.0, 0.0];
    }

    let f = dt * strength / (r2 * r2);
    [f * dx, f * dy]
}

/// Allowed half-width of the glass at height `y`.
///
/// Interpolates linearly from the full half-width at the floor down to
/// `top_narrowing` of it at the top. The vertical fraction is clamped, so
/// blobs that overshoot above or below the lamp see the nearest wall slope
/// rather than an extrapolated one.
pub fn allowed_half_width(y: f32, config: &LampConfig) -> f32 {
    let t = (y / config.height()).clamp(0.0, 1.0);
    let narrowing = 1.0 + (config.top_narrowing - 1.0) * t;
    narrowing * config.half_width()
}

/// Constant-rate corrective push for a blob found outside the glass.
///
/// Each of the four bounds is checked independently and adds a fixed ±dt
/// nudge; the push is not scaled by penetration depth, so mild overshoot is
/// expected and self-corrects over subsequent steps. All four checks can
/// fire in the same step.
pub fn wall_correction(pos: [f32; 2], config: &LampConfig, dt: f32) -> [f32; 2] {
    let mut dv = [0.0, 0.0];
    let half_width = allowed_half_width(pos[1], config);

    if pos[1] < 0.0 {
        dv[1] += dt;
    }
    if pos[1] > config.height() {
        dv[1] -= dt;
    }
    if pos[0] < -half_width {
        dv[0] += dt;
    }
    if pos[0] > half_width {
        dv[0] -= dt;
    }
    dv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tapered_config() -> LampConfig {
        LampConfig {
            lamp_size: [2.0, 4.0],
            top_narrowing: 0.5,
            ..LampConfig::default()
        }
    }

    #[test]
    fn repulsion_pushes_apart_with_equal_magnitude() {
        let a = repulsion([-1.0, 0.0], [1.0, 0.0], 0.1, 0.1);
        let b = repulsion([1.0, 0.0], [-1.0, 0.0], 0.1, 0.1);

        assert!(a[0] < 0.0);
        assert!(b[0] > 0.0);
        assert!((a[0] + b[0]).abs() < 1e-7);
        assert_eq!(a[1], 0.0);
        assert_eq!(b[1], 0.0);
    }

    #[test]
    fn repulsion_falls_off_as_inverse_cube() {
        let near = repulsion([1.0, 0.0], [0.0, 0.0], 1.0, 1.0);
        let far = repulsion([2.0, 0.0], [0.0, 0.0], 1.0, 1.0);

        // |dv| = strength / r³, so doubling the distance divides by 8
        let ratio = near[0] / far[0];
        assert!((ratio - 8.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_blobs_are_skipped() {
        let dv = repulsion([0.5, 0.5], [0.5, 0.5], 0.1, 0.1);
        assert_eq!(dv, [0.0, 0.0]);
    }

    #[test]
    fn glass_narrows_linearly_with_height() {
        let config = tapered_config();
        assert_eq!(allowed_half_width(0.0, &config), 1.0);
        assert_eq!(allowed_half_width(2.0, &config), 0.75);
        assert_eq!(allowed_half_width(4.0, &config), 0.5);
    }

    #[test]
    fn taper_is_clamped_beyond_the_glass() {
        let config = tapered_config();
        assert_eq!(allowed_half_width(-3.0, &config), 1.0);
        assert_eq!(allowed_half_width(9.0, &config), 0.5);
    }

    #[test]
    fn floor_pushes_up() {
        let config = tapered_config();
        let dv = wall_correction([0.0, -1.0], &config, 0.1);
        assert_eq!(dv, [0.0, 0.1]);
    }

    #[test]
    fn cap_pushes_down() {
        let config = tapered_config();
        let dv = wall_correction([0.0, 5.0], &config, 0.1);
        assert_eq!(dv, [0.0, -0.1]);
    }

    #[test]
    fn tapered_wall_pushes_inward() {
        let config = tapered_config();
        // x = 0.9 is inside the glass at the floor but outside it at the top
        assert_eq!(wall_correction([0.9, 0.0], &config, 0.1), [0.0, 0.0]);
        assert_eq!(wall_correction([0.9, 4.0], &config, 0.1), [-0.1, 0.0]);
        assert_eq!(wall_correction([-0.9, 4.0], &config, 0.1), [0.1, 0.0]);
    }

    #[test]
    fn corner_fires_both_axes() {
        let config = tapered_config();
        let dv = wall_correction([-5.0, -1.0], &config, 0.1);
        assert_eq!(dv, [0.1, 0.1]);
    }
}

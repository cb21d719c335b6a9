use super::pointer::Pointer;

/// Magnification curve: maps pointer-to-icon distance to a target size.
///
/// Linear falloff from `max_scale_factor` directly under the pointer down to
/// `1.0` at `influence_radius`. Symmetric in the distance, so an icon reacts
/// identically to the pointer on either side. Icons do not interact with each
/// other; each one sees only its own distance.
///
/// `center_x` is `None` when the icon has not been laid out yet; that icon
/// simply rests at `base_size` for the frame instead of aborting the tick.
pub fn target_size(
    center_x: Option<f32>,
    pointer: Pointer,
    base_size: f32,
    influence_radius: f32,
    max_scale_factor: f32,
) -> f32 {
    let (Pointer::At(pointer_x), Some(center_x)) = (pointer, center_x) else {
        return base_size;
    };

    let distance = (pointer_x - center_x).abs();
    if distance > influence_radius {
        return base_size;
    }

    let normalized = distance / influence_radius;
    let scale = 1.0 + (1.0 - normalized) * (max_scale_factor - 1.0);
    // The linear curve cannot exceed max_scale_factor, but a future curve
    // change could, so clamp anyway.
    base_size * scale.min(max_scale_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: f32 = 52.0;
    const RADIUS: f32 = 312.0;
    const MAX_SCALE: f32 = 2.5;

    fn at_distance(d: f32) -> f32 {
        target_size(Some(0.0), Pointer::At(d), BASE, RADIUS, MAX_SCALE)
    }

    #[test]
    fn absent_pointer_rests_at_base() {
        let size = target_size(Some(100.0), Pointer::Absent, BASE, RADIUS, MAX_SCALE);
        assert_eq!(size, BASE);
    }

    #[test]
    fn missing_geometry_rests_at_base() {
        let size = target_size(None, Pointer::At(0.0), BASE, RADIUS, MAX_SCALE);
        assert_eq!(size, BASE);
    }

    #[test]
    fn peak_directly_under_pointer() {
        assert_eq!(at_distance(0.0), BASE * MAX_SCALE);
    }

    #[test]
    fn base_at_radius_boundary() {
        assert_eq!(at_distance(RADIUS), BASE);
        assert_eq!(at_distance(RADIUS + 1.0), BASE);
    }

    #[test]
    fn half_radius_scenario() {
        // normalized 0.5 -> scale 1.75 -> 52 * 1.75 = 91
        assert!((at_distance(156.0) - 91.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn monotone_in_distance(d1 in 0.0f32..RADIUS, d2 in 0.0f32..RADIUS) {
            let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(at_distance(near) >= at_distance(far));
        }

        #[test]
        fn symmetric_around_center(center in -500i32..500, d in 0i32..400) {
            // Integer coordinates keep `center ± d` exact in f32, so the two
            // pointer positions are exactly equidistant.
            let (center, d) = (center as f32, d as f32);
            let left = target_size(
                Some(center), Pointer::At(center - d), BASE, RADIUS, MAX_SCALE,
            );
            let right = target_size(
                Some(center), Pointer::At(center + d), BASE, RADIUS, MAX_SCALE,
            );
            prop_assert_eq!(left, right);
        }

        #[test]
        fn never_exceeds_peak(d in 0.0f32..1000.0) {
            let size = at_distance(d);
            prop_assert!(size >= BASE);
            prop_assert!(size <= BASE * MAX_SCALE);
        }
    }
}

//! Dock magnification physics.
//!
//! Plain Rust, no Bevy types: the ECS side owns a [`DockPhysics`] as a
//! resource and drives it once per frame, but everything here is testable
//! without a window. Per frame the driver writes each icon's live center
//! (layout belongs to the presentation layer), calls [`DockPhysics::tick`],
//! and reads back `current_size` for rendering.

pub mod pointer;
pub mod proximity;
pub mod spring;

pub use pointer::{Pointer, PointerTracker};
pub use spring::Spring;

use thiserror::Error;

/// Rejected dock tuning. Raised at construction, never mid-tick.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("base icon size must be a positive finite number, got {0}")]
    BaseSize(f32),
    #[error("influence radius must be a positive finite number, got {0}")]
    InfluenceRadius(f32),
    #[error("max scale factor must be finite and at least 1.0, got {0}")]
    MaxScaleFactor(f32),
    #[error("stiffness must be in (0, 1), got {0}")]
    Stiffness(f32),
    #[error("damping must be in [0, 1), got {0}")]
    Damping(f32),
}

/// Magnification tuning for one dock instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Resting icon size in px.
    pub base_size: f32,
    /// Px distance at which magnification fully decays.
    pub influence_radius: f32,
    /// Peak multiplier directly under the pointer.
    pub max_scale_factor: f32,
    pub spring: Spring,
}

impl Default for Tuning {
    fn default() -> Self {
        let base_size = 56.0;
        Self {
            base_size,
            influence_radius: base_size * 6.0,
            max_scale_factor: 2.5,
            spring: Spring::default(),
        }
    }
}

impl Tuning {
    /// Out-of-range tuning would make the spring shrink icons or diverge, so
    /// it is refused up front instead of producing garbage per frame.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.base_size.is_finite() || self.base_size <= 0.0 {
            return Err(TuningError::BaseSize(self.base_size));
        }
        if !self.influence_radius.is_finite() || self.influence_radius <= 0.0 {
            return Err(TuningError::InfluenceRadius(self.influence_radius));
        }
        if !self.max_scale_factor.is_finite() || self.max_scale_factor < 1.0 {
            return Err(TuningError::MaxScaleFactor(self.max_scale_factor));
        }
        let Spring { stiffness, damping } = self.spring;
        if !stiffness.is_finite() || stiffness <= 0.0 || stiffness >= 1.0 {
            return Err(TuningError::Stiffness(stiffness));
        }
        if !damping.is_finite() || damping < 0.0 || damping >= 1.0 {
            return Err(TuningError::Damping(damping));
        }
        Ok(())
    }
}

/// Per-icon physics state.
///
/// `current_size` and `velocity` persist across frames; `target_size` is
/// derived data, overwritten every tick from the pointer and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct IconEntry {
    pub base_size: f32,
    pub target_size: f32,
    pub current_size: f32,
    pub velocity: f32,
    /// Live layout center, written by the presentation layer each frame.
    /// `None` until the icon has been laid out.
    pub center_x: Option<f32>,
}

impl IconEntry {
    pub fn new(base_size: f32) -> Self {
        Self {
            base_size,
            target_size: base_size,
            current_size: base_size,
            velocity: 0.0,
            center_x: None,
        }
    }
}

/// The dock's owned simulation state: one entry per icon, in dock order,
/// plus the pointer tracker. The presentation layer only reads sizes and
/// writes geometry/pointer input; it never touches the spring state.
#[derive(Debug)]
pub struct DockPhysics {
    icons: Vec<IconEntry>,
    pointer: PointerTracker,
    tuning: Tuning,
}

impl DockPhysics {
    pub fn new(tuning: Tuning, icon_count: usize) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            icons: (0..icon_count)
                .map(|_| IconEntry::new(tuning.base_size))
                .collect(),
            pointer: PointerTracker::default(),
            tuning,
        })
    }

    /// Pointer moved inside the dock's hit region.
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer.set_position(x);
    }

    /// Pointer left the hit region; targets decay to base on the next tick.
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Record an icon's current layout center for the next tick. Out-of-range
    /// indices are ignored.
    pub fn set_center(&mut self, index: usize, center_x: Option<f32>) {
        if let Some(icon) = self.icons.get_mut(index) {
            icon.center_x = center_x;
        }
    }

    /// Click feedback: dip the icon slightly and let the spring pull it back.
    pub fn press(&mut self, index: usize) {
        if let Some(icon) = self.icons.get_mut(index) {
            icon.current_size *= 0.9;
        }
    }

    /// Advance the whole dock by one display frame: recompute every target
    /// from the current pointer and geometry, then integrate every spring.
    /// Icons carry no cross-coupling, so insertion order is just iteration
    /// order.
    pub fn tick(&mut self) {
        for icon in &mut self.icons {
            icon.target_size = proximity::target_size(
                icon.center_x,
                self.pointer.current(),
                icon.base_size,
                self.tuning.influence_radius,
                self.tuning.max_scale_factor,
            );
            self.tuning.spring.advance(icon);
        }
    }

    pub fn icon(&self, index: usize) -> Option<&IconEntry> {
        self.icons.get(index)
    }

    pub fn icons(&self) -> &[IconEntry] {
        &self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dock(count: usize) -> DockPhysics {
        let tuning = Tuning {
            base_size: 52.0,
            influence_radius: 312.0,
            max_scale_factor: 2.5,
            spring: Spring::default(),
        };
        let mut dock = DockPhysics::new(tuning, count).unwrap();
        for i in 0..count {
            dock.set_center(i, Some(i as f32 * 64.0));
        }
        dock
    }

    #[test]
    fn rejects_bad_tuning() {
        let cases = [
            (Tuning { base_size: 0.0, ..Tuning::default() }, "base"),
            (Tuning { base_size: f32::NAN, ..Tuning::default() }, "nan base"),
            (Tuning { influence_radius: -1.0, ..Tuning::default() }, "radius"),
            (Tuning { max_scale_factor: 0.5, ..Tuning::default() }, "scale"),
            (
                Tuning {
                    spring: Spring { stiffness: 1.0, damping: 0.7 },
                    ..Tuning::default()
                },
                "stiffness",
            ),
            (
                Tuning {
                    spring: Spring { stiffness: 0.3, damping: 1.0 },
                    ..Tuning::default()
                },
                "damping",
            ),
        ];
        for (tuning, what) in cases {
            assert!(DockPhysics::new(tuning, 4).is_err(), "accepted bad {what}");
        }
    }

    #[test]
    fn absent_pointer_targets_base_exactly() {
        let mut dock = dock(5);
        dock.tick();
        for icon in dock.icons() {
            assert_eq!(icon.target_size, 52.0);
            assert_eq!(icon.current_size, 52.0);
        }
    }

    #[test]
    fn icon_under_pointer_magnifies() {
        let mut dock = dock(5);
        dock.pointer_moved(128.0);

        for _ in 0..200 {
            dock.tick();
        }

        let under = dock.icon(2).unwrap();
        assert!((under.current_size - 130.0).abs() < 0.1);
        // Neighbors are nearer the radius edge, so they settle smaller.
        let neighbor = dock.icon(1).unwrap();
        assert!(neighbor.current_size < under.current_size);
        assert!(neighbor.current_size > 52.0);
    }

    #[test]
    fn pointer_leave_relaxes_through_the_spring() {
        let mut dock = dock(3);
        dock.pointer_moved(64.0);
        for _ in 0..200 {
            dock.tick();
        }
        let magnified = dock.icon(1).unwrap().current_size;
        assert!(magnified > 100.0);

        dock.pointer_left();
        dock.tick();

        // Target snaps to base immediately; current size does not.
        let icon = dock.icon(1).unwrap();
        assert_eq!(icon.target_size, 52.0);
        assert!(icon.current_size > 52.0);

        for _ in 0..200 {
            dock.tick();
        }
        assert!((dock.icon(1).unwrap().current_size - 52.0).abs() < 0.01);
    }

    #[test]
    fn missing_geometry_never_aborts_a_tick() {
        let mut dock = dock(3);
        dock.set_center(1, None);
        dock.pointer_moved(64.0);
        dock.tick();

        // The unlaid-out icon rests; its neighbors still magnify.
        assert_eq!(dock.icon(1).unwrap().target_size, 52.0);
        assert!(dock.icon(0).unwrap().target_size > 52.0);
        assert!(dock.icon(2).unwrap().target_size > 52.0);
    }

    #[test]
    fn press_dips_and_recovers() {
        let mut dock = dock(1);
        dock.press(0);
        assert!((dock.icon(0).unwrap().current_size - 46.8).abs() < 1e-4);

        for _ in 0..200 {
            dock.tick();
        }
        assert!((dock.icon(0).unwrap().current_size - 52.0).abs() < 0.01);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut dock = dock(2);
        dock.set_center(9, Some(0.0));
        dock.press(9);
        assert!(dock.icon(9).is_none());
    }
}

use bevy::prelude::*;

/// Per-frame execution phases: pointer and key input first, then the
/// physics tick, then everything that reads the new sizes.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum AppSystemSet {
    Input,
    Physics,
    Present,
}

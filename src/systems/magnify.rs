use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::Config;
use crate::types::{Dock, DockIcon};

/// Advance the physics core by one display frame.
///
/// Geometry goes in first: the core never caches layout, so every tick sees
/// the icons' live centers. Frames where an icon has no entry yet simply
/// leave that entry resting.
pub fn dock_tick_system(
    mut dock: ResMut<Dock>,
    q_icons: Query<(&DockIcon, &Transform)>,
) {
    for (icon, transform) in q_icons.iter() {
        dock.0.set_center(icon.index, Some(transform.translation.x));
    }

    dock.0.tick();
}

/// Apply the freshly ticked sizes to the sprites.
///
/// Each icon's bottom edge stays pinned to the dock baseline, so magnified
/// icons grow upward out of the dock.
pub fn present_sizes_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    dock: Res<Dock>,
    mut q_icons: Query<(&DockIcon, &mut Transform, &mut Sprite)>,
    config: Res<Config>,
) {
    let window = windows.single();
    let baseline = -window.height() / 2.0 + config.margin_y;

    for (icon, mut transform, mut sprite) in q_icons.iter_mut() {
        if let Some(entry) = dock.0.icon(icon.index) {
            let size = entry.current_size;
            sprite.custom_size = Some(Vec2::splat(size));
            transform.translation.y = baseline + size / 2.0;
        }
    }
}

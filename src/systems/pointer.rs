use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::Config;
use crate::types::{Dock, MainCamera};

/// Feed the pointer tracker from the window cursor.
///
/// The hit region is the bottom strip the dock can occupy at full
/// magnification. A cursor above it, or outside the window entirely, clears
/// the tracker so every icon relaxes back to rest.
pub fn pointer_tracking_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut dock: ResMut<Dock>,
    config: Res<Config>,
) {
    let window = windows.single();
    let Ok((camera, camera_transform)) = q_camera.get_single() else {
        return;
    };

    let world_cursor = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor));

    match world_cursor {
        Some(pos) if in_hit_region(pos, window.height(), &config) => {
            dock.0.pointer_moved(pos.x);
        }
        _ => dock.0.pointer_left(),
    }
}

fn in_hit_region(pos: Vec2, window_height: f32, config: &Config) -> bool {
    let bottom = -window_height / 2.0;
    let strip_top = bottom + config.margin_y + config.icon_size * config.max_scale_factor;
    pos.y <= strip_top
}

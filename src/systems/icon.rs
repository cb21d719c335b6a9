use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::types::*;
use crate::utils::{focus_client, launch_application};

/// Left click on an icon focuses the running client, or launches the
/// application when nothing with that class is running. The press also dips
/// the icon's spring so the click reads visually.
pub fn icon_click_system(
    buttons: Res<Input<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_icons: Query<(&DockIcon, &Transform, &ClientClass, Option<&ClientAddress>)>,
    mut dock: ResMut<Dock>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }

    let window = windows.single();
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = q_camera.get_single() else {
        return;
    };
    let Some(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    for (icon, transform, class, address) in &q_icons {
        let Some(entry) = dock.0.icon(icon.index) else {
            continue;
        };
        // Hit-test against the rendered size, not the resting size, so a
        // magnified icon is clickable across its whole visible area.
        let rect = Rect::from_center_size(
            transform.translation.truncate(),
            Vec2::splat(entry.current_size),
        );
        if rect.contains(world_pos) {
            dock.0.press(icon.index);
            match address {
                Some(addr) => focus_client(&addr.0),
                None => launch_application(&class.0),
            }
            break;
        }
    }
}

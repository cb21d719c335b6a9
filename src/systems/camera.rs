use bevy::prelude::*;

use crate::types::MainCamera;

pub fn setup_camera(mut commands: Commands) {
    commands
        .spawn(Camera2dBundle {
            transform: Transform {
                translation: Vec3::new(0.0, 0.0, 100.0),
                ..default()
            },
            ..default()
        })
        .insert(MainCamera);
}

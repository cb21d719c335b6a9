use bevy::prelude::*;

use crate::components::add_icon_title;
use crate::config::Config;
use crate::types::*;

pub fn toggle_titles(
    mut commands: Commands,
    mut show_titles: ResMut<ShowTitles>,
    keyboard_input: Res<Input<KeyCode>>,
    q_icons: Query<(Entity, &Name), With<DockIcon>>,
    q_titles: Query<Entity, With<IconTitle>>,
    config: Res<Config>,
) {
    if keyboard_input.just_pressed(KeyCode::T) {
        show_titles.0 = !show_titles.0;

        if show_titles.0 {
            for (entity, name) in q_icons.iter() {
                add_icon_title(&mut commands, entity, name.as_str(), &config);
            }
        } else {
            for entity in q_titles.iter() {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

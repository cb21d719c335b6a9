mod spawn;

pub(crate) use spawn::spawn_icon_entity;

use bevy::prelude::*;

use crate::config::Config;
use crate::types::IconTitle;

/// Attach a title label under an icon. Labels are children of the icon
/// entity, so they follow it as the spring moves it.
pub(crate) fn add_icon_title(
    commands: &mut Commands,
    parent_icon: Entity,
    label: &str,
    config: &Res<Config>,
) {
    let offset_y = -(config.icon_size * 0.75);

    commands.entity(parent_icon).with_children(|parent| {
        parent.spawn((
            Text2dBundle {
                text: Text::from_section(
                    label.to_string(),
                    TextStyle {
                        font_size: config.font_size,
                        color: Color::WHITE,
                        ..default()
                    },
                )
                .with_alignment(TextAlignment::Center),
                transform: Transform::from_translation(Vec3::new(0.0, offset_y, 0.01)),
                ..default()
            },
            IconTitle,
        ));
    });
}

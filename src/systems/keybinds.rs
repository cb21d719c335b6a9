use bevy::app::AppExit;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

pub fn exit_on_esc_or_q(mut keys: EventReader<KeyboardInput>, mut exit: EventWriter<AppExit>) {
    for key_event in keys.read() {
        if let Some(key_code) = key_event.key_code {
            if key_event.state == ButtonState::Pressed
                && (key_code == KeyCode::Escape || key_code == KeyCode::Q)
            {
                exit.send(AppExit);
            }
        }
    }
}

use bevy::prelude::*;
use bevy::render::texture::ImageSamplerDescriptor;
use bevy::window::{PrimaryWindow, Window, WindowPlugin};

mod components;
mod config;
mod physics;
mod sets;
mod systems;
mod types;
mod utils;

use components::spawn_icon_entity;
use config::{load_config, Config};
use physics::DockPhysics;
use sets::AppSystemSet;
use systems::*;
use types::*;
use utils::load_clients;

fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("magni-dock: {e}");
            std::process::exit(1);
        }
    };

    let clients = load_clients();
    let physics = match DockPhysics::new(config.tuning(), clients.len()) {
        Ok(physics) => physics,
        Err(e) => {
            eprintln!("magni-dock: invalid dock tuning: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .insert_resource(Msaa::Sample4)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        transparent: true,
                        decorations: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin {
                    default_sampler: ImageSamplerDescriptor::nearest(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(config)
        .insert_resource(ClientList(clients))
        .insert_resource(Dock(physics))
        .insert_resource(ShowTitles(false))
        .configure_sets(
            Update,
            (
                AppSystemSet::Input,
                AppSystemSet::Physics,
                AppSystemSet::Present,
            )
                .chain(),
        )
        .add_systems(Startup, (setup_camera, setup))
        .add_systems(
            Update,
            (
                pointer_tracking_system,
                icon_click_system,
                toggle_titles,
                exit_on_esc_or_q,
            )
                .in_set(AppSystemSet::Input),
        )
        .add_systems(Update, dock_tick_system.in_set(AppSystemSet::Physics))
        .add_systems(Update, present_sizes_system.in_set(AppSystemSet::Present))
        .run();
}

/// Lay the discovered clients out in a centered row along the bottom of the
/// window, one sprite per physics entry.
fn setup(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    client_list: Res<ClientList>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<Config>,
) {
    let window = windows.single();
    let baseline_y = -window.height() / 2.0 + config.margin_y;

    let count = client_list.0.len();
    if count == 0 {
        warn!("No running clients found; the dock will be empty");
        return;
    }

    let pitch = config.icon_size + config.spacing;
    let row_width = count as f32 * pitch - config.spacing;
    let mut slot_x = -row_width / 2.0 + config.icon_size / 2.0;

    for (index, client) in client_list.0.iter().enumerate() {
        let label = client.name.as_deref().unwrap_or(&client.class);
        let entity = spawn_icon_entity(
            &mut commands,
            &mut images,
            &client.class,
            label,
            index,
            slot_x,
            baseline_y,
            &config,
        );
        commands
            .entity(entity)
            .insert(ClientAddress(client.address.clone()));
        slot_x += pitch;
    }
}

use bevy::prelude::*;
use serde::Deserialize;

use crate::physics::DockPhysics;

/// One running Hyprland client, as reported by `hyprctl clients -j`.
#[derive(Deserialize, Debug, Clone)]
pub struct Client {
    pub class: String,
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Resource)]
pub struct ClientList(pub Vec<Client>);

/// Marks an icon sprite and ties it to its entry in the physics core.
#[derive(Component, Debug)]
pub struct DockIcon {
    pub index: usize,
}

#[derive(Component, Debug)]
pub struct ClientAddress(pub String);

#[derive(Component, Debug)]
pub struct ClientClass(pub String);

/// Child text entity carrying an icon's title label.
#[derive(Component)]
pub struct IconTitle;

#[derive(Resource)]
pub struct ShowTitles(pub bool);

#[derive(Component)]
pub struct MainCamera;

/// The dock's simulation state, owned by this instance for its lifetime.
#[derive(Resource)]
pub struct Dock(pub DockPhysics);

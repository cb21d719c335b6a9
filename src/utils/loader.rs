use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::{
    log::{info, warn},
    render::texture::Image,
};

use image::io::Reader as ImageReader;
use std::path::{Path, PathBuf};
use std::process::Command;
use xdgkit::icon_finder;

use crate::types::Client;

pub fn get_current_clients() -> Result<Vec<Client>, std::io::Error> {
    let output = Command::new("hyprctl").args(["clients", "-j"]).output()?;

    if !output.status.success() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "Failed to execute hyprctl",
        ));
    }

    let clients: Vec<Client> = serde_json::from_slice(&output.stdout)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(clients)
}

pub fn load_clients() -> Vec<Client> {
    match get_current_clients() {
        Ok(clients) => clients,
        Err(e) => {
            warn!("Could not list Hyprland clients: {}", e);
            Vec::new()
        }
    }
}

/// Look up an application's icon in the installed icon themes.
pub fn find_icon_path(class: &str, size: u32) -> Option<PathBuf> {
    let lowercase = class.to_lowercase();
    match icon_finder::find_icon(lowercase, size as i32, 1) {
        Some(path) => {
            info!("icon found for {}", path.to_string_lossy());
            Some(path)
        }
        None => {
            warn!("No icons found for {}, using fallback", class);
            None
        }
    }
}

pub fn load_icon(path: &Path, size: u32) -> Option<Image> {
    if let Some(ext) = path.extension() {
        if ext == "svg" {
            return load_svg_image(path, size);
        }
    }

    let reader = ImageReader::open(path).ok()?;
    let img = reader.decode().ok()?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    let data = rgba_img.into_raw();

    Some(Image::new_fill(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &data,
        TextureFormat::Rgba8UnormSrgb,
    ))
}

pub fn load_svg_image(path: &Path, size: u32) -> Option<Image> {
    let svg_data = std::fs::read(path).ok()?;
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&svg_data, &opt).ok()?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        usvg::FitTo::Size(size, size),
        tiny_skia::Transform::default(),
        pixmap.as_mut(),
    )?;

    let data = pixmap.data().to_vec();
    Some(Image::new_fill(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &data,
        TextureFormat::Rgba8UnormSrgb,
    ))
}

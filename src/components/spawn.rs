use bevy::{
    asset::Assets,
    core::Name,
    ecs::{entity::Entity, system::Commands},
    log::error,
    math::{Vec2, Vec3},
    render::{
        color::Color,
        render_resource::{Extent3d, TextureDimension, TextureFormat},
        texture::Image,
    },
    sprite::{Sprite, SpriteBundle},
    transform::components::Transform,
    utils::default,
};

use crate::config::Config;
use crate::types::{ClientClass, DockIcon};
use crate::utils::{find_icon_path, load_icon};

static FALLBACK_ICON_SVG: &[u8] = include_bytes!("../../assets/icons/dock_icon.svg");

fn load_svg_from_bytes(svg_bytes: &[u8], target_size: u32) -> Option<Image> {
    use resvg::render;
    use tiny_skia::{Pixmap, Transform};
    use usvg::{Options, Tree};

    let opts = Options::default();
    let tree = match Tree::from_data(svg_bytes, &opts) {
        Ok(tree) => tree,
        Err(e) => {
            error!("Failed to parse SVG: {}", e);
            return None;
        }
    };

    let orig_size = tree.size.to_screen_size();
    let orig_width = orig_size.width() as f32;
    let orig_height = orig_size.height() as f32;

    let scale_factor = if orig_width > orig_height {
        target_size as f32 / orig_width
    } else {
        target_size as f32 / orig_height
    };

    let final_width = (orig_width * scale_factor).ceil() as u32;
    let final_height = (orig_height * scale_factor).ceil() as u32;

    let mut pixmap = match Pixmap::new(final_width, final_height) {
        Some(p) => p,
        None => {
            error!("Failed to create pixmap");
            return None;
        }
    };

    let transform = Transform::from_scale(scale_factor, scale_factor);
    render(&tree, usvg::FitTo::Original, transform, pixmap.as_mut());

    let rgba = pixmap.take();
    Some(Image::new(
        Extent3d {
            width: final_width,
            height: final_height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        rgba,
        TextureFormat::Rgba8Unorm,
    ))
}

fn solid_fallback(size: u32) -> Image {
    Image::new_fill(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[255, 0, 0, 255],
        TextureFormat::Rgba8Unorm,
    )
}

/// Spawn one dock icon sprite at its slot and tie it to the physics entry
/// with the same index. The sprite starts at resting size; the per-frame
/// driver owns `custom_size` and the vertical position from then on.
pub(crate) fn spawn_icon_entity(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    class: &str,
    label: &str,
    index: usize,
    slot_x: f32,
    baseline_y: f32,
    config: &Config,
) -> Entity {
    let icon_px = config.icon_size.ceil() as u32;

    let image = match find_icon_path(class, icon_px) {
        Some(path) => load_icon(&path, icon_px).or_else(|| {
            error!("Failed to load icon for {}, using fallback", class);
            load_svg_from_bytes(FALLBACK_ICON_SVG, icon_px)
        }),
        None => load_svg_from_bytes(FALLBACK_ICON_SVG, icon_px),
    };
    let handle = images.add(image.unwrap_or_else(|| {
        error!("Failed to render fallback SVG icon!");
        solid_fallback(icon_px)
    }));

    commands
        .spawn(SpriteBundle {
            texture: handle,
            transform: Transform::from_translation(Vec3::new(
                slot_x,
                baseline_y + config.icon_size / 2.0,
                -(index as f32) * 0.01,
            )),
            sprite: Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::splat(config.icon_size)),
                ..default()
            },
            ..default()
        })
        .insert(DockIcon { index })
        .insert(ClientClass(class.to_string()))
        .insert(Name::new(label.to_string()))
        .id()
}

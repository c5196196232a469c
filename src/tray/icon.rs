use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::path::Path;
use tray_icon::Icon;

const ICON_SIZE: u32 = 64;
const MENU_ICON_SIZE: u32 = 16;

const BACKGROUND: [u8; 4] = [40, 44, 52, 255];
const FOREGROUND: [u8; 4] = [152, 195, 121, 255];

/// The built-in tray icon: a shell prompt on a rounded square.
pub fn create_icon() -> Result<Icon> {
    let mut data = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    draw_prompt(&mut data, ICON_SIZE);
    Ok(Icon::from_rgba(data, ICON_SIZE, ICON_SIZE)?)
}

pub fn load_tray_icon(path: &Path) -> Result<Icon> {
    let (data, width, height) = read_rgba(path, None)?;
    Ok(Icon::from_rgba(data, width, height)?)
}

pub fn load_menu_icon(path: &Path) -> Result<tray_icon::menu::Icon> {
    let (data, width, height) = read_rgba(path, Some(MENU_ICON_SIZE))?;
    Ok(tray_icon::menu::Icon::from_rgba(data, width, height)?)
}

fn read_rgba(path: &Path, size: Option<u32>) -> Result<(Vec<u8>, u32, u32)> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open icon {}", path.display()))?
        .into_rgba8();

    let image = match size {
        Some(size) if image.dimensions() != (size, size) => {
            image::imageops::resize(&image, size, size, FilterType::Lanczos3)
        }
        _ => image,
    };

    let (width, height) = image.dimensions();
    Ok((image.into_raw(), width, height))
}

fn draw_prompt(data: &mut [u8], size: u32) {
    let s = size as i32;
    let corner_radius = s / 5;

    for y in 0..s {
        for x in 0..s {
            if !in_rounded_square(x, y, s, corner_radius) {
                continue;
            }

            let color = if on_chevron(x, y, s) || on_cursor(x, y, s) {
                FOREGROUND
            } else {
                BACKGROUND
            };

            let idx = ((y * s + x) * 4) as usize;
            data[idx..idx + 4].copy_from_slice(&color);
        }
    }
}

fn in_rounded_square(x: i32, y: i32, size: i32, radius: i32) -> bool {
    let nearest_x = x.clamp(radius, size - 1 - radius);
    let nearest_y = y.clamp(radius, size - 1 - radius);
    let dx = x - nearest_x;
    let dy = y - nearest_y;
    dx * dx + dy * dy <= radius * radius
}

fn on_chevron(x: i32, y: i32, size: i32) -> bool {
    let left = size / 4;
    let tip = size / 2;
    let half_stroke = (size / 20).max(1);

    if x < left || x > tip {
        return false;
    }

    let dy = (y - size / 2).abs();
    dy <= tip - left && (dy - (tip - x)).abs() <= half_stroke
}

fn on_cursor(x: i32, y: i32, size: i32) -> bool {
    let baseline = size * 3 / 4;
    let stroke = (size / 10).max(1);
    x >= size / 2 + size / 16 && x <= size * 13 / 16 && y > baseline - stroke && y <= baseline
}

//! The generated artwork: a camera glyph on a gradient icon, its maskable
//! variant, and a sample app screenshot.
//!
//! All geometry is derived from the icon size with truncating float scaling
//! and floor division, so every size is laid out the same way.

use crate::draw::{self, BoundingBox, Color};
use image::{
    imageops::{self, FilterType},
    Rgb, RgbImage,
};

pub const BRAND_ORANGE: Color = Rgb([255, 107, 53]);
pub const GRADIENT_END: Color = Rgb([247, 221, 30]);
pub const FLASH_YELLOW: Color = Rgb([247, 193, 30]);
pub const VISOR_GREY: Color = Rgb([220, 220, 220]);
pub const WHITE: Color = Rgb([255, 255, 255]);
pub const SCREENSHOT_BACKGROUND: Color = Rgb([245, 245, 245]);
pub const CARD_BORDER: Color = Rgb([224, 224, 224]);

pub const SCREENSHOT_WIDTH: u32 = 540;
pub const SCREENSHOT_HEIGHT: u32 = 720;

const HEADER_HEIGHT: i64 = 80;
const CARD_INSET: i64 = 20;
const CARD_HEIGHT: i64 = 100;
const CARD_TOPS: [i64; 2] = [100, 220];

/// Maskable icons keep the artwork inside this fraction of the final canvas
const MASKABLE_CANVAS_SCALE: f64 = 1.2;

fn scaled(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

fn bbox(x0: u32, y0: u32, x1: u32, y1: u32) -> BoundingBox {
    BoundingBox::new(x0.into(), y0.into(), x1.into(), y1.into())
}

/// Where each part of the icon lands for a given icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraLayout {
    pub circle: BoundingBox,
    pub body: BoundingBox,
    pub body_radius: u32,
    pub lens: BoundingBox,
    pub lens_outline: u32,
    pub inner_lens: BoundingBox,
    pub flash: BoundingBox,
    pub visor: BoundingBox,
    pub visor_radius: u32,
}

impl CameraLayout {
    pub fn for_size(size: u32) -> Self {
        let circle_size = scaled(size, 0.75);
        let margin = (size - circle_size) / 2;
        let circle = bbox(margin, margin, size - margin, size - margin);

        let camera = scaled(size, 0.45);
        let camera_x = (size - camera) / 2;
        let camera_y = (size - camera) / 2;

        let body_height = scaled(camera, 0.7);
        let body_y = camera_y + scaled(camera, 0.3);
        let body = bbox(camera_x, body_y, camera_x + camera, body_y + body_height);

        let lens_size = scaled(camera, 0.4);
        let lens_x = camera_x + (camera - lens_size) / 2;
        let lens_y = body_y + body_height.saturating_sub(lens_size) / 2;
        let lens = BoundingBox::square(lens_x.into(), lens_y.into(), lens_size.into());

        let inner_size = scaled(lens_size, 0.5);
        let inner_x = lens_x + (lens_size - inner_size) / 2;
        let inner_y = lens_y + (lens_size - inner_size) / 2;
        let inner_lens = BoundingBox::square(inner_x.into(), inner_y.into(), inner_size.into());

        let flash_size = scaled(camera, 0.18);
        let flash_x = camera_x + scaled(camera, 0.72);
        let flash_y = body_y + scaled(body_height, 0.2);
        let flash = BoundingBox::square(flash_x.into(), flash_y.into(), flash_size.into());

        let visor_width = scaled(camera, 0.15);
        let visor_height = scaled(camera, 0.1);
        let visor_x = camera_x + scaled(camera, 0.15);
        let visor_y = body_y + scaled(body_height, 0.15);
        let visor = bbox(
            visor_x,
            visor_y,
            visor_x + visor_width,
            visor_y + visor_height,
        );

        Self {
            circle,
            body,
            body_radius: scaled(camera, 0.1),
            lens,
            lens_outline: scaled(size, 0.02).max(1),
            inner_lens,
            flash,
            visor,
            visor_radius: scaled(visor_width, 0.2),
        }
    }
}

/// Draw the square app icon: gradient background, white disc, camera glyph.
pub fn create_gradient_icon(size: u32) -> RgbImage {
    let layout = CameraLayout::for_size(size);
    log::debug!("camera layout for {size}px: {layout:?}");

    let mut icon = RgbImage::from_pixel(size, size, WHITE);
    draw::fill_vertical_gradient(&mut icon, BRAND_ORANGE, GRADIENT_END);
    draw::draw_ellipse(&mut icon, layout.circle, Some(WHITE), None, 0);

    draw::draw_rounded_rectangle(&mut icon, layout.body, layout.body_radius, BRAND_ORANGE);
    draw::draw_ellipse(
        &mut icon,
        layout.lens,
        Some(WHITE),
        Some(BRAND_ORANGE),
        layout.lens_outline,
    );
    draw::draw_ellipse(&mut icon, layout.inner_lens, Some(BRAND_ORANGE), None, 0);
    draw::draw_ellipse(&mut icon, layout.flash, Some(FLASH_YELLOW), None, 0);
    draw::draw_rounded_rectangle(&mut icon, layout.visor, layout.visor_radius, VISOR_GREY);

    icon
}

/// Draw the icon with a brand-colored safe zone around it.
///
/// The regular icon is centred on a canvas 1.2x its size and the result is
/// scaled back down, so launchers can crop to any mask shape without cutting
/// into the glyph.
pub fn create_maskable_icon(size: u32) -> RgbImage {
    let safe_size = scaled(size, MASKABLE_CANVAS_SCALE);
    let mut canvas = RgbImage::from_pixel(safe_size, safe_size, BRAND_ORANGE);

    let icon = create_gradient_icon(size);
    let offset = i64::from(safe_size.saturating_sub(size) / 2);
    imageops::replace(&mut canvas, &icon, offset, offset);

    imageops::resize(&canvas, size, size, FilterType::Lanczos3)
}

/// Draw a placeholder app screen: header bar and two content cards.
pub fn create_screenshot() -> RgbImage {
    let mut screenshot =
        RgbImage::from_pixel(SCREENSHOT_WIDTH, SCREENSHOT_HEIGHT, SCREENSHOT_BACKGROUND);
    let width = i64::from(SCREENSHOT_WIDTH);

    draw::draw_rectangle(
        &mut screenshot,
        BoundingBox::new(0, 0, width, HEADER_HEIGHT),
        Some(BRAND_ORANGE),
        None,
    );

    for top in CARD_TOPS {
        draw::draw_rectangle(
            &mut screenshot,
            BoundingBox::new(CARD_INSET, top, width - CARD_INSET, top + CARD_HEIGHT),
            Some(WHITE),
            Some(CARD_BORDER),
        );
    }

    screenshot
}

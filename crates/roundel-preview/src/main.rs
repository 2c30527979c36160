use anyhow::{Context, Result};

use roundel::coords::{ColorRgba, CornerRadii, Rect, Viewport};
use roundel::logging::{init_logging, LoggingConfig};
use roundel::raster::{draw_panel, Derivative, Surface};
use roundel::shade::PanelParams;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 320;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "panel.png".to_string());

    let mut surface = Surface::new(WIDTH, HEIGHT)?;
    surface.fill(ColorRgba::new(0.13, 0.14, 0.17, 1.0));

    // A panel with asymmetric rounding, a thin border, and a soft shadow.
    let params = PanelParams::new(
        Viewport::new(WIDTH as f32, HEIGHT as f32),
        Rect::new(60.0, 60.0, 360.0, 200.0),
        CornerRadii::new(28.0, 28.0, 12.0, 12.0),
        4.0,
        16.0,
        ColorRgba::new(0.18, 0.19, 0.24, 0.97),
        ColorRgba::new(0.42, 0.47, 0.58, 1.0),
    );
    draw_panel(&mut surface, &params, Derivative::FiniteDifference);

    let img = image::RgbaImage::from_raw(WIDTH, HEIGHT, surface.data().to_vec())
        .context("surface buffer does not match image dimensions")?;
    img.save(&out_path)
        .with_context(|| format!("failed to write {out_path}"))?;

    log::info!("wrote {out_path} ({WIDTH}x{HEIGHT})");
    Ok(())
}

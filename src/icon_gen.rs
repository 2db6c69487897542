use crate::artwork::{self, SCREENSHOT_HEIGHT, SCREENSHOT_WIDTH};
use crate::manifest_json::{write_manifest_fragment, MANIFEST_FILENAME};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icon sizes a PWA needs across launchers, splash screens and stores
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Sizes that also get a maskable variant
pub const MASKABLE_SIZES: [u32; 2] = [192, 512];

pub const SCREENSHOT_FILENAME: &str = "screenshot1.png";

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub screenshot: bool,
    pub manifest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    MaskableIcon,
    Screenshot,
}

/// A single image file the generator writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub kind: AssetKind,
}

impl Asset {
    pub fn icon(size: u32) -> Self {
        Self {
            filename: format!("icon-{size}.png"),
            width: size,
            height: size,
            kind: AssetKind::Icon,
        }
    }

    pub fn maskable(size: u32) -> Self {
        Self {
            filename: format!("icon-{size}-maskable.png"),
            width: size,
            height: size,
            kind: AssetKind::MaskableIcon,
        }
    }

    pub fn screenshot() -> Self {
        Self {
            filename: SCREENSHOT_FILENAME.to_string(),
            width: SCREENSHOT_WIDTH,
            height: SCREENSHOT_HEIGHT,
            kind: AssetKind::Screenshot,
        }
    }

    pub fn render(&self) -> RgbImage {
        match self.kind {
            AssetKind::Icon => artwork::create_gradient_icon(self.width),
            AssetKind::MaskableIcon => artwork::create_maskable_icon(self.width),
            AssetKind::Screenshot => artwork::create_screenshot(),
        }
    }
}

/// Every file a full run writes, in the order it writes them
pub fn asset_plan(include_screenshot: bool) -> Vec<Asset> {
    let mut assets = Vec::new();

    for size in ICON_SIZES {
        assets.push(Asset::icon(size));
        if MASKABLE_SIZES.contains(&size) {
            assets.push(Asset::maskable(size));
        }
    }

    if include_screenshot {
        assets.push(Asset::screenshot());
    }

    assets
}

/// Outcome of a run: what was written and which files could not be
#[derive(Debug, Default)]
pub struct Report {
    pub generated: Vec<Asset>,
    pub failed: Vec<String>,
}

impl Report {
    pub fn success_count(&self) -> usize {
        self.generated.len()
    }
}

pub fn run(options: &Options) -> Result<Report> {
    print_banner();

    create_dir_all(&options.output).context("Can't create output directory")?;
    log::info!("writing assets to {}", options.output.display());

    let mut report = generate_icon_set(&options.output);
    print_summary(&report);

    if options.screenshot {
        println!("\n📸 Generating sample screenshot...");
        let screenshot = Asset::screenshot();

        match write_asset(&screenshot, &options.output) {
            Ok(()) => {
                println!(
                    "✓ Generated: {} ({}x{}px)",
                    screenshot.filename, screenshot.width, screenshot.height
                );
                report.generated.push(screenshot);
            }
            Err(err) => {
                println!("⚠ Could not generate screenshot: {err:#}");
                log::debug!("screenshot failure: {err:?}");
                report.failed.push(screenshot.filename);
            }
        }
    }

    if options.manifest {
        write_manifest_fragment(&options.output, &report.generated)?;
        println!("✓ Generated: {MANIFEST_FILENAME}");
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("✓ Ready to publish your PWA");
    println!("{}\n", "=".repeat(RULE_WIDTH));

    Ok(report)
}

/// Write every icon size, carrying on past sizes that fail
pub fn generate_icon_set(out_dir: &Path) -> Report {
    println!("🎨 Generating PWA icons...");
    println!("{}", "=".repeat(RULE_WIDTH));

    let mut report = Report::default();

    for size in ICON_SIZES {
        if let Err(err) = generate_size(size, out_dir, &mut report) {
            println!("✗ Error generating icon-{size}.png: {err:#}");
            log::debug!("icon-{size}.png failure: {err:?}");
        }
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    report
}

/// Write the icon for `size` and its maskable variant, stopping at the first
/// failed write. The failed file is recorded in `report.failed`.
fn generate_size(size: u32, out_dir: &Path, report: &mut Report) -> Result<()> {
    let mut assets = vec![Asset::icon(size)];
    if MASKABLE_SIZES.contains(&size) {
        assets.push(Asset::maskable(size));
    }

    for asset in assets {
        if let Err(err) = write_asset(&asset, out_dir) {
            report.failed.push(asset.filename);
            return Err(err);
        }

        match asset.kind {
            AssetKind::MaskableIcon => println!("✓ Generated: {} (maskable)", asset.filename),
            _ => println!("✓ Generated: {} ({size}x{size}px)", asset.filename),
        }
        report.generated.push(asset);
    }

    Ok(())
}

fn write_asset(asset: &Asset, out_dir: &Path) -> Result<()> {
    let image = asset.render();
    let output_path = out_dir.join(&asset.filename);
    log::info!("writing {}", output_path.display());
    save_png(&image, &output_path)
}

fn print_banner() {
    println!("\n{}", "🚀".repeat(30));
    println!("   PWA ICON GENERATOR");
    println!("{}\n", "🚀".repeat(30));
}

fn print_summary(report: &Report) {
    println!("\n✨ Done!");
    println!("📊 {} files generated successfully", report.success_count());
    if !report.failed.is_empty() {
        println!("⚠ {} failed: {}", report.failed.len(), report.failed.join(", "));
    }

    println!("\n📋 Next steps:");
    println!("1. Upload these .png files to the same directory as your app");
    println!("2. Make sure manifest.json sits in that same directory");
    println!("3. Use PWABuilder.com to produce an APK/AAB for Google Play");
    println!("4. Or install straight from the browser (Chrome/Edge)");
    println!("\n💡 Tip: to install on Android, open the app in Chrome");
    println!("   and pick 'Add to Home screen' or 'Install app'");
}

pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    write_or_discard(path, |out_file| write_png(image, out_file)).context("Failed to write PNG")
}

/// Create `path` and fill it with `write`; a file that could not be written
/// completely is removed again.
fn write_or_discard<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    let written = write(&mut out_file).and_then(|()| Ok(out_file.flush()?));
    if let Err(err) = written {
        drop(out_file);
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::warn!("could not remove partial {}: {remove_err}", path.display());
        }
        return Err(err);
    }

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}

/// Check that `asset` exists under `dir` with the dimensions it should have
pub fn verify_asset(dir: &Path, asset: &Asset) -> Result<()> {
    let path = dir.join(&asset.filename);
    let (width, height) = image::image_dimensions(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if (width, height) != (asset.width, asset.height) {
        anyhow::bail!(
            "expected {}x{}, found {width}x{height}",
            asset.width,
            asset.height
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_lists_icons_then_maskables_then_screenshot() {
        let plan = asset_plan(true);
        let filenames: Vec<&str> = plan.iter().map(|a| a.filename.as_str()).collect();

        assert_eq!(
            filenames,
            [
                "icon-72.png",
                "icon-96.png",
                "icon-128.png",
                "icon-144.png",
                "icon-152.png",
                "icon-192.png",
                "icon-192-maskable.png",
                "icon-384.png",
                "icon-512.png",
                "icon-512-maskable.png",
                "screenshot1.png",
            ]
        );
    }

    #[test]
    fn plan_without_screenshot_has_only_icons() {
        let plan = asset_plan(false);
        assert_eq!(plan.len(), 10);
        assert!(plan.iter().all(|a| a.kind != AssetKind::Screenshot));
        assert!(plan.iter().all(|a| a.width == a.height));
    }

    #[test]
    fn rendered_asset_matches_declared_dimensions() {
        for asset in [Asset::icon(72), Asset::maskable(192), Asset::screenshot()] {
            let image = asset.render();
            assert_eq!((image.width(), image.height()), (asset.width, asset.height));
        }
    }

    #[test]
    fn saved_png_round_trips_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let asset = Asset::icon(96);
        save_png(&asset.render(), &dir.path().join(&asset.filename)).unwrap();

        let decoded = image::open(dir.path().join(&asset.filename)).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), asset.render());
        verify_asset(dir.path(), &asset).unwrap();
    }

    #[test]
    fn verify_rejects_missing_and_mis_sized_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(verify_asset(dir.path(), &Asset::icon(72)).is_err());

        save_png(&artwork::create_gradient_icon(96), &dir.path().join("icon-72.png")).unwrap();
        let err = verify_asset(dir.path(), &Asset::icon(72)).unwrap_err();
        assert!(err.to_string().contains("expected 72x72, found 96x96"));
    }

    #[test]
    fn icon_set_continues_after_a_failed_size() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the way makes creating icon-96.png fail
        std::fs::create_dir(dir.path().join("icon-96.png")).unwrap();

        let report = generate_icon_set(dir.path());

        assert_eq!(report.failed, ["icon-96.png"]);
        assert_eq!(report.success_count(), 9);
        assert!(dir.path().join("icon-512-maskable.png").is_file());
    }

    #[test]
    fn failed_maskable_is_reported_instead_of_its_plain_icon() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("icon-192-maskable.png")).unwrap();

        let report = generate_icon_set(dir.path());

        assert_eq!(report.failed, ["icon-192-maskable.png"]);
        assert!(report.generated.contains(&Asset::icon(192)));
        assert!(!report.generated.contains(&Asset::maskable(192)));
        assert!(dir.path().join("icon-192.png").is_file());
        assert_eq!(report.success_count(), 9);
    }

    #[test]
    fn interrupted_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-72.png");

        let result = write_or_discard(&path, |out_file| {
            out_file.write_all(b"\x89PNG\r\n")?;
            out_file.flush()?;
            anyhow::bail!("encoder gave up")
        });

        assert!(result.unwrap_err().to_string().contains("encoder gave up"));
        assert!(!path.exists());
    }
}

//! Web App Manifest fragment for the generated images
//!
//! These structures mirror the `icons` and `screenshots` members of the W3C
//! Web App Manifest, so the written file can be merged straight into an
//! app's `manifest.json`.

use crate::icon_gen::{Asset, AssetKind};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "manifest-icons.json";

const PNG_MIME_TYPE: &str = "image/png";

/// Root of the manifest fragment
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestFragment {
    /// Launcher icons, plain and maskable
    pub icons: Vec<IconEntry>,

    /// Store-listing screenshots
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<ScreenshotEntry>,
}

/// One member of the manifest `icons` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Path of the image, relative to the manifest
    pub src: String,

    /// Space-separated `WxH` sizes (e.g. "192x192")
    pub sizes: String,

    /// MIME type of the image
    #[serde(rename = "type")]
    pub mime_type: String,

    /// How the platform may use the icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Purpose>,
}

/// One member of the manifest `screenshots` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotEntry {
    pub src: String,

    pub sizes: String,

    #[serde(rename = "type")]
    pub mime_type: String,

    /// Derived from the aspect ratio; the generated screenshot is portrait, so
    /// this is always "narrow" in practice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_factor: Option<FormFactor>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Any,
    Maskable,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    Narrow,
    Wide,
}

impl ManifestFragment {
    /// Builds the fragment for the given assets, in order
    pub fn from_assets(assets: &[Asset]) -> Self {
        let mut fragment = Self::default();
        for asset in assets {
            fragment.add_asset(asset);
        }
        fragment
    }

    /// Adds an asset to the array matching its kind
    pub fn add_asset(&mut self, asset: &Asset) {
        match asset.kind {
            AssetKind::Icon => self.icons.push(IconEntry::new(asset, Purpose::Any)),
            AssetKind::MaskableIcon => self.icons.push(IconEntry::new(asset, Purpose::Maskable)),
            AssetKind::Screenshot => self.screenshots.push(ScreenshotEntry::new(asset)),
        }
    }
}

impl IconEntry {
    pub fn new(asset: &Asset, purpose: Purpose) -> Self {
        Self {
            src: asset.filename.clone(),
            sizes: sizes_attribute(asset),
            mime_type: PNG_MIME_TYPE.to_string(),
            purpose: Some(purpose),
        }
    }
}

impl ScreenshotEntry {
    pub fn new(asset: &Asset) -> Self {
        let form_factor = if asset.width < asset.height {
            FormFactor::Narrow
        } else {
            FormFactor::Wide
        };

        Self {
            src: asset.filename.clone(),
            sizes: sizes_attribute(asset),
            mime_type: PNG_MIME_TYPE.to_string(),
            form_factor: Some(form_factor),
        }
    }
}

fn sizes_attribute(asset: &Asset) -> String {
    format!("{}x{}", asset.width, asset.height)
}

/// Write the manifest fragment for `assets` into `out_dir`
pub fn write_manifest_fragment(out_dir: &Path, assets: &[Asset]) -> Result<PathBuf> {
    let fragment = ManifestFragment::from_assets(assets);

    let manifest_path = out_dir.join(MANIFEST_FILENAME);
    let manifest_json = serde_json::to_string_pretty(&fragment)
        .context("Failed to serialize manifest fragment")?;

    std::fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    Ok(manifest_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_serialize_with_manifest_field_names() {
        let fragment = ManifestFragment::from_assets(&[Asset::icon(72), Asset::maskable(192)]);
        let value = serde_json::to_value(&fragment).unwrap();

        assert_eq!(
            value["icons"][0],
            serde_json::json!({
                "src": "icon-72.png",
                "sizes": "72x72",
                "type": "image/png",
                "purpose": "any"
            })
        );
        assert_eq!(value["icons"][1]["src"], "icon-192-maskable.png");
        assert_eq!(value["icons"][1]["purpose"], "maskable");
    }

    #[test]
    fn screenshots_are_omitted_when_empty() {
        let fragment = ManifestFragment::from_assets(&[Asset::icon(512)]);
        let value = serde_json::to_value(&fragment).unwrap();

        assert!(value.get("screenshots").is_none());
        assert_eq!(value["icons"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn portrait_screenshot_is_narrow() {
        let fragment = ManifestFragment::from_assets(&[Asset::screenshot()]);
        let value = serde_json::to_value(&fragment).unwrap();

        assert_eq!(
            value["screenshots"][0],
            serde_json::json!({
                "src": "screenshot1.png",
                "sizes": "540x720",
                "type": "image/png",
                "form_factor": "narrow"
            })
        );
        assert!(fragment.icons.is_empty());
    }

    #[test]
    fn landscape_screenshot_is_wide() {
        let landscape = Asset {
            filename: "desktop.png".to_string(),
            width: 1280,
            height: 720,
            kind: AssetKind::Screenshot,
        };

        let entry = ScreenshotEntry::new(&landscape);
        assert_eq!(entry.form_factor, Some(FormFactor::Wide));
    }

    #[test]
    fn fragment_is_written_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest_fragment(dir.path(), &[Asset::icon(96)]).unwrap();

        assert_eq!(path, dir.path().join(MANIFEST_FILENAME));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["icons"][0]["sizes"], "96x96");
    }
}

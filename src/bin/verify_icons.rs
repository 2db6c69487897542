use anyhow::Result;
use pwa_icon_gen::icon_gen::{asset_plan, verify_asset};
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    println!("Checking generated assets in: {}", dir.display());

    let mut problems = 0;
    for asset in asset_plan(true) {
        match verify_asset(&dir, &asset) {
            Ok(()) => println!("  ✓ {} ({}x{})", asset.filename, asset.width, asset.height),
            Err(err) => {
                problems += 1;
                println!("  ⚠ {}: {err:#}", asset.filename);
            }
        }
    }

    if problems > 0 {
        anyhow::bail!("{problems} asset(s) missing or mis-sized");
    }

    println!("✓ All assets present");
    Ok(())
}

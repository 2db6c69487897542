//! Procedurally drawn icon set and sample screenshot for a progressive web app.

pub mod artwork;
pub mod draw;
pub mod icon_gen;
pub mod logging;
pub mod manifest_json;

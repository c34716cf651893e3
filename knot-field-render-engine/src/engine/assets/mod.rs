pub mod scene_assets;
pub mod scene_manifest;

/// Scene manifest, relative to the asset root
pub const RELATIVE_MANIFEST_PATH: &str = "manifest.json";

/// Matcap shading texture, relative to the asset root
pub const RELATIVE_MATCAP_PATH: &str = "textures/matcap.png";

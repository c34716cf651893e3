use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::scene::KNOT_COUNT;

/// Scene description loaded from `assets/manifest.json`. Mirrors the JSON
/// structure; every field falls back to a default so a sparse manifest (or
/// none at all) still yields a complete scene.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_knot_count")]
    pub knot_count: usize,
    /// TTF path under the asset root used to extrude the title mesh.
    #[serde(default = "default_font")]
    pub font: String,
    /// Seed for the knot field; omit for a different field every run.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            title: default_title(),
            knot_count: default_knot_count(),
            font: default_font(),
            seed: None,
        }
    }
}

fn default_title() -> String {
    "Knot Field".to_string()
}

fn default_knot_count() -> usize {
    KNOT_COUNT
}

fn default_font() -> String {
    "fonts/FiraSans-Bold.ttf".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_complete_scene() {
        let manifest = SceneManifest::default();
        assert_eq!(manifest.knot_count, 300);
        assert!(!manifest.title.is_empty());
        assert!(manifest.font.ends_with(".ttf"));
        assert!(manifest.seed.is_none());
    }

    #[test]
    fn sparse_json_fills_in_defaults() {
        let manifest: SceneManifest = serde_json::from_str(r#"{ "title": "Drift" }"#).unwrap();
        assert_eq!(manifest.title, "Drift");
        assert_eq!(manifest.knot_count, 300);
        assert!(manifest.seed.is_none());
    }

    #[test]
    fn overrides_round_trip() {
        let manifest = SceneManifest {
            title: "Weave".into(),
            knot_count: 12,
            font: "fonts/custom.ttf".into(),
            seed: Some(7),
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let back: SceneManifest = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title, "Weave");
        assert_eq!(back.knot_count, 12);
        assert_eq!(back.font, "fonts/custom.ttf");
        assert_eq!(back.seed, Some(7));
    }
}

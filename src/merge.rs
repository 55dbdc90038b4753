//! Layer combination.
//!
//! Layers merge per top-level key: a key in the overlay replaces the same
//! key in the base, keys only in the base are retained. Values are replaced
//! wholesale; nested mappings and arrays are never merged recursively.

use crate::ConfigMap;

/// Overlay one layer onto another, with `overlay` taking precedence.
///
/// # Example
/// ```
/// use layerconf::merge::overlay;
/// use serde_json::{json, Map};
///
/// let base: Map<_, _> = json!({"foo": "bar", "music_dir": "/x"})
///     .as_object().unwrap().clone();
/// let top: Map<_, _> = json!({"foo": "baz"}).as_object().unwrap().clone();
/// let merged = overlay(base, top);
/// assert_eq!(merged.get("foo"), Some(&json!("baz")));
/// assert_eq!(merged.get("music_dir"), Some(&json!("/x")));
/// ```
pub fn overlay(mut base: ConfigMap, overlay: ConfigMap) -> ConfigMap {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}

/// Merge layers in order, later layers taking precedence.
///
/// Equivalent to folding `overlay` over the list.
pub fn overlay_all(layers: impl IntoIterator<Item = ConfigMap>) -> ConfigMap {
    layers.into_iter().fold(ConfigMap::new(), overlay)
}

//! Deep merge of JSON trees
//!
//! Objects merge key by key with the overlay winning on leaves. How arrays
//! combine is an explicit [`ArrayMerge`] choice rather than a hidden default.

use serde_json::Value;

/// How an overlay array combines with a base array at the same key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayMerge {
    /// The overlay array replaces the base array wholesale
    #[default]
    Replace,
    /// Overlay elements are appended after the base elements
    Append,
}

/// Options controlling [`deep_merge`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub arrays: ArrayMerge,
}

impl MergeOptions {
    pub fn with_arrays(arrays: ArrayMerge) -> Self {
        Self { arrays }
    }
}

/// Deep merge `overlay` into `base`
///
/// - Object + object: merged recursively, keys only in `base` are kept
/// - Array + array: per [`MergeOptions::arrays`]
/// - Anything else (including `null` in the overlay): overlay replaces base
pub fn deep_merge(base: &mut Value, overlay: &Value, options: MergeOptions) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    deep_merge(base_val, overlay_val, options);
                } else {
                    base_map.insert(key.clone(), overlay_val.clone());
                }
            }
        }
        (Value::Array(base_items), Value::Array(overlay_items))
            if options.arrays == ArrayMerge::Append =>
        {
            base_items.extend(overlay_items.iter().cloned());
        }
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}

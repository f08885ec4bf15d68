//! Value-level helpers for the update operation.
//!
//! The merge works on serialized `serde_yaml::Value` trees: both sides are
//! first pruned against a freshly-constructed all-defaults tree, so only
//! explicitly-set fields survive, then the override is deep-merged onto the
//! base and the result rebuilt through the normal construction path.

use serde_yaml::{Mapping, Value};

/// Drop every part of `value` that equals the corresponding part of
/// `default`.
///
/// Mappings are pruned per key recursively; sequences and scalars are
/// compared wholesale. Returns `None` when nothing survives. A field
/// explicitly re-set to its default is indistinguishable from one never
/// touched; neither survives the prune.
pub(super) fn prune_defaults(value: &Value, default: &Value) -> Option<Value> {
    match (value, default) {
        (Value::Mapping(map), Value::Mapping(default_map)) => {
            let mut pruned = Mapping::new();
            for (key, entry) in map {
                match default_map.get(key) {
                    Some(default_entry) => {
                        if let Some(kept) = prune_defaults(entry, default_entry) {
                            pruned.insert(key.clone(), kept);
                        }
                    }
                    None => {
                        pruned.insert(key.clone(), entry.clone());
                    }
                }
            }
            (!pruned.is_empty()).then_some(Value::Mapping(pruned))
        }
        _ => (value != default).then(|| value.clone()),
    }
}

/// Merge `overlay` into `base`.
///
/// Mappings merge recursively; everything else, sequences included, is
/// replaced wholesale.
pub(super) fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

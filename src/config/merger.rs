//! Deep merge for layered YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Null values in overlay delete the corresponding key from base
//! - Anything else in overlay replaces base

use serde_yaml::Value;

/// Deep merge two YAML values, `overlay` taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn overlay_scalar_wins() {
        let merged = deep_merge(
            &yaml("timing: {report_on_failure: false}"),
            &yaml("timing: {report_on_failure: true}"),
        );
        assert_eq!(merged, yaml("timing: {report_on_failure: true}"));
    }

    #[test]
    fn sibling_keys_survive() {
        let merged = deep_merge(
            &yaml("settings: {default_output: quiet}"),
            &yaml("timing: {report_on_failure: true}"),
        );
        assert_eq!(
            merged,
            yaml("settings: {default_output: quiet}\ntiming: {report_on_failure: true}")
        );
    }

    #[test]
    fn null_overlay_deletes_key() {
        let merged = deep_merge(
            &yaml("settings: {default_output: quiet}"),
            &yaml("settings: {default_output: ~}"),
        );
        assert_eq!(merged, yaml("settings: {}"));
    }

    #[test]
    fn merge_configs_folds_in_order() {
        let merged = merge_configs(&[
            yaml("settings: {default_output: verbose}"),
            yaml("settings: {default_output: silent}"),
        ]);
        assert_eq!(merged, yaml("settings: {default_output: silent}"));
    }

    #[test]
    fn merge_configs_empty_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}

//! Ambient environment sources and the file/ambient merge.
//!
//! Responsibilities:
//! - Abstract "the process environment" behind `EnvSource` so it can be injected.
//! - Overlay ambient variables onto the values read from the env file.
//!
//! Does NOT handle:
//! - Reading the env file (see dotenv.rs).
//!
//! Invariants:
//! - Ambient values always win over file values for the same key.
//! - Sources are read-only; nothing here writes to the process environment.
//! - Non UTF-8 process variables are skipped rather than lossily converted.

use std::collections::{BTreeMap, HashMap};

use crate::schema::EnvMap;

/// Read-only key/value source layered over the env file.
pub trait EnvSource {
    fn vars(&self) -> Vec<(String, String)>;
}

/// The running process's environment, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl EnvSource for HashMap<String, String> {
    fn vars(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }
}

/// Overlay `ambient` onto `file_values`.
///
/// Returns the merged mapping and the file keys that the ambient source replaced, sorted.
pub fn overlay(mut file_values: EnvMap, ambient: &impl EnvSource) -> (EnvMap, Vec<String>) {
    let mut overridden = Vec::new();
    for (key, value) in ambient.vars() {
        if file_values.insert(key.clone(), value).is_some() {
            overridden.push(key);
        }
    }
    overridden.sort();
    (file_values, overridden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn map(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overlay_ambient_wins() {
        let file = map(&[("PG_HOST", "file-host"), ("PG_PORT", "6000")]);
        let ambient = map(&[("PG_HOST", "ambient-host"), ("HOME", "/root")]);

        let (merged, overridden) = overlay(file, &ambient);

        assert_eq!(merged.get("PG_HOST").map(String::as_str), Some("ambient-host"));
        assert_eq!(merged.get("PG_PORT").map(String::as_str), Some("6000"));
        assert_eq!(merged.get("HOME").map(String::as_str), Some("/root"));
        assert_eq!(overridden, vec!["PG_HOST".to_string()]);
    }

    #[test]
    fn test_overlay_empty_ambient_keeps_file_values() {
        let file = map(&[("A", "1")]);
        let (merged, overridden) = overlay(file.clone(), &EnvMap::new());
        assert_eq!(merged, file);
        assert!(overridden.is_empty());
    }

    #[test]
    fn test_hashmap_source() {
        let mut ambient = HashMap::new();
        ambient.insert("A".to_string(), "ambient".to_string());
        let (merged, _) = overlay(map(&[("A", "file")]), &ambient);
        assert_eq!(merged.get("A").map(String::as_str), Some("ambient"));
    }

    #[test]
    #[serial]
    fn test_process_env_reads_current_variables() {
        let key = "_TYPED_ENV_TEST_PROCESS_VAR";
        temp_env::with_vars([(key, Some("from-process"))], || {
            let vars = ProcessEnv.vars();
            assert!(
                vars.iter()
                    .any(|(k, v)| k == key && v == "from-process"),
                "ProcessEnv should expose variables set at call time"
            );
        });

        temp_env::with_vars([(key, None::<&str>)], || {
            assert!(!ProcessEnv.vars().iter().any(|(k, _)| k == key));
        });
    }
}

use std::time::Duration;
use std::{env, panic};

use bms_portal::config::{AppConfig, Env};
use serial_test::serial;

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward.
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables.
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    let result = panic::catch_unwind(test);

    // Restore original environment variables.
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn production_config_fails_fast_without_base_urls() {
    let result = run_with_env(
        || {
            panic::catch_unwind(|| {
                unsafe {
                    env::set_var("APP_ENV", "production");
                    env::remove_var("BMS_BASE_URL");
                    env::remove_var("KG_BASE_URL");
                }
                AppConfig::load()
            })
        },
        vec!["APP_ENV", "BMS_BASE_URL", "KG_BASE_URL"],
    );

    assert!(
        result.is_err(),
        "Production config loading should panic on missing base URLs"
    );
}

#[test]
#[serial]
fn local_config_uses_developer_defaults() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::remove_var("BMS_BASE_URL");
                env::remove_var("KB_BASE_URL");
                env::remove_var("KG_BASE_URL");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "BMS_BASE_URL", "KB_BASE_URL", "KG_BASE_URL"],
    );

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.catalog_base_url, "http://localhost:8089/bms");
    // The knowledge base rides the same proxy by default.
    assert_eq!(config.knowledge_base_base_url, "http://localhost:8089/bms");
    assert_eq!(config.knowledge_graph_base_url, "http://localhost:5000");
}

#[test]
#[serial]
fn explicit_base_urls_override_defaults() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::set_var("BMS_BASE_URL", "http://backend:9000/bms");
                env::set_var("KB_BASE_URL", "http://kb:9000/bms");
                env::set_var("KG_BASE_URL", "http://graph:5000");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "BMS_BASE_URL", "KB_BASE_URL", "KG_BASE_URL"],
    );

    assert_eq!(config.catalog_base_url, "http://backend:9000/bms");
    assert_eq!(config.knowledge_base_base_url, "http://kb:9000/bms");
    assert_eq!(config.knowledge_graph_base_url, "http://graph:5000");
}

#[test]
#[serial]
fn production_knowledge_base_defaults_to_the_catalog_proxy() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "production");
                env::set_var("BMS_BASE_URL", "https://bms.example.com/bms");
                env::remove_var("KB_BASE_URL");
                env::set_var("KG_BASE_URL", "https://kg.example.com");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "BMS_BASE_URL", "KB_BASE_URL", "KG_BASE_URL"],
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(
        config.knowledge_base_base_url,
        "https://bms.example.com/bms"
    );
}

#[test]
fn timeouts_are_fixed_per_client() {
    let config = AppConfig::default();

    assert_eq!(config.catalog_timeout, Duration::from_secs(20));
    assert_eq!(config.knowledge_base_timeout, Duration::from_secs(30));
    assert_eq!(config.knowledge_graph_timeout, Duration::from_secs(30));
}

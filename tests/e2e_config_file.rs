/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests run the binary inside a temporary directory, using
/// `assert_cmd` and `tempfile` for isolation. Every run stops at input
/// validation, before the first Audit Manager call.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

const CONFIG_FILENAME: &str = "audit-report.config.yml";

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_is_announced() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "region: eu-west-1\n");

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-a", "not-a-uuid", "-d", "2024-05-01"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_is_fine() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-a", "not-a-uuid", "-d", "2024-05-01"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
        assert!(stderr.contains("not a valid UUID"));
    }

    #[test]
    fn test_unknown_fields_warn() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join(CONFIG_FILENAME),
            "region: eu-west-1\nbucket_name: reports\n",
        );

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-a", "not-a-uuid", "-d", "2024-05-01"])
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'bucket_name'"));
    }
}

// ============================================================================
// Config Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_zero_poll_timeout_in_config_fails() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join(CONFIG_FILENAME), "poll_timeout_secs: 0\n");

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-a", "11111111-1111-1111-1111-111111111111", "-d", "2024-05-01"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("poll_timeout_secs must be greater than zero"));
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "region: [unclosed\n");

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap()])
            .args(["-a", "11111111-1111-1111-1111-111111111111", "-d", "2024-05-01"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_config_value_fails_even_when_overridden() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        // Config values are validated on load even when overridden
        write_config(&config_path, "poll_interval_secs: 0\n");

        let output = cargo_bin_cmd!("audit-report")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap(), "--poll-interval", "3"])
            .args(["-a", "11111111-1111-1111-1111-111111111111", "-d", "2024-05-01"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
    }
}

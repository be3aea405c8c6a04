use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
/// - If a roster file is provided, it cannot be empty and must point to an
///   existing file
pub fn validate_config(
    log_file_path: &Option<String>,
    roster_file: &Option<String>,
) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(roster_path) = roster_file {
        if roster_path.is_empty() {
            return Err(AppError::config_error("Roster file path cannot be empty"));
        }

        if !Path::new(roster_path).is_file() {
            return Err(AppError::config_error(format!(
                "Roster file '{roster_path}' does not exist"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_settings_are_valid() {
        assert!(validate_config(&None, &None).is_ok());
    }

    #[test]
    fn test_empty_paths_are_rejected() {
        assert!(validate_config(&Some(String::new()), &None).is_err());
        assert!(validate_config(&None, &Some(String::new())).is_err());
    }

    #[test]
    fn test_missing_roster_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("league.toml");
        let result = validate_config(&None, &Some(missing.to_string_lossy().to_string()));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("hoops.log");
        validate_config(&Some(log_path.to_string_lossy().to_string()), &None).unwrap();
        assert!(temp_dir.path().join("nested").exists());
    }
}

use plzmap_domain::config::LoggingConfig;
use plzmap_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_with_directory_writes_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        level: "info".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        filter: None,
    };
    let logger = Logger::from_config("plzmap-file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(zones = 3, "reference tables loaded");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("reference tables loaded"));
    assert!(contents.trim_start().starts_with('{'), "file records should be JSON");

    Ok(())
}

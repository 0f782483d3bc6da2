use plzmap_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_holds_no_file_guard() {
    let logger = Logger::builder()
        .name("plzmap-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files(), "console-only logger should not create a file guard");
}

mod common;

use plzmap_domain::{DisplayMode, PostalCode};
use plzmap_zones::{
    DataLoadError, DataSource, Document, FsSource, MemorySource, ReferenceStore, ZonesError,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

#[tokio::test]
async fn snapshot_before_load_is_not_loaded() {
    let store = ReferenceStore::new(common::source());
    assert!(matches!(store.snapshot(), Err(ZonesError::NotLoaded { .. })));
}

#[tokio::test]
async fn load_reports_dangling_references() {
    let store = ReferenceStore::new(common::source());
    let report = store.load().await.unwrap();

    assert_eq!(report.unknown_zones.len(), 1);
    assert_eq!(report.unknown_zones[0].0, PostalCode::from("3100"));
    assert_eq!(report.unknown_gebiete.len(), 1);
    assert!(store.is_loaded());
}

#[tokio::test]
async fn failed_first_load_leaves_store_unloaded() {
    let broken = ReferenceStore::new(
        MemorySource::new().with(Document::PlzToZone, "{ not json").with(Document::Zones, common::ZONES),
    );
    let err = broken.load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Parse { .. }));
    assert!(!broken.is_loaded());
    assert_eq!(broken.generation(), 0);

    let mut source = common::source();
    source.remove(Document::Zones);
    let partial = ReferenceStore::new(source);
    assert!(matches!(partial.load().await, Err(DataLoadError::Fetch { .. })));
    assert!(!partial.is_loaded());
}

/// Serves valid tables once, then a corrupt PLZ table and a changed zone table.
#[derive(Debug, Default)]
struct DegradingSource {
    plz_fetches: AtomicUsize,
}

impl DataSource for DegradingSource {
    async fn fetch(&self, document: Document) -> Result<Vec<u8>, DataLoadError> {
        match document {
            Document::PlzToZone if self.plz_fetches.fetch_add(1, Ordering::SeqCst) == 0 => {
                Ok(common::PLZ_TO_ZONE.as_bytes().to_vec())
            },
            Document::PlzToZone => Ok(br#"{ "2020": "#.to_vec()),
            Document::Zones => Ok(common::ZONES.replace("Nord", "Umbenannt").into_bytes()),
        }
    }
}

#[tokio::test]
async fn failed_reload_keeps_previous_snapshot() {
    let store = ReferenceStore::new(DegradingSource::default());
    store.load().await.unwrap();
    let before = store.snapshot().unwrap();
    assert_eq!(store.generation(), 1);

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Parse { .. }));
    assert!(store.is_loaded());
    assert_eq!(store.generation(), 1);

    let after = store.snapshot().unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.generation(), 1);
    let plz = PostalCode::from("2020");
    assert_eq!(after.resolve(&plz, DisplayMode::Zone).label_text(), Some("Zone A: Nord"));
    assert_eq!(after.describe_hover(&plz), "PLZ: 2020\nZone: A - Nord\nLiefergebiet: Nord-Ost");
}

#[tokio::test]
async fn validation_failure_is_reported_as_such() {
    let source = MemorySource::new()
        .with(Document::PlzToZone, "{}")
        .with(Document::Zones, common::ZONES);
    let store = ReferenceStore::new(source);

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::Validation { .. }));

    let wrapped = ZonesError::from(err);
    assert!(wrapped.to_string().starts_with("Reference data load failed"));
}

#[tokio::test]
async fn loads_from_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let plz = dir.path().join("plz.json");
    let zones = dir.path().join("zones.json");
    std::fs::write(&plz, common::PLZ_TO_ZONE)?;
    std::fs::write(&zones, common::ZONES)?;

    let store = ReferenceStore::new(FsSource::new(plz, zones));
    store.load().await?;
    assert_eq!(store.snapshot()?.postal_code_count(), 3);
    Ok(())
}

/// Holds the PLZ document back until released.
#[derive(Debug, Default)]
struct GatedSource {
    release: Notify,
    started: Notify,
}

impl DataSource for GatedSource {
    async fn fetch(&self, document: Document) -> Result<Vec<u8>, DataLoadError> {
        match document {
            Document::PlzToZone => {
                self.started.notify_one();
                self.release.notified().await;
                Ok(common::PLZ_TO_ZONE.as_bytes().to_vec())
            },
            Document::Zones => Ok(common::ZONES.as_bytes().to_vec()),
        }
    }
}

#[tokio::test]
async fn overlapping_load_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let store = ReferenceStore::new(GatedSource::default());

    let background = store.clone();
    let first = tokio::spawn(async move { background.load().await });
    store.source().started.notified().await;

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, DataLoadError::LoadInProgress { .. }));

    store.source().release.notify_one();
    tokio::time::timeout(Duration::from_secs(5), first).await???;
    assert_eq!(store.generation(), 1);

    // The gate is released once the first load completes.
    store.source().release.notify_one();
    store.load().await?;
    assert_eq!(store.generation(), 2);
    Ok(())
}

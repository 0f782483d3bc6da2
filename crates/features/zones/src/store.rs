use crate::error::{DataLoadError, ZonesError};
use crate::source::{DataSource, Document};
use crate::tables::{ConsistencyReport, ReferenceData};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// Shared owner of the current [`ReferenceData`] snapshot.
///
/// Cloning is cheap and every clone sees the same snapshot. Readers take an `Arc` of the
/// current generation and are never blocked by a load: the new snapshot is swapped in as a
/// whole once both documents have been fetched, parsed, and validated.
pub struct ReferenceStore<S> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S> {
    source: S,
    current: RwLock<Option<Arc<ReferenceData>>>,
    loading: AtomicBool,
}

impl<S> Clone for ReferenceStore<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: fmt::Debug> fmt::Debug for ReferenceStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceStore")
            .field("source", &self.inner.source)
            .field("generation", &self.generation())
            .field("loading", &self.inner.loading.load(Ordering::Relaxed))
            .finish()
    }
}

impl<S: DataSource> ReferenceStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source,
                current: RwLock::new(None),
                loading: AtomicBool::new(false),
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.inner.source
    }

    /// Fetches both documents concurrently and replaces the current snapshot.
    ///
    /// Returns the dangling references found in the new tables; they are also logged.
    ///
    /// # Errors
    /// * [`DataLoadError::LoadInProgress`] if another load on this store is still running.
    /// * [`DataLoadError::Fetch`], [`DataLoadError::Parse`] or [`DataLoadError::Validation`]
    ///   when either document is unusable. The previous snapshot, if any, stays in place.
    pub async fn load(&self) -> Result<ConsistencyReport, DataLoadError> {
        let _gate = LoadGate::acquire(&self.inner.loading)?;
        let started = Instant::now();

        let result = self.fetch_and_build().await;
        match result {
            Ok((data, report)) => {
                info!(
                    generation = data.generation(),
                    postal_codes = data.postal_code_count(),
                    zones = data.zone_count(),
                    gebiete = data.gebiet_count(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "Reference data loaded"
                );
                log_consistency(&report);
                *self.inner.current.write() = Some(Arc::new(data));
                Ok(report)
            },
            Err(e) => {
                warn!(error = %e, generation = self.generation(), "Reference data load failed, keeping previous tables");
                Err(e)
            },
        }
    }

    async fn fetch_and_build(&self) -> Result<(ReferenceData, ConsistencyReport), DataLoadError> {
        let source = &self.inner.source;
        let (plz_bytes, zone_bytes) =
            tokio::try_join!(source.fetch(Document::PlzToZone), source.fetch(Document::Zones))?;

        ReferenceData::build_documents(&plz_bytes, &zone_bytes, self.generation() + 1)
    }
}

impl<S> ReferenceStore<S> {
    /// The current snapshot.
    ///
    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful [`ReferenceStore::load`].
    pub fn snapshot(&self) -> Result<Arc<ReferenceData>, ZonesError> {
        self.inner.current.read().clone().ok_or_else(|| ZonesError::NotLoaded {
            message: "no successful load yet".into(),
            context: None,
        })
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.current.read().is_some()
    }

    /// Generation of the current snapshot, `0` before the first load.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.inner.current.read().as_ref().map_or(0, |data| data.generation())
    }
}

fn log_consistency(report: &ConsistencyReport) {
    for (plz, zone) in &report.unknown_zones {
        warn!(%plz, %zone, "Postal code refers to a zone missing from the zone table");
    }
    for (zone, gebiet) in &report.unknown_gebiete {
        warn!(%zone, %gebiet, "Zone refers to a Gebiet missing from the Gebiet table");
    }
    for collapsed in &report.collapsed_keys {
        warn!(
            table = collapsed.table,
            key = %collapsed.key,
            spellings = ?collapsed.spellings,
            "Keys collapse onto one entry after trimming, the last one wins"
        );
    }
}

/// Marks a load as running for as long as it is alive.
struct LoadGate<'a>(&'a AtomicBool);

impl<'a> LoadGate<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, DataLoadError> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| Self(flag))
            .map_err(|_| DataLoadError::LoadInProgress {
                message: "wait for the running load to finish".into(),
                context: None,
            })
    }
}

impl Drop for LoadGate<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

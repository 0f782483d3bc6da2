use crate::error::{MapError, MapErrorExt};
use plzmap_domain::config::{FeatureConfig, MapConfig, StyleConfig};
use plzmap_domain::{DisplayMode, Legend, PostalCode, ResolvedAttributes};
use plzmap_render::{FeatureCollection, FeatureKey, RenderDriver, RenderReport, RenderSurface};
use plzmap_zones::{
    ConsistencyReport, DataSource, FsSource, ModeController, ReferenceStore, ZonesError,
};
use tokio::sync::watch;
use tracing::{debug, info};

/// One interactive map: reference data, active display mode and the areas to draw.
///
/// Every query goes through the current snapshot of the store, so nothing resolves before the
/// first successful [`MapView::load`]. Independent views share nothing.
#[derive(Debug)]
pub struct MapView<S> {
    store: ReferenceStore<S>,
    modes: ModeController,
    features: FeatureCollection,
    driver: RenderDriver,
}

impl<S: DataSource> MapView<S> {
    pub fn new(source: S, features: FeatureCollection, style: StyleConfig, feature_config: FeatureConfig) -> Self {
        Self {
            store: ReferenceStore::new(source),
            modes: ModeController::new(),
            features,
            driver: RenderDriver::new(style, feature_config),
        }
    }

    /// Starts in `mode` instead of [`DisplayMode::Zone`].
    #[must_use]
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.modes = ModeController::with_mode(mode);
        self
    }

    /// Fetches the reference tables. See [`ReferenceStore::load`].
    ///
    /// # Errors
    /// [`ZonesError::Load`] wrapping the [`DataLoadError`](plzmap_zones::DataLoadError); the
    /// previously loaded tables stay active.
    pub async fn load(&self) -> Result<ConsistencyReport, ZonesError> {
        Ok(self.store.load().await?)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.modes.mode()
    }

    /// Mode switches as they happen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DisplayMode> {
        self.modes.subscribe()
    }

    /// Switches the display mode and re-renders every area.
    ///
    /// The switch is recorded even when the redraw fails.
    ///
    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn set_mode<R: RenderSurface + ?Sized>(
        &self,
        mode: DisplayMode,
        surface: &mut R,
    ) -> Result<RenderReport, ZonesError> {
        self.modes.set_mode(mode);
        self.render(surface)
    }

    /// Full render pass in the active mode.
    ///
    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn render<R: RenderSurface + ?Sized>(&self, surface: &mut R) -> Result<RenderReport, ZonesError> {
        let data = self.store.snapshot()?;
        Ok(self.driver.render(&data, self.modes.mode(), &self.features, surface))
    }

    /// Hover feedback for one area. Returns `false` for keys outside the feature collection.
    ///
    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn hover<R: RenderSurface + ?Sized>(
        &self,
        key: FeatureKey,
        entering: bool,
        surface: &mut R,
    ) -> Result<bool, ZonesError> {
        let Some(feature) = self.features.get(key) else {
            debug!(feature = %key, "Hover on unknown area ignored");
            return Ok(false);
        };
        let data = self.store.snapshot()?;
        self.driver.hover(&data, self.modes.mode(), key, feature, entering, surface);
        Ok(true)
    }

    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn resolve(&self, plz: &PostalCode, mode: DisplayMode) -> Result<ResolvedAttributes, ZonesError> {
        Ok(self.store.snapshot()?.resolve(plz, mode))
    }

    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn build_legend(&self, mode: DisplayMode) -> Result<Legend, ZonesError> {
        Ok(self.store.snapshot()?.legend(mode))
    }

    /// # Errors
    /// [`ZonesError::NotLoaded`] before the first successful load.
    pub fn describe_hover(&self, plz: &PostalCode) -> Result<String, ZonesError> {
        Ok(self.store.snapshot()?.describe_hover(plz))
    }
}

impl<S> MapView<S> {
    #[must_use]
    pub const fn features(&self) -> &FeatureCollection {
        &self.features
    }

    #[must_use]
    pub const fn store(&self) -> &ReferenceStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn style(&self) -> &StyleConfig {
        self.driver.style()
    }
}

impl MapView<FsSource> {
    /// Builds a view over the files named in `config.data`. Reference tables are not loaded yet.
    ///
    /// # Errors
    /// [`MapError::Io`] if the area file cannot be read, [`MapError::Render`] if it is not a
    /// polygon feature collection.
    pub async fn open(config: &MapConfig) -> Result<Self, MapError> {
        let path = config.data.root.join(&config.data.areas);
        let bytes = tokio::fs::read(&path).await.context(path.display().to_string())?;
        let features = FeatureCollection::from_slice(&bytes)?;
        info!(path = %path.display(), areas = features.len(), "Area features loaded");

        let source = FsSource::from_config(&config.data);
        Ok(Self::new(source, features, config.style.clone(), config.features.clone()).with_mode(config.mode))
    }
}

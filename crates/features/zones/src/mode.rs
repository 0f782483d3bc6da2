use plzmap_domain::DisplayMode;
use tokio::sync::watch;
use tracing::info;

/// Holds the active display mode and announces switches.
///
/// Starts in [`DisplayMode::Zone`]. Subscribers receive every switch through a watch channel;
/// the owner of the controller is responsible for the re-resolution pass that follows.
#[derive(Debug)]
pub struct ModeController {
    tx: watch::Sender<DisplayMode>,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(DisplayMode::Zone)
    }

    #[must_use]
    pub fn with_mode(mode: DisplayMode) -> Self {
        let (tx, _) = watch::channel(mode);
        Self { tx }
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        *self.tx.borrow()
    }

    /// Activates `mode` and returns the previous one. Re-selecting the active mode still
    /// notifies subscribers, so callers can force a redraw.
    pub fn set_mode(&self, mode: DisplayMode) -> DisplayMode {
        info!(%mode, "Switching display mode");
        self.tx.send_replace(mode)
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DisplayMode> {
        self.tx.subscribe()
    }
}

use std::sync::Arc;

use nationmind_api::HealthCheck;

use crate::probe::StatusProbe;
use crate::status::StatusMessage;

pub const TITLE: &str = "Nation Mind AI";
pub const SUBTITLE: &str = "Simulador Geopolítico con IA";
pub const STATUS_LABEL: &str = "Estado del Backend";

/// Render the landing page around a status line.
pub fn render_page(status: &StatusMessage) -> String {
    format!("{TITLE}\n{SUBTITLE}\n\n{STATUS_LABEL}: {status}")
}

/// The landing page with its backend status probe.
///
/// Holds on to the capability so the page can be remounted, which starts a
/// fresh probe in `Checking`.
pub struct HomePage<C> {
    capability: Arc<C>,
    probe: StatusProbe,
}

impl<C> HomePage<C>
where
    C: HealthCheck + 'static,
{
    pub fn mount(capability: Arc<C>) -> Self {
        let probe = StatusProbe::mount(Arc::clone(&capability));
        Self { capability, probe }
    }

    pub fn status(&self) -> StatusMessage {
        self.probe.status()
    }

    pub async fn settled(&mut self) -> StatusMessage {
        self.probe.settled().await
    }

    /// Unmount the current probe and mount a new one.
    pub fn remount(&mut self) {
        self.probe = StatusProbe::mount(Arc::clone(&self.capability));
    }

    pub fn unmount(self) -> StatusMessage {
        self.probe.unmount()
    }

    pub fn render(&self) -> String {
        render_page(&self.probe.status())
    }
}

impl<C> std::fmt::Debug for HomePage<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomePage")
            .field("probe", &self.probe)
            .finish()
    }
}

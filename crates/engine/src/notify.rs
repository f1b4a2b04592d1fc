//! Observer notification
//!
//! When an event is suppressed, players near it are told why.

use causeway_core::Location;
use parking_lot::Mutex;
use tracing::warn;

/// Radius, in blocks, within which players receive suppression alerts
pub const ALERT_RADIUS: f64 = 32.0;

/// Delivers a text alert to players near a location
pub trait Broadcaster: Send + Sync {
    fn broadcast_near(&self, origin: &Location, radius: f64, message: &str);
}

/// Broadcaster that only writes the alert to the log
///
/// Used when the host does not supply one.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBroadcaster;

impl Broadcaster for LogBroadcaster {
    fn broadcast_near(&self, origin: &Location, radius: f64, message: &str) {
        warn!(
            world = %origin.world,
            x = origin.x,
            y = origin.y,
            z = origin.z,
            radius,
            "{}",
            message
        );
    }
}

/// An alert captured by [`MemoryBroadcaster`]
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub origin: Location,
    pub radius: f64,
    pub message: String,
}

/// In-memory [`Broadcaster`]
#[derive(Debug, Default)]
pub struct MemoryBroadcaster {
    alerts: Mutex<Vec<Alert>>,
}

impl MemoryBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.lock().is_empty()
    }
}

impl Broadcaster for MemoryBroadcaster {
    fn broadcast_near(&self, origin: &Location, radius: f64, message: &str) {
        self.alerts.lock().push(Alert {
            origin: *origin,
            radius,
            message: message.to_string(),
        });
    }
}

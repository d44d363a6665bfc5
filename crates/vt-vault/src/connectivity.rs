//! Online/offline state for the vault banner.
//!
//! The initial state comes from a [`ConnectivityProbe`]; after that the
//! platform reports transitions as [`ConnectivitySignal`]s.

use std::fmt;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityState {
    Online,
    Offline,
}

impl ConnectivityState {
    #[must_use]
    pub const fn from_offline(offline: bool) -> Self {
        if offline {
            Self::Offline
        } else {
            Self::Online
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network transition reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivitySignal {
    BecameAvailable,
    BecameUnavailable,
}

/// One-shot reachability check used to seed the monitor.
pub trait ConnectivityProbe {
    fn is_online(&self) -> bool;
}

/// Always reports the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl ConnectivityProbe for FixedProbe {
    fn is_online(&self) -> bool {
        self.0
    }
}

/// Online if a TCP connection to `addr` opens within `timeout`.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    #[must_use]
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }

    fn resolve(&self) -> Option<SocketAddr> {
        match self.addr.to_socket_addrs() {
            Ok(mut addrs) => addrs.next(),
            Err(error) => {
                tracing::debug!(%error, addr = %self.addr, "probe address did not resolve");
                None
            }
        }
    }
}

impl ConnectivityProbe for TcpProbe {
    fn is_online(&self) -> bool {
        let Some(addr) = self.resolve() else {
            return false;
        };
        match TcpStream::connect_timeout(&addr, self.timeout) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(%error, %addr, "connectivity probe failed");
                false
            }
        }
    }
}

/// Current connectivity, safe to share between threads.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    offline: AtomicBool,
}

impl ConnectivityMonitor {
    /// Seed the state from a probe.
    pub fn new(probe: &impl ConnectivityProbe) -> Self {
        Self::with_state(ConnectivityState::from_offline(!probe.is_online()))
    }

    #[must_use]
    pub const fn with_state(state: ConnectivityState) -> Self {
        Self {
            offline: AtomicBool::new(matches!(state, ConnectivityState::Offline)),
        }
    }

    /// Apply a platform signal and return the resulting state.
    pub fn handle(&self, signal: ConnectivitySignal) -> ConnectivityState {
        let offline = signal == ConnectivitySignal::BecameUnavailable;
        let was_offline = self.offline.swap(offline, Ordering::AcqRel);
        let state = ConnectivityState::from_offline(offline);
        if was_offline != offline {
            tracing::info!(%state, "connectivity changed");
        }
        state
    }

    #[must_use]
    pub fn state(&self) -> ConnectivityState {
        ConnectivityState::from_offline(self.is_offline())
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::Acquire)
    }
}

use std::path::PathBuf;

use anyhow::Context;
use vt_config::VtConfig;
use vt_core::pricing::BagSelection;
use vt_vault::{ConnectivityMonitor, FileSlotStore, FixedProbe, OfflineVault, TcpProbe};

use crate::cli::GlobalFlags;

/// Everything a command handler needs: config and the opened vault.
pub struct AppContext {
    pub config: VtConfig,
    pub vault: OfflineVault<FileSlotStore>,
    offline: bool,
}

impl AppContext {
    pub fn init(config: VtConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let dir = match &flags.vault_dir {
            Some(dir) => dir.clone(),
            None => config
                .vault
                .resolved_dir()
                .context("no platform data directory; pass --vault-dir or set vault.dir")?,
        };
        tracing::debug!(dir = %dir.display(), key = %config.vault.key, "opening vault");

        let store = FileSlotStore::new(dir).with_quota(config.vault.quota());
        let vault = OfflineVault::with_key(store, config.vault.key.clone());
        let offline = flags.offline || config.connectivity.force_offline;

        Ok(Self {
            config,
            vault,
            offline,
        })
    }

    pub fn vault_path(&self) -> PathBuf {
        self.vault.store().slot_path(self.vault.key())
    }

    /// Probe the network once and seed a monitor with the answer.
    pub fn connectivity(&self) -> ConnectivityMonitor {
        if self.offline {
            return ConnectivityMonitor::new(&FixedProbe(false));
        }
        let probe = TcpProbe::new(
            self.config.connectivity.probe_addr.clone(),
            self.config.connectivity.probe_timeout(),
        );
        let monitor = ConnectivityMonitor::new(&probe);
        tracing::debug!(state = %monitor.state(), "connectivity probed");
        monitor
    }

    pub const fn bags(&self) -> BagSelection {
        BagSelection {
            carry_on: self.config.fees.carry_on_bags,
            checked: self.config.fees.checked_bags,
        }
    }
}

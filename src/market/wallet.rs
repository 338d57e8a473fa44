//! Mocked wallet. Connecting always succeeds after a short simulated wait.

use log::info;
use std::time::Duration;

use crate::game::GameError;
use crate::logutil::short_address;
use crate::tasks::ViewScope;

pub const MOCK_ADDRESS: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
pub const MOCK_BALANCE: f64 = 2.45;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletInfo {
    pub address: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockWallet {
    connected: Option<WalletInfo>,
}

impl MockWallet {
    pub fn new() -> Self {
        Self { connected: None }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.connected.as_ref().map(|w| w.address.as_str())
    }

    /// SOL balance; zero while disconnected.
    pub fn balance(&self) -> f64 {
        self.connected.as_ref().map(|w| w.balance).unwrap_or(0.0)
    }

    /// Finish a connection immediately (the part that runs after the simulated wait).
    pub fn complete_connect(&mut self) -> WalletInfo {
        let info = WalletInfo {
            address: MOCK_ADDRESS.to_string(),
            balance: MOCK_BALANCE,
        };
        info!("Wallet connected: {}", short_address(&info.address));
        self.connected = Some(info.clone());
        info
    }

    /// Connect after `delay`, unless `scope` is dismissed first.
    pub async fn connect(&mut self, scope: &ViewScope, delay: Duration) -> Result<WalletInfo, GameError> {
        info!("Connecting wallet...");
        scope.delay(delay).await?;
        Ok(self.complete_connect())
    }

    pub fn disconnect(&mut self) {
        if self.connected.take().is_some() {
            info!("Wallet disconnected");
        }
    }
}

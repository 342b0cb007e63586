//! Static asset catalog and the mock activity data shown on the dashboard.
//!
//! The catalog is a fixed literal table loaded once at startup and never
//! mutated; balances are never decremented by the simulated flows.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub unit_price_usd: f64,
    pub balance: f64,
    pub halal_certified: bool,
    pub network: String,
    /// 24h change in percent, display only
    pub change_24h: f64,
}

impl Asset {
    pub fn value_usd(&self) -> f64 {
        self.balance * self.unit_price_usd
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    /// Validates the catalog invariants: strictly positive unit prices
    /// (conversion divides by the target price) and unique symbols.
    pub fn new(assets: Vec<Asset>) -> Result<Self> {
        if assets.is_empty() {
            bail!("asset catalog is empty");
        }
        for asset in &assets {
            if !(asset.unit_price_usd > 0.0) {
                bail!(
                    "asset {} has non-positive unit price {}",
                    asset.symbol,
                    asset.unit_price_usd
                );
            }
        }
        for (i, asset) in assets.iter().enumerate() {
            if assets[..i].iter().any(|a| a.symbol == asset.symbol) {
                bail!("duplicate asset symbol {}", asset.symbol);
            }
        }
        Ok(Self { assets })
    }

    /// The fixed table the session runs on when no override file is given.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            Asset {
                symbol: "SDA".to_string(),
                name: "SidraChain".to_string(),
                unit_price_usd: 12.2,
                balance: 10_250.50,
                halal_certified: true,
                network: "SidraChain Mainnet".to_string(),
                change_24h: 12.5,
            },
            Asset {
                symbol: "ETH".to_string(),
                name: "Ethereum".to_string(),
                unit_price_usd: 3000.0,
                balance: 5.25,
                halal_certified: true,
                network: "Ethereum Mainnet".to_string(),
                change_24h: 8.2,
            },
            Asset {
                symbol: "BTC".to_string(),
                name: "Bitcoin".to_string(),
                unit_price_usd: 61_666.0,
                balance: 0.15,
                halal_certified: true,
                network: "Bitcoin Mainnet".to_string(),
                change_24h: -2.1,
            },
            Asset {
                symbol: "TRE".to_string(),
                name: "Real Estate Fund".to_string(),
                unit_price_usd: 185.0,
                balance: 50.0,
                halal_certified: true,
                network: "SidraChain Mainnet".to_string(),
                change_24h: 3.4,
            },
        ])
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let assets: Vec<Asset> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        Self::new(assets)
    }

    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn total_value_usd(&self) -> f64 {
        self.assets.iter().map(Asset::value_usd).sum()
    }

    /// Symbol of the entry after `symbol`, wrapping around. Entries listed
    /// in `skip` are stepped over (the swap screen keeps from != to).
    pub fn next_symbol(&self, symbol: &str, skip: &[&str]) -> String {
        self.step_symbol(symbol, skip, 1)
    }

    pub fn previous_symbol(&self, symbol: &str, skip: &[&str]) -> String {
        self.step_symbol(symbol, skip, self.assets.len() - 1)
    }

    fn step_symbol(&self, symbol: &str, skip: &[&str], step: usize) -> String {
        let start = self
            .assets
            .iter()
            .position(|a| a.symbol == symbol)
            .unwrap_or(0);
        let len = self.assets.len();
        let mut i = (start + step) % len;
        while i != start && skip.contains(&self.assets[i].symbol.as_str()) {
            i = (i + step) % len;
        }
        self.assets[i].symbol.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Received,
    Sent,
    Swap,
}

impl TxKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::Sent => "Sent",
            Self::Swap => "Swap",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub kind: TxKind,
    pub amount: String,
    pub usd: String,
    pub counterparty: String,
    pub age: String,
}

/// Mock activity feed for the dashboard. Static for the whole session.
pub fn recent_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            kind: TxKind::Received,
            amount: "+500.00 SDA".to_string(),
            usd: "$6,100.00".to_string(),
            counterparty: "0x742d...3a8f".to_string(),
            age: "2 hours ago".to_string(),
        },
        Transaction {
            kind: TxKind::Sent,
            amount: "-0.5 ETH".to_string(),
            usd: "$1,500.00".to_string(),
            counterparty: "0x3f2a...9c1d".to_string(),
            age: "5 hours ago".to_string(),
        },
        Transaction {
            kind: TxKind::Swap,
            amount: "1000 SDA → ETH".to_string(),
            usd: "$12,200.00".to_string(),
            counterparty: "internal".to_string(),
            age: "1 day ago".to_string(),
        },
    ]
}

/// 24h portfolio value series for the dashboard chart, (hour, USD).
pub fn portfolio_history() -> Vec<(f64, f64)> {
    vec![
        (0.0, 145_000.0),
        (4.0, 147_500.0),
        (8.0, 146_000.0),
        (12.0, 149_000.0),
        (16.0, 148_500.0),
        (20.0, 150_000.0),
        (24.0, 150_000.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get("SDA").is_some());
        assert!(catalog.get("ETH").is_some());
        assert!(catalog.assets().iter().all(|a| a.unit_price_usd > 0.0));
    }

    #[test]
    fn rejects_non_positive_price() {
        let result = Catalog::new(vec![Asset {
            symbol: "BAD".to_string(),
            name: "Bad".to_string(),
            unit_price_usd: 0.0,
            balance: 1.0,
            halal_certified: false,
            network: "none".to_string(),
            change_24h: 0.0,
        }]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_symbol() {
        let asset = Asset {
            symbol: "SDA".to_string(),
            name: "SidraChain".to_string(),
            unit_price_usd: 12.2,
            balance: 1.0,
            halal_certified: true,
            network: "SidraChain Mainnet".to_string(),
            change_24h: 0.0,
        };
        assert!(Catalog::new(vec![asset.clone(), asset]).is_err());
    }

    #[test]
    fn symbol_cycling_skips_excluded_entries() {
        let catalog = Catalog::builtin().unwrap();
        // SDA, ETH, BTC, TRE: stepping forward from SDA while skipping ETH
        // lands on BTC.
        assert_eq!(catalog.next_symbol("SDA", &["ETH"]), "BTC");
        assert_eq!(catalog.previous_symbol("SDA", &[]), "TRE");
        assert_eq!(catalog.next_symbol("TRE", &[]), "SDA");
    }
}

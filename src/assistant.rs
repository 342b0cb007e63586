//! Canned-response assistant.
//!
//! The "AI" is a static lookup from an enumerated quick action to a fixed
//! reply; free-text input always receives the same fallback. No inference
//! or external call is performed. Replies surface after a fixed typing
//! delay driven by the main update loop.

use chrono::{DateTime, Local};
use strum::Display;

use crate::catalog::Catalog;
use crate::utils::format_usd;
use crate::zakat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum QuickAction {
    #[strum(serialize = "Compliance Audit")]
    ComplianceAudit,
    #[strum(serialize = "Zakat Estimation")]
    ZakatEstimation,
    #[strum(serialize = "Market Trends")]
    MarketTrends,
    #[strum(serialize = "Transaction Summary")]
    TransactionSummary,
}

impl QuickAction {
    pub const ALL: [Self; 4] = [
        Self::ComplianceAudit,
        Self::ZakatEstimation,
        Self::MarketTrends,
        Self::TransactionSummary,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Self::ComplianceAudit => "Verify asset adherence to AAOIFI standards",
            Self::ZakatEstimation => "Calculate obligations based on current holdings",
            Self::MarketTrends => "Analyze halal investment opportunities",
            Self::TransactionSummary => "Generate legible transaction reports",
        }
    }

    /// The message shown as if the user had typed it.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::ComplianceAudit => "Initiate Compliance Audit",
            Self::ZakatEstimation => "Estimate Zakat Obligations",
            Self::MarketTrends => "Analyze Market Trends",
            Self::TransactionSummary => "Generate Transaction Summary",
        }
    }
}

pub fn greeting() -> &'static str {
    "SidEx Intelligence Active. Ready for compliance verification and \
     transaction analysis. Please select an operation."
}

pub fn fallback_response() -> &'static str {
    "Query processing limit reached. For specialized financial rulings, \
     please consult a certified Sharia board. This system provides data \
     analysis only."
}

/// Canned reply for a quick action. The Zakat report embeds figures
/// computed from the catalog and the configured Nisab threshold; the rest
/// are fixed strings.
pub fn canned_response(action: QuickAction, catalog: &Catalog, nisab_usd: f64) -> String {
    match action {
        QuickAction::ComplianceAudit => "Audit Results: VERIFIED.\n\n\
             • SidraChain (SDA): AAOIFI Compliant\n\
             • Ethereum (ETH): Compliant\n\
             • Tokenized Real Estate (TRE): Compliant\n\n\
             Status: No prohibited assets detected."
            .to_string(),
        QuickAction::ZakatEstimation => {
            let z = zakat::estimate(catalog.total_value_usd(), nisab_usd);
            let threshold = if z.nisab_met { "Met" } else { "Not Met" };
            format!(
                "Zakat Calculation Report:\n\n\
                 • Total Eligible Assets: {}\n\
                 • Nisab Threshold: {} ({threshold})\n\
                 • Zakat Payable (2.5%): {}\n\n\
                 Status: Payment Pending Distribution.",
                format_usd(z.eligible_usd),
                format_usd(z.nisab_usd),
                format_usd(z.due_usd),
            )
        }
        QuickAction::MarketTrends => "Market Intelligence:\n\n\
             • SidraChain (SDA): +12.5% (24h). High liquidity.\n\
             • Sector: Islamic Finance (+18% QTD).\n\
             • Commodities: Gold-backed assets showing stability.\n\n\
             Advisory: Volatility detected in non-compliant DeFi sectors."
            .to_string(),
        QuickAction::TransactionSummary => "Transaction Log:\n\n\
             • IN: 500 SDA ($6,100) | Origin: 0x742d...\n\
             • OUT: 0.5 ETH ($1,500) | Dest: 0x3f2a...\n\
             • SWAP: 1000 SDA → ETH | Vol: $12,200\n\n\
             All entries cryptographically verified."
            .to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub sender: Sender,
    pub body: String,
    pub timestamp: DateTime<Local>,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: body.into(),
            timestamp: Local::now(),
        }
    }

    pub fn assistant(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            body: body.into(),
            timestamp: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zakat_reply_reflects_catalog_and_threshold() {
        let catalog = Catalog::builtin().unwrap();
        let reply = canned_response(QuickAction::ZakatEstimation, &catalog, 5000.0);
        assert!(reply.contains("Nisab Threshold: $5,000.00 (Met)"));
        let expected_due = format_usd(catalog.total_value_usd() * 0.025);
        assert!(reply.contains(&expected_due));
    }

    #[test]
    fn zakat_reply_below_threshold() {
        let catalog = Catalog::builtin().unwrap();
        let reply = canned_response(QuickAction::ZakatEstimation, &catalog, 1e9);
        assert!(reply.contains("(Not Met)"));
        assert!(reply.contains("Zakat Payable (2.5%): $0.00"));
    }

    #[test]
    fn every_action_has_a_reply() {
        let catalog = Catalog::builtin().unwrap();
        for action in QuickAction::ALL {
            let reply = canned_response(action, &catalog, 5000.0);
            assert!(!reply.is_empty());
        }
    }

    #[test]
    fn action_labels() {
        assert_eq!(QuickAction::ComplianceAudit.to_string(), "Compliance Audit");
        assert_eq!(
            QuickAction::ZakatEstimation.prompt(),
            "Estimate Zakat Obligations"
        );
    }
}

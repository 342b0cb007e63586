//! Send flow view-model

use std::time::{Duration, Instant};

use cli_log::*;

use crate::catalog::Catalog;
use crate::config::{SEND_FEE_SDA, SUBMIT_DELAY_MS};
use crate::quote::parse_amount;

use super::types::{FlowStage, SendField};

pub struct SendForm {
    pub stage: FlowStage,
    pub asset: String,
    pub recipient: String,
    pub amount: String,
    pub field: SendField,
    pub submit_deadline: Option<Instant>,
}

impl SendForm {
    pub fn new(default_asset: &str) -> Self {
        Self {
            stage: FlowStage::Editing,
            asset: default_asset.to_string(),
            recipient: String::new(),
            amount: String::new(),
            field: SendField::default(),
            submit_deadline: None,
        }
    }

    /// Submission is enabled only when a recipient is present and the
    /// amount parses positive.
    pub fn is_valid(&self) -> bool {
        !self.recipient.trim().is_empty() && parse_amount(&self.amount).is_some_and(|a| a > 0.0)
    }

    pub fn begin_review(&mut self) {
        if self.stage == FlowStage::Editing && self.is_valid() {
            self.stage = FlowStage::Reviewing;
        }
    }

    pub fn back_to_edit(&mut self) {
        if self.stage == FlowStage::Reviewing {
            self.stage = FlowStage::Editing;
        }
    }

    pub fn submit(&mut self) {
        if self.stage == FlowStage::Reviewing {
            self.stage = FlowStage::Submitting;
            self.submit_deadline = Some(Instant::now() + Duration::from_millis(SUBMIT_DELAY_MS));
            info!("send submitted: {} {} -> {}", self.amount, self.asset, self.recipient);
        }
    }

    /// Resolves the simulated broadcast. Always succeeds; returns true on
    /// the tick that completes it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.stage == FlowStage::Submitting
            && self.submit_deadline.is_some_and(|deadline| now >= deadline)
        {
            self.stage = FlowStage::Complete;
            self.submit_deadline = None;
            return true;
        }
        false
    }

    pub fn set_max(&mut self, catalog: &Catalog) {
        if let Some(asset) = catalog.get(&self.asset) {
            self.amount = asset.balance.to_string();
        }
    }

    pub fn cycle_asset_next(&mut self, catalog: &Catalog) {
        self.asset = catalog.next_symbol(&self.asset, &[]);
    }

    pub fn cycle_asset_previous(&mut self, catalog: &Catalog) {
        self.asset = catalog.previous_symbol(&self.asset, &[]);
    }

    /// Amount plus the fixed network fee, shown as "Total Cost" on review.
    pub fn total_cost(&self) -> Option<f64> {
        parse_amount(&self.amount).map(|a| a + SEND_FEE_SDA)
    }

    pub fn reset(&mut self) {
        let asset = self.asset.clone();
        *self = Self::new(&asset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SendForm {
        let mut form = SendForm::new("SDA");
        form.recipient = "0x3f2a9c1d".to_string();
        form.amount = "100".to_string();
        form
    }

    #[test]
    fn blank_fields_block_review() {
        let mut form = SendForm::new("SDA");
        assert!(!form.is_valid());
        form.begin_review();
        assert_eq!(form.stage, FlowStage::Editing);

        form.recipient = "0x3f2a".to_string();
        form.amount = "0".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn flow_advances_through_stages() {
        let mut form = valid_form();
        form.begin_review();
        assert_eq!(form.stage, FlowStage::Reviewing);
        form.submit();
        assert_eq!(form.stage, FlowStage::Submitting);

        // Before the deadline nothing resolves.
        assert!(!form.tick(Instant::now()));
        assert_eq!(form.stage, FlowStage::Submitting);

        let deadline = form.submit_deadline.unwrap();
        assert!(form.tick(deadline));
        assert_eq!(form.stage, FlowStage::Complete);
    }

    #[test]
    fn review_can_return_to_editing_but_complete_cannot() {
        let mut form = valid_form();
        form.begin_review();
        form.back_to_edit();
        assert_eq!(form.stage, FlowStage::Editing);

        form.begin_review();
        form.submit();
        let deadline = form.submit_deadline.unwrap();
        form.tick(deadline);
        form.back_to_edit();
        assert_eq!(form.stage, FlowStage::Complete);
    }

    #[test]
    fn total_cost_includes_network_fee() {
        let form = valid_form();
        let total = form.total_cost().unwrap();
        assert!((total - 100.0025).abs() < 1e-9);
    }

    #[test]
    fn max_fills_full_balance() {
        let catalog = Catalog::builtin().unwrap();
        let mut form = SendForm::new("SDA");
        form.set_max(&catalog);
        assert_eq!(form.amount, "10250.5");
    }
}

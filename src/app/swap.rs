//! Swap flow view-model

use std::time::{Duration, Instant};

use anyhow::Result;
use cli_log::*;

use crate::catalog::Catalog;
use crate::config::SUBMIT_DELAY_MS;
use crate::quote::{QuoteCalculator, parse_amount};

use super::types::{FlowStage, SwapField};

pub struct SwapForm {
    pub stage: FlowStage,
    pub from_asset: String,
    pub to_asset: String,
    pub from_amount: String,
    /// Derived from `from_amount` via the quote calculator; read-only in
    /// the UI.
    pub to_amount: String,
    pub field: SwapField,
    pub submit_deadline: Option<Instant>,
}

impl SwapForm {
    pub fn new(from_asset: &str, to_asset: &str) -> Self {
        Self {
            stage: FlowStage::Editing,
            from_asset: from_asset.to_string(),
            to_asset: to_asset.to_string(),
            from_amount: String::new(),
            to_amount: String::new(),
            field: SwapField::default(),
            submit_deadline: None,
        }
    }

    /// Re-derives the receive amount from the pay amount. A blank pay
    /// field blanks the receive field rather than showing zero.
    pub fn recompute(&mut self, catalog: &Catalog) -> Result<()> {
        let calc = QuoteCalculator::new(catalog);
        self.to_amount = calc.convert_field(&self.from_asset, &self.to_asset, &self.from_amount)?;
        Ok(())
    }

    /// Exchanges the roles of the two assets and transposes the displayed
    /// amounts verbatim. Deliberately does not recompute the reverse
    /// quote: the cached forward figures are trusted as-is.
    pub fn swap_direction(&mut self) {
        std::mem::swap(&mut self.from_asset, &mut self.to_asset);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    pub fn is_valid(&self) -> bool {
        parse_amount(&self.from_amount).is_some_and(|a| a > 0.0)
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
            info!(
                "swap submitted: {} {} -> {} {}",
                self.from_amount, self.from_asset, self.to_amount, self.to_asset
            );
        }
    }

    /// Resolves the simulated execution. Always succeeds; returns true on
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

    pub fn set_max(&mut self, catalog: &Catalog) -> Result<()> {
        if let Some(asset) = catalog.get(&self.from_asset) {
            self.from_amount = asset.balance.to_string();
        }
        self.recompute(catalog)
    }

    /// Cycles the pay-side asset, skipping the receive side so the two
    /// never coincide.
    pub fn cycle_from_asset(&mut self, catalog: &Catalog, forward: bool) -> Result<()> {
        let skip = [self.to_asset.as_str()];
        self.from_asset = if forward {
            catalog.next_symbol(&self.from_asset, &skip)
        } else {
            catalog.previous_symbol(&self.from_asset, &skip)
        };
        self.recompute(catalog)
    }

    pub fn cycle_to_asset(&mut self, catalog: &Catalog, forward: bool) -> Result<()> {
        let skip = [self.from_asset.as_str()];
        self.to_asset = if forward {
            catalog.next_symbol(&self.to_asset, &skip)
        } else {
            catalog.previous_symbol(&self.to_asset, &skip)
        };
        self.recompute(catalog)
    }

    pub fn reset(&mut self) {
        let (from, to) = (self.from_asset.clone(), self.to_asset.clone());
        *self = Self::new(&from, &to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn editing_amount_derives_receive_field() {
        let catalog = catalog();
        let mut form = SwapForm::new("SDA", "ETH");
        form.from_amount = "1000".to_string();
        form.recompute(&catalog).unwrap();
        assert_eq!(form.to_amount, "4.066667");
    }

    #[test]
    fn blank_amount_blanks_receive_field() {
        let catalog = catalog();
        let mut form = SwapForm::new("SDA", "ETH");
        form.from_amount = "1000".to_string();
        form.recompute(&catalog).unwrap();
        form.from_amount.clear();
        form.recompute(&catalog).unwrap();
        assert_eq!(form.to_amount, "");
    }

    #[test]
    fn direction_swap_transposes_cached_values_verbatim() {
        let catalog = catalog();
        let mut form = SwapForm::new("SDA", "ETH");
        form.from_amount = "1000".to_string();
        form.recompute(&catalog).unwrap();

        form.swap_direction();

        // The displayed figures are transposed without re-querying the
        // catalog, so the pair is not a recomputed reverse quote.
        assert_eq!(form.from_asset, "ETH");
        assert_eq!(form.to_asset, "SDA");
        assert_eq!(form.from_amount, "4.066667");
        assert_eq!(form.to_amount, "1000");
    }

    #[test]
    fn asset_cycling_never_collides() {
        let catalog = catalog();
        let mut form = SwapForm::new("SDA", "ETH");
        for _ in 0..catalog.assets().len() * 2 {
            form.cycle_from_asset(&catalog, true).unwrap();
            assert_ne!(form.from_asset, form.to_asset);
            form.cycle_to_asset(&catalog, false).unwrap();
            assert_ne!(form.from_asset, form.to_asset);
        }
    }

    #[test]
    fn submission_resolves_to_complete() {
        let catalog = catalog();
        let mut form = SwapForm::new("SDA", "ETH");
        form.from_amount = "1000".to_string();
        form.recompute(&catalog).unwrap();
        form.begin_review();
        form.submit();
        assert_eq!(form.stage, FlowStage::Submitting);
        let deadline = form.submit_deadline.unwrap();
        assert!(form.tick(deadline));
        assert_eq!(form.stage, FlowStage::Complete);
    }
}

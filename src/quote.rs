//! Quote calculator for the swap flow.
//!
//! Converts an amount of a source asset into an estimated amount of a
//! target asset using the catalog's static unit prices. Pure functions of
//! their inputs and the catalog; the fee figures shown alongside a quote
//! are display-only and never reduce the computed output.

use anyhow::{Result, anyhow};

use crate::catalog::Catalog;
use crate::config::OUTPUT_DECIMALS;

pub struct QuoteCalculator<'c> {
    catalog: &'c Catalog,
}

impl<'c> QuoteCalculator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Estimated output amount for `amount` units of `source` in units of
    /// `target`. Relies on the catalog invariant that unit prices are
    /// strictly positive.
    pub fn convert(&self, source: &str, target: &str, amount: f64) -> Result<f64> {
        let source_price = self.unit_price(source)?;
        let target_price = self.unit_price(target)?;
        Ok(amount * source_price / target_price)
    }

    /// Form-field version of [`convert`]: a blank (or not-yet-parseable)
    /// input yields a blank output rather than "0".
    pub fn convert_field(&self, source: &str, target: &str, input: &str) -> Result<String> {
        let Some(amount) = parse_amount(input) else {
            return Ok(String::new());
        };
        let output = self.convert(source, target, amount)?;
        Ok(format_output(output))
    }

    /// Unit rate for the "1 SOURCE ≈ r TARGET" line.
    pub fn rate(&self, source: &str, target: &str) -> Result<f64> {
        self.convert(source, target, 1.0)
    }

    /// USD value of `amount` units of `symbol`.
    pub fn value_usd(&self, symbol: &str, amount: f64) -> Result<f64> {
        Ok(amount * self.unit_price(symbol)?)
    }

    fn unit_price(&self, symbol: &str) -> Result<f64> {
        self.catalog
            .get(symbol)
            .map(|a| a.unit_price_usd)
            .ok_or_else(|| anyhow!("unknown asset {symbol}"))
    }
}

/// Parses an amount field. Blank and partially-typed values (a bare ".")
/// read as "no amount".
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

pub fn format_output(amount: f64) -> String {
    format!("{amount:.prec$}", prec = OUTPUT_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator_catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn converts_with_catalog_prices() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        // 1000 SDA at 12.2 into ETH at 3000 -> 4.066667 displayed
        let out = calc.convert_field("SDA", "ETH", "1000").unwrap();
        assert_eq!(out, "4.066667");
    }

    #[test]
    fn blank_input_yields_blank_output() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        assert_eq!(calc.convert_field("SDA", "ETH", "").unwrap(), "");
        assert_eq!(calc.convert_field("SDA", "ETH", "  ").unwrap(), "");
        assert_eq!(calc.convert_field("SDA", "ETH", ".").unwrap(), "");
    }

    #[test]
    fn conversion_is_linear_in_input() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        let one = calc.convert("SDA", "ETH", 250.0).unwrap();
        let three = calc.convert("SDA", "ETH", 750.0).unwrap();
        assert!((three - 3.0 * one).abs() < 1e-9);
    }

    #[test]
    fn self_conversion_is_identity() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        let out = calc.convert("ETH", "ETH", 5.25).unwrap();
        assert!((out - 5.25).abs() < 1e-12);
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        assert!(calc.convert("SDA", "XYZ", 1.0).is_err());
        assert!(calc.convert_field("XYZ", "ETH", "1").is_err());
    }

    #[test]
    fn rate_matches_unit_conversion() {
        let catalog = calculator_catalog();
        let calc = QuoteCalculator::new(&catalog);
        let rate = calc.rate("SDA", "ETH").unwrap();
        assert!((rate - 12.2 / 3000.0).abs() < 1e-12);
    }
}

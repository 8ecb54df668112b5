//! Order-Level Aggregator
//!
//! Document totals are the sum of the already-rounded line values, never a
//! rounding of the raw sum:
//!
//! - total_gravada = Σ round2(subtotal_i)
//! - total_igv     = Σ round2(tax_i)
//! - importe_total = Σ round2(total_i)
//!
//! Totals are derived on demand and never stored, so they cannot drift from
//! the line list.

use super::line_calculator::{finalize_line, recalculate_line};
use crate::money::{format_currency, format_fixed2};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::sale::LineItem;

/// Document totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderTotals {
    /// Tax-exclusive base
    pub gravada: Decimal,
    pub igv: Decimal,
    /// Amount payable
    pub total: Decimal,
}

/// Totals as exact 2-decimal strings for the outbound payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedTotals {
    pub total_gravada: String,
    pub total_igv: String,
    pub importe_total: String,
}

impl OrderTotals {
    pub fn formatted(&self) -> FormattedTotals {
        FormattedTotals {
            total_gravada: format_fixed2(self.gravada),
            total_igv: format_fixed2(self.igv),
            importe_total: format_fixed2(self.total),
        }
    }

    /// Display lines for the totals panel (`"S/ 1,234.56"`)
    pub fn display(&self, symbol: &str) -> [(&'static str, String); 3] {
        [
            ("Op. Gravada", format_currency(self.gravada, symbol)),
            ("IGV", format_currency(self.igv, symbol)),
            ("Importe Total", format_currency(self.total, symbol)),
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.gravada.is_zero() && self.igv.is_zero() && self.total.is_zero()
    }
}

/// Aggregate document totals from committed lines
///
/// Each line is re-finalized from its quantity and unit price so that stale
/// stored amounts never leak into the totals.
pub fn aggregate(items: &[LineItem], igv_rate: Decimal) -> OrderTotals {
    items
        .iter()
        .map(|item| finalize_line(item.quantity, item.unit_price, igv_rate))
        .fold(OrderTotals::default(), |acc, line| OrderTotals {
            gravada: acc.gravada + line.subtotal,
            igv: acc.igv + line.tax,
            total: acc.total + line.total,
        })
}

/// Re-derive the monetary fields of every line (e.g. after an IGV rate change)
pub fn recalculate_items(items: &mut [LineItem], igv_rate: Decimal) {
    for item in items.iter_mut() {
        recalculate_line(item, igv_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{LineInput, build_line_item};
    use rust_decimal_macros::dec;
    use shared::sale::IGV_RATE;

    fn item(quantity: Decimal, unit_price: Decimal) -> LineItem {
        let input = LineInput {
            product: "Producto".to_string(),
            code: "P-1".to_string(),
            quantity,
            unit_price,
        };
        build_line_item(shared::util::new_line_id(), &input, IGV_RATE)
    }

    #[test]
    fn test_empty_order_totals_are_zero() {
        let totals = aggregate(&[], IGV_RATE);
        assert!(totals.is_zero());
        let formatted = totals.formatted();
        assert_eq!(formatted.total_gravada, "0.00");
        assert_eq!(formatted.total_igv, "0.00");
        assert_eq!(formatted.importe_total, "0.00");
    }

    #[test]
    fn test_totals_sum_rounded_lines() {
        let items = vec![item(dec!(3), dec!(42.373333)), item(dec!(2), dec!(483.05))];
        let totals = aggregate(&items, IGV_RATE);
        // 127.12 + 966.10, 22.88 + 173.90, 150.00 + 1140.00
        assert_eq!(totals.gravada, dec!(1093.22));
        assert_eq!(totals.igv, dec!(196.78));
        assert_eq!(totals.total, dec!(1290.00));
    }

    #[test]
    fn test_per_line_rounding_differs_from_raw_sum() {
        let items = vec![
            item(dec!(1), dec!(0.005)),
            item(dec!(1), dec!(0.005)),
            item(dec!(1), dec!(0.005)),
        ];
        let totals = aggregate(&items, IGV_RATE);
        assert_eq!(totals.gravada, dec!(0.03));
        assert_eq!(totals.igv, dec!(0.00));
        assert_eq!(totals.total, dec!(0.03));

        // Rounding the raw sum would give a different document
        assert_eq!(crate::money::round2(dec!(0.015)), dec!(0.02));
    }

    #[test]
    fn test_totals_ignore_stale_stored_amounts() {
        let mut stale = item(dec!(1), dec!(100));
        stale.subtotal = dec!(1);
        stale.tax = dec!(1);
        stale.total = dec!(1);
        let totals = aggregate(&[stale], IGV_RATE);
        assert_eq!(totals.gravada, dec!(100.00));
        assert_eq!(totals.igv, dec!(18.00));
        assert_eq!(totals.total, dec!(118.00));
    }

    #[test]
    fn test_recalculate_items_with_new_rate() {
        let mut items = vec![item(dec!(1), dec!(100))];
        recalculate_items(&mut items, dec!(0.10));
        assert_eq!(items[0].tax, dec!(10.00));
        assert_eq!(items[0].total, dec!(110.00));
    }

    #[test]
    fn test_display_uses_currency_symbol() {
        let items = vec![item(dec!(10), dec!(123.45))];
        let display = aggregate(&items, IGV_RATE).display("S/");
        assert_eq!(display[0], ("Op. Gravada", "S/ 1,234.50".to_string()));
        assert_eq!(display[2].1, "S/ 1,456.71");
    }
}

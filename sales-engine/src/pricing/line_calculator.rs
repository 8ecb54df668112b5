//! Line Item Calculator
//!
//! Derives the complementary value of a line (subtotal from unit price, or
//! unit price from subtotal) and the three monetary fields of a committed
//! line:
//!
//! - subtotal = round2(quantity × unit_price)
//! - tax      = round2(subtotal × igv_rate)
//! - total    = round2(subtotal + tax)
//!
//! While the user types, only a preview is produced. [`finalize_line`] is
//! the authoritative computation used when a line is added or saved.

use crate::money::{
    format_fixed2, format_quantity, format_unit_price, parse_amount, round2, round_unit_price,
};
use crate::sales::SaleError;
use crate::utils::validation::{
    MAX_CODE_LEN, MAX_NAME_LEN, MAX_QUANTITY, MAX_UNIT_PRICE, validate_sale_text,
};
use rust_decimal::Decimal;
use shared::sale::{DraftField, LineDraft, LineItem, PriceSource};

/// Monetary fields of a finalized line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Canonical values of a line that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct LineInput {
    pub product: String,
    pub code: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

// ==================== Forward / Reverse ====================

/// Unrounded tax-exclusive amount of a line
#[inline]
pub fn raw_subtotal(quantity: Decimal, unit_price: Decimal) -> Decimal {
    quantity * unit_price
}

/// Subtotal shown while typing the unit price
///
/// `None` clears the field: a zero or negative quantity, or a negative
/// price, never shows an amount.
pub fn subtotal_preview(quantity: Decimal, unit_price: Decimal) -> Option<Decimal> {
    if quantity <= Decimal::ZERO || unit_price < Decimal::ZERO {
        return None;
    }
    Some(round2(raw_subtotal(quantity, unit_price)))
}

/// Unit price back-computed from a typed subtotal, kept to 6 decimals
///
/// `None` clears the field when the quantity is not positive or the
/// subtotal is negative.
pub fn unit_price_from_subtotal(subtotal: Decimal, quantity: Decimal) -> Option<Decimal> {
    if quantity <= Decimal::ZERO || subtotal < Decimal::ZERO {
        return None;
    }
    subtotal.checked_div(quantity).map(round_unit_price)
}

/// Authoritative amounts of a line, computed from canonical values
pub fn finalize_line(quantity: Decimal, unit_price: Decimal, igv_rate: Decimal) -> LineAmounts {
    let subtotal = round2(raw_subtotal(quantity, unit_price));
    let tax = round2(subtotal * igv_rate);
    let total = round2(subtotal + tax);

    LineAmounts {
        subtotal,
        tax,
        total,
    }
}

// ==================== Draft Synchronization ====================

/// Apply one keystroke-level edit to a draft and re-derive the other price field
///
/// Editing the unit price or the subtotal makes that field the source;
/// editing the quantity re-derives whichever field is not the source.
pub fn apply_draft_edit(draft: &LineDraft, field: DraftField, value: &str) -> LineDraft {
    let mut next = draft.clone();
    match field {
        DraftField::Product => next.product = value.to_string(),
        DraftField::Code => next.code = value.to_string(),
        DraftField::Quantity => {
            next.quantity = value.to_string();
            sync_prices(&mut next);
        }
        DraftField::UnitPrice => {
            next.unit_price = value.to_string();
            next.source = PriceSource::UnitPrice;
            sync_prices(&mut next);
        }
        DraftField::Subtotal => {
            next.subtotal = value.to_string();
            next.source = PriceSource::Subtotal;
            sync_prices(&mut next);
        }
    }
    next
}

/// Recompute the derived price field of a draft from its source field
pub fn sync_prices(draft: &mut LineDraft) {
    // Non-numeric quantity counts as zero, which clears the derived field
    let quantity = parse_amount(&draft.quantity).unwrap_or(Decimal::ZERO);

    match draft.source {
        PriceSource::UnitPrice => {
            draft.subtotal = parse_amount(&draft.unit_price)
                .and_then(|price| subtotal_preview(quantity, price))
                .map(format_fixed2)
                .unwrap_or_default();
        }
        PriceSource::Subtotal => {
            draft.unit_price = parse_amount(&draft.subtotal)
                .and_then(|subtotal| unit_price_from_subtotal(subtotal, quantity))
                .map(format_unit_price)
                .unwrap_or_default();
        }
    }
}

/// Seed a draft from a committed line (start of an in-place edit)
pub fn draft_from_item(item: &LineItem) -> LineDraft {
    LineDraft {
        product: item.product.clone(),
        code: item.code.clone(),
        quantity: format_quantity(item.quantity),
        unit_price: format_unit_price(item.unit_price),
        subtotal: format_fixed2(item.subtotal),
        source: PriceSource::UnitPrice,
    }
}

// ==================== Validation ====================

/// Validate a staging draft for "add to order"
///
/// Missing product, code or unit price is [`SaleError::ItemIncomplete`];
/// the caller drops the command silently.
pub fn line_input_for_add(draft: &LineDraft) -> Result<LineInput, SaleError> {
    let mut missing = Vec::new();
    if draft.product.trim().is_empty() {
        missing.push("product");
    }
    if draft.code.trim().is_empty() {
        missing.push("code");
    }
    if draft.unit_price.trim().is_empty() {
        missing.push("unit_price");
    }
    if !missing.is_empty() {
        return Err(SaleError::ItemIncomplete(missing));
    }

    validate_sale_text(&draft.product, "product", MAX_NAME_LEN)?;
    validate_sale_text(&draft.code, "code", MAX_CODE_LEN)?;

    let quantity = parse_quantity(&draft.quantity)?;
    let unit_price = parse_unit_price(&draft.unit_price)?;

    Ok(LineInput {
        product: draft.product.trim().to_string(),
        code: draft.code.trim().to_string(),
        quantity,
        unit_price,
    })
}

/// Validate an in-place edit for "save"
///
/// Returns the user-facing message on failure; the edit stays open.
pub fn line_input_for_save(draft: &LineDraft) -> Result<LineInput, String> {
    let mut missing = Vec::new();
    if draft.product.trim().is_empty() {
        missing.push("producto");
    }
    if draft.unit_price.trim().is_empty() {
        missing.push("precio unitario");
    }
    if draft.quantity.trim().is_empty() {
        missing.push("cantidad");
    }
    if !missing.is_empty() {
        return Err(format!(
            "Complete los campos obligatorios: {}",
            missing.join(", ")
        ));
    }

    let quantity = parse_quantity(&draft.quantity)
        .map_err(|_| "La cantidad debe ser un número mayor a cero".to_string())?;
    let unit_price = parse_unit_price(&draft.unit_price)
        .map_err(|_| "El precio unitario debe ser un número mayor o igual a cero".to_string())?;
    validate_sale_text(&draft.product, "product", MAX_NAME_LEN).map_err(|e| e.to_string())?;
    validate_sale_text(&draft.code, "code", MAX_CODE_LEN).map_err(|e| e.to_string())?;

    Ok(LineInput {
        product: draft.product.trim().to_string(),
        code: draft.code.trim().to_string(),
        quantity,
        unit_price,
    })
}

fn parse_quantity(text: &str) -> Result<Decimal, SaleError> {
    let quantity = parse_amount(text)
        .ok_or_else(|| SaleError::InvalidQuantity(format!("'{}' is not a number", text)))?;
    if quantity <= Decimal::ZERO {
        return Err(SaleError::InvalidQuantity(format!(
            "quantity must be positive, got {}",
            quantity
        )));
    }
    if quantity > Decimal::from(MAX_QUANTITY) {
        return Err(SaleError::InvalidQuantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }
    Ok(quantity)
}

fn parse_unit_price(text: &str) -> Result<Decimal, SaleError> {
    let price = parse_amount(text)
        .ok_or_else(|| SaleError::InvalidUnitPrice(format!("'{}' is not a number", text)))?;
    if price < Decimal::ZERO {
        return Err(SaleError::InvalidUnitPrice(format!(
            "unit price must be non-negative, got {}",
            price
        )));
    }
    if price > Decimal::from(MAX_UNIT_PRICE) {
        return Err(SaleError::InvalidUnitPrice(format!(
            "unit price exceeds maximum allowed ({}), got {}",
            MAX_UNIT_PRICE, price
        )));
    }
    Ok(round_unit_price(price))
}

// ==================== Committed Lines ====================

/// Build a committed line from validated input
pub fn build_line_item(id: String, input: &LineInput, igv_rate: Decimal) -> LineItem {
    let amounts = finalize_line(input.quantity, input.unit_price, igv_rate);
    LineItem {
        id,
        product: input.product.clone(),
        code: input.code.clone(),
        quantity: input.quantity,
        unit_price: input.unit_price,
        subtotal: amounts.subtotal,
        tax: amounts.tax,
        total: amounts.total,
    }
}

/// Re-derive subtotal, tax and total of a committed line
pub fn recalculate_line(item: &mut LineItem, igv_rate: Decimal) {
    let amounts = finalize_line(item.quantity, item.unit_price, igv_rate);
    item.subtotal = amounts.subtotal;
    item.tax = amounts.tax;
    item.total = amounts.total;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::sale::IGV_RATE;

    fn draft(product: &str, code: &str, quantity: &str, unit_price: &str) -> LineDraft {
        LineDraft {
            product: product.to_string(),
            code: code.to_string(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            subtotal: String::new(),
            source: PriceSource::UnitPrice,
        }
    }

    #[test]
    fn test_finalize_example_line() {
        let amounts = finalize_line(dec!(3), dec!(42.373333), IGV_RATE);
        assert_eq!(amounts.subtotal, dec!(127.12));
        assert_eq!(amounts.tax, dec!(22.88));
        assert_eq!(amounts.total, dec!(150.00));
    }

    #[test]
    fn test_finalize_invariants_hold_exactly() {
        let cases = [
            (dec!(1), dec!(0.01)),
            (dec!(7), dec!(13.333333)),
            (dec!(2.5), dec!(19.99)),
            (dec!(12), dec!(0.425)),
            (dec!(100), dec!(3.141593)),
        ];
        for (quantity, price) in cases {
            let amounts = finalize_line(quantity, price, IGV_RATE);
            assert_eq!(amounts.subtotal, round2(quantity * price));
            assert_eq!(amounts.tax, round2(amounts.subtotal * dec!(0.18)));
            assert_eq!(amounts.total, round2(amounts.subtotal + amounts.tax));
        }
    }

    #[test]
    fn test_subtotal_preview_clears_invalid_inputs() {
        assert_eq!(subtotal_preview(dec!(2), dec!(10.005)), Some(dec!(20.01)));
        assert_eq!(subtotal_preview(dec!(0), dec!(10)), None);
        assert_eq!(subtotal_preview(dec!(-1), dec!(10)), None);
        assert_eq!(subtotal_preview(dec!(1), dec!(-0.5)), None);
        assert_eq!(subtotal_preview(dec!(1), dec!(0)), Some(dec!(0)));
    }

    #[test]
    fn test_unit_price_from_subtotal() {
        assert_eq!(unit_price_from_subtotal(dec!(966.10), dec!(2)), Some(dec!(483.05)));
        assert_eq!(unit_price_from_subtotal(dec!(100), dec!(3)), Some(dec!(33.333333)));
        assert_eq!(unit_price_from_subtotal(dec!(10), dec!(0)), None);
        assert_eq!(unit_price_from_subtotal(dec!(-10), dec!(2)), None);
    }

    #[test]
    fn test_forward_then_reverse_recovers_unit_price() {
        let cases = [
            (dec!(3), dec!(42.373333)),
            (dec!(7), dec!(0.000001)),
            (dec!(1.5), dec!(19.999999)),
            (dec!(250), dec!(1234.567891)),
            (dec!(0.333), dec!(10)),
        ];
        for (quantity, price) in cases {
            let subtotal = raw_subtotal(quantity, price);
            let back = unit_price_from_subtotal(subtotal, quantity).unwrap();
            assert!((back - price).abs() <= dec!(0.000001), "{quantity} x {price}");
        }
    }

    #[test]
    fn test_draft_unit_price_drives_subtotal() {
        let d = draft("Fierro", "FIE", "3", "");
        let d = apply_draft_edit(&d, DraftField::UnitPrice, "42.373333");
        assert_eq!(d.source, PriceSource::UnitPrice);
        assert_eq!(d.subtotal, "127.12");

        let d = apply_draft_edit(&d, DraftField::Quantity, "0");
        assert_eq!(d.subtotal, "");
        assert_eq!(d.unit_price, "42.373333");
    }

    #[test]
    fn test_draft_subtotal_drives_unit_price() {
        let d = draft("Cemento", "CEM", "2", "");
        let d = apply_draft_edit(&d, DraftField::Subtotal, "966.10");
        assert_eq!(d.source, PriceSource::Subtotal);
        assert_eq!(d.unit_price, "483.05");

        // Quantity change re-derives the non-source field
        let d = apply_draft_edit(&d, DraftField::Quantity, "4");
        assert_eq!(d.subtotal, "966.10");
        assert_eq!(d.unit_price, "241.525");

        let d = apply_draft_edit(&d, DraftField::Quantity, "abc");
        assert_eq!(d.unit_price, "");
    }

    #[test]
    fn test_draft_negative_price_clears_subtotal() {
        let d = draft("Arena", "ARE", "1", "");
        let d = apply_draft_edit(&d, DraftField::UnitPrice, "-5");
        assert_eq!(d.subtotal, "");
    }

    #[test]
    fn test_text_fields_do_not_touch_prices() {
        let d = draft("", "", "2", "10");
        let d = apply_draft_edit(&d, DraftField::UnitPrice, "10");
        let d = apply_draft_edit(&d, DraftField::Product, "Ladrillo");
        let d = apply_draft_edit(&d, DraftField::Code, "LAD-9");
        assert_eq!(d.product, "Ladrillo");
        assert_eq!(d.code, "LAD-9");
        assert_eq!(d.subtotal, "20.00");
    }

    #[test]
    fn test_line_input_for_add_requires_product_code_price() {
        let err = line_input_for_add(&draft("", "X", "1", "10")).unwrap_err();
        assert!(matches!(err, SaleError::ItemIncomplete(ref m) if m == &vec!["product"]));

        let err = line_input_for_add(&draft("P", "  ", "1", "")).unwrap_err();
        assert!(matches!(err, SaleError::ItemIncomplete(ref m) if m == &vec!["code", "unit_price"]));

        let input = line_input_for_add(&draft(" Fierro ", "FIE", "3", "42.373333")).unwrap();
        assert_eq!(input.product, "Fierro");
        assert_eq!(input.quantity, dec!(3));
        assert_eq!(input.unit_price, dec!(42.373333));
    }

    #[test]
    fn test_line_input_for_add_rejects_bad_numbers() {
        assert!(matches!(
            line_input_for_add(&draft("P", "C", "0", "1")),
            Err(SaleError::InvalidQuantity(_))
        ));
        assert!(matches!(
            line_input_for_add(&draft("P", "C", "1", "abc")),
            Err(SaleError::InvalidUnitPrice(_))
        ));
        assert!(matches!(
            line_input_for_add(&draft("P", "C", "1", "-1")),
            Err(SaleError::InvalidUnitPrice(_))
        ));
        assert!(matches!(
            line_input_for_add(&draft("P", "C", "100000", "1")),
            Err(SaleError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_line_input_for_save_messages() {
        let msg = line_input_for_save(&draft("", "C", "", "1")).unwrap_err();
        assert_eq!(msg, "Complete los campos obligatorios: producto, cantidad");

        let msg = line_input_for_save(&draft("P", "C", "-2", "1")).unwrap_err();
        assert!(msg.contains("cantidad"));

        // Code is optional when saving an edit
        let input = line_input_for_save(&draft("P", "", "2", "5")).unwrap();
        assert_eq!(input.quantity, dec!(2));
    }

    #[test]
    fn test_build_and_recalculate_line() {
        let input = LineInput {
            product: "Fierro".to_string(),
            code: "FIE".to_string(),
            quantity: dec!(3),
            unit_price: dec!(42.373333),
        };
        let mut item = build_line_item("id-1".to_string(), &input, IGV_RATE);
        assert_eq!(item.total, dec!(150.00));

        item.quantity = dec!(1);
        recalculate_line(&mut item, IGV_RATE);
        assert_eq!(item.subtotal, dec!(42.37));
        assert_eq!(item.tax, dec!(7.63));
        assert_eq!(item.total, dec!(50.00));
    }

    #[test]
    fn test_draft_from_item() {
        let input = LineInput {
            product: "Cemento".to_string(),
            code: "CEM".to_string(),
            quantity: dec!(2),
            unit_price: dec!(483.05),
        };
        let item = build_line_item("id-2".to_string(), &input, IGV_RATE);
        let d = draft_from_item(&item);
        assert_eq!(d.quantity, "2");
        assert_eq!(d.unit_price, "483.05");
        assert_eq!(d.subtotal, "966.10");
        assert_eq!(d.source, PriceSource::UnitPrice);
    }
}

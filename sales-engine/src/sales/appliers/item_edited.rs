//! ItemEdited event applier
//!
//! Replaces the line with the same ID in place (position preserved) and
//! closes the edit.

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// ItemEdited applier
pub struct ItemEditedApplier;

impl EventApplier for ItemEditedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::ItemEdited { item } = &event.payload {
            if let Some(existing) = session.find_item_mut(&item.id) {
                *existing = item.clone();
            }
            session.editing = None;

            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use shared::sale::{
        ComprobanteType, EditSession, IGV_RATE, LineDraft, LineItem, SaleEventType, SaleHeader,
    };

    fn create_item(id: &str, unit_price: Decimal) -> LineItem {
        LineItem {
            id: id.to_string(),
            product: format!("Producto {id}"),
            code: id.to_uppercase(),
            quantity: dec!(1),
            unit_price,
            subtotal: unit_price,
            tax: dec!(0),
            total: unit_price,
        }
    }

    #[test]
    fn test_item_edited_replaces_in_place() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        let mut session =
            SaleSession::new(SaleHeader::new(ComprobanteType::Boleta, date), IGV_RATE);
        session.items = vec![
            create_item("a", dec!(1)),
            create_item("b", dec!(2)),
            create_item("c", dec!(3)),
        ];
        session.editing = Some(EditSession {
            item_id: "b".to_string(),
            draft: LineDraft::default(),
            notice: Some("Complete los campos obligatorios: producto".to_string()),
        });

        let edited = create_item("b", dec!(20));
        let event = SaleEvent::new(
            9,
            "cmd-9".to_string(),
            SaleEventType::ItemEdited,
            SaleEventPayload::ItemEdited { item: edited },
        );
        ItemEditedApplier.apply(&mut session, &event);

        let ids: Vec<&str> = session.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(session.items[1].unit_price, dec!(20));
        assert!(session.editing.is_none());
        assert_eq!(session.last_sequence, 9);
    }
}

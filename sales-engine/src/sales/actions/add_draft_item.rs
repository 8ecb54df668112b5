//! AddDraftItem command handler
//!
//! Commits the staging line. An incomplete draft is rejected with
//! `ItemIncomplete`, which the UI treats as a silent no-op.

use crate::pricing::{build_line_item, line_input_for_add};
use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// AddDraftItem action
#[derive(Debug, Clone)]
pub struct AddDraftItemAction;

impl CommandHandler for AddDraftItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let session = ctx.session();
        let input = line_input_for_add(&session.draft)?;
        let item = build_line_item(shared::util::new_line_id(), &input, session.igv_rate);

        tracing::debug!(
            item_id = %item.id,
            product = %item.product,
            total = %item.total,
            "Adding line item"
        );

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::ItemAdded,
            SaleEventPayload::ItemAdded { item },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use shared::sale::{ComprobanteType, IGV_RATE, LineDraft, SaleHeader, SaleSession};

    fn create_test_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            timestamp: 1234567890,
        }
    }

    fn create_session(draft: LineDraft) -> SaleSession {
        let date = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        let mut session =
            SaleSession::new(SaleHeader::new(ComprobanteType::Factura, date), IGV_RATE);
        session.draft = draft;
        session
    }

    #[test]
    fn test_add_complete_draft_emits_item_added() {
        let session = create_session(LineDraft {
            product: "Fierro 1/2".to_string(),
            code: "FIE-12".to_string(),
            quantity: "3".to_string(),
            unit_price: "42.373333".to_string(),
            ..LineDraft::default()
        });
        let mut ctx = CommandContext::new(&session);

        let events = AddDraftItemAction
            .execute(&mut ctx, &create_test_metadata())
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sequence, 1);
        match &events[0].payload {
            SaleEventPayload::ItemAdded { item } => {
                assert!(!item.id.is_empty());
                assert_eq!(item.subtotal, dec!(127.12));
                assert_eq!(item.tax, dec!(22.88));
                assert_eq!(item.total, dec!(150.00));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_add_incomplete_draft_is_rejected() {
        let session = create_session(LineDraft {
            product: "Fierro".to_string(),
            ..LineDraft::default()
        });
        let mut ctx = CommandContext::new(&session);

        let result = AddDraftItemAction.execute(&mut ctx, &create_test_metadata());
        assert!(matches!(result, Err(SaleError::ItemIncomplete(_))));
    }
}

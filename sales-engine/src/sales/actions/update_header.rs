//! UpdateHeader command handler
//!
//! Replaces the document header. Text fields are trimmed and length-checked;
//! `cliente` may still be blank here, it is only required when building the
//! outbound payload.

use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use crate::utils::validation::{
    MAX_DOCUMENT_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SERIES_LEN, validate_sale_optional_text,
    validate_sale_text,
};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType, SaleHeader};

/// UpdateHeader action
#[derive(Debug, Clone)]
pub struct UpdateHeaderAction {
    pub header: SaleHeader,
}

impl CommandHandler for UpdateHeaderAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        validate_sale_text(&self.header.cliente, "cliente", MAX_NAME_LEN)?;
        validate_sale_text(&self.header.serie, "serie", MAX_SERIES_LEN)?;
        validate_sale_text(&self.header.documento_cliente, "documento_cliente", MAX_DOCUMENT_LEN)?;
        validate_sale_optional_text(&self.header.observacion, "observacion", MAX_NOTE_LEN)?;

        let mut header = self.header.clone();
        header.cliente = header.cliente.trim().to_string();
        header.serie = header.serie.trim().to_string();
        header.documento_cliente = header.documento_cliente.trim().to_string();
        header.observacion = header
            .observacion
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::HeaderUpdated,
            SaleEventPayload::HeaderUpdated { header },
        );
        Ok(vec![event])
    }
}

//! Outbound payload builder
//!
//! Serializes header, lines and document totals into the "create sale"
//! payload. Every line is re-finalized from its quantity and unit price, so
//! the payload always matches what [`aggregate`] reports.

use crate::money::{format_fixed2, format_fixed6, format_quantity};
use crate::pricing::{aggregate, finalize_line};
use crate::utils::validation::{
    MAX_DOCUMENT_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SERIES_LEN, validate_optional_text,
    validate_required_text,
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::sale::{SaleLinePayload, SalePayload, SaleSession};

/// Build the outbound payload of a session
///
/// # Errors
/// - `SaleEmpty` when there are no lines
/// - `RequiredField` when `cliente` is blank
/// - `ValidationFailed` when a header text exceeds its length limit
pub fn build_payload(session: &SaleSession) -> AppResult<SalePayload> {
    if session.items.is_empty() {
        return Err(AppError::new(ErrorCode::SaleEmpty));
    }

    let header = &session.header;
    validate_required_text(&header.cliente, "cliente", MAX_NAME_LEN)?;
    if header.serie.chars().count() > MAX_SERIES_LEN {
        return Err(AppError::validation(format!(
            "serie is too long (max {MAX_SERIES_LEN})"
        )));
    }
    if header.documento_cliente.chars().count() > MAX_DOCUMENT_LEN {
        return Err(AppError::validation(format!(
            "documento_cliente is too long (max {MAX_DOCUMENT_LEN})"
        )));
    }
    validate_optional_text(&header.observacion, "observacion", MAX_NOTE_LEN)?;

    let productos = session
        .items
        .iter()
        .map(|item| {
            let amounts = finalize_line(item.quantity, item.unit_price, session.igv_rate);
            SaleLinePayload {
                producto: item.product.clone(),
                codigo: item.code.clone(),
                cantidad: format_quantity(item.quantity),
                precio_venta: format_fixed6(item.unit_price),
                total_con_igv: format_fixed2(amounts.total),
                base_gravada: format_fixed2(amounts.subtotal),
                igv: format_fixed2(amounts.tax),
            }
        })
        .collect();

    let totals = aggregate(&session.items, session.igv_rate).formatted();

    tracing::info!(
        cliente = %header.cliente,
        comprobante = header.comprobante.as_str(),
        lines = session.items.len(),
        importe_total = %totals.importe_total,
        "Sale payload built"
    );

    Ok(SalePayload {
        header: header.clone(),
        productos,
        total_gravada: totals.total_gravada,
        total_igv: totals.total_igv,
        importe_total: totals.importe_total,
    })
}

//! Outbound "create sale" payload
//!
//! All amounts are pre-formatted strings so the receiving endpoint gets
//! exactly the digits shown on the document.

use super::types::SaleHeader;
use serde::{Deserialize, Serialize};

/// One line of the outbound payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleLinePayload {
    #[serde(rename = "PRODUCTO")]
    pub producto: String,
    #[serde(rename = "CODIGO")]
    pub codigo: String,
    /// Quantity as entered, trailing zeros trimmed
    #[serde(rename = "CANTIDAD")]
    pub cantidad: String,
    /// Tax-exclusive unit price, exactly 6 decimals
    #[serde(rename = "PRECIO_VENTA")]
    pub precio_venta: String,
    /// Line total with IGV, exactly 2 decimals
    #[serde(rename = "TOTAL_CON_IGV")]
    pub total_con_igv: String,
    /// Tax-exclusive subtotal, exactly 2 decimals
    #[serde(rename = "BASE_GRAVADA")]
    pub base_gravada: String,
    /// Line IGV, exactly 2 decimals
    #[serde(rename = "IGV")]
    pub igv: String,
}

/// Complete outbound payload: header, lines and document totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalePayload {
    #[serde(flatten)]
    pub header: SaleHeader,
    pub productos: Vec<SaleLinePayload>,
    pub total_gravada: String,
    pub total_igv: String,
    pub importe_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::types::ComprobanteType;
    use chrono::NaiveDate;

    #[test]
    fn test_line_payload_uses_upper_case_keys() {
        let line = SaleLinePayload {
            producto: "Fierro 1/2".to_string(),
            codigo: "FIE-12".to_string(),
            cantidad: "3".to_string(),
            precio_venta: "42.373333".to_string(),
            total_con_igv: "150.00".to_string(),
            base_gravada: "127.12".to_string(),
            igv: "22.88".to_string(),
        };
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["CANTIDAD"], "3");
        assert_eq!(json["PRECIO_VENTA"], "42.373333");
        assert_eq!(json["TOTAL_CON_IGV"], "150.00");
        assert_eq!(json["BASE_GRAVADA"], "127.12");
        assert_eq!(json["IGV"], "22.88");
    }

    #[test]
    fn test_payload_flattens_header() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
        let payload = SalePayload {
            header: SaleHeader::new(ComprobanteType::Factura, date),
            productos: vec![],
            total_gravada: "0.00".to_string(),
            total_igv: "0.00".to_string(),
            importe_total: "0.00".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tipo_comprobante"], "FACTURA");
        assert_eq!(json["importe_total"], "0.00");
        assert!(json["productos"].as_array().unwrap().is_empty());
        assert!(json.get("header").is_none());
    }
}

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for PUT /api/cars/sell/{car_id}. The car id comes from the
/// path; the wire uses camelCase field names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    pub cliente_id: i32,
    pub data_venda: NaiveDate,
    pub preco: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_payload_deserializes_camel_case_wire_names() {
        let payload: SalePayload = serde_json::from_value(serde_json::json!({
            "clienteId": 7,
            "dataVenda": "2024-05-10",
            "preco": 25000.0
        }))
        .unwrap();

        assert_eq!(payload.cliente_id, 7);
        assert_eq!(payload.data_venda, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(payload.preco, 25000.0);
    }

    #[test]
    fn sale_payload_rejects_missing_fields() {
        let result: Result<SalePayload, _> = serde_json::from_value(serde_json::json!({
            "clienteId": 7
        }));
        assert!(result.is_err());
    }
}

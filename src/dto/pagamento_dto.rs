use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::pagamento::Pagamento;

/// Body do endpoint POST /api/payment (contrato camelCase do frontend)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: Decimal,
    pub service_type: String,
    pub service_id: Uuid,
    pub provider_id: Uuid,
}

/// Resposta do POST /api/payment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}

/// Response de pagamento para listagens do prestador
#[derive(Debug, Serialize)]
pub struct PagamentoResponse {
    pub id: Uuid,
    pub payment_intent_id: String,
    pub valor: Decimal,
    pub taxa_plataforma: Decimal,
    pub valor_prestador: Decimal,
    pub tipo_servico: String,
    pub solicitacao_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Pagamento> for PagamentoResponse {
    fn from(p: Pagamento) -> Self {
        Self {
            id: p.id,
            payment_intent_id: p.payment_intent_id,
            valor: p.valor,
            taxa_plataforma: p.taxa_plataforma,
            valor_prestador: p.valor_prestador,
            tipo_servico: p.tipo_servico,
            solicitacao_id: p.solicitacao_id,
            status: p.status,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_contrato_camel_case_do_frontend() {
        let body = r#"{
            "amount": 100.00,
            "serviceType": "mecanico",
            "serviceId": "7b1c9a40-93a4-4d52-8f3e-2f1a5b6c7d8e",
            "providerId": "7b1c9a40-93a4-4d52-8f3e-2f1a5b6c7d8f"
        }"#;

        let request: CreatePaymentRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.amount, Decimal::from_str("100").unwrap());
        assert_eq!(request.service_type, "mecanico");
    }

    #[test]
    fn test_response_serializa_em_camel_case() {
        let response = PaymentResponse {
            client_secret: "pi_x_secret".to_string(),
            payment_intent_id: "pi_x".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["clientSecret"], "pi_x_secret");
        assert_eq!(json["paymentIntentId"], "pi_x");
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::cotacao::Cotacao;

/// Request da seguradora para registrar uma cotação
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCotacaoRequest {
    #[validate(email)]
    pub email_cliente: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo_veiculo: String,

    pub valor: Decimal,
}

/// Request para atualizar o status de uma cotação
#[derive(Debug, Deserialize)]
pub struct UpdateStatusCotacaoRequest {
    pub status: String,
}

/// Response de cotação para a API
#[derive(Debug, Serialize)]
pub struct CotacaoResponse {
    pub id: Uuid,
    pub seguradora_id: Uuid,
    pub email_cliente: String,
    pub modelo_veiculo: String,
    pub valor: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Cotacao> for CotacaoResponse {
    fn from(c: Cotacao) -> Self {
        Self {
            id: c.id,
            seguradora_id: c.seguradora_id,
            email_cliente: c.email_cliente,
            modelo_veiculo: c.modelo_veiculo,
            valor: c.valor,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

//! Modelo de Veículo
//!
//! Este módulo contém o struct Veiculo que mapeia à tabela veiculos.
//! Um veículo pertence a um único usuário e pode ser excluído por ele.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Veículo - mapeia exatamente à tabela veiculos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Veiculo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: String,
    pub ano: Option<i32>,
    pub cor: Option<String>,
    pub quilometragem: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

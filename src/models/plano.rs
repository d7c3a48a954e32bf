//! Modelo de Plano de seguradora

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Plano oferecido por uma seguradora - mapeia à tabela planos_seguradora
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plano {
    pub id: Uuid,
    pub seguradora_id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco_mensal: Decimal,
    pub cobertura: Option<String>,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::plano::Plano;

/// Request para criar um plano de seguro
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlanoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    pub descricao: Option<String>,

    pub preco_mensal: Decimal,

    pub cobertura: Option<String>,
}

/// Request para atualizar um plano existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlanoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: Option<String>,

    pub descricao: Option<String>,

    pub preco_mensal: Option<Decimal>,

    pub cobertura: Option<String>,
}

/// Response de plano para a API
#[derive(Debug, Serialize)]
pub struct PlanoResponse {
    pub id: Uuid,
    pub seguradora_id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco_mensal: Decimal,
    pub cobertura: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Plano> for PlanoResponse {
    fn from(p: Plano) -> Self {
        Self {
            id: p.id,
            seguradora_id: p.seguradora_id,
            nome: p.nome,
            descricao: p.descricao,
            preco_mensal: p.preco_mensal,
            cobertura: p.cobertura,
            created_at: p.created_at,
        }
    }
}

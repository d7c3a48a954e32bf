//! Modelo de Candidatura de parceiro
//!
//! Oficinas e guinchos interessados em atuar na plataforma se
//! candidatam pelo site; a candidatura nasce pendente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_CANDIDATURA_PENDENTE: &str = "pendente";

/// Candidatura - mapeia à tabela candidaturas_parceiro
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidatura {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub tipo_servico: String,
    pub cidade: String,
    pub descricao: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

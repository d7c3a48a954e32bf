//! Modelo de mensagem de Suporte

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Mensagem enviada pelo formulário de contato - mapeia à tabela suporte
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MensagemSuporte {
    pub id: Uuid,
    pub nome: String,
    pub email: String,
    pub assunto: Option<String>,
    pub mensagem: String,
    pub created_at: DateTime<Utc>,
}

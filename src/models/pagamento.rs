//! Modelo de Pagamento
//!
//! Um pagamento é criado uma única vez por solicitação aceita e guarda
//! a divisão entre taxa da plataforma e repasse ao prestador.
//! O status nasce "pendente" e não há reconciliação automática;
//! "falhou" marca repasses que o provedor rejeitou.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_PAGAMENTO_PENDENTE: &str = "pendente";
pub const STATUS_PAGAMENTO_FALHOU: &str = "falhou";

/// Pagamento - mapeia exatamente à tabela pagamentos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pagamento {
    pub id: Uuid,
    pub payment_intent_id: String,
    pub valor: Decimal,
    pub taxa_plataforma: Decimal,
    pub valor_prestador: Decimal,
    pub tipo_servico: String,
    pub solicitacao_id: Uuid,
    pub prestador_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

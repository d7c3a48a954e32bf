//! Modelo de Cotação de seguro
//!
//! Análogo das solicitações de serviço no escopo da seguradora:
//! cada cotação pertence a uma seguradora e referencia o cliente por e-mail.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status de uma cotação de seguro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCotacao {
    Pendente,
    Aprovada,
    Recusada,
}

impl StatusCotacao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCotacao::Pendente => "pendente",
            StatusCotacao::Aprovada => "aprovada",
            StatusCotacao::Recusada => "recusada",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "pendente" => Some(StatusCotacao::Pendente),
            "aprovada" => Some(StatusCotacao::Aprovada),
            "recusada" => Some(StatusCotacao::Recusada),
            _ => None,
        }
    }
}

/// Cotação de seguro - mapeia exatamente à tabela cotacoes_seguro
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cotacao {
    pub id: Uuid,
    pub seguradora_id: Uuid,
    pub email_cliente: String,
    pub modelo_veiculo: String,
    pub valor: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_cotacao() {
        assert_eq!(StatusCotacao::parse("pendente"), Some(StatusCotacao::Pendente));
        assert_eq!(StatusCotacao::parse("aprovada"), Some(StatusCotacao::Aprovada));
        assert_eq!(StatusCotacao::parse("recusada"), Some(StatusCotacao::Recusada));
        assert_eq!(StatusCotacao::parse("concluida"), None);
    }
}

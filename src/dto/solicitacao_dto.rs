use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::solicitacao::Solicitacao;

/// Request do cliente para abrir uma solicitação de serviço
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSolicitacaoRequest {
    pub tipo_servico: String,

    #[validate(length(min = 5, max = 2000))]
    pub descricao: String,

    #[validate(length(min = 3, max = 500))]
    pub localizacao: String,

    pub preco_estimado: Option<Decimal>,
}

/// Request do prestador para aceitar uma solicitação.
/// O valor informado dispara o fluxo de pagamento.
#[derive(Debug, Deserialize)]
pub struct AceitarSolicitacaoRequest {
    pub valor: Decimal,
}

/// Filtro de status das listagens ("todas" retorna a união)
#[derive(Debug, Deserialize)]
pub struct SolicitacaoFilters {
    pub status: Option<String>,
}

/// Response de solicitação para a API
#[derive(Debug, Serialize)]
pub struct SolicitacaoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tipo_servico: String,
    pub descricao: String,
    pub localizacao: String,
    pub status: String,
    pub prestador_id: Option<Uuid>,
    pub preco_estimado: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Solicitacao> for SolicitacaoResponse {
    fn from(s: Solicitacao) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            tipo_servico: s.tipo_servico,
            descricao: s.descricao,
            localizacao: s.localizacao,
            status: s.status,
            prestador_id: s.prestador_id,
            preco_estimado: s.preco_estimado,
            created_at: s.created_at,
        }
    }
}

/// Dados do pagamento criado ao aceitar uma solicitação
#[derive(Debug, Serialize)]
pub struct PagamentoAceiteResponse {
    pub payment_intent_id: String,
    pub client_secret: String,
    pub valor: Decimal,
    pub taxa_plataforma: Decimal,
    pub valor_prestador: Decimal,
}

/// Response do aceite: a solicitação já atribuída + o pagamento criado
#[derive(Debug, Serialize)]
pub struct AceiteResponse {
    pub solicitacao: SolicitacaoResponse,
    pub pagamento: PagamentoAceiteResponse,
}

/// Contadores do dashboard, calculados em memória sobre o conjunto
/// retornado para o usuário (sem agregação no banco).
#[derive(Debug, Serialize, PartialEq)]
pub struct DashboardResponse {
    pub pendentes: usize,
    pub em_andamento: usize,
    pub concluidas: usize,
    pub valor_total: Decimal,
}

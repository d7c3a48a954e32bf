//! Controller de solicitações de serviço
//!
//! Concentra o ciclo de vida da solicitação e o disparo do fluxo de
//! pagamento no aceite. As listagens filtram e agregam em memória
//! sobre o conjunto retornado para o usuário.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::clients::stripe_client::StripeClient;
use crate::config::environment::EnvironmentConfig;
use crate::dto::solicitacao_dto::{
    AceitarSolicitacaoRequest, AceiteResponse, CreateSolicitacaoRequest, DashboardResponse,
    PagamentoAceiteResponse, SolicitacaoFilters, SolicitacaoResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::TipoUsuario;
use crate::models::solicitacao::{Solicitacao, StatusSolicitacao, TipoServico};
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::solicitacao_repository::SolicitacaoRepository;
use crate::services::pagamento_service::PagamentoService;
use crate::utils::errors::AppError;

/// Filtro de status aplicado em memória: "todas" (ou ausência) retorna a
/// união; qualquer outro nome retorna apenas as correspondências exatas.
pub fn filtrar_por_status(
    solicitacoes: Vec<Solicitacao>,
    filtro: Option<&str>,
) -> Vec<Solicitacao> {
    match filtro {
        None | Some("todas") => solicitacoes,
        Some(status) => solicitacoes
            .into_iter()
            .filter(|s| s.status == status)
            .collect(),
    }
}

/// Contadores do dashboard calculados sobre o conjunto já buscado
pub fn calcular_dashboard(solicitacoes: &[Solicitacao]) -> DashboardResponse {
    let mut pendentes = 0;
    let mut em_andamento = 0;
    let mut concluidas = 0;
    let mut valor_total = Decimal::ZERO;

    for s in solicitacoes {
        match s.status_atual() {
            Some(StatusSolicitacao::Pendente) => pendentes += 1,
            Some(StatusSolicitacao::Aceita) | Some(StatusSolicitacao::EmAndamento) => {
                em_andamento += 1
            }
            Some(StatusSolicitacao::Concluida) => {
                concluidas += 1;
                valor_total += s.preco_estimado.unwrap_or(Decimal::ZERO);
            }
            _ => {}
        }
    }

    DashboardResponse {
        pendentes,
        em_andamento,
        concluidas,
        valor_total,
    }
}

pub struct SolicitacaoController {
    repository: SolicitacaoRepository,
    profiles: ProfileRepository,
    pagamentos: PagamentoService,
}

impl SolicitacaoController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        let client = StripeClient::new(config.stripe_secret_key.clone());
        Self {
            repository: SolicitacaoRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool.clone()),
            pagamentos: PagamentoService::new(pool, client, config.taxa_plataforma),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateSolicitacaoRequest,
    ) -> Result<ApiResponse<SolicitacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Cliente)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let tipo = TipoServico::parse(&request.tipo_servico).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Tipo de serviço inválido: '{}'",
                request.tipo_servico
            ))
        })?;

        if let Some(preco) = request.preco_estimado {
            if preco < Decimal::ZERO {
                return Err(AppError::ValidationError(
                    "O preço estimado não pode ser negativo".to_string(),
                ));
            }
        }

        let solicitacao = self
            .repository
            .create(
                user.user_id,
                tipo.as_str().to_string(),
                request.descricao,
                request.localizacao,
                request.preco_estimado,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            SolicitacaoResponse::from(solicitacao),
            "Solicitação criada com sucesso".to_string(),
        ))
    }

    /// Uma solicitação é visível ao cliente dono, ao prestador atribuído e,
    /// enquanto pendente, aos prestadores do tipo de serviço.
    pub async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<SolicitacaoResponse, AppError> {
        let solicitacao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitação não encontrada".to_string()))?;

        let e_dono = solicitacao.user_id == user.user_id;
        let e_prestador_atribuido = solicitacao.prestador_id == Some(user.user_id);
        let e_pendente_do_tipo = solicitacao.status_atual() == Some(StatusSolicitacao::Pendente)
            && solicitacao
                .tipo()
                .map(|t| t.papel_prestador() == user.tipo_usuario)
                .unwrap_or(false);

        if !(e_dono || e_prestador_atribuido || e_pendente_do_tipo) {
            return Err(AppError::Forbidden(
                "Sem permissão para acessar esta solicitação".to_string(),
            ));
        }

        Ok(SolicitacaoResponse::from(solicitacao))
    }

    /// Solicitações do cliente logado, com filtro de status em memória
    pub async fn listar_do_cliente(
        &self,
        user: &AuthenticatedUser,
        filters: &SolicitacaoFilters,
    ) -> Result<Vec<SolicitacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Cliente)?;

        let solicitacoes = self.repository.find_by_cliente(user.user_id).await?;
        let filtradas = filtrar_por_status(solicitacoes, filters.status.as_deref());

        Ok(filtradas.into_iter().map(SolicitacaoResponse::from).collect())
    }

    /// Solicitações pendentes do tipo atendido pelo prestador logado
    pub async fn listar_disponiveis(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<SolicitacaoResponse>, AppError> {
        user.exigir_prestador()?;

        let tipo = tipo_atendido(user)?;
        let solicitacoes = self.repository.find_disponiveis(tipo.as_str()).await?;

        Ok(solicitacoes
            .into_iter()
            .map(SolicitacaoResponse::from)
            .collect())
    }

    /// Solicitações atribuídas ao prestador logado
    pub async fn listar_atribuidas(
        &self,
        user: &AuthenticatedUser,
        filters: &SolicitacaoFilters,
    ) -> Result<Vec<SolicitacaoResponse>, AppError> {
        user.exigir_prestador()?;

        let solicitacoes = self.repository.find_by_prestador(user.user_id).await?;
        let filtradas = filtrar_por_status(solicitacoes, filters.status.as_deref());

        Ok(filtradas.into_iter().map(SolicitacaoResponse::from).collect())
    }

    /// Contadores do dashboard do papel logado
    pub async fn dashboard(&self, user: &AuthenticatedUser) -> Result<DashboardResponse, AppError> {
        match user.tipo_usuario {
            TipoUsuario::Cliente => {
                let proprias = self.repository.find_by_cliente(user.user_id).await?;
                Ok(calcular_dashboard(&proprias))
            }
            TipoUsuario::Mecanico | TipoUsuario::Guincho => {
                let tipo = tipo_atendido(user)?;
                let mut conjunto = self.repository.find_disponiveis(tipo.as_str()).await?;
                conjunto.extend(self.repository.find_by_prestador(user.user_id).await?);
                Ok(calcular_dashboard(&conjunto))
            }
            TipoUsuario::Seguradora => Err(AppError::Forbidden(
                "Seguradoras não atendem solicitações de serviço".to_string(),
            )),
        }
    }

    /// Aceitar uma solicitação pendente. A reivindicação é condicional no
    /// banco (só um prestador consegue) e dispara o fluxo de pagamento;
    /// se o pagamento falhar o aceite é revertido.
    pub async fn aceitar(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: AceitarSolicitacaoRequest,
    ) -> Result<AceiteResponse, AppError> {
        user.exigir_prestador()?;

        let solicitacao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitação não encontrada".to_string()))?;

        let tipo = solicitacao
            .tipo()
            .ok_or_else(|| AppError::Internal("Tipo de serviço desconhecido".to_string()))?;

        if tipo.papel_prestador() != user.tipo_usuario {
            return Err(AppError::Forbidden(format!(
                "Solicitações de {} não são atendidas pelo papel '{}'",
                tipo.as_str(),
                user.tipo_usuario.as_str()
            )));
        }

        let status = solicitacao
            .status_atual()
            .ok_or_else(|| AppError::Internal("Status desconhecido".to_string()))?;

        if !status.pode_transicionar(StatusSolicitacao::Aceita) {
            return Err(AppError::Conflict(
                "Apenas solicitações pendentes podem ser aceitas".to_string(),
            ));
        }

        if request.valor <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "O valor do serviço deve ser maior que zero".to_string(),
            ));
        }

        // Reivindicação condicional: perde quem chegar depois
        let aceita = self
            .repository
            .aceitar_pendente(id, user.user_id, request.valor)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("Solicitação já foi aceita por outro prestador".to_string())
            })?;

        let prestador = self
            .profiles
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

        let pagamento = match self
            .pagamentos
            .processar(request.valor, tipo.as_str(), id, &prestador)
            .await
        {
            Ok(p) => p,
            Err(e) => {
                // Compensação: o aceite volta para pendente
                if let Err(revert_err) = self.repository.reverter_aceite(id, user.user_id).await {
                    log::error!(
                        "❌ Falha ao reverter aceite da solicitação {}: {}",
                        id,
                        revert_err
                    );
                }
                return Err(e);
            }
        };

        Ok(AceiteResponse {
            solicitacao: SolicitacaoResponse::from(aceita),
            pagamento: PagamentoAceiteResponse {
                payment_intent_id: pagamento.payment_intent_id,
                client_secret: pagamento.client_secret,
                valor: pagamento.divisao.valor,
                taxa_plataforma: pagamento.divisao.taxa_plataforma,
                valor_prestador: pagamento.divisao.valor_prestador,
            },
        })
    }

    /// Recusar uma solicitação pendente (terminal)
    pub async fn recusar(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<SolicitacaoResponse>, AppError> {
        user.exigir_prestador()?;

        let solicitacao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitação não encontrada".to_string()))?;

        let tipo = solicitacao
            .tipo()
            .ok_or_else(|| AppError::Internal("Tipo de serviço desconhecido".to_string()))?;

        if tipo.papel_prestador() != user.tipo_usuario {
            return Err(AppError::Forbidden(
                "Solicitação não é do tipo atendido por este prestador".to_string(),
            ));
        }

        let recusada = self
            .repository
            .atualizar_status(id, StatusSolicitacao::Recusada.as_str(), &["pendente"])
            .await?
            .ok_or_else(|| {
                AppError::Conflict("Apenas solicitações pendentes podem ser recusadas".to_string())
            })?;

        Ok(ApiResponse::success_with_message(
            SolicitacaoResponse::from(recusada),
            "Solicitação recusada".to_string(),
        ))
    }

    /// Prestador inicia o atendimento (aceita → em_andamento)
    pub async fn iniciar(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<SolicitacaoResponse>, AppError> {
        user.exigir_prestador()?;
        self.exigir_atribuicao(user, id).await?;

        let iniciada = self
            .repository
            .atualizar_status(id, StatusSolicitacao::EmAndamento.as_str(), &["aceita"])
            .await?
            .ok_or_else(|| {
                AppError::Conflict(
                    "Apenas solicitações aceitas podem ser iniciadas".to_string(),
                )
            })?;

        Ok(ApiResponse::success_with_message(
            SolicitacaoResponse::from(iniciada),
            "Atendimento iniciado".to_string(),
        ))
    }

    /// Prestador conclui o atendimento
    pub async fn concluir(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<SolicitacaoResponse>, AppError> {
        user.exigir_prestador()?;
        self.exigir_atribuicao(user, id).await?;

        let concluida = self
            .repository
            .atualizar_status(
                id,
                StatusSolicitacao::Concluida.as_str(),
                &["aceita", "em_andamento"],
            )
            .await?
            .ok_or_else(|| {
                AppError::Conflict(
                    "Apenas solicitações em atendimento podem ser concluídas".to_string(),
                )
            })?;

        Ok(ApiResponse::success_with_message(
            SolicitacaoResponse::from(concluida),
            "Solicitação concluída".to_string(),
        ))
    }

    /// Cliente cancela enquanto pendente (terminal)
    pub async fn cancelar(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<ApiResponse<SolicitacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Cliente)?;

        let solicitacao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitação não encontrada".to_string()))?;

        if solicitacao.user_id != user.user_id {
            return Err(AppError::Forbidden(
                "Solicitação não pertence a este usuário".to_string(),
            ));
        }

        let cancelada = self
            .repository
            .atualizar_status(id, StatusSolicitacao::Cancelada.as_str(), &["pendente"])
            .await?
            .ok_or_else(|| {
                AppError::Conflict(
                    "Apenas solicitações pendentes podem ser canceladas".to_string(),
                )
            })?;

        Ok(ApiResponse::success_with_message(
            SolicitacaoResponse::from(cancelada),
            "Solicitação cancelada".to_string(),
        ))
    }

    /// Verificar que a solicitação está atribuída ao prestador logado
    async fn exigir_atribuicao(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        let solicitacao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitação não encontrada".to_string()))?;

        if solicitacao.prestador_id != Some(user.user_id) {
            return Err(AppError::Forbidden(
                "Solicitação não está atribuída a este prestador".to_string(),
            ));
        }

        Ok(())
    }
}

/// Tipo de serviço atendido pelo papel do prestador
fn tipo_atendido(user: &AuthenticatedUser) -> Result<TipoServico, AppError> {
    match user.tipo_usuario {
        TipoUsuario::Mecanico => Ok(TipoServico::Mecanico),
        TipoUsuario::Guincho => Ok(TipoServico::Guincho),
        _ => Err(AppError::Forbidden(
            "Operação permitida apenas para prestadores de serviço".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn solicitacao(status: &str, preco: Option<&str>) -> Solicitacao {
        Solicitacao {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            tipo_servico: "mecanico".to_string(),
            descricao: "Carro não liga".to_string(),
            localizacao: "Av. Paulista, 1000".to_string(),
            status: status.to_string(),
            prestador_id: None,
            preco_estimado: preco.map(|p| Decimal::from_str(p).unwrap()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_filtro_todas_retorna_uniao() {
        let conjunto = vec![
            solicitacao("pendente", None),
            solicitacao("concluida", Some("100.00")),
            solicitacao("cancelada", None),
        ];

        assert_eq!(filtrar_por_status(conjunto.clone(), Some("todas")).len(), 3);
        assert_eq!(filtrar_por_status(conjunto, None).len(), 3);
    }

    #[test]
    fn test_filtro_nomeado_retorna_apenas_exatas() {
        let conjunto = vec![
            solicitacao("pendente", None),
            solicitacao("pendente", None),
            solicitacao("concluida", Some("100.00")),
        ];

        let pendentes = filtrar_por_status(conjunto.clone(), Some("pendente"));
        assert_eq!(pendentes.len(), 2);
        assert!(pendentes.iter().all(|s| s.status == "pendente"));

        // status desconhecido não casa com nada
        assert!(filtrar_por_status(conjunto, Some("inexistente")).is_empty());
    }

    #[test]
    fn test_dashboard_conta_por_status_e_soma_concluidas() {
        let conjunto = vec![
            solicitacao("pendente", None),
            solicitacao("pendente", None),
            solicitacao("aceita", Some("50.00")),
            solicitacao("em_andamento", Some("80.00")),
            solicitacao("concluida", Some("100.00")),
            solicitacao("concluida", Some("250.50")),
            solicitacao("cancelada", None),
        ];

        let dashboard = calcular_dashboard(&conjunto);

        assert_eq!(dashboard.pendentes, 2);
        assert_eq!(dashboard.em_andamento, 2);
        assert_eq!(dashboard.concluidas, 2);
        assert_eq!(dashboard.valor_total, Decimal::from_str("350.50").unwrap());
    }

    #[test]
    fn test_dashboard_vazio() {
        let dashboard = calcular_dashboard(&[]);
        assert_eq!(
            dashboard,
            DashboardResponse {
                pendentes: 0,
                em_andamento: 0,
                concluidas: 0,
                valor_total: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_dashboard_concluida_sem_preco_conta_como_zero() {
        let conjunto = vec![solicitacao("concluida", None)];
        let dashboard = calcular_dashboard(&conjunto);
        assert_eq!(dashboard.concluidas, 1);
        assert_eq!(dashboard.valor_total, Decimal::ZERO);
    }
}

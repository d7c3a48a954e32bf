use sqlx::PgPool;
use validator::Validate;

use crate::dto::candidatura_dto::CreateCandidaturaRequest;
use crate::dto::ApiResponse;
use crate::models::candidatura::Candidatura;
use crate::models::solicitacao::TipoServico;
use crate::repositories::candidatura_repository::CandidaturaRepository;
use crate::utils::errors::AppError;

pub struct CandidaturaController {
    repository: CandidaturaRepository,
}

impl CandidaturaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CandidaturaRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCandidaturaRequest,
    ) -> Result<ApiResponse<Candidatura>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let tipo = TipoServico::parse(&request.tipo_servico).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Tipo de serviço inválido: '{}'",
                request.tipo_servico
            ))
        })?;

        let candidatura = self
            .repository
            .create(
                request.nome,
                request.email.trim().to_lowercase(),
                request.telefone,
                tipo.as_str().to_string(),
                request.cidade,
                request.descricao,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            candidatura,
            "Candidatura recebida. Entraremos em contato".to_string(),
        ))
    }
}

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cotacao_dto::{
    CotacaoResponse, CreateCotacaoRequest, UpdateStatusCotacaoRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::cotacao::StatusCotacao;
use crate::models::profile::TipoUsuario;
use crate::repositories::cotacao_repository::CotacaoRepository;
use crate::utils::errors::AppError;

pub struct CotacaoController {
    repository: CotacaoRepository,
}

impl CotacaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CotacaoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateCotacaoRequest,
    ) -> Result<ApiResponse<CotacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if request.valor <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "O valor da cotação deve ser maior que zero".to_string(),
            ));
        }

        let cotacao = self
            .repository
            .create(
                user.user_id,
                request.email_cliente.trim().to_lowercase(),
                request.modelo_veiculo,
                request.valor,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CotacaoResponse::from(cotacao),
            "Cotação registrada com sucesso".to_string(),
        ))
    }

    pub async fn listar(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<CotacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        let cotacoes = self.repository.find_by_seguradora(user.user_id).await?;

        Ok(cotacoes.into_iter().map(CotacaoResponse::from).collect())
    }

    pub async fn atualizar_status(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateStatusCotacaoRequest,
    ) -> Result<ApiResponse<CotacaoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        let status = StatusCotacao::parse(&request.status).ok_or_else(|| {
            AppError::ValidationError(format!("Status de cotação inválido: '{}'", request.status))
        })?;

        let cotacao = self
            .repository
            .atualizar_status(id, user.user_id, status.as_str())
            .await?;

        Ok(ApiResponse::success_with_message(
            CotacaoResponse::from(cotacao),
            "Status da cotação atualizado".to_string(),
        ))
    }
}

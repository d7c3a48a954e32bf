use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::plano_dto::{CreatePlanoRequest, PlanoResponse, UpdatePlanoRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::TipoUsuario;
use crate::repositories::plano_repository::PlanoRepository;
use crate::utils::errors::AppError;

pub struct PlanoController {
    repository: PlanoRepository,
}

impl PlanoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PlanoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreatePlanoRequest,
    ) -> Result<ApiResponse<PlanoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if request.preco_mensal <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "O preço mensal deve ser maior que zero".to_string(),
            ));
        }

        let plano = self
            .repository
            .create(
                user.user_id,
                request.nome,
                request.descricao,
                request.preco_mensal,
                request.cobertura,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PlanoResponse::from(plano),
            "Plano criado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<PlanoResponse, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        let plano = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plano não encontrado".to_string()))?;

        if plano.seguradora_id != user.user_id {
            return Err(AppError::Forbidden(
                "Plano não pertence a esta seguradora".to_string(),
            ));
        }

        Ok(PlanoResponse::from(plano))
    }

    pub async fn listar(&self, user: &AuthenticatedUser) -> Result<Vec<PlanoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        let planos = self.repository.find_by_seguradora(user.user_id).await?;

        Ok(planos.into_iter().map(PlanoResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdatePlanoRequest,
    ) -> Result<ApiResponse<PlanoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let plano = self
            .repository
            .update(
                id,
                user.user_id,
                request.nome,
                request.descricao,
                request.preco_mensal,
                request.cobertura,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            PlanoResponse::from(plano),
            "Plano atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        user.exigir_papel(TipoUsuario::Seguradora)?;
        self.repository.delete(id, user.user_id).await?;
        Ok(())
    }
}

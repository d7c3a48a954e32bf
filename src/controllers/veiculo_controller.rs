use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::TipoUsuario;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validar_placa;

pub struct VeiculoController {
    repository: VeiculoRepository,
}

impl VeiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VeiculoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateVeiculoRequest,
    ) -> Result<ApiResponse<VeiculoResponse>, AppError> {
        user.exigir_papel(TipoUsuario::Cliente)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let placa = validar_placa(&request.placa)?;

        // Verificar que a placa não existe para este usuário
        if self.repository.placa_exists(&placa, user.user_id).await? {
            return Err(AppError::Conflict(
                "Placa já cadastrada para este usuário".to_string(),
            ));
        }

        let veiculo = self
            .repository
            .create(
                user.user_id,
                placa,
                request.marca,
                request.modelo,
                request.ano,
                request.cor,
                request.quilometragem.unwrap_or(Decimal::ZERO),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VeiculoResponse::from(veiculo),
            "Veículo cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<VeiculoResponse, AppError> {
        let veiculo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        // Verificar que pertence ao usuário
        if veiculo.user_id != user.user_id {
            return Err(AppError::Forbidden(
                "Veículo não pertence a este usuário".to_string(),
            ));
        }

        Ok(VeiculoResponse::from(veiculo))
    }

    pub async fn list_by_user(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<VeiculoResponse>, AppError> {
        let veiculos = self.repository.find_by_user(user.user_id).await?;

        Ok(veiculos.into_iter().map(VeiculoResponse::from).collect())
    }

    pub async fn update(
        &self,
        user: &AuthenticatedUser,
        id: Uuid,
        request: UpdateVeiculoRequest,
    ) -> Result<ApiResponse<VeiculoResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let veiculo = self
            .repository
            .update(
                id,
                user.user_id,
                request.marca,
                request.modelo,
                request.ano,
                request.cor,
                request.quilometragem,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VeiculoResponse::from(veiculo),
            "Veículo atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, user.user_id).await?;
        Ok(())
    }
}

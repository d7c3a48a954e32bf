use sqlx::PgPool;
use validator::Validate;

use crate::dto::suporte_dto::CreateSuporteRequest;
use crate::dto::ApiResponse;
use crate::models::suporte::MensagemSuporte;
use crate::repositories::suporte_repository::SuporteRepository;
use crate::utils::errors::AppError;

pub struct SuporteController {
    repository: SuporteRepository,
}

impl SuporteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SuporteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateSuporteRequest,
    ) -> Result<ApiResponse<MensagemSuporte>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let registro = self
            .repository
            .create(
                request.nome,
                request.email.trim().to_lowercase(),
                request.assunto,
                request.mensagem,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            registro,
            "Mensagem enviada. Retornaremos em breve".to_string(),
        ))
    }
}

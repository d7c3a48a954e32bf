use sqlx::PgPool;

use crate::clients::stripe_client::StripeClient;
use crate::config::environment::EnvironmentConfig;
use crate::dto::pagamento_dto::{CreatePaymentRequest, PagamentoResponse, PaymentResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::pagamento_repository::PagamentoRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::services::pagamento_service::PagamentoService;
use crate::utils::errors::AppError;

pub struct PagamentoController {
    profiles: ProfileRepository,
    repository: PagamentoRepository,
    service: PagamentoService,
}

impl PagamentoController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        let client = StripeClient::new(config.stripe_secret_key.clone());
        Self {
            profiles: ProfileRepository::new(pool.clone()),
            repository: PagamentoRepository::new(pool.clone()),
            service: PagamentoService::new(pool, client, config.taxa_plataforma),
        }
    }

    /// Fluxo direto do endpoint POST /api/payment: intent, divisão,
    /// registro e repasse para o prestador informado.
    pub async fn processar(
        &self,
        request: CreatePaymentRequest,
    ) -> Result<PaymentResponse, AppError> {
        let tipo = request.service_type.as_str();
        if tipo != "mecanico" && tipo != "guincho" {
            return Err(AppError::ValidationError(format!(
                "Tipo de serviço inválido: '{}'",
                tipo
            )));
        }

        let prestador = self
            .profiles
            .find_by_id(request.provider_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prestador não encontrado".to_string()))?;

        let processado = self
            .service
            .processar(request.amount, tipo, request.service_id, &prestador)
            .await?;

        Ok(PaymentResponse {
            client_secret: processado.client_secret,
            payment_intent_id: processado.payment_intent_id,
        })
    }

    /// Pagamentos recebidos pelo prestador logado
    pub async fn listar_do_prestador(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<PagamentoResponse>, AppError> {
        user.exigir_prestador()?;

        let pagamentos = self.repository.find_by_prestador(user.user_id).await?;

        Ok(pagamentos.into_iter().map(PagamentoResponse::from).collect())
    }
}

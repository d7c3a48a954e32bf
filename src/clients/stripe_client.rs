//! Cliente HTTP do provedor de pagamento
//!
//! Este módulo fala com a API do Stripe: criação de payment intents
//! e repasses (transfers) para a conta do prestador. Os valores são
//! sempre enviados em centavos.

use serde::Deserialize;

use crate::utils::errors::{AppError, AppResult};

const STRIPE_API_URL: &str = "https://api.stripe.com";
const MOEDA: &str = "brl";

/// Dados do payment intent criado
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentData {
    pub id: String,
    pub client_secret: String,
}

/// Dados do repasse criado
#[derive(Debug, Clone, Deserialize)]
pub struct TransferData {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

pub struct StripeClient {
    secret_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl StripeClient {
    pub fn new(secret_key: String) -> Self {
        Self::with_base_url(secret_key, STRIPE_API_URL.to_string())
    }

    /// Construtor com URL configurável (testes apontam para um mock server)
    pub fn with_base_url(secret_key: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            secret_key,
            base_url,
            client,
        }
    }

    /// Criar um payment intent para o valor em centavos
    pub async fn criar_payment_intent(
        &self,
        valor_centavos: i64,
        tipo_servico: &str,
        servico_id: &str,
    ) -> AppResult<PaymentIntentData> {
        log::info!(
            "💳 Criando payment intent: {} centavos ({})",
            valor_centavos,
            tipo_servico
        );

        let url = format!("{}/v1/payment_intents", self.base_url);
        let valor = valor_centavos.to_string();

        let params = [
            ("amount", valor.as_str()),
            ("currency", MOEDA),
            ("automatic_payment_methods[enabled]", "true"),
            ("metadata[tipo_servico]", tipo_servico),
            ("metadata[servico_id]", servico_id),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Erro ao criar payment intent: {}", e)))?;

        Self::parse_response(response, "payment intent").await
    }

    /// Repassar o valor do prestador para a conta dele, agrupado pelo intent
    pub async fn criar_transferencia(
        &self,
        valor_centavos: i64,
        conta_destino: &str,
        payment_intent_id: &str,
    ) -> AppResult<TransferData> {
        log::info!(
            "💸 Criando repasse de {} centavos para {}",
            valor_centavos,
            conta_destino
        );

        let url = format!("{}/v1/transfers", self.base_url);
        let valor = valor_centavos.to_string();

        let params = [
            ("amount", valor.as_str()),
            ("currency", MOEDA),
            ("destination", conta_destino),
            ("transfer_group", payment_intent_id),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Erro ao criar repasse: {}", e)))?;

        Self::parse_response(response, "repasse").await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        operacao: &str,
    ) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let mensagem = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or(body);
            log::error!("❌ Stripe recusou {} ({}): {}", operacao, status, mensagem);
            return Err(AppError::ExternalApi(format!(
                "Provedor de pagamento recusou {}: {}",
                operacao, mensagem
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Resposta inválida do provedor: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_criar_payment_intent_sucesso() {
        let mock_server = MockServer::start().await;

        let mock_response = serde_json::json!({
            "id": "pi_123",
            "client_secret": "pi_123_secret_abc",
            "amount": 10000,
            "currency": "brl"
        });

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(body_string_contains("amount=10000"))
            .and(body_string_contains("currency=brl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let client = StripeClient::with_base_url("sk_test_x".to_string(), mock_server.uri());
        let intent = client
            .criar_payment_intent(10000, "mecanico", "abc-123")
            .await
            .unwrap();

        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret, "pi_123_secret_abc");
    }

    #[tokio::test]
    async fn test_criar_transferencia_sucesso() {
        let mock_server = MockServer::start().await;

        let mock_response = serde_json::json!({
            "id": "tr_456",
            "amount": 9000,
            "destination": "acct_789"
        });

        Mock::given(method("POST"))
            .and(path("/v1/transfers"))
            .and(body_string_contains("amount=9000"))
            .and(body_string_contains("destination=acct_789"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let client = StripeClient::with_base_url("sk_test_x".to_string(), mock_server.uri());
        let transfer = client
            .criar_transferencia(9000, "acct_789", "pi_123")
            .await
            .unwrap();

        assert_eq!(transfer.id, "tr_456");
    }

    #[tokio::test]
    async fn test_erro_do_provedor_vira_external_api() {
        let mock_server = MockServer::start().await;

        let mock_response = serde_json::json!({
            "error": { "message": "Amount must be at least 50 cents" }
        });

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&mock_response))
            .mount(&mock_server)
            .await;

        let client = StripeClient::with_base_url("sk_test_x".to_string(), mock_server.uri());
        let erro = client
            .criar_payment_intent(1, "guincho", "abc")
            .await
            .unwrap_err();

        match erro {
            AppError::ExternalApi(msg) => assert!(msg.contains("Amount must be at least")),
            outro => panic!("esperava ExternalApi, veio {:?}", outro),
        }
    }
}

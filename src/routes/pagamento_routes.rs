use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::pagamento_controller::PagamentoController;
use crate::dto::pagamento_dto::{CreatePaymentRequest, PagamentoResponse, PaymentResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pagamento_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pagamentos))
        .route("/config", get(payment_config))
}

/// Chaves públicas consumidas pelo frontend (checkout e mapas)
async fn payment_config(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "publishableKey": state.config.stripe_publishable_key,
        "mapsApiKey": state.config.maps_api_key,
    }))
}

/// POST /api/payment - contrato legado do frontend: qualquer falha do
/// fluxo responde 500 com `{error}`.
pub fn create_payment_route() -> Router<AppState> {
    Router::new().route("/api/payment", post(processar_payment))
}

async fn processar_payment(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<PaymentResponse>, (StatusCode, Json<serde_json::Value>)> {
    let controller = PagamentoController::new(state.pool.clone(), &state.config);

    match controller.processar(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Erro no fluxo de pagamento: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ))
        }
    }
}

async fn list_pagamentos(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<PagamentoResponse>>, AppError> {
    let controller = PagamentoController::new(state.pool.clone(), &state.config);
    let response = controller.listar_do_prestador(&user).await?;
    Ok(Json(response))
}

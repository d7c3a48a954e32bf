use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::plano_controller::PlanoController;
use crate::dto::plano_dto::{CreatePlanoRequest, PlanoResponse, UpdatePlanoRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_plano_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_plano))
        .route("/", get(list_planos))
        .route("/:id", get(get_plano))
        .route("/:id", put(update_plano))
        .route("/:id", delete(delete_plano))
}

async fn create_plano(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreatePlanoRequest>,
) -> Result<Json<ApiResponse<PlanoResponse>>, AppError> {
    let controller = PlanoController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok(Json(response))
}

async fn get_plano(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanoResponse>, AppError> {
    let controller = PlanoController::new(state.pool.clone());
    let response = controller.get_by_id(&user, id).await?;
    Ok(Json(response))
}

async fn list_planos(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<PlanoResponse>>, AppError> {
    let controller = PlanoController::new(state.pool.clone());
    let response = controller.listar(&user).await?;
    Ok(Json(response))
}

async fn update_plano(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePlanoRequest>,
) -> Result<Json<ApiResponse<PlanoResponse>>, AppError> {
    let controller = PlanoController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_plano(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PlanoController::new(state.pool.clone());
    controller.delete(&user, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Plano excluído com sucesso"
    })))
}

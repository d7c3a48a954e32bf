use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::solicitacao_controller::SolicitacaoController;
use crate::dto::solicitacao_dto::{
    AceitarSolicitacaoRequest, AceiteResponse, CreateSolicitacaoRequest, DashboardResponse,
    SolicitacaoFilters, SolicitacaoResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_solicitacao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_solicitacao))
        .route("/", get(list_do_cliente))
        .route("/disponiveis", get(list_disponiveis))
        .route("/atribuidas", get(list_atribuidas))
        .route("/dashboard", get(dashboard))
        .route("/:id", get(get_solicitacao))
        .route("/:id/aceitar", post(aceitar))
        .route("/:id/recusar", post(recusar))
        .route("/:id/iniciar", post(iniciar))
        .route("/:id/concluir", post(concluir))
        .route("/:id/cancelar", post(cancelar))
}

fn controller(state: &AppState) -> SolicitacaoController {
    SolicitacaoController::new(state.pool.clone(), &state.config)
}

async fn create_solicitacao(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateSolicitacaoRequest>,
) -> Result<Json<ApiResponse<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).create(&user, request).await?;
    Ok(Json(response))
}

async fn get_solicitacao(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SolicitacaoResponse>, AppError> {
    let response = controller(&state).get_by_id(&user, id).await?;
    Ok(Json(response))
}

async fn list_do_cliente(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(filters): Query<SolicitacaoFilters>,
) -> Result<Json<Vec<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).listar_do_cliente(&user, &filters).await?;
    Ok(Json(response))
}

async fn list_disponiveis(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).listar_disponiveis(&user).await?;
    Ok(Json(response))
}

async fn list_atribuidas(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(filters): Query<SolicitacaoFilters>,
) -> Result<Json<Vec<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).listar_atribuidas(&user, &filters).await?;
    Ok(Json(response))
}

async fn dashboard(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<DashboardResponse>, AppError> {
    let response = controller(&state).dashboard(&user).await?;
    Ok(Json(response))
}

async fn aceitar(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<AceitarSolicitacaoRequest>,
) -> Result<Json<AceiteResponse>, AppError> {
    let response = controller(&state).aceitar(&user, id, request).await?;
    Ok(Json(response))
}

async fn recusar(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).recusar(&user, id).await?;
    Ok(Json(response))
}

async fn iniciar(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).iniciar(&user, id).await?;
    Ok(Json(response))
}

async fn concluir(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).concluir(&user, id).await?;
    Ok(Json(response))
}

async fn cancelar(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SolicitacaoResponse>>, AppError> {
    let response = controller(&state).cancelar(&user, id).await?;
    Ok(Json(response))
}

use axum::{
    extract::State,
    middleware,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, ResetPasswordRequest,
    UpdatePasswordRequest, UpdateProfileRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router(rate_limit: RateLimitState) -> Router<AppState> {
    // Login, cadastro e reset passam pelo rate limiting por IP
    let sensiveis = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/reset-password", post(reset_password))
        .route_layer(middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ));

    Router::new()
        .merge(sensiveis)
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/update-password", post(update_password))
        .route("/perfil", put(update_perfil))
}

fn controller(state: &AppState) -> AuthController {
    AuthController::new(state.pool.clone(), JwtConfig::from(&state.config))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = controller(&state).register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

/// Sessões são JWT stateless: o logout só confirma para o frontend
/// descartar o token.
async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::success_with_message(
        (),
        "Sessão encerrada".to_string(),
    ))
}

async fn session(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let response = controller(&state).session(&user).await?;
    Ok(Json(response))
}

async fn update_perfil(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let response = controller(&state).update_perfil(&user, request).await?;
    Ok(Json(response))
}

async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = controller(&state).reset_password(request).await?;
    Ok(Json(response))
}

async fn update_password(
    State(state): State<AppState>,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = controller(&state).update_password(request).await?;
    Ok(Json(response))
}

//! Middleware de autenticação JWT
//!
//! Este módulo extrai o token Bearer, valida o JWT e carrega o perfil
//! do usuário autenticado. `AuthenticatedUser` entra direto como
//! extractor nos handlers protegidos.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use uuid::Uuid;

use crate::{
    models::profile::TipoUsuario,
    repositories::profile_repository::ProfileRepository,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, verify_token, JwtConfig, FINALIDADE_SESSAO},
};

/// Usuário autenticado injetado nas requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub tipo_usuario: TipoUsuario,
}

impl AuthenticatedUser {
    /// Exigir um papel específico para a operação
    pub fn exigir_papel(&self, papel: TipoUsuario) -> Result<(), AppError> {
        if self.tipo_usuario != papel {
            return Err(AppError::Forbidden(format!(
                "Operação permitida apenas para o papel '{}'",
                papel.as_str()
            )));
        }
        Ok(())
    }

    /// Exigir que o usuário seja prestador (mecânico ou guincho)
    pub fn exigir_prestador(&self) -> Result<(), AppError> {
        if !self.tipo_usuario.e_prestador() {
            return Err(AppError::Forbidden(
                "Operação permitida apenas para prestadores de serviço".to_string(),
            ));
        }
        Ok(())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extrair token do header Authorization
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

        let token = extract_token_from_header(auth_header)?;

        // Decodificar e validar JWT
        let jwt_config = JwtConfig::from(&state.config);
        let claims = verify_token(token, &jwt_config)?;

        if claims.finalidade != FINALIDADE_SESSAO {
            return Err(AppError::Unauthorized(
                "Token não é de sessão".to_string(),
            ));
        }

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("ID de usuário inválido".to_string()))?;

        // Verificar que o usuário ainda existe no banco
        let repository = ProfileRepository::new(state.pool.clone());
        let profile = repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

        let tipo_usuario = profile
            .tipo()
            .ok_or_else(|| AppError::Unauthorized("Papel de usuário inválido".to_string()))?;

        Ok(AuthenticatedUser {
            user_id: profile.id,
            tipo_usuario,
        })
    }
}

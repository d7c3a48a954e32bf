use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, ResetPasswordRequest,
    UpdatePasswordRequest, UpdateProfileRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::profile::{Profile, TipoUsuario};
use crate::repositories::profile_repository::ProfileRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{
    generate_reset_token, generate_token, verify_token, JwtConfig, FINALIDADE_RESET,
};
use crate::utils::validation::{validar_email, validar_nao_vazio};

pub struct AuthController {
    repository: ProfileRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: ProfileRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<LoginResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // O papel é fixado no cadastro e não muda depois
        let tipo = TipoUsuario::parse(&request.tipo_usuario).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Tipo de usuário inválido: '{}'",
                request.tipo_usuario
            ))
        })?;

        let email = request.email.trim().to_lowercase();

        // Verificar que o e-mail não existe (nenhuma linha é criada em caso de duplicata)
        if self.repository.email_exists(&email).await? {
            return Err(AppError::Conflict("E-mail já cadastrado".to_string()));
        }

        // Hash da senha
        let senha_hash = hash(&request.senha, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar hash da senha: {}", e)))?;

        let profile = Profile {
            id: Uuid::new_v4(),
            email,
            nome: request.nome,
            tipo_usuario: tipo.as_str().to_string(),
            telefone: request.telefone,
            conta_pagamento_id: request.conta_pagamento_id,
            senha_hash,
            created_at: Utc::now(),
        };

        let saved = self.repository.create(&profile).await?;

        // Sessão já sai do cadastro, com o redirect do papel
        let token = generate_token(saved.id, tipo.as_str(), &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            saved.id.to_string(),
            saved.nome,
            tipo.as_str().to_string(),
            tipo.dashboard_path(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validar_nao_vazio(&request.email, "E-mail")?;
        validar_nao_vazio(&request.senha, "Senha")?;

        let profile = self
            .repository
            .find_by_email(request.email.trim().to_lowercase().as_str())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

        let valid = verify(&request.senha, &profile.senha_hash)
            .map_err(|e| AppError::Internal(format!("Erro ao verificar senha: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let tipo = profile
            .tipo()
            .ok_or_else(|| AppError::Internal("Papel de usuário inválido".to_string()))?;

        let token = generate_token(profile.id, tipo.as_str(), &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            profile.id.to_string(),
            profile.nome,
            tipo.as_str().to_string(),
            tipo.dashboard_path(),
        ))
    }

    /// Perfil da sessão atual (contexto de sessão do frontend)
    pub async fn session(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<ApiResponse<ProfileResponse>, AppError> {
        let profile = self
            .repository
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

        Ok(ApiResponse::success(ProfileResponse::from(profile)))
    }

    pub async fn update_perfil(
        &self,
        user: &AuthenticatedUser,
        request: UpdateProfileRequest,
    ) -> Result<ApiResponse<ProfileResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let profile = self
            .repository
            .update_perfil(
                user.user_id,
                request.nome,
                request.telefone,
                request.conta_pagamento_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ProfileResponse::from(profile),
            "Perfil atualizado com sucesso".to_string(),
        ))
    }

    /// Solicitar redefinição de senha. A resposta é sempre genérica para
    /// não revelar quais e-mails estão cadastrados; a entrega do token é
    /// responsabilidade do serviço de e-mail externo.
    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        validar_email(&request.email)?;

        if let Some(profile) = self.repository.find_by_email(request.email.trim()).await? {
            let token = generate_reset_token(profile.id, &profile.tipo_usuario, &self.jwt_config)?;
            log::info!(
                "🔑 Token de redefinição gerado para o usuário {} (envio externo)",
                profile.id
            );
            tracing::debug!(token = %token, "token de redefinição emitido");
        }

        Ok(ApiResponse::success_with_message(
            (),
            "Se o e-mail estiver cadastrado, enviaremos as instruções de redefinição".to_string(),
        ))
    }

    pub async fn update_password(
        &self,
        request: UpdatePasswordRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let claims = verify_token(&request.token, &self.jwt_config)?;

        if claims.finalidade != FINALIDADE_RESET {
            return Err(AppError::Unauthorized(
                "Token não é de redefinição de senha".to_string(),
            ));
        }

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

        let senha_hash = hash(&request.nova_senha, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar hash da senha: {}", e)))?;

        self.repository.update_senha(user_id, &senha_hash).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Senha atualizada com sucesso".to_string(),
        ))
    }
}

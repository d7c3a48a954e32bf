use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::profile::Profile;

// Request de cadastro - o papel é fixado aqui e não muda depois
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub senha: String,

    pub tipo_usuario: String,

    pub telefone: Option<String>,

    // Conta no provedor de pagamento (prestadores)
    pub conta_pagamento_id: Option<String>,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub user_id: Option<String>,
    pub nome: Option<String>,
    pub tipo_usuario: Option<String>,
    // Rota do dashboard do papel, usada pelo frontend para redirecionar
    pub redirect: Option<String>,
}

impl LoginResponse {
    pub fn success(
        token: String,
        user_id: String,
        nome: String,
        tipo_usuario: String,
        redirect: String,
    ) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            user_id: Some(user_id),
            nome: Some(nome),
            tipo_usuario: Some(tipo_usuario),
            redirect: Some(redirect),
        }
    }
}

// Response de perfil (sem senha)
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub nome: String,
    pub tipo_usuario: String,
    pub telefone: Option<String>,
    pub conta_pagamento_id: Option<String>,
    pub redirect: String,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        let redirect = profile
            .tipo()
            .map(|t| t.dashboard_path())
            .unwrap_or_else(|| "/login".to_string());

        Self {
            id: profile.id,
            email: profile.email,
            nome: profile.nome,
            tipo_usuario: profile.tipo_usuario,
            telefone: profile.telefone,
            conta_pagamento_id: profile.conta_pagamento_id,
            redirect,
            created_at: profile.created_at,
        }
    }
}

// Atualização de perfil (papel não é alterável)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: Option<String>,

    pub telefone: Option<String>,

    pub conta_pagamento_id: Option<String>,
}

// Redefinição de senha
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    pub token: String,

    #[validate(length(min = 6, max = 100))]
    pub nova_senha: String,
}

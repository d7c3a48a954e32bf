//! Utilidades JWT
//!
//! Este módulo contém as funções helper para emissão e verificação
//! de tokens JWT de sessão e de redefinição de senha.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Finalidade de um token de sessão
pub const FINALIDADE_SESSAO: &str = "sessao";
/// Finalidade de um token de redefinição de senha
pub const FINALIDADE_RESET: &str = "reset";

/// Tokens de reset expiram em 30 minutos, independente do JWT_EXPIRATION
const RESET_EXPIRATION_SECS: i64 = 30 * 60;

/// Claims do token JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,          // user_id
    pub tipo_usuario: String, // papel do usuário (cliente/mecanico/guincho/seguradora)
    pub finalidade: String,   // sessao | reset
    pub exp: usize,           // expiration timestamp
    pub iat: usize,           // issued at timestamp
}

/// Configuração de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Gerar token JWT de sessão para um usuário
pub fn generate_token(
    user_id: Uuid,
    tipo_usuario: &str,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        tipo_usuario: tipo_usuario.to_string(),
        finalidade: FINALIDADE_SESSAO.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Erro gerando token: {}", e)))
}

/// Gerar token de redefinição de senha (curta duração)
pub fn generate_reset_token(
    user_id: Uuid,
    tipo_usuario: &str,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(RESET_EXPIRATION_SECS);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        tipo_usuario: tipo_usuario.to_string(),
        finalidade: FINALIDADE_RESET.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Erro gerando token de reset: {}", e)))
}

/// Verificar e decodificar token JWT
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extrair token do header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization deve começar com 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token não pode estar vazio".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "segredo-de-teste".to_string(),
            expiration: 3600,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = generate_token(user_id, "mecanico", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.tipo_usuario, "mecanico");
        assert_eq!(claims.finalidade, FINALIDADE_SESSAO);
    }

    #[test]
    fn test_reset_token_tem_finalidade_propria() {
        let config = test_config();
        let token = generate_reset_token(Uuid::new_v4(), "cliente", &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.finalidade, FINALIDADE_RESET);
    }

    #[test]
    fn test_token_com_segredo_errado_rejeitado() {
        let config = test_config();
        let outra = JwtConfig {
            secret: "outro-segredo".to_string(),
            expiration: 3600,
        };

        let token = generate_token(Uuid::new_v4(), "cliente", &config).unwrap();
        assert!(verify_token(&token, &outra).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}

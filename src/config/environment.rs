//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do ambiente e as credenciais
//! dos provedores externos (banco, pagamento, mapas).

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Percentual padrão retido pela plataforma em cada serviço aceito (10%)
pub const TAXA_PLATAFORMA_PADRAO: &str = "0.10";

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    // Provedor de pagamento
    pub stripe_secret_key: String,
    pub stripe_publishable_key: String,
    pub taxa_plataforma: Decimal,
    // Chave de mapas repassada ao frontend
    pub maps_api_key: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            rate_limit_requests: env::var("RATE_LIMIT_REQUESTS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .expect("RATE_LIMIT_REQUESTS must be a valid number"),
            rate_limit_window: env::var("RATE_LIMIT_WINDOW")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .expect("RATE_LIMIT_WINDOW must be a valid number"),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .expect("STRIPE_SECRET_KEY must be set"),
            stripe_publishable_key: env::var("STRIPE_PUBLISHABLE_KEY")
                .expect("STRIPE_PUBLISHABLE_KEY must be set"),
            taxa_plataforma: Decimal::from_str(
                &env::var("TAXA_PLATAFORMA")
                    .unwrap_or_else(|_| TAXA_PLATAFORMA_PADRAO.to_string()),
            )
            .expect("TAXA_PLATAFORMA must be a valid decimal"),
            maps_api_key: env::var("MAPS_API_KEY").ok(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obter a URL do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

mod clients;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use middleware::rate_limit::RateLimitState;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sos_mecanicos_api=debug,tower_http=info".into()),
        )
        .init();

    info!("🔧 SOS Mecânicos - API do marketplace");
    info!("=====================================");

    // Inicializar banco de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Criar router da API
    let config = EnvironmentConfig::default();
    let rate_limit = RateLimitState::new(&config);
    let app_state = AppState::new(pool, config.clone());

    // Em produção o CORS restringe às origens configuradas
    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(rate_limit))
        .nest("/api/veiculo", routes::veiculo_routes::create_veiculo_router())
        .nest(
            "/api/solicitacao",
            routes::solicitacao_routes::create_solicitacao_router(),
        )
        .nest("/api/cotacao", routes::cotacao_routes::create_cotacao_router())
        .nest("/api/plano", routes::plano_routes::create_plano_router())
        .nest(
            "/api/pagamento",
            routes::pagamento_routes::create_pagamento_router(),
        )
        .merge(routes::pagamento_routes::create_payment_route())
        .nest("/api/suporte", routes::suporte_routes::create_suporte_router())
        .nest(
            "/api/parceiro",
            routes::candidatura_routes::create_candidatura_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Endereço do servidor
    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /test - Endpoint de teste");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Cadastro (papel fixo)");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/session - Perfil da sessão");
    info!("   POST /api/auth/reset-password - Solicitar redefinição");
    info!("   POST /api/auth/update-password - Redefinir senha");
    info!("   PUT  /api/auth/perfil - Atualizar perfil");
    info!("🚗 Veículos (cliente):");
    info!("   POST /api/veiculo - Cadastrar veículo");
    info!("   GET  /api/veiculo - Listar veículos");
    info!("   GET  /api/veiculo/:id - Obter veículo");
    info!("   PUT  /api/veiculo/:id - Atualizar veículo");
    info!("   DELETE /api/veiculo/:id - Excluir veículo");
    info!("🛠 Solicitações:");
    info!("   POST /api/solicitacao - Abrir solicitação (cliente)");
    info!("   GET  /api/solicitacao?status= - Minhas solicitações (cliente)");
    info!("   GET  /api/solicitacao/disponiveis - Pendentes do meu tipo (prestador)");
    info!("   GET  /api/solicitacao/atribuidas?status= - Atribuídas a mim (prestador)");
    info!("   GET  /api/solicitacao/dashboard - Contadores do papel");
    info!("   POST /api/solicitacao/:id/aceitar - Aceitar + pagamento (prestador)");
    info!("   POST /api/solicitacao/:id/recusar - Recusar (prestador)");
    info!("   POST /api/solicitacao/:id/iniciar - Iniciar atendimento (prestador)");
    info!("   POST /api/solicitacao/:id/concluir - Concluir (prestador)");
    info!("   POST /api/solicitacao/:id/cancelar - Cancelar (cliente)");
    info!("🛡 Seguradora:");
    info!("   POST /api/cotacao - Registrar cotação");
    info!("   GET  /api/cotacao - Listar cotações");
    info!("   PUT  /api/cotacao/:id/status - Atualizar status");
    info!("   POST /api/plano - Criar plano");
    info!("   GET  /api/plano - Listar planos");
    info!("💳 Pagamentos:");
    info!("   POST /api/payment - Criar intent + repasse (contrato legado)");
    info!("   GET  /api/pagamento - Pagamentos do prestador");
    info!("   GET  /api/pagamento/config - Chaves públicas do frontend");
    info!("📨 Público:");
    info!("   POST /api/suporte - Mensagem de contato");
    info!("   POST /api/parceiro/candidatura - Candidatura de parceiro");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Endpoint de teste simples
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API SOS Mecânicos funcionando corretamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}

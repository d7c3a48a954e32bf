//! Controllers do sistema
//!
//! Regras de negócio de cada recurso: validação, checagem de papel,
//! transições de status e orquestração de pagamento.

pub mod auth_controller;
pub mod candidatura_controller;
pub mod cotacao_controller;
pub mod pagamento_controller;
pub mod plano_controller;
pub mod solicitacao_controller;
pub mod suporte_controller;
pub mod veiculo_controller;

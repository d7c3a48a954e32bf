//! Services module
//!
//! Este módulo contém a lógica de negócio que envolve múltiplos
//! modelos ou integrações externas.

pub mod pagamento_service;

pub use pagamento_service::*;

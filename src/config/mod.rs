//! Configuração do projeto
//!
//! Este módulo contém a configuração de variáveis de ambiente
//! e outras configurações do sistema.

pub mod environment;

pub use environment::*;

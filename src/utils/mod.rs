//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros, validação,
//! JWT e outras funcionalidades comuns.

pub mod errors;
pub mod jwt;
pub mod validation;

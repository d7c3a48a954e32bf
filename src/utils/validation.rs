//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de dados
//! específicos do domínio (placas, e-mail).

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::AppError;

lazy_static! {
    // Placa brasileira: formato antigo ABC1234 (com ou sem hífen) ou Mercosul ABC1D23
    static ref PLACA_ANTIGA: Regex = Regex::new(r"^[A-Z]{3}-?[0-9]{4}$").unwrap();
    static ref PLACA_MERCOSUL: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").unwrap();
}

/// Validar e normalizar uma placa brasileira (maiúsculas, sem hífen)
pub fn validar_placa(placa: &str) -> Result<String, AppError> {
    let normalizada = placa.trim().to_uppercase();

    if PLACA_ANTIGA.is_match(&normalizada) {
        return Ok(normalizada.replace('-', ""));
    }
    if PLACA_MERCOSUL.is_match(&normalizada) {
        return Ok(normalizada);
    }

    Err(AppError::ValidationError(format!(
        "Placa inválida: '{}'. Use o formato ABC1234 ou ABC1D23",
        placa.trim()
    )))
}

/// Validação simples de formato de e-mail
pub fn validar_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err(AppError::ValidationError("E-mail inválido".to_string()));
    }
    Ok(())
}

/// Validar que um string não está vazio
pub fn validar_nao_vazio(valor: &str, campo: &str) -> Result<(), AppError> {
    if valor.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{} é obrigatório(a)", campo)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placa_formato_antigo() {
        assert_eq!(validar_placa("abc1234").unwrap(), "ABC1234");
        assert_eq!(validar_placa("ABC-1234").unwrap(), "ABC1234");
    }

    #[test]
    fn test_placa_mercosul() {
        assert_eq!(validar_placa("abc1d23").unwrap(), "ABC1D23");
        assert_eq!(validar_placa(" BRA2E19 ").unwrap(), "BRA2E19");
    }

    #[test]
    fn test_placa_invalida() {
        assert!(validar_placa("AB1234").is_err());
        assert!(validar_placa("ABCD123").is_err());
        assert!(validar_placa("1234ABC").is_err());
        assert!(validar_placa("").is_err());
    }

    #[test]
    fn test_validar_email() {
        assert!(validar_email("joao@exemplo.com.br").is_ok());
        assert!(validar_email("sem-arroba.com").is_err());
        assert!(validar_email("").is_err());
    }

    #[test]
    fn test_validar_nao_vazio() {
        assert!(validar_nao_vazio("algo", "Campo").is_ok());
        assert!(validar_nao_vazio("   ", "Campo").is_err());
    }
}

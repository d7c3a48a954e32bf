//! Modelo de Profile
//!
//! Este módulo contém o struct Profile e o papel de usuário que
//! direciona o roteamento por perfil. O papel é fixado no cadastro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Papel do usuário na plataforma - define qual dashboard ele enxerga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoUsuario {
    Cliente,
    Mecanico,
    Guincho,
    Seguradora,
}

impl TipoUsuario {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoUsuario::Cliente => "cliente",
            TipoUsuario::Mecanico => "mecanico",
            TipoUsuario::Guincho => "guincho",
            TipoUsuario::Seguradora => "seguradora",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "cliente" => Some(TipoUsuario::Cliente),
            "mecanico" => Some(TipoUsuario::Mecanico),
            "guincho" => Some(TipoUsuario::Guincho),
            "seguradora" => Some(TipoUsuario::Seguradora),
            _ => None,
        }
    }

    /// Rota do dashboard deste papel no frontend
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }

    /// Papéis que prestam serviços e podem aceitar solicitações
    pub fn e_prestador(&self) -> bool {
        matches!(self, TipoUsuario::Mecanico | TipoUsuario::Guincho)
    }
}

/// Profile - mapeia exatamente à tabela profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub nome: String,
    pub tipo_usuario: String,
    pub telefone: Option<String>,
    // Conta no provedor de pagamento que recebe os repasses (prestadores)
    pub conta_pagamento_id: Option<String>,
    #[serde(skip_serializing)]
    pub senha_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn tipo(&self) -> Option<TipoUsuario> {
        TipoUsuario::parse(&self.tipo_usuario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_e_as_str_sao_inversos() {
        for tipo in [
            TipoUsuario::Cliente,
            TipoUsuario::Mecanico,
            TipoUsuario::Guincho,
            TipoUsuario::Seguradora,
        ] {
            assert_eq!(TipoUsuario::parse(tipo.as_str()), Some(tipo));
        }
    }

    #[test]
    fn test_parse_rejeita_papel_desconhecido() {
        assert_eq!(TipoUsuario::parse("admin"), None);
        assert_eq!(TipoUsuario::parse(""), None);
    }

    #[test]
    fn test_dashboard_path_por_papel() {
        assert_eq!(TipoUsuario::Cliente.dashboard_path(), "/dashboard/cliente");
        assert_eq!(TipoUsuario::Guincho.dashboard_path(), "/dashboard/guincho");
    }

    #[test]
    fn test_prestadores() {
        assert!(TipoUsuario::Mecanico.e_prestador());
        assert!(TipoUsuario::Guincho.e_prestador());
        assert!(!TipoUsuario::Cliente.e_prestador());
        assert!(!TipoUsuario::Seguradora.e_prestador());
    }
}

//! Modelo de Solicitação de serviço
//!
//! Este módulo contém o struct Solicitacao, o tipo de serviço e a
//! máquina de estados do ciclo de vida de uma solicitação.
//!
//! Ciclo de vida: pendente → aceita → em_andamento → concluida, com os
//! desvios terminais pendente → cancelada (cliente) e pendente → recusada
//! (prestador).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::profile::TipoUsuario;

/// Tipo do serviço solicitado - define qual prestador pode atender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoServico {
    Mecanico,
    Guincho,
}

impl TipoServico {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoServico::Mecanico => "mecanico",
            TipoServico::Guincho => "guincho",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "mecanico" => Some(TipoServico::Mecanico),
            "guincho" => Some(TipoServico::Guincho),
            _ => None,
        }
    }

    /// Papel de usuário que atende este tipo de serviço
    pub fn papel_prestador(&self) -> TipoUsuario {
        match self {
            TipoServico::Mecanico => TipoUsuario::Mecanico,
            TipoServico::Guincho => TipoUsuario::Guincho,
        }
    }
}

/// Status de uma solicitação de serviço
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusSolicitacao {
    Pendente,
    Aceita,
    EmAndamento,
    Concluida,
    Cancelada,
    Recusada,
}

impl StatusSolicitacao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusSolicitacao::Pendente => "pendente",
            StatusSolicitacao::Aceita => "aceita",
            StatusSolicitacao::EmAndamento => "em_andamento",
            StatusSolicitacao::Concluida => "concluida",
            StatusSolicitacao::Cancelada => "cancelada",
            StatusSolicitacao::Recusada => "recusada",
        }
    }

    pub fn parse(valor: &str) -> Option<Self> {
        match valor {
            "pendente" => Some(StatusSolicitacao::Pendente),
            "aceita" => Some(StatusSolicitacao::Aceita),
            "em_andamento" => Some(StatusSolicitacao::EmAndamento),
            "concluida" => Some(StatusSolicitacao::Concluida),
            "cancelada" => Some(StatusSolicitacao::Cancelada),
            "recusada" => Some(StatusSolicitacao::Recusada),
            _ => None,
        }
    }

    /// Estados dos quais não há mais transição possível
    pub fn e_terminal(&self) -> bool {
        matches!(
            self,
            StatusSolicitacao::Concluida
                | StatusSolicitacao::Cancelada
                | StatusSolicitacao::Recusada
        )
    }

    /// Verificar se a transição deste status para `novo` é permitida
    pub fn pode_transicionar(&self, novo: StatusSolicitacao) -> bool {
        use StatusSolicitacao::*;
        matches!(
            (self, novo),
            (Pendente, Aceita)
                | (Pendente, Cancelada)
                | (Pendente, Recusada)
                | (Aceita, EmAndamento)
                | (Aceita, Concluida)
                | (EmAndamento, Concluida)
        )
    }
}

/// Solicitação de serviço - mapeia exatamente à tabela solicitacoes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Solicitacao {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tipo_servico: String,
    pub descricao: String,
    pub localizacao: String,
    pub status: String,
    pub prestador_id: Option<Uuid>,
    pub preco_estimado: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl Solicitacao {
    pub fn status_atual(&self) -> Option<StatusSolicitacao> {
        StatusSolicitacao::parse(&self.status)
    }

    pub fn tipo(&self) -> Option<TipoServico> {
        TipoServico::parse(&self.tipo_servico)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StatusSolicitacao::*;

    #[test]
    fn test_fluxo_principal() {
        assert!(Pendente.pode_transicionar(Aceita));
        assert!(Aceita.pode_transicionar(EmAndamento));
        assert!(EmAndamento.pode_transicionar(Concluida));
        assert!(Aceita.pode_transicionar(Concluida));
    }

    #[test]
    fn test_desvios_terminais() {
        assert!(Pendente.pode_transicionar(Cancelada));
        assert!(Pendente.pode_transicionar(Recusada));
        assert!(Cancelada.e_terminal());
        assert!(Recusada.e_terminal());
        assert!(Concluida.e_terminal());
    }

    #[test]
    fn test_aceitar_nao_pendente_e_rejeitado() {
        // só solicitações pendentes podem ser aceitas
        assert!(!Aceita.pode_transicionar(Aceita));
        assert!(!EmAndamento.pode_transicionar(Aceita));
        assert!(!Concluida.pode_transicionar(Aceita));
        assert!(!Cancelada.pode_transicionar(Aceita));
        assert!(!Recusada.pode_transicionar(Aceita));
    }

    #[test]
    fn test_estados_terminais_nao_transicionam() {
        for terminal in [Concluida, Cancelada, Recusada] {
            for destino in [Pendente, Aceita, EmAndamento, Concluida, Cancelada, Recusada] {
                assert!(
                    !terminal.pode_transicionar(destino),
                    "{:?} -> {:?} deveria ser proibido",
                    terminal,
                    destino
                );
            }
        }
    }

    #[test]
    fn test_nao_volta_para_pendente() {
        assert!(!Aceita.pode_transicionar(Pendente));
        assert!(!EmAndamento.pode_transicionar(Pendente));
    }

    #[test]
    fn test_parse_e_as_str_sao_inversos() {
        for status in [Pendente, Aceita, EmAndamento, Concluida, Cancelada, Recusada] {
            assert_eq!(StatusSolicitacao::parse(status.as_str()), Some(status));
        }
        assert_eq!(StatusSolicitacao::parse("qualquer"), None);
    }

    #[test]
    fn test_tipo_servico_papel_prestador() {
        assert_eq!(TipoServico::Mecanico.papel_prestador(), TipoUsuario::Mecanico);
        assert_eq!(TipoServico::Guincho.papel_prestador(), TipoUsuario::Guincho);
    }
}

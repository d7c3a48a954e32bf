//! Repositórios de acesso a dados
//!
//! Um repositório por tabela, encapsulando as queries sqlx.

pub mod candidatura_repository;
pub mod cotacao_repository;
pub mod pagamento_repository;
pub mod plano_repository;
pub mod profile_repository;
pub mod solicitacao_repository;
pub mod suporte_repository;
pub mod veiculo_repository;

//! DTOs da API
//!
//! Requests e responses trocados com o frontend, separados dos
//! modelos persistidos.

pub mod auth_dto;
pub mod candidatura_dto;
pub mod cotacao_dto;
pub mod pagamento_dto;
pub mod plano_dto;
pub mod solicitacao_dto;
pub mod suporte_dto;
pub mod veiculo_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

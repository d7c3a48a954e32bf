use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::veiculo::Veiculo;

/// Request para cadastrar um novo veículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVeiculoRequest {
    #[validate(length(min = 7, max = 8))]
    pub placa: String,

    #[validate(length(min = 2, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[validate(range(min = 1900, max = 2030))]
    pub ano: Option<i32>,

    #[validate(length(min = 2, max = 50))]
    pub cor: Option<String>,

    pub quilometragem: Option<Decimal>,
}

/// Request para atualizar um veículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVeiculoRequest {
    #[validate(length(min = 2, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 1900, max = 2030))]
    pub ano: Option<i32>,

    #[validate(length(min = 2, max = 50))]
    pub cor: Option<String>,

    pub quilometragem: Option<Decimal>,

    pub status: Option<String>,
}

/// Response de veículo para a API
#[derive(Debug, Serialize)]
pub struct VeiculoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: String,
    pub ano: Option<i32>,
    pub cor: Option<String>,
    pub quilometragem: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Veiculo> for VeiculoResponse {
    fn from(veiculo: Veiculo) -> Self {
        Self {
            id: veiculo.id,
            user_id: veiculo.user_id,
            placa: veiculo.placa,
            marca: veiculo.marca,
            modelo: veiculo.modelo,
            ano: veiculo.ano,
            cor: veiculo.cor,
            quilometragem: veiculo.quilometragem,
            status: veiculo.status,
            created_at: veiculo.created_at,
        }
    }
}

use serde::Deserialize;
use validator::Validate;

/// Request público de candidatura de parceiro (oficina ou guincho)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCandidaturaRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    #[validate(email)]
    pub email: String,

    pub telefone: Option<String>,

    pub tipo_servico: String,

    #[validate(length(min = 2, max = 100))]
    pub cidade: String,

    pub descricao: Option<String>,
}

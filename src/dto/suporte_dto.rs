use serde::Deserialize;
use validator::Validate;

/// Request do formulário público de contato
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSuporteRequest {
    #[validate(length(min = 2, max = 100))]
    pub nome: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 200))]
    pub assunto: Option<String>,

    #[validate(length(min = 5, max = 5000))]
    pub mensagem: String,
}

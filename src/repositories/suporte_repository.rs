use crate::models::suporte::MensagemSuporte;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SuporteRepository {
    pool: PgPool,
}

impl SuporteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        email: String,
        assunto: Option<String>,
        mensagem: String,
    ) -> Result<MensagemSuporte, AppError> {
        let id = Uuid::new_v4();

        let registro = sqlx::query_as::<_, MensagemSuporte>(
            r#"
            INSERT INTO suporte (id, nome, email, assunto, mensagem, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(email)
        .bind(assunto)
        .bind(mensagem)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao registrar mensagem de suporte"))?;

        Ok(registro)
    }
}

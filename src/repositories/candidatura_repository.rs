use crate::models::candidatura::{Candidatura, STATUS_CANDIDATURA_PENDENTE};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CandidaturaRepository {
    pool: PgPool,
}

impl CandidaturaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        email: String,
        telefone: Option<String>,
        tipo_servico: String,
        cidade: String,
        descricao: Option<String>,
    ) -> Result<Candidatura, AppError> {
        let id = Uuid::new_v4();

        let candidatura = sqlx::query_as::<_, Candidatura>(
            r#"
            INSERT INTO candidaturas_parceiro (id, nome, email, telefone, tipo_servico, cidade, descricao, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome)
        .bind(email)
        .bind(telefone)
        .bind(tipo_servico)
        .bind(cidade)
        .bind(descricao)
        .bind(STATUS_CANDIDATURA_PENDENTE)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao registrar candidatura"))?;

        Ok(candidatura)
    }
}

use crate::models::pagamento::{Pagamento, STATUS_PAGAMENTO_FALHOU, STATUS_PAGAMENTO_PENDENTE};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PagamentoRepository {
    pool: PgPool,
}

impl PagamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        payment_intent_id: &str,
        valor: Decimal,
        taxa_plataforma: Decimal,
        valor_prestador: Decimal,
        tipo_servico: &str,
        solicitacao_id: Uuid,
        prestador_id: Uuid,
    ) -> Result<Pagamento, AppError> {
        let id = Uuid::new_v4();

        let pagamento = sqlx::query_as::<_, Pagamento>(
            r#"
            INSERT INTO pagamentos (
                id, payment_intent_id, valor, taxa_plataforma, valor_prestador,
                tipo_servico, solicitacao_id, prestador_id, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payment_intent_id)
        .bind(valor)
        .bind(taxa_plataforma)
        .bind(valor_prestador)
        .bind(tipo_servico)
        .bind(solicitacao_id)
        .bind(prestador_id)
        .bind(STATUS_PAGAMENTO_PENDENTE)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao registrar pagamento"))?;

        Ok(pagamento)
    }

    /// Marcar o pagamento cujo repasse foi rejeitado pelo provedor
    pub async fn marcar_falha(&self, payment_intent_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE pagamentos SET status = $2 WHERE payment_intent_id = $1")
            .bind(payment_intent_id)
            .bind(STATUS_PAGAMENTO_FALHOU)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao marcar falha do pagamento"))?;

        Ok(())
    }

    pub async fn find_by_solicitacao(
        &self,
        solicitacao_id: Uuid,
    ) -> Result<Option<Pagamento>, AppError> {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            "SELECT * FROM pagamentos WHERE solicitacao_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(solicitacao_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar pagamento"))?;

        Ok(pagamento)
    }

    pub async fn find_by_prestador(&self, prestador_id: Uuid) -> Result<Vec<Pagamento>, AppError> {
        let pagamentos = sqlx::query_as::<_, Pagamento>(
            "SELECT * FROM pagamentos WHERE prestador_id = $1 ORDER BY created_at DESC",
        )
        .bind(prestador_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar pagamentos"))?;

        Ok(pagamentos)
    }
}

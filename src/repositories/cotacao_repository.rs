use crate::models::cotacao::Cotacao;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CotacaoRepository {
    pool: PgPool,
}

impl CotacaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        seguradora_id: Uuid,
        email_cliente: String,
        modelo_veiculo: String,
        valor: Decimal,
    ) -> Result<Cotacao, AppError> {
        let id = Uuid::new_v4();

        let cotacao = sqlx::query_as::<_, Cotacao>(
            r#"
            INSERT INTO cotacoes_seguro (id, seguradora_id, email_cliente, modelo_veiculo, valor, status, created_at)
            VALUES ($1, $2, $3, $4, $5, 'pendente', $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(seguradora_id)
        .bind(email_cliente)
        .bind(modelo_veiculo)
        .bind(valor)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao criar cotação"))?;

        Ok(cotacao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cotacao>, AppError> {
        let cotacao = sqlx::query_as::<_, Cotacao>("SELECT * FROM cotacoes_seguro WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar cotação"))?;

        Ok(cotacao)
    }

    pub async fn find_by_seguradora(&self, seguradora_id: Uuid) -> Result<Vec<Cotacao>, AppError> {
        let cotacoes = sqlx::query_as::<_, Cotacao>(
            "SELECT * FROM cotacoes_seguro WHERE seguradora_id = $1 ORDER BY created_at DESC",
        )
        .bind(seguradora_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar cotações"))?;

        Ok(cotacoes)
    }

    pub async fn atualizar_status(
        &self,
        id: Uuid,
        seguradora_id: Uuid,
        status: &str,
    ) -> Result<Cotacao, AppError> {
        // Verificar que a cotação pertence à seguradora
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cotação não encontrada".to_string()))?;

        if current.seguradora_id != seguradora_id {
            return Err(AppError::Forbidden(
                "Cotação não pertence a esta seguradora".to_string(),
            ));
        }

        let cotacao = sqlx::query_as::<_, Cotacao>(
            "UPDATE cotacoes_seguro SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar status da cotação"))?;

        Ok(cotacao)
    }
}

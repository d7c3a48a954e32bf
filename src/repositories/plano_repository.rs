use crate::models::plano::Plano;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PlanoRepository {
    pool: PgPool,
}

impl PlanoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        seguradora_id: Uuid,
        nome: String,
        descricao: Option<String>,
        preco_mensal: Decimal,
        cobertura: Option<String>,
    ) -> Result<Plano, AppError> {
        let id = Uuid::new_v4();

        let plano = sqlx::query_as::<_, Plano>(
            r#"
            INSERT INTO planos_seguradora (id, seguradora_id, nome, descricao, preco_mensal, cobertura, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(seguradora_id)
        .bind(nome)
        .bind(descricao)
        .bind(preco_mensal)
        .bind(cobertura)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao criar plano"))?;

        Ok(plano)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Plano>, AppError> {
        let plano = sqlx::query_as::<_, Plano>("SELECT * FROM planos_seguradora WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar plano"))?;

        Ok(plano)
    }

    pub async fn find_by_seguradora(&self, seguradora_id: Uuid) -> Result<Vec<Plano>, AppError> {
        let planos = sqlx::query_as::<_, Plano>(
            "SELECT * FROM planos_seguradora WHERE seguradora_id = $1 ORDER BY created_at DESC",
        )
        .bind(seguradora_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar planos"))?;

        Ok(planos)
    }

    pub async fn update(
        &self,
        id: Uuid,
        seguradora_id: Uuid,
        nome: Option<String>,
        descricao: Option<String>,
        preco_mensal: Option<Decimal>,
        cobertura: Option<String>,
    ) -> Result<Plano, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plano não encontrado".to_string()))?;

        if current.seguradora_id != seguradora_id {
            return Err(AppError::Forbidden(
                "Plano não pertence a esta seguradora".to_string(),
            ));
        }

        let plano = sqlx::query_as::<_, Plano>(
            r#"
            UPDATE planos_seguradora
            SET nome = $2, descricao = $3, preco_mensal = $4, cobertura = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(current.nome))
        .bind(descricao.or(current.descricao))
        .bind(preco_mensal.unwrap_or(current.preco_mensal))
        .bind(cobertura.or(current.cobertura))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar plano"))?;

        Ok(plano)
    }

    pub async fn delete(&self, id: Uuid, seguradora_id: Uuid) -> Result<(), AppError> {
        let plano = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plano não encontrado".to_string()))?;

        if plano.seguradora_id != seguradora_id {
            return Err(AppError::Forbidden(
                "Plano não pertence a esta seguradora".to_string(),
            ));
        }

        sqlx::query("DELETE FROM planos_seguradora WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao excluir plano"))?;

        Ok(())
    }
}

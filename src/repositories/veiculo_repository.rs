use crate::models::veiculo::Veiculo;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VeiculoRepository {
    pool: PgPool,
}

impl VeiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        placa: String,
        marca: Option<String>,
        modelo: String,
        ano: Option<i32>,
        cor: Option<String>,
        quilometragem: Decimal,
    ) -> Result<Veiculo, AppError> {
        let id = Uuid::new_v4();

        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            INSERT INTO veiculos (id, user_id, placa, marca, modelo, ano, cor, quilometragem, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'ativo', $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(placa)
        .bind(marca)
        .bind(modelo)
        .bind(ano)
        .bind(cor)
        .bind(quilometragem)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao criar veículo"))?;

        Ok(veiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Veiculo>, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar veículo"))?;

        Ok(veiculo)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            "SELECT * FROM veiculos WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar veículos"))?;

        Ok(veiculos)
    }

    pub async fn placa_exists(&self, placa: &str, user_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM veiculos WHERE placa = $1 AND user_id = $2)",
        )
        .bind(placa)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao verificar placa"))?;

        Ok(result.0)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        marca: Option<String>,
        modelo: Option<String>,
        ano: Option<i32>,
        cor: Option<String>,
        quilometragem: Option<Decimal>,
        status: Option<String>,
    ) -> Result<Veiculo, AppError> {
        // Obter veículo atual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        // Verificar que pertence ao usuário
        if current.user_id != user_id {
            return Err(AppError::Forbidden(
                "Veículo não pertence a este usuário".to_string(),
            ));
        }

        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            UPDATE veiculos
            SET marca = $2, modelo = $3, ano = $4, cor = $5, quilometragem = $6, status = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(marca.or(current.marca))
        .bind(modelo.unwrap_or(current.modelo))
        .bind(ano.or(current.ano))
        .bind(cor.or(current.cor))
        .bind(quilometragem.unwrap_or(current.quilometragem))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar veículo"))?;

        Ok(veiculo)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertence ao usuário
        let veiculo = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        if veiculo.user_id != user_id {
            return Err(AppError::Forbidden(
                "Veículo não pertence a este usuário".to_string(),
            ));
        }

        sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao excluir veículo"))?;

        Ok(())
    }
}

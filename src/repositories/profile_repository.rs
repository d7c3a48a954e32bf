use crate::models::profile::Profile;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> Result<Profile, AppError> {
        let result = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (
                id, email, nome, tipo_usuario, telefone, conta_pagamento_id,
                senha_hash, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(&profile.nome)
        .bind(&profile.tipo_usuario)
        .bind(&profile.telefone)
        .bind(&profile.conta_pagamento_id)
        .bind(&profile.senha_hash)
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao criar perfil"))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let result = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar perfil"))?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        let result = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar perfil por e-mail"))?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::from_sqlx(e, "Erro ao verificar e-mail"))?;

        Ok(result.0)
    }

    pub async fn update_perfil(
        &self,
        id: Uuid,
        nome: Option<String>,
        telefone: Option<String>,
        conta_pagamento_id: Option<String>,
    ) -> Result<Profile, AppError> {
        // Obter perfil atual para preencher os campos não enviados
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))?;

        let result = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET nome = $2, telefone = $3, conta_pagamento_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(current.nome))
        .bind(telefone.or(current.telefone))
        .bind(conta_pagamento_id.or(current.conta_pagamento_id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar perfil"))?;

        Ok(result)
    }

    pub async fn update_senha(&self, id: Uuid, senha_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE profiles SET senha_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(senha_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar senha"))?;

        Ok(())
    }
}

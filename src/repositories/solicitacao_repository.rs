use crate::models::solicitacao::Solicitacao;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SolicitacaoRepository {
    pool: PgPool,
}

impl SolicitacaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        tipo_servico: String,
        descricao: String,
        localizacao: String,
        preco_estimado: Option<Decimal>,
    ) -> Result<Solicitacao, AppError> {
        let id = Uuid::new_v4();

        let solicitacao = sqlx::query_as::<_, Solicitacao>(
            r#"
            INSERT INTO solicitacoes (id, user_id, tipo_servico, descricao, localizacao, status, preco_estimado, created_at)
            VALUES ($1, $2, $3, $4, $5, 'pendente', $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(tipo_servico)
        .bind(descricao)
        .bind(localizacao)
        .bind(preco_estimado)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao criar solicitação"))?;

        Ok(solicitacao)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Solicitacao>, AppError> {
        let solicitacao =
            sqlx::query_as::<_, Solicitacao>("SELECT * FROM solicitacoes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::from_sqlx(e, "Erro ao buscar solicitação"))?;

        Ok(solicitacao)
    }

    /// Solicitações abertas pelo cliente
    pub async fn find_by_cliente(&self, user_id: Uuid) -> Result<Vec<Solicitacao>, AppError> {
        let solicitacoes = sqlx::query_as::<_, Solicitacao>(
            "SELECT * FROM solicitacoes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar solicitações"))?;

        Ok(solicitacoes)
    }

    /// Solicitações pendentes sem prestador, do tipo atendido pelo papel
    pub async fn find_disponiveis(&self, tipo_servico: &str) -> Result<Vec<Solicitacao>, AppError> {
        let solicitacoes = sqlx::query_as::<_, Solicitacao>(
            r#"
            SELECT * FROM solicitacoes
            WHERE tipo_servico = $1 AND status = 'pendente' AND prestador_id IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(tipo_servico)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar solicitações disponíveis"))?;

        Ok(solicitacoes)
    }

    /// Solicitações atribuídas ao prestador
    pub async fn find_by_prestador(&self, prestador_id: Uuid) -> Result<Vec<Solicitacao>, AppError> {
        let solicitacoes = sqlx::query_as::<_, Solicitacao>(
            "SELECT * FROM solicitacoes WHERE prestador_id = $1 ORDER BY created_at DESC",
        )
        .bind(prestador_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao listar solicitações do prestador"))?;

        Ok(solicitacoes)
    }

    /// Reivindicar uma solicitação pendente para o prestador.
    ///
    /// O filtro `status = 'pendente'` no UPDATE é o que fecha a corrida de
    /// aceite duplo: dois prestadores concorrentes disparam o mesmo UPDATE
    /// condicional e só um encontra a linha ainda pendente. O segundo recebe
    /// None e a camada de cima responde 409.
    pub async fn aceitar_pendente(
        &self,
        id: Uuid,
        prestador_id: Uuid,
        preco: Decimal,
    ) -> Result<Option<Solicitacao>, AppError> {
        let solicitacao = sqlx::query_as::<_, Solicitacao>(
            r#"
            UPDATE solicitacoes
            SET status = 'aceita', prestador_id = $2, preco_estimado = $3
            WHERE id = $1 AND status = 'pendente' AND prestador_id IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(prestador_id)
        .bind(preco)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao aceitar solicitação"))?;

        Ok(solicitacao)
    }

    /// Desfazer o aceite quando o fluxo de pagamento falha depois da
    /// reivindicação (compensação do aceite).
    pub async fn reverter_aceite(&self, id: Uuid, prestador_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE solicitacoes
            SET status = 'pendente', prestador_id = NULL, preco_estimado = NULL
            WHERE id = $1 AND prestador_id = $2 AND status = 'aceita'
            "#,
        )
        .bind(id)
        .bind(prestador_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao reverter aceite"))?;

        Ok(())
    }

    /// Transição condicional de status: só atualiza se o status atual
    /// estiver entre os permitidos. Retorna None se a linha não estava
    /// em nenhum deles (transição inválida ou corrida perdida).
    pub async fn atualizar_status(
        &self,
        id: Uuid,
        novo_status: &str,
        permitidos: &[&str],
    ) -> Result<Option<Solicitacao>, AppError> {
        let permitidos: Vec<String> = permitidos.iter().map(|s| s.to_string()).collect();

        let solicitacao = sqlx::query_as::<_, Solicitacao>(
            r#"
            UPDATE solicitacoes
            SET status = $2
            WHERE id = $1 AND status = ANY($3)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(novo_status)
        .bind(&permitidos)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx(e, "Erro ao atualizar status da solicitação"))?;

        Ok(solicitacao)
    }
}

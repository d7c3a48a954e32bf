//! Serviço de pagamento
//!
//! Orquestra o fluxo disparado pelo aceite de uma solicitação:
//! payment intent no provedor, divisão da taxa da plataforma,
//! registro do pagamento e repasse ao prestador.
//!
//! O registro no banco acontece ANTES do repasse: um repasse nunca fica
//! sem linha correspondente em `pagamentos`. Se o repasse falha, a linha
//! é marcada como "falhou" e o chamador decide a compensação.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::PgPool;
use uuid::Uuid;

use crate::clients::stripe_client::StripeClient;
use crate::models::pagamento::STATUS_PAGAMENTO_FALHOU;
use crate::models::profile::Profile;
use crate::repositories::pagamento_repository::PagamentoRepository;
use crate::utils::errors::{AppError, AppResult};

/// Resultado do cálculo da divisão plataforma/prestador
#[derive(Debug, Clone, PartialEq)]
pub struct DivisaoPagamento {
    pub valor: Decimal,
    pub taxa_plataforma: Decimal,
    pub valor_prestador: Decimal,
}

/// Resultado do fluxo completo de pagamento
#[derive(Debug)]
pub struct PagamentoProcessado {
    pub payment_intent_id: String,
    pub client_secret: String,
    pub divisao: DivisaoPagamento,
}

/// Calcular a divisão do valor entre plataforma e prestador.
///
/// A taxa é arredondada para 2 casas (meio para longe de zero) e o
/// valor do prestador sai por subtração, garantindo que
/// `taxa_plataforma + valor_prestador == valor` exatamente.
pub fn calcular_divisao(valor: Decimal, taxa: Decimal) -> AppResult<DivisaoPagamento> {
    if valor < Decimal::ZERO {
        return Err(AppError::ValidationError(
            "O valor do serviço não pode ser negativo".to_string(),
        ));
    }
    if taxa < Decimal::ZERO || taxa > Decimal::ONE {
        return Err(AppError::ValidationError(
            "Taxa da plataforma deve estar entre 0 e 1".to_string(),
        ));
    }

    let taxa_plataforma =
        (valor * taxa).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let valor_prestador = valor - taxa_plataforma;

    Ok(DivisaoPagamento {
        valor,
        taxa_plataforma,
        valor_prestador,
    })
}

/// Converter um valor em reais para centavos (arredondamento padrão)
pub fn em_centavos(valor: Decimal) -> AppResult<i64> {
    (valor * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| AppError::ValidationError("Valor fora do intervalo suportado".to_string()))
}

pub struct PagamentoService {
    client: StripeClient,
    repository: PagamentoRepository,
    taxa: Decimal,
}

impl PagamentoService {
    pub fn new(pool: PgPool, client: StripeClient, taxa: Decimal) -> Self {
        Self {
            client,
            repository: PagamentoRepository::new(pool),
            taxa,
        }
    }

    /// Executar o fluxo completo: intent → divisão → registro → repasse.
    pub async fn processar(
        &self,
        valor: Decimal,
        tipo_servico: &str,
        solicitacao_id: Uuid,
        prestador: &Profile,
    ) -> AppResult<PagamentoProcessado> {
        let conta_destino = prestador.conta_pagamento_id.as_deref().ok_or_else(|| {
            AppError::ValidationError(
                "Prestador não possui conta de pagamento cadastrada".to_string(),
            )
        })?;

        if valor <= Decimal::ZERO {
            return Err(AppError::ValidationError(
                "O valor do serviço deve ser maior que zero".to_string(),
            ));
        }

        // Um pagamento por solicitação; repasses falhos não bloqueiam nova tentativa
        if let Some(existente) = self.repository.find_by_solicitacao(solicitacao_id).await? {
            if existente.status != STATUS_PAGAMENTO_FALHOU {
                return Err(AppError::Conflict(
                    "Esta solicitação já possui pagamento registrado".to_string(),
                ));
            }
        }

        let divisao = calcular_divisao(valor, self.taxa)?;

        let intent = self
            .client
            .criar_payment_intent(
                em_centavos(valor)?,
                tipo_servico,
                &solicitacao_id.to_string(),
            )
            .await?;

        self.repository
            .create(
                &intent.id,
                divisao.valor,
                divisao.taxa_plataforma,
                divisao.valor_prestador,
                tipo_servico,
                solicitacao_id,
                prestador.id,
            )
            .await?;

        let repasse = self
            .client
            .criar_transferencia(
                em_centavos(divisao.valor_prestador)?,
                conta_destino,
                &intent.id,
            )
            .await;

        if let Err(e) = repasse {
            log::error!(
                "❌ Repasse falhou para intent {}: {}. Marcando pagamento como falho",
                intent.id,
                e
            );
            self.repository.marcar_falha(&intent.id).await?;
            return Err(e);
        }

        log::info!(
            "✅ Pagamento processado: intent {} (plataforma {} / prestador {})",
            intent.id,
            divisao.taxa_plataforma,
            divisao.valor_prestador
        );

        Ok(PagamentoProcessado {
            payment_intent_id: intent.id,
            client_secret: intent.client_secret,
            divisao,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_divisao_cenario_padrao() {
        // amount = 100.00 → plataforma 10.00, prestador 90.00
        let divisao = calcular_divisao(dec("100.00"), dec("0.10")).unwrap();
        assert_eq!(divisao.taxa_plataforma, dec("10.00"));
        assert_eq!(divisao.valor_prestador, dec("90.00"));
        // repasse em centavos: 9000
        assert_eq!(em_centavos(divisao.valor_prestador).unwrap(), 9000);
    }

    #[test]
    fn test_divisao_com_arredondamento() {
        // 33.33 × 0.10 = 3.333 → taxa 3.33, prestador 30.00
        let divisao = calcular_divisao(dec("33.33"), dec("0.10")).unwrap();
        assert_eq!(divisao.taxa_plataforma, dec("3.33"));
        assert_eq!(divisao.valor_prestador, dec("30.00"));
        assert_eq!(divisao.taxa_plataforma + divisao.valor_prestador, dec("33.33"));
    }

    #[test]
    fn test_divisao_meio_arredonda_para_cima() {
        // 10.05 × 0.10 = 1.005 → 1.01 (meio para longe de zero)
        let divisao = calcular_divisao(dec("10.05"), dec("0.10")).unwrap();
        assert_eq!(divisao.taxa_plataforma, dec("1.01"));
        assert_eq!(divisao.valor_prestador, dec("9.04"));
    }

    #[test]
    fn test_valor_zero() {
        let divisao = calcular_divisao(Decimal::ZERO, dec("0.10")).unwrap();
        assert_eq!(divisao.taxa_plataforma, Decimal::ZERO);
        assert_eq!(divisao.valor_prestador, Decimal::ZERO);
    }

    #[test]
    fn test_valor_negativo_rejeitado() {
        assert!(calcular_divisao(dec("-1.00"), dec("0.10")).is_err());
    }

    #[test]
    fn test_taxa_fora_do_intervalo_rejeitada() {
        assert!(calcular_divisao(dec("10.00"), dec("1.01")).is_err());
        assert!(calcular_divisao(dec("10.00"), dec("-0.10")).is_err());
    }

    #[test]
    fn test_em_centavos() {
        assert_eq!(em_centavos(dec("100.00")).unwrap(), 10000);
        assert_eq!(em_centavos(dec("0.01")).unwrap(), 1);
        // meio centavo arredonda para longe de zero
        assert_eq!(em_centavos(dec("10.005")).unwrap(), 1001);
    }

    proptest! {
        // Para todo valor A >= 0: taxa + prestador == A (sem perda por arredondamento)
        #[test]
        fn soma_da_divisao_preserva_o_valor(centavos in 0i64..=1_000_000_000i64) {
            let valor = Decimal::new(centavos, 2);
            let divisao = calcular_divisao(valor, dec("0.10")).unwrap();
            prop_assert_eq!(divisao.taxa_plataforma + divisao.valor_prestador, valor);
        }

        #[test]
        fn taxa_nunca_excede_o_valor(centavos in 0i64..=1_000_000_000i64, taxa_pct in 0u32..=100u32) {
            let valor = Decimal::new(centavos, 2);
            let taxa = Decimal::new(taxa_pct as i64, 2);
            let divisao = calcular_divisao(valor, taxa).unwrap();
            prop_assert!(divisao.taxa_plataforma >= Decimal::ZERO);
            prop_assert!(divisao.taxa_plataforma <= valor);
            prop_assert_eq!(divisao.taxa_plataforma + divisao.valor_prestador, valor);
        }

        #[test]
        fn centavos_sao_consistentes(centavos in 0i64..=1_000_000_000i64) {
            let valor = Decimal::new(centavos, 2);
            prop_assert_eq!(em_centavos(valor).unwrap(), centavos);
        }
    }
}

//! Promo code service: discount calculation and use reservation.

use domain::{Money, OrderId};
use ledger::Ledger;

use crate::error::StepError;

/// Operations over promo codes.
pub struct DiscountService;

impl DiscountService {
    /// Computes the discount a promo code yields against a base amount.
    ///
    /// Returns zero when the code is absent, unknown, or depleted;
    /// otherwise `min(discount_amount, base_amount)`. Never negative,
    /// never exceeds the base. Pure with respect to the ledger.
    pub fn calculate_discount(ledger: &Ledger, promo_code: Option<&str>, base: Money) -> Money {
        let Some(code) = promo_code else {
            return Money::zero();
        };
        match ledger.promo(code) {
            Some(promo) if promo.remaining_uses > 0 => promo.discount_amount.min(base),
            _ => Money::zero(),
        }
    }

    /// Consumes one use of a promo code.
    pub fn reserve_promo_use(
        ledger: &mut Ledger,
        order_id: OrderId,
        code: &str,
    ) -> Result<(), StepError> {
        let promo = ledger
            .promo_mut(code)
            .ok_or_else(|| StepError::PromoNotFound(code.to_string()))?;
        if promo.remaining_uses == 0 {
            return Err(StepError::PromoExhausted(code.to_string()));
        }
        promo.remaining_uses -= 1;
        let remaining = promo.remaining_uses;
        ledger.log(format!(
            "[order={order_id}] promo reserved: {code} (remaining={remaining})"
        ));
        Ok(())
    }

    /// Gives back one use of a promo code; no-op when the code is unknown.
    pub fn release_promo_use(ledger: &mut Ledger, order_id: OrderId, code: &str) {
        let Some(promo) = ledger.promo_mut(code) else {
            return;
        };
        promo.remaining_uses += 1;
        let remaining = promo.remaining_uses;
        ledger.log(format!(
            "[order={order_id}] promo released: {code} (remaining={remaining})"
        ));
    }
}

//! Billing service: balance charges and refunds.

use domain::{Money, OrderId, UserId};
use ledger::Ledger;

use crate::error::StepError;

/// Operations over user balances.
pub struct BillingService;

impl BillingService {
    /// Deducts an amount from a user's balance.
    pub fn charge_user(
        ledger: &mut Ledger,
        order_id: OrderId,
        user_id: UserId,
        amount: Money,
    ) -> Result<(), StepError> {
        let user = ledger
            .user_mut(user_id)
            .ok_or(StepError::UserNotFound(user_id))?;
        if user.balance < amount {
            return Err(StepError::InsufficientBalance {
                user_id,
                balance: user.balance,
                required: amount,
            });
        }
        user.balance = user.balance - amount;
        let balance = user.balance;
        ledger.log(format!(
            "[order={order_id}] charged user={user_id} amount={amount} (balance={balance})"
        ));
        Ok(())
    }

    /// Returns an amount to a user's balance; no-op when the user is unknown.
    pub fn refund_user(ledger: &mut Ledger, order_id: OrderId, user_id: UserId, amount: Money) {
        let Some(user) = ledger.user_mut(user_id) else {
            return;
        };
        user.balance = user.balance + amount;
        let balance = user.balance;
        ledger.log(format!(
            "[order={order_id}] refunded user={user_id} amount={amount} (balance={balance})"
        ));
    }
}

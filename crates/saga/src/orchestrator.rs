//! Saga orchestrator: amount computation, forward execution, and
//! reverse compensation over the shared ledger.

use domain::{OrderAmounts, OrderRequest};
use ledger::Ledger;

use crate::error::{StepError, ValidationError};
use crate::fault::Fault;
use crate::services::DiscountService;
use crate::state::SagaState;
use crate::step::Step;

/// Drives one order saga to completion or compensated failure.
///
/// The run is fully synchronous: `execute` returns only once every step
/// has run or every completed step has been compensated. The ledger is
/// mutated in place and accumulates the ordered log of what happened.
pub struct SagaOrchestrator<'a> {
    ledger: &'a mut Ledger,
    state: SagaState,
}

impl<'a> SagaOrchestrator<'a> {
    /// Creates an orchestrator over the given ledger.
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self {
            ledger,
            state: SagaState::Started,
        }
    }

    /// Returns the state the last run reached.
    pub fn state(&self) -> SagaState {
        self.state
    }

    /// Runs the saga for one order request.
    ///
    /// Returns `Ok(true)` when every step executed, `Ok(false)` when a
    /// step failed and the completed prefix was compensated, and
    /// `Err(ValidationError)` when the request never made it past
    /// validation. On the error path no step has run and nothing needs
    /// compensation.
    #[tracing::instrument(skip(self, req), fields(order_id = %req.order_id))]
    pub fn execute(&mut self, req: &OrderRequest, fault: Fault) -> Result<bool, ValidationError> {
        metrics::counter!("saga_executions_total").increment(1);
        let started = std::time::Instant::now();

        self.ledger.log(format!(
            "[order={}] SAGA START user={} sku={} qty={} promo={}",
            req.order_id,
            req.user_id,
            req.sku,
            req.qty,
            req.promo_code.as_deref().unwrap_or("none"),
        ));

        self.state = SagaState::Validating;
        let amounts = self.validate(req)?;
        self.ledger.log(format!(
            "[order={}] amounts: base={} discount={} final={}",
            req.order_id, amounts.base_amount, amounts.discount_amount, amounts.final_amount,
        ));

        let steps = build_steps(req, &amounts);
        self.state = SagaState::Executing;

        let mut completed: Vec<&Step> = Vec::with_capacity(steps.len());
        for step in &steps {
            if let Err(e) = self.run_step(step, req, fault) {
                self.ledger
                    .log(format!("[order={}] SAGA FAILED: {e}", req.order_id));
                self.compensate(&completed, req);
                self.ledger
                    .log(format!("[order={}] SAGA END (failed)", req.order_id));
                self.state = SagaState::Failed;

                metrics::counter!("saga_failed").increment(1);
                metrics::histogram!("saga_duration_seconds")
                    .record(started.elapsed().as_secs_f64());
                tracing::warn!(error = %e, "saga failed");
                return Ok(false);
            }
            completed.push(step);
        }

        self.ledger.log(format!("[order={}] SAGA OK", req.order_id));
        self.state = SagaState::Completed;

        metrics::counter!("saga_completed").increment(1);
        metrics::histogram!("saga_duration_seconds").record(started.elapsed().as_secs_f64());
        tracing::info!("saga completed");
        Ok(true)
    }

    /// Checks the request and derives the order amounts.
    ///
    /// A failure here is a hard error: beyond the attempted start there
    /// are no log entries and no compensation.
    fn validate(&self, req: &OrderRequest) -> Result<OrderAmounts, ValidationError> {
        if req.qty == 0 {
            return Err(ValidationError::InvalidQuantity(req.qty));
        }
        if self.ledger.user(req.user_id).is_none() {
            return Err(ValidationError::UserNotFound(req.user_id));
        }
        let item = self
            .ledger
            .item(&req.sku)
            .ok_or_else(|| ValidationError::ItemNotFound(req.sku.clone()))?;

        let base = item.price.multiply(req.qty);
        let discount =
            DiscountService::calculate_discount(self.ledger, req.promo_code.as_deref(), base);
        Ok(OrderAmounts {
            base_amount: base,
            discount_amount: discount,
            final_amount: base - discount,
        })
    }

    /// Runs one forward step with its `STEP` log bracketing.
    ///
    /// The fault directive is consulted first: a triggered fault fails
    /// the step before anything is logged or invoked.
    fn run_step(&mut self, step: &Step, req: &OrderRequest, fault: Fault) -> Result<(), StepError> {
        if fault.triggers(step.name()) {
            return Err(StepError::InjectedFault(step.name()));
        }
        self.ledger
            .log(format!("[order={}] STEP {}", req.order_id, step.name()));
        step.execute(self.ledger, req.order_id)?;
        self.ledger
            .log(format!("[order={}] STEP {} OK", req.order_id, step.name()));
        Ok(())
    }

    /// Undoes the completed steps in exact reverse execution order.
    ///
    /// Best-effort: a failing compensation is logged and the loop keeps
    /// going; nothing here escalates to the caller.
    fn compensate(&mut self, completed: &[&Step], req: &OrderRequest) {
        self.state = SagaState::Compensating;
        for step in completed.iter().rev() {
            self.ledger
                .log(format!("[order={}] COMPENSATE {}", req.order_id, step.name()));
            match step.compensate(self.ledger, req.order_id) {
                Ok(()) => self.ledger.log(format!(
                    "[order={}] COMPENSATE {} OK",
                    req.order_id,
                    step.name()
                )),
                Err(e) => {
                    self.ledger.log(format!(
                        "[order={}] COMPENSATION FAILED at {}: {e}",
                        req.order_id,
                        step.name()
                    ));
                    tracing::warn!(step = %step.name(), error = %e, "compensation failed");
                }
            }
        }
    }
}

/// Assembles the step sequence for a request.
///
/// The promo step is included iff a code was supplied, independent of
/// whether the code is valid; the other three steps always run.
fn build_steps(req: &OrderRequest, amounts: &OrderAmounts) -> Vec<Step> {
    let mut steps = Vec::with_capacity(4);
    if let Some(code) = &req.promo_code {
        steps.push(Step::ReservePromoUse { code: code.clone() });
    }
    steps.push(Step::ReserveInventory {
        sku: req.sku.clone(),
        qty: req.qty,
    });
    steps.push(Step::ChargeUserBalance {
        user_id: req.user_id,
        amount: amounts.final_amount,
    });
    steps.push(Step::FinalizeOrder);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepName;
    use domain::{Money, OrderId, Sku, UserId};

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_user(UserId::new(1), Money::from_dollars(1000));
        ledger.add_item("ITEM001", Money::from_dollars(100), 10);
        ledger.add_promo("DISCOUNT10", 5, Money::from_dollars(10));
        ledger
    }

    fn request(qty: u32) -> OrderRequest {
        OrderRequest::new(OrderId::new(1), UserId::new(1), "ITEM001", qty)
    }

    #[test]
    fn zero_quantity_is_a_hard_failure() {
        let mut ledger = ledger();
        let mut saga = SagaOrchestrator::new(&mut ledger);
        let result = saga.execute(&request(0), Fault::None);
        assert_eq!(result, Err(ValidationError::InvalidQuantity(0)));
        assert_eq!(saga.state(), SagaState::Validating);
        // Only the attempted start is logged; no steps, no compensation.
        assert_eq!(ledger.logs().len(), 1);
        assert!(ledger.logs()[0].starts_with("[order=1] SAGA START"));
    }

    #[test]
    fn unknown_user_is_a_hard_failure() {
        let mut ledger = ledger();
        let req = OrderRequest::new(OrderId::new(1), UserId::new(99), "ITEM001", 1);
        let result = SagaOrchestrator::new(&mut ledger).execute(&req, Fault::None);
        assert_eq!(result, Err(ValidationError::UserNotFound(UserId::new(99))));
        assert_eq!(ledger.item(&Sku::new("ITEM001")).unwrap().on_hand, 10);
    }

    #[test]
    fn unknown_sku_is_a_hard_failure() {
        let mut ledger = ledger();
        let req = OrderRequest::new(OrderId::new(1), UserId::new(1), "NOPE", 1);
        let result = SagaOrchestrator::new(&mut ledger).execute(&req, Fault::None);
        assert_eq!(result, Err(ValidationError::ItemNotFound(Sku::new("NOPE"))));
    }

    #[test]
    fn amounts_are_logged_before_any_step() {
        let mut ledger = ledger();
        SagaOrchestrator::new(&mut ledger)
            .execute(&request(2), Fault::None)
            .unwrap();
        let logs = ledger.logs_for_order(OrderId::new(1));
        assert_eq!(logs[1], "[order=1] amounts: base=200.00 discount=0.00 final=200.00");
        assert_eq!(logs[2], "[order=1] STEP ReserveInventory");
    }

    #[test]
    fn promo_step_is_included_even_for_invalid_code() {
        let mut ledger = ledger();
        let req = request(1).with_promo("NOPE");
        let ok = SagaOrchestrator::new(&mut ledger)
            .execute(&req, Fault::None)
            .unwrap();
        assert!(!ok);
        let logs = ledger.logs_for_order(OrderId::new(1));
        assert!(logs.iter().any(|l| l.ends_with("STEP ReservePromoUse")));
        assert!(logs.iter().any(|l| l.contains("SAGA FAILED: Promo NOPE not found")));
    }

    #[test]
    fn successful_run_ends_in_completed_state() {
        let mut ledger = ledger();
        let mut saga = SagaOrchestrator::new(&mut ledger);
        assert!(saga.execute(&request(1), Fault::None).unwrap());
        assert_eq!(saga.state(), SagaState::Completed);
    }

    #[test]
    fn injected_fault_fails_without_running_the_step() {
        let mut ledger = ledger();
        let mut saga = SagaOrchestrator::new(&mut ledger);
        let ok = saga
            .execute(
                &request(1),
                Fault::FailBeforeStep(StepName::ReserveInventory),
            )
            .unwrap();
        assert!(!ok);
        assert_eq!(saga.state(), SagaState::Failed);
        // The faulted step never logs its STEP line and never mutates.
        assert_eq!(ledger.item(&Sku::new("ITEM001")).unwrap().on_hand, 10);
        assert!(
            !ledger
                .logs_for_order(OrderId::new(1))
                .iter()
                .any(|l| l.ends_with("STEP ReserveInventory"))
        );
    }
}

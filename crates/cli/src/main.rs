//! Runs one order through the saga and prints the resulting ledger.
//!
//! Thin wrapper with no decision logic: it seeds the demo ledger,
//! builds the request from flags, and hands both to the orchestrator.

use clap::Parser;
use domain::{Money, OrderId, OrderRequest, UserId};
use ledger::Ledger;
use saga::{Fault, SagaOrchestrator, StepName};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "run_order")]
#[command(about = "Run one order through the saga and print its logs", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    order_id: u64,

    #[arg(long, default_value_t = 1)]
    user_id: u64,

    #[arg(long, default_value = "ITEM001")]
    sku: String,

    #[arg(long, default_value_t = 1)]
    qty: u32,

    /// Promo code to apply, if any.
    #[arg(long)]
    promo: Option<String>,

    /// Step name to fail at artificially (e.g. FinalizeOrder).
    #[arg(long)]
    fail_at: Option<StepName>,
}

fn seed(ledger: &mut Ledger) {
    ledger.add_user(UserId::new(1), Money::from_dollars(1000));
    ledger.add_user(UserId::new(2), Money::from_dollars(50));

    ledger.add_item("ITEM001", Money::from_dollars(100), 10);
    ledger.add_item("ITEM002", Money::from_dollars(100), 5);

    ledger.add_promo("DISCOUNT10", 5, Money::from_dollars(10));
    ledger.add_promo("EXPIRED", 0, Money::from_dollars(15));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut ledger = Ledger::new();
    seed(&mut ledger);

    let mut req = OrderRequest::new(
        OrderId::new(args.order_id),
        UserId::new(args.user_id),
        args.sku,
        args.qty,
    );
    if let Some(promo) = args.promo {
        req = req.with_promo(promo);
    }
    let fault = match args.fail_at {
        Some(step) => Fault::FailBeforeStep(step),
        None => Fault::None,
    };

    let success = SagaOrchestrator::new(&mut ledger).execute(&req, fault)?;

    println!("\n=== RESULT ===");
    println!("success: {success}");
    println!("{}", serde_json::to_string_pretty(&ledger)?);
    Ok(())
}

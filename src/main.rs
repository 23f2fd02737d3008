use std::{env, error::Error, fs, process::ExitCode};

use ticket_purchase::{
    services::in_memory::{CallLog, InMemoryPaymentService, InMemorySeatReservationService},
    PurchasePolicy, RawTicketRequest, TicketService,
};

const POLICY_PATH_ENV: &str = "TICKET_POLICY_PATH";

// ticket-purchase <account-id> <TYPE=QTY>...
// e.g. ticket-purchase 100 ADULT=2 CHILD=1 INFANT=1
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let account_id: i64 = args
        .next()
        .ok_or("usage: ticket-purchase <account-id> <TYPE=QTY>...")?
        .parse()?;
    let requests = args
        .map(|arg| parse_request(&arg))
        .collect::<Result<Vec<_>, _>>()?;

    let policy = match env::var(POLICY_PATH_ENV) {
        Ok(path) => PurchasePolicy::from_json_str(&fs::read_to_string(path)?)?,
        Err(_) => PurchasePolicy::default(),
    };

    let log = CallLog::new();
    let service = TicketService::with_policy(
        InMemoryPaymentService::with_call_log(log.clone()),
        InMemorySeatReservationService::with_call_log(log.clone()),
        policy,
    );

    let result = service.purchase_raw(account_id, &requests).await;
    for call in log.calls() {
        println!("{call:?}");
    }
    match result {
        Ok(()) => {
            println!("Purchase completed for account {account_id}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Purchase failed for account {account_id}: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn parse_request(arg: &str) -> Result<RawTicketRequest, Box<dyn Error>> {
    let (ticket_type, quantity) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TYPE=QTY, got {arg}"))?;
    let quantity: serde_json::Number = serde_json::from_str(quantity)?;
    Ok(RawTicketRequest {
        ticket_type: ticket_type.to_string(),
        quantity,
    })
}

//! Chains two fallible stages and collapses the result to pass/fail.
//!
//! Run with: `cargo run --example pipeline`

use outcome_rail::{fault, outcome, Fault, MessageFault, Outcome, Status};

fn fetch_payload() -> Outcome<&'static str, MessageFault> {
    outcome!(Ok::<_, std::num::ParseIntError>("8080")).map_failure(|e| fault!("fetch failed: {e}"))
}

fn parse_port(raw: &str) -> Outcome<u16, MessageFault> {
    Outcome::from_option(raw.parse().ok(), fault!("invalid port: {raw}"))
}

fn main() {
    let status: Status<MessageFault> = fetch_payload()
        .and_then(parse_port)
        .inspect(|port| println!("listening on port {port}"))
        .inspect_failure(|fault| eprintln!("pipeline failed: {}", fault.message()))
        .into_status();

    std::process::exit(if status.is_success() { 0 } else { 1 });
}

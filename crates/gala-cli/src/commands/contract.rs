use clap::Subcommand;
use gala_core::{Contract, CoreError};
use serde_json::json;

#[derive(Subcommand)]
pub enum ContractAction {
    /// Accept the contract
    Accept,
    /// Attempt to reject the contract (the attempt is denied)
    Reject,
}

pub fn run(action: ContractAction) -> Result<(), CoreError> {
    let mut contract = Contract::new();

    let event = match action {
        ContractAction::Accept => contract.accept(),
        ContractAction::Reject => contract.reject(),
    };

    if let Some(event) = event {
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "state": contract.state() }))?
    );
    Ok(())
}

//! `sales-engine` - replay a saved sale draft and print its payload
//!
//! ```text
//! sales-engine [draft.json]     # reads stdin when no path is given
//! ```
//!
//! The draft is `{ "header": {...}, "items": [ upstream records ] }`. The
//! outbound `SalePayload` is printed to stdout as JSON; logs go to stderr.

use anyhow::Context;
use sales_engine::boundary::SaleDraftInput;
use sales_engine::money::format_currency;
use sales_engine::{SalesManager, setup_environment};
use std::io::Read;

fn read_input() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    // 2. Parse the draft
    let text = read_input()?;
    let draft = SaleDraftInput::from_json(&text).context("invalid sale draft")?;
    let commands = draft.to_commands().context("invalid line record")?;

    // 3. Replay it through a fresh session (the first command sets the header)
    let mut manager = SalesManager::from_config(
        &config,
        draft.header.comprobante,
        draft.header.fecha_emision,
    );
    for payload in commands {
        let response = manager.execute(payload);
        if let Some(message) = response.user_message() {
            tracing::warn!(%message, "Line not added");
        }
    }

    for (label, amount) in manager.totals().display(&config.currency_symbol) {
        tracing::info!("{label}: {amount}");
    }

    // 4. Build and print the payload
    let payload = manager.build_payload().context("sale cannot be submitted")?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    tracing::debug!(
        total = %format_currency(manager.totals().total, &config.currency_symbol),
        "Done"
    );
    Ok(())
}

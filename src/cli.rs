//! Command-line arguments shared by the `refactored` and `violates` binaries.

use std::io::Write;

use clap::Parser;

use crate::features::{CustomerStatement, Money, DEFAULT_CUSTOMER_NAME};

/// Runs one store checkout against a single customer.
///
/// With no arguments a customer holding $100 pays $25.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Name used in progress lines
    #[clap(long, default_value = DEFAULT_CUSTOMER_NAME)]
    pub name: String,

    /// Starting balance of the customer's wallet
    #[clap(long, default_value = "100")]
    pub balance: Money,

    /// Amount the store asks for
    #[clap(long, default_value = "25", allow_hyphen_values = true)]
    pub amount: Money,

    /// Print the customer's final state as JSON after the checkout
    #[clap(long)]
    pub final_state: bool,
}

/// Writes the customer as it was before the checkout ran.
pub fn write_original_state<W: Write>(
    statement: &CustomerStatement,
    out: &mut W,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(statement)?;
    writeln!(out, "Original state was not changed: {json}")?;
    Ok(())
}

pub fn write_final_state<W: Write>(
    statement: &CustomerStatement,
    out: &mut W,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(statement)?;
    writeln!(out, "Final state: {json}")?;
    Ok(())
}

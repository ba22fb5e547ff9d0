use std::io::{self, Write};
use std::process;
#[macro_use]
extern crate log;

use anyhow::Context;
use clap::Parser;
use demeter_payments::cli::{write_final_state, write_original_state, Args};
use demeter_payments::refactored::{Customer, Store};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut customer = Customer::with_name(args.name, args.balance);
    let store = Store::new();
    let original = customer.statement();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = store
        .process_payment(&mut customer, args.amount, &mut out)
        .context("Unable to process payment")?;
    info!("Checkout finished: {outcome:?}");

    if args.final_state {
        write_original_state(&original, &mut out)?;
        write_final_state(&customer.statement(), &mut out)?;
    }
    out.flush()?;

    Ok(())
}

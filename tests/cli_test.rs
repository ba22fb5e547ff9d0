use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn refactored_demo_checkout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("refactored")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Store is requesting payment from customer...",
        ))
        .stdout(predicate::str::contains(
            "Customer is making a payment of $25",
        ))
        .stdout(predicate::str::contains(
            "Payment processed. Customer now has $75 left.",
        ));

    Ok(())
}

#[test]
fn violates_demo_checkout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("violates")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Store is processing payment..."))
        .stdout(predicate::str::contains(
            "Payment successful. Customer has $75 left.",
        ));

    Ok(())
}

#[test]
fn refactored_declines_without_failing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("refactored")?;
    cmd.args(["--balance", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Customer has insufficient funds."))
        .stdout(predicate::str::contains("$10 left"));

    Ok(())
}

#[test]
fn violates_reports_from_the_wallet() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("violates")?;
    cmd.args(["--balance", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Error: Insufficient funds in wallet"))
        .stdout(predicate::str::contains("has insufficient funds").not())
        .stdout(predicate::str::contains("$10 left"));

    Ok(())
}

#[test]
fn exact_balance_empties_the_wallet() -> Result<(), Box<dyn std::error::Error>> {
    for bin in ["refactored", "violates"] {
        let mut cmd = Command::cargo_bin(bin)?;
        cmd.args(["--balance", "25", "--amount", "25"]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("$0 left"))
            .stdout(predicate::str::contains("nsufficient").not());
    }

    Ok(())
}

#[test]
fn final_state_is_printed_on_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("refactored")?;
    cmd.args(["--name", "Bob", "--final-state"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bob is making a payment of $25"))
        .stdout(predicate::str::contains(
            r#"Original state was not changed: {"name":"Bob","balance":"100.00"}"#,
        ))
        .stdout(predicate::str::contains(
            r#"Final state: {"name":"Bob","balance":"75.00"}"#,
        ));

    Ok(())
}

#[test]
fn negative_amount_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("refactored")?;
    cmd.args(["--amount", "-5"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    Ok(())
}

#[test]
fn fraction_of_a_cent_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    for bin in ["refactored", "violates"] {
        let mut cmd = Command::cargo_bin(bin)?;
        cmd.args(["--balance", "0", "--amount", "0.004"]);

        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("more than two decimal places"))
            .stdout(predicate::str::is_empty());
    }

    Ok(())
}

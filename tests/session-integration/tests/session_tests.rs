//! End-to-end session scenarios driven through the scripted-console
//! harness. Each script is the exact line sequence a user would type:
//! language choice, name, password, menu selections, and the final line
//! that releases the hold-open read.

use tuckshop_cli::session::SessionEnd;
use tuckshop_common::catalog::Catalog;
use tuckshop_common::locale::Language;
use tuckshop_common::money::Money;

use tuckshop_session_integration::{make_product, make_user, run_script, sample_catalog};

#[test]
fn full_purchase_flow_reports_success_and_new_balance() {
    let outcome = run_script("1\nJason\nsfa\n1\n1\n3\n\n", sample_catalog(), None);

    assert_eq!(outcome.end, SessionEnd::Exited);
    assert!(outcome.transcript.contains("Welcome back, Jason!"));
    assert!(outcome.transcript.contains("You want to buy: Chips"));
    assert!(outcome.transcript.contains("You bought 1 Chips."));
    assert!(outcome.transcript.contains("Your new balance is $8.00."));
    assert_eq!(outcome.catalog.users[0].balance, Money::from_dollars(8));
}

#[test]
fn purchase_decrements_stock_and_balance() {
    // The original observed implementation debited the balance but left
    // stock untouched; this asserts the corrected behavior.
    let outcome = run_script("1\nJason\nsfa\n1\n2\n3\n\n", sample_catalog(), None);

    assert_eq!(outcome.catalog.users[0].balance, Money::from_dollars(6));
    assert_eq!(outcome.catalog.products[0].quantity, 3);
}

#[test]
fn exit_persists_final_catalog_state() {
    let outcome = run_script("1\nJason\nsfa\n1\n1\n3\n\n", sample_catalog(), None);

    let persisted = outcome.store.load().expect("exit should have saved");
    assert_eq!(persisted, outcome.catalog);
    assert_eq!(persisted.users[0].balance, Money::from_dollars(8));
    assert_eq!(persisted.products[0].quantity, 4);
}

#[test]
fn menu_lists_products_and_exit_entry() {
    let outcome = run_script("1\nJason\nsfa\n3\n\n", sample_catalog(), None);

    assert!(outcome.transcript.contains("1: Chips ($2.00)"));
    assert!(outcome.transcript.contains("2: Candy ($1.50)"));
    assert!(outcome.transcript.contains("Type 3 to exit."));
}

#[test]
fn blank_name_cancels_without_password_or_persistence() {
    let outcome = run_script("1\n\n\n", sample_catalog(), None);

    assert_eq!(outcome.end, SessionEnd::LoginCancelled);
    assert!(!outcome.transcript.contains("Enter your password:"));
    assert!(outcome.store.load().is_err(), "cancel must not persist");
}

#[test]
fn whitespace_only_name_also_cancels() {
    let outcome = run_script("1\n   \n\n", sample_catalog(), None);
    assert_eq!(outcome.end, SessionEnd::LoginCancelled);
}

#[test]
fn unknown_user_reports_and_allows_retry() {
    let outcome = run_script("1\nJoel\nJason\nsfa\n3\n\n", sample_catalog(), None);

    assert!(outcome.transcript.contains("Unknown user name."));
    assert_eq!(outcome.end, SessionEnd::Exited);
}

#[test]
fn wrong_password_restarts_from_name_prompt() {
    let outcome = run_script("1\nJason\nsfb\nJason\nsfa\n3\n\n", sample_catalog(), None);

    assert!(outcome.transcript.contains("Incorrect password."));
    // After the failure the name prompt appears again.
    assert_eq!(
        outcome
            .transcript
            .matches("Enter your name (leave blank to quit):")
            .count(),
        2
    );
    assert_eq!(outcome.end, SessionEnd::Exited);
}

#[test]
fn zero_quantity_is_rejected_and_nothing_changes() {
    let outcome = run_script("1\nJason\nsfa\n1\n0\n3\n\n", sample_catalog(), None);

    assert!(outcome
        .transcript
        .contains("You cannot buy less than one item."));
    assert_eq!(outcome.catalog.users[0].balance, Money::from_dollars(10));
    assert_eq!(outcome.catalog.products[0].quantity, 5);
}

#[test]
fn insufficient_funds_leaves_balance_at_zero() {
    let catalog = Catalog::new(
        vec![make_user("Jason", "sfa", 0)],
        vec![make_product("Chips", 200, 5)],
    );
    let outcome = run_script("1\nJason\nsfa\n1\n1\n2\n\n", catalog, None);

    assert!(outcome
        .transcript
        .contains("You do not have enough money to buy that."));
    assert_eq!(outcome.catalog.users[0].balance, Money::ZERO);
    assert_eq!(outcome.catalog.products[0].quantity, 5);
}

#[test]
fn out_of_stock_names_the_product() {
    let catalog = Catalog::new(
        vec![make_user("Jason", "sfa", 1000)],
        vec![make_product("Chips", 200, 0)],
    );
    let outcome = run_script("1\nJason\nsfa\n1\n1\n2\n\n", catalog, None);

    assert!(outcome.transcript.contains("Sorry, Chips is out of stock."));
    assert_eq!(outcome.catalog.users[0].balance, Money::from_dollars(10));
}

#[test]
fn insufficient_stock_names_the_available_count() {
    let outcome = run_script("1\nJason\nsfa\n2\n4\n3\n\n", sample_catalog(), None);

    assert!(outcome
        .transcript
        .contains("Sorry, there are only 3 of Candy left."));
    assert_eq!(outcome.catalog.products[1].quantity, 3);
}

#[test]
fn non_integer_input_reprompts_without_mutating() {
    let outcome = run_script(
        "1\nJason\nsfa\nabc\n!!\n1.5\n3\n\n",
        sample_catalog(),
        None,
    );

    assert_eq!(outcome.end, SessionEnd::Exited);
    // One prompt per rejected line, plus the one that finally parsed.
    assert_eq!(outcome.transcript.matches("Enter a number:").count(), 4);
    assert_eq!(outcome.catalog, sample_catalog());
}

#[test]
fn out_of_range_selections_report_invalid() {
    // 9 (past exit), 0 and -1 (below the menu) all loop back.
    let outcome = run_script("1\nJason\nsfa\n9\n0\n-1\n3\n\n", sample_catalog(), None);

    assert_eq!(
        outcome
            .transcript
            .matches("That is not a valid selection.")
            .count(),
        3
    );
    assert_eq!(outcome.end, SessionEnd::Exited);
    assert_eq!(outcome.catalog.users[0].balance, Money::from_dollars(10));
}

#[test]
fn language_menu_reprompts_until_valid() {
    let outcome = run_script("x\n9\n1\nJason\nsfa\n3\n\n", sample_catalog(), None);

    assert_eq!(
        outcome
            .transcript
            .matches("For service in English enter 1")
            .count(),
        3
    );
    assert_eq!(outcome.end, SessionEnd::Exited);
}

#[test]
fn french_session_renders_french_messages_and_amounts() {
    let outcome = run_script("2\nJason\nsfa\n1\n1\n3\n\n", sample_catalog(), None);

    assert!(outcome.transcript.contains("Bon retour, Jason !"));
    assert!(outcome.transcript.contains("Vous avez acheté 1 Chips."));
    assert!(outcome
        .transcript
        .contains("Votre nouveau solde est de 8,00 $."));
    assert!(outcome.transcript.contains("1: Chips (2,00 $)"));
}

#[test]
fn preselected_language_skips_the_menu() {
    let outcome = run_script(
        "Jason\nsfa\n3\n\n",
        sample_catalog(),
        Some(Language::French),
    );

    assert!(!outcome.transcript.contains("For service in English"));
    assert!(outcome.transcript.contains("Entrez votre nom"));
    assert_eq!(outcome.end, SessionEnd::Exited);
}

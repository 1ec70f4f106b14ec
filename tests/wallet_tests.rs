use chrono::NaiveDate;
use wallet_core::{
    core::{services::TransferService, Wallet},
    domain::Contact,
    storage::FixtureSet,
};

fn wallet() -> Wallet {
    Wallet::from_fixtures(&FixtureSet::bundled().expect("bundled fixtures"))
}

#[test]
fn starts_from_wallet_fixture() {
    let wallet = wallet();
    assert_eq!(wallet.balance(), 2450.0);
    assert_eq!(wallet.currency(), "USD");
    assert_eq!(wallet.goal().title, "New Laptop");
}

#[test]
fn append_reconciles_stored_balance() {
    let mut wallet = wallet();
    let before = wallet.transactions().len();
    let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();

    let added = wallet.add_transaction("Tutoring", 80.0, today).unwrap();
    assert_eq!(added.date.as_deref(), Some("July 4"));

    wallet.add_transaction("Lunch", -12.5, today).unwrap();
    assert_eq!(wallet.balance(), 2450.0 + 80.0 - 12.5);
    assert_eq!(wallet.transactions().len(), before + 2);
    assert_eq!(wallet.transactions()[0].label(), "Lunch");
    assert_eq!(wallet.transactions()[1].label(), "Tutoring");
}

#[test]
fn goal_progress_from_fixture() {
    let mut wallet = wallet();
    assert_eq!(wallet.goal().progress(), 650.0 / 1200.0);
    wallet.update_goal(1200.0);
    assert_eq!(wallet.goal().progress(), 1.0);
}

#[test]
fn send_to_bundled_contact() {
    let fixtures = FixtureSet::bundled().expect("bundled fixtures");
    let ana = fixtures
        .contacts
        .iter()
        .find(|contact| contact.name == "Ana")
        .expect("Ana in contacts");
    let confirmation = TransferService::send(Some(ana), "50").unwrap();
    assert_eq!(confirmation.title, "Success!");
    assert_eq!(confirmation.message, "You sent $50.00 to Ana");

    let nobody: Option<&Contact> = None;
    assert!(TransferService::send(nobody, "50").is_err());
}

#[test]
fn convert_between_listed_currencies() {
    let conversion = TransferService::convert("100", "USD", "EUR").unwrap();
    assert_eq!(conversion.converted, 92.0);
    assert_eq!(conversion.summary(), "100.00 USD = 92.00 EUR");

    let unknown = TransferService::convert("100", "USD", "CHF").unwrap();
    assert_eq!(unknown.rate, 1.0);
}

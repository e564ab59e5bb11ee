//! Mock data the dashboard starts with. Seeded records bypass validation.

use chrono::NaiveDate;

use crate::domain::account::{
    Account, AccountDetails, AccountKind, AccountSummary, Activity, ActivityKind, ActivityStatus,
    SpendingCategory,
};
use crate::domain::payee::Payee;
use crate::domain::payment::{Frequency, Payment, PaymentStatus};

const HOLDER: &str = "Jane Doe";
const ADDRESS: &str = "123 Main St, Anytown, USA";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn payees() -> Vec<Payee> {
    vec![
        Payee::new("City Electric Co.", "100200300")
            .with_id("payee_1")
            .with_category("Utilities"),
        Payee::new("AquaFlow Water", "AFW98765")
            .with_id("payee_2")
            .with_category("Utilities"),
        Payee::new("ConnectNet Broadband", "CNB123123")
            .with_id("payee_3")
            .with_category("Internet"),
        Payee::new("Prime Credit Card", "4444555566667777")
            .with_id("payee_4")
            .with_category("Credit Card"),
    ]
}

fn payment(
    id: &str,
    payee_id: &str,
    payee_name: &str,
    amount: f64,
    payment_date: NaiveDate,
    status: PaymentStatus,
    frequency: Frequency,
) -> Payment {
    Payment {
        id: id.into(),
        payee_id: payee_id.into(),
        payee_name: payee_name.into(),
        amount,
        payment_date,
        status,
        frequency,
    }
}

pub fn upcoming_payments() -> Vec<Payment> {
    vec![
        payment(
            "up_1",
            "payee_1",
            "City Electric Co.",
            75.50,
            date(2024, 8, 15),
            PaymentStatus::Scheduled,
            Frequency::Monthly,
        ),
        payment(
            "up_2",
            "payee_3",
            "ConnectNet Broadband",
            59.99,
            date(2024, 8, 20),
            PaymentStatus::Scheduled,
            Frequency::Monthly,
        ),
    ]
}

pub fn payment_history() -> Vec<Payment> {
    vec![
        payment(
            "ph_1",
            "payee_1",
            "City Electric Co.",
            72.30,
            date(2024, 7, 15),
            PaymentStatus::Paid,
            Frequency::Monthly,
        ),
        payment(
            "ph_2",
            "payee_4",
            "Prime Credit Card",
            250.00,
            date(2024, 7, 10),
            PaymentStatus::Paid,
            Frequency::OneTime,
        ),
        payment(
            "ph_3",
            "payee_2",
            "AquaFlow Water",
            45.00,
            date(2024, 7, 5),
            PaymentStatus::Paid,
            Frequency::Monthly,
        ),
    ]
}

/// Accounts offered by the transfer selectors.
pub fn transfer_accounts() -> Vec<Account> {
    vec![
        Account::new("acc_chk_001", "Main Checking", AccountKind::Checking, 5250.75)
            .with_number("•••• 1234"),
        Account::new("acc_sav_002", "High-Yield Savings", AccountKind::Savings, 12800.20)
            .with_number("•••• 5678"),
        Account::new("acc_bus_003", "Business Account", AccountKind::Checking, 27300.00)
            .with_number("•••• 9012"),
    ]
}

fn activity(
    id: &str,
    on: NaiveDate,
    description: &str,
    amount: f64,
    kind: ActivityKind,
    status: ActivityStatus,
) -> Activity {
    Activity {
        id: id.into(),
        date: on,
        description: description.into(),
        amount,
        currency: "USD".into(),
        kind,
        status,
    }
}

fn details(opened: NaiveDate, rate: &str) -> AccountDetails {
    AccountDetails {
        holder_name: HOLDER.into(),
        opened_date: opened,
        interest_rate: Some(rate.into()),
        address: Some(ADDRESS.into()),
    }
}

/// Accounts with details and activity for the accounts view.
pub fn accounts() -> Vec<Account> {
    use ActivityKind::{Credit, Debit};
    use ActivityStatus::{Completed, Failed, Pending};

    vec![
        Account::new("acc_chk_001", "Primary Checking", AccountKind::Checking, 5250.75)
            .with_number("•••• 6789")
            .with_details(details(date(2018, 5, 15), "0.01%"))
            .with_activity(vec![
                activity("txn_c001", date(2024, 7, 29), "Grocery Store Run", 75.20, Debit, Completed),
                activity("txn_c002", date(2024, 7, 28), "Monthly Salary Deposit", 2500.00, Credit, Completed),
                activity("txn_c003", date(2024, 7, 27), "Online Purchase - Tech Gadgets", 120.50, Debit, Pending),
                activity("txn_c004", date(2024, 7, 26), "ATM Withdrawal", 100.00, Debit, Completed),
            ]),
        Account::new("acc_sav_002", "High-Yield Savings", AccountKind::Savings, 12870.00)
            .with_number("•••• 1234")
            .with_details(details(date(2020, 1, 20), "1.50%"))
            .with_activity(vec![
                activity("txn_s001", date(2024, 7, 25), "Quarterly Interest Payment", 45.80, Credit, Completed),
                activity("txn_s002", date(2024, 7, 1), "Transfer from Checking", 500.00, Credit, Completed),
            ]),
        Account::new("acc_cc_003", "Platinum Rewards Card", AccountKind::CreditCard, -750.45)
            .with_number("•••• 5678")
            .with_details(details(date(2019, 11, 1), "18.99%"))
            .with_activity(vec![
                activity("txn_cc001", date(2024, 7, 29), "Dinner at \"The Gourmet Place\"", 65.00, Debit, Completed),
                activity("txn_cc002", date(2024, 7, 20), "Payment to Credit Card", 300.00, Credit, Completed),
                activity("txn_cc003", date(2024, 7, 15), "Flight Ticket - Round Trip", 450.25, Debit, Completed),
                activity("txn_cc004", date(2024, 7, 10), "Subscription - Music Streaming", 9.99, Debit, Failed),
            ]),
    ]
}

fn summary(
    id: &str,
    name: &str,
    number: &str,
    balance: f64,
    account_type: &str,
) -> AccountSummary {
    AccountSummary {
        account_id: id.into(),
        account_name: name.into(),
        account_number: number.into(),
        balance,
        account_type: Some(account_type.into()),
    }
}

/// Cards on the dashboard overview.
pub fn account_summaries() -> Vec<AccountSummary> {
    vec![
        summary("acc_chk_001", "Primary Checking", "123456789012", 15250.75, "Checking Account"),
        summary("acc_sav_002", "High-Yield Savings", "987654321098", 48750.20, "Savings Account"),
        summary("acc_crd_003", "Platinum Rewards Card", "4444********1234", -750.50, "Credit Card"),
    ]
}

pub fn spending() -> Vec<SpendingCategory> {
    [
        ("Groceries", 350.75),
        ("Utilities", 180.20),
        ("Dining Out", 220.50),
        ("Transport", 120.00),
        ("Shopping", 410.00),
    ]
    .into_iter()
    .map(|(category, amount)| SpendingCategory {
        category: category.into(),
        amount,
    })
    .collect()
}

/// Newest first.
pub fn recent_transactions() -> Vec<Activity> {
    use ActivityKind::{Credit, Debit};
    use ActivityStatus::{Completed, Failed, Pending};

    vec![
        activity("txn_1", date(2024, 7, 28), "Monthly Streaming Service", 15.99, Debit, Completed),
        activity("txn_2", date(2024, 7, 27), "Online Purchase - Books & Stationery Supplies Inc.", 45.50, Debit, Completed),
        activity("txn_3", date(2024, 7, 26), "Client Payment Received", 1200.00, Credit, Completed),
        activity("txn_4", date(2024, 7, 25), "Utility Bill - Electricity", 75.20, Debit, Pending),
        activity("txn_5", date(2024, 7, 24), "Restaurant Dinner with Friends", 62.00, Debit, Completed),
        activity("txn_6", date(2024, 7, 23), "Refund Processed - Item Returned", 22.50, Credit, Failed),
        activity("txn_7", date(2024, 7, 22), "Coffee Shop Purchase", 5.75, Debit, Completed),
    ]
}

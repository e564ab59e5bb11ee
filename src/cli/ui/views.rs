//! Text renderings of the dashboard pages.

use crate::core::services::{SearchHit, SpendingShare};
use crate::currency::{
    format_currency, format_date, format_signed, mask_account_number, DateStyle,
};
use crate::domain::account::{Account, AccountSummary, Activity};
use crate::domain::payee::Payee;
use crate::domain::payment::Payment;

use super::table::{Table, TableColumn};

pub const NO_PAYEES: &str = "No payees added yet.";
pub const NO_UPCOMING: &str = "No upcoming payments.";
pub const NO_HISTORY: &str = "No payment history found.";

/// Amounts in every renderer carry the `currency` display symbol; values are not converted.
pub fn account_cards(summaries: &[AccountSummary], currency: &str) -> String {
    Table::new(vec![
        TableColumn::left("Account"),
        TableColumn::left("Type"),
        TableColumn::left("Number"),
        TableColumn::right("Balance"),
    ])
    .with_rows(summaries.iter().map(|summary| {
        vec![
            summary.account_name.clone(),
            summary.account_type.clone().unwrap_or_default(),
            mask_account_number(&summary.account_number),
            format_currency(summary.balance, currency),
        ]
    }))
    .render()
}

pub fn spending(shares: &[SpendingShare], total: f64, currency: &str) -> String {
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::right("Share"),
    ]);
    for share in shares {
        table.push_row(vec![
            share.category.clone(),
            format_currency(share.amount, currency),
            format!("{:.1}%", share.percent),
        ]);
    }
    table.push_row(vec![
        "Total".into(),
        format_currency(total, currency),
        String::new(),
    ]);
    table.render()
}

pub fn activity(entries: &[Activity], style: DateStyle, currency: &str) -> String {
    Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Description").max_width(40),
        TableColumn::right("Amount"),
        TableColumn::left("Status"),
    ])
    .empty_message("No transactions found for this account.")
    .with_rows(entries.iter().map(|entry| {
        vec![
            format_date(entry.date, style),
            entry.description.clone(),
            format_signed(entry.signed_amount(), currency),
            entry.status.to_string(),
        ]
    }))
    .render()
}

pub fn account_list(accounts: &[Account], selected: Option<&str>, currency: &str) -> String {
    Table::new(vec![
        TableColumn::left(""),
        TableColumn::left("ID"),
        TableColumn::left("Account"),
        TableColumn::left("Type"),
        TableColumn::right("Balance"),
    ])
    .with_rows(accounts.iter().map(|account| {
        let marker = if Some(account.id.as_str()) == selected { ">" } else { "" };
        vec![
            marker.to_string(),
            account.id.clone(),
            account.name.clone(),
            account.kind.to_string(),
            format_currency(account.balance, currency),
        ]
    }))
    .render()
}

pub fn account_details(account: &Account, currency: &str) -> String {
    let mut lines = vec![
        format!("{} Account: {}", account.kind, account.number),
        format!(
            "Current Balance: {}",
            format_currency(account.balance, currency)
        ),
    ];
    if let Some(details) = &account.details {
        lines.push(format!("Account Holder: {}", details.holder_name));
        lines.push(format!(
            "Opened On: {}",
            format_date(details.opened_date, DateStyle::Medium)
        ));
        if let Some(rate) = &details.interest_rate {
            lines.push(format!("Interest Rate: {}", rate));
        }
        if let Some(address) = &details.address {
            lines.push(format!("Address: {}", address));
        }
    }
    lines.join("\n")
}

pub fn payees(payees: &[Payee]) -> String {
    Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Name"),
        TableColumn::left("Account Number"),
        TableColumn::left("Category"),
    ])
    .empty_message(NO_PAYEES)
    .with_rows(payees.iter().map(|payee| {
        vec![
            payee.id.clone(),
            payee.name.clone(),
            payee.account_number.clone(),
            payee.category_label().to_string(),
        ]
    }))
    .render()
}

pub fn payments(payments: &[Payment], empty: &str, currency: &str) -> String {
    Table::new(vec![
        TableColumn::left("Payee"),
        TableColumn::right("Amount"),
        TableColumn::left("Date"),
        TableColumn::left("Frequency"),
        TableColumn::left("Status"),
    ])
    .empty_message(empty)
    .with_rows(payments.iter().map(|payment| {
        vec![
            payment.payee_name.clone(),
            format_currency(payment.amount, currency),
            payment.payment_date.format("%Y-%m-%d").to_string(),
            payment.frequency.to_string(),
            payment.status.to_string(),
        ]
    }))
    .render()
}

pub fn search_results(hits: &[SearchHit<'_>], currency: &str) -> String {
    Table::new(vec![
        TableColumn::left("Kind"),
        TableColumn::left("Match").max_width(48),
        TableColumn::left("Detail"),
    ])
    .empty_message("No matches.")
    .with_rows(hits.iter().map(|hit| match hit {
        SearchHit::Payee(payee) => vec![
            "Payee".into(),
            payee.name.clone(),
            payee.category_label().to_string(),
        ],
        SearchHit::Payment(payment) => vec![
            "Payment".into(),
            payment.payee_name.clone(),
            format!(
                "{} on {} ({})",
                format_currency(payment.amount, currency),
                payment.payment_date,
                payment.status
            ),
        ],
        SearchHit::Activity { account, activity } => vec![
            "Activity".into(),
            activity.description.clone(),
            format!(
                "{} {}",
                account.name,
                format_signed(activity.signed_amount(), currency)
            ),
        ],
    }))
    .render()
}

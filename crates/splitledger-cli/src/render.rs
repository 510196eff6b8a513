//! Plain-text rendering for terminal output.

use rust_decimal::Decimal;
use splitledger_types::{ParticipantSummary, Transfer};

fn fixed(value: Decimal, precision: u32) -> String {
    format!("{value:.prec$}", prec = precision as usize)
}

/// Signed amount: `+60.00`, `-30.00`, `0.00`.
pub fn signed(value: Decimal, precision: u32) -> String {
    if value > Decimal::ZERO {
        format!("+{}", fixed(value, precision))
    } else {
        fixed(value, precision)
    }
}

/// One line per participant: name, paid, owed, balance.
pub fn summary_table(rows: &[ParticipantSummary], total: Decimal, precision: u32) -> String {
    if rows.is_empty() {
        return "No participants.\n".to_string();
    }

    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0).max(4);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}",
        "Name", "Paid", "Owed", "Balance"
    ));
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}",
            row.name,
            fixed(row.summary.total_paid, precision),
            fixed(row.summary.total_should, precision),
            signed(row.summary.balance, precision),
        )
    }));
    lines.push(format!("Total expenses: {}", fixed(total, precision)));
    join_lines(&lines)
}

/// Numbered transfer list, or a note that nothing is owed.
pub fn transfer_list(transfers: &[Transfer], precision: u32) -> String {
    if transfers.is_empty() {
        return "Already balanced: no transfers needed.\n".to_string();
    }

    let lines: Vec<String> = transfers
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            format!(
                "{}. {} -> {}: {}",
                idx + 1,
                t.from,
                t.to,
                fixed(t.amount, precision)
            )
        })
        .collect();
    join_lines(&lines)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

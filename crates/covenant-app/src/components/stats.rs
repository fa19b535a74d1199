//! Treasury stat cards for the dashboard header.

use covenant::format::format_token_amount;
use covenant::{TreasuryStats, TOKEN_DECIMALS, TOKEN_SYMBOL};
use leptos::*;

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

/// The four headline figures above the commitments table.
#[component]
pub fn StatsRow(stats: TreasuryStats) -> impl IntoView {
    let locked = format!(
        "{} {}",
        format_token_amount(stats.total_locked, TOKEN_DECIMALS),
        TOKEN_SYMBOL
    );
    let settled = format!(
        "{} {}",
        format_token_amount(stats.total_settled, TOKEN_DECIMALS),
        TOKEN_SYMBOL
    );

    view! {
        <div class="stats-row">
            <StatCard label="Locked in escrow" value=locked />
            <StatCard label="Settled all-time" value=settled />
            <StatCard label="Active commitments" value=stats.active_commitments.to_string() />
            <StatCard label="Members" value=stats.members.to_string() />
        </div>
    }
}

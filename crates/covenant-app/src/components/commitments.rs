//! Commitments table and the per-commitment detail card.

use covenant::format::{format_token_amount, short_address};
use covenant::{ChainConfig, Commitment, CommitmentStatus, TOKEN_DECIMALS, TOKEN_SYMBOL};
use leptos::*;

use crate::components::Countdown;

fn amount_label(c: &Commitment) -> String {
    format!(
        "{} {}",
        format_token_amount(c.amount, TOKEN_DECIMALS),
        TOKEN_SYMBOL
    )
}

fn days_ago(then: u64, now: u64) -> String {
    let days = now.saturating_sub(then) / 86_400;
    if days == 0 {
        "today".to_string()
    } else {
        format!("{}d ago", days)
    }
}

/// The dashboard table. Row intents (inspect, create) are relayed up
/// through the writer props; no protocol state lives here.
#[component]
pub fn CommitmentsTable(
    commitments: Vec<Commitment>,
    now: ReadSignal<u64>,
    on_select: WriteSignal<Option<u64>>,
    on_create: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <section class="commitments">
            <div class="commitments-header">
                <h2>"Commitments"</h2>
                <button class="btn btn-primary" on:click=move |_| on_create.set(true)>
                    "New Commitment"
                </button>
            </div>
            <table class="commitments-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Beneficiary"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th>"Deadline"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {commitments.iter().map(|c| {
                        let id = c.id;
                        let settled = c.status == CommitmentStatus::Settled;
                        let deadline = c.deadline;
                        view! {
                            <tr>
                                <td class="commitment-id">{format!("#{}", id)}</td>
                                <td><code>{short_address(&c.beneficiary)}</code></td>
                                <td>{amount_label(c)}</td>
                                <td>
                                    <span class=c.status.badge_class()>{c.status.as_str()}</span>
                                </td>
                                <td>
                                    {if settled {
                                        view! { <span class="countdown">"-"</span> }.into_view()
                                    } else {
                                        view! { <Countdown deadline=deadline now=now /> }.into_view()
                                    }}
                                </td>
                                <td>
                                    <button
                                        class="btn btn-secondary btn-sm"
                                        on:click=move |_| on_select.set(Some(id))
                                    >
                                        "View"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}

/// Expanded view of one commitment.
#[component]
pub fn CommitmentDetail(
    commitment: Commitment,
    now: ReadSignal<u64>,
    on_close: WriteSignal<Option<u64>>,
) -> impl IntoView {
    let config = ChainConfig::default();
    let settled = commitment.status == CommitmentStatus::Settled;
    let deadline = commitment.deadline;
    let funded = move || days_ago(commitment.funded_at, now.get());
    let settlement_link = commitment
        .settlement_tx
        .as_ref()
        .map(|tx| (config.tx_url(tx), tx.clone()));

    view! {
        <div class="commitment-detail">
            <div class="detail-header">
                <h3>{format!("Commitment #{}", commitment.id)}</h3>
                <button class="btn btn-secondary btn-sm" on:click=move |_| on_close.set(None)>
                    "Close"
                </button>
            </div>
            <dl class="detail-grid">
                <dt>"Status"</dt>
                <dd>
                    <span class=commitment.status.badge_class()>{commitment.status.as_str()}</span>
                </dd>
                <dt>"Beneficiary"</dt>
                <dd><code>{format!("{}", commitment.beneficiary)}</code></dd>
                <dt>"Amount"</dt>
                <dd>{amount_label(&commitment)}</dd>
                <dt>"Funded"</dt>
                <dd>{funded}</dd>
                <dt>"Deadline"</dt>
                <dd>
                    {if settled {
                        view! { <span class="countdown">"Settled"</span> }.into_view()
                    } else {
                        view! { <Countdown deadline=deadline now=now /> }.into_view()
                    }}
                </dd>
            </dl>
            {settlement_link.map(|(url, tx)| view! {
                <p class="detail-settlement">
                    "Settlement: "
                    <a href=url target="_blank" class="tx-link">{tx}</a>
                </p>
            })}
        </div>
    }
}

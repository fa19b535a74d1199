//! DAO dashboard: treasury stats, the approve flow, and live commitments.

use covenant::format::format_token_amount;
use covenant::{ChainConfig, PaymentPhase, TOKEN_DECIMALS, TOKEN_SYMBOL};
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::allowance::{use_allowance, AllowanceHandle};
use crate::components::{CommitmentDetail, CommitmentsTable, StatsRow};
use crate::mock;
use crate::payment::{use_payment, PayOptions, PaymentHandle};
use crate::WalletSignal;

fn unix_now() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[component]
pub fn DaoPage() -> impl IntoView {
    let (wallet, _) = expect_context::<WalletSignal>();
    let payment = use_payment();
    let allowances = use_allowance();

    let (now, set_now) = create_signal(unix_now());
    spawn_local(async move {
        loop {
            TimeoutFuture::new(30_000).await;
            if set_now.try_set(unix_now()).is_some() {
                // Signal disposed; the page is gone.
                break;
            }
        }
    });

    // Token reads follow the wallet through connects and disconnects.
    create_effect(move |_| {
        let _ = wallet.get();
        spawn_local(async move { allowances.refresh().await });
    });

    let rows = mock::commitments(now.get_untracked());
    let stats = mock::treasury_stats(&rows);
    let detail_rows = rows.clone();

    let (selected, set_selected) = create_signal(None::<u64>);
    let (create_requested, set_create_requested) = create_signal(false);

    view! {
        <div class="page dao">
            <h1>"DAO Treasury"</h1>
            <p class="subtitle">"Live escrow commitments backed by CVT on Base Sepolia"</p>

            <StatsRow stats=stats />
            <ApprovePanel payment=payment allowances=allowances />

            <Show when=move || create_requested.get() fallback=|| ()>
                <p class="notice">
                    "Commitment creation opens with the next governance cycle."
                </p>
            </Show>

            <CommitmentsTable
                commitments=rows.clone()
                now=now
                on_select=set_selected
                on_create=set_create_requested
            />

            {move || {
                selected
                    .get()
                    .and_then(|id| detail_rows.iter().find(|c| c.id == id).cloned())
                    .map(|commitment| view! {
                        <CommitmentDetail commitment=commitment now=now on_close=set_selected />
                    })
            }}
        </div>
    }
}

/// Approve panel: grant the escrow contract a CVT allowance.
#[component]
fn ApprovePanel(payment: PaymentHandle, allowances: AllowanceHandle) -> impl IntoView {
    let (amount, set_amount) = create_signal(String::new());
    let session = payment.session();
    let allowance_value = allowances.allowance();
    let balance_value = allowances.balance();

    let on_approve = move |_| {
        let value = amount.get();
        // Re-read the on-chain allowance once the approval lands.
        let refresh = Callback::new(move |_hash: String| {
            spawn_local(async move {
                allowances.check_allowance().await;
            });
        });
        spawn_local(async move {
            payment
                .pay(PayOptions {
                    amount: value,
                    spender: None,
                    on_success: Some(refresh),
                    on_error: None,
                })
                .await;
        });
    };

    let status = move || {
        let s = session.get();
        match s.phase() {
            PaymentPhase::Idle => "Ready - approve the escrow to fund commitments".to_string(),
            PaymentPhase::Approving { amount, .. } => format!(
                "Approving {} {}...",
                format_token_amount(*amount, TOKEN_DECIMALS),
                TOKEN_SYMBOL
            ),
            PaymentPhase::Confirmed { .. } => "Allowance confirmed on-chain".to_string(),
            PaymentPhase::Failed { error } => format!("Error: {}", error),
        }
    };

    let terminal = move || {
        let s = session.get();
        s.tx_hash().is_some() || s.error().is_some()
    };

    view! {
        <div class="approve-panel demo-card">
            <h3>"Fund the Escrow"</h3>
            <p class="demo-description">
                "Approve the Covenant contract to pull CVT when you back a commitment."
            </p>

            <div class="approve-balances">
                <span>
                    {move || format!(
                        "Escrow allowance: {} {}",
                        format_token_amount(allowance_value.get(), TOKEN_DECIMALS),
                        TOKEN_SYMBOL
                    )}
                </span>
                <span>
                    {move || format!(
                        "Wallet balance: {} {}",
                        format_token_amount(balance_value.get(), TOKEN_DECIMALS),
                        TOKEN_SYMBOL
                    )}
                </span>
            </div>

            <div class="demo-controls">
                <input
                    type="text"
                    class="input"
                    placeholder="Amount in CVT"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button
                    class="btn btn-primary"
                    on:click=on_approve
                    disabled=move || session.get().is_loading()
                >
                    {move || if session.get().is_loading() { "Approving..." } else { "Approve Escrow" }}
                </button>
                <Show when=terminal fallback=|| ()>
                    <button class="btn btn-secondary" on:click=move |_| payment.reset()>
                        "Reset"
                    </button>
                </Show>
            </div>

            <div class="demo-status">
                <p class="status-text">{status}</p>
            </div>

            <Show
                when=move || session.get().tx_hash().is_some()
                fallback=|| ()
            >
                <div class="demo-tx">
                    <h4>"Approval Transaction"</h4>
                    <a
                        href=move || {
                            let s = session.get();
                            ChainConfig::default().tx_url(s.tx_hash().unwrap_or_default())
                        }
                        target="_blank"
                        class="tx-link"
                    >
                        {move || {
                            let s = session.get();
                            s.tx_hash().unwrap_or_default().to_string()
                        }}
                    </a>
                </div>
            </Show>
        </div>
    }
}

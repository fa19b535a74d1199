//! The approve-payment hook.
//!
//! Drives one approval attempt end to end: validate inputs, submit
//! `approve` through the wallet, poll for the receipt, and publish every
//! step through a [`PaymentSession`] signal. Failures become messages in
//! the session (and the optional error callback) -- `pay` never panics
//! and never throws across the JS boundary.

#![allow(dead_code)]

use covenant::{erc20, Address, CovenantError, PayRequest, PaymentSession};
use leptos::*;

use crate::{rpc, wallet, WalletSignal};

/// Options for [`PaymentHandle::pay`].
#[derive(Clone, Default)]
pub struct PayOptions {
    /// Human-readable CVT amount, e.g. "25" or "12.5".
    pub amount: String,
    /// Spender to authorize; defaults to the escrow contract.
    pub spender: Option<Address>,
    /// Invoked with the transaction hash after confirmation.
    pub on_success: Option<Callback<String>>,
    /// Invoked with the failure message, after it is stored in state.
    pub on_error: Option<Callback<String>>,
}

/// Handle returned by [`use_payment`].
#[derive(Clone, Copy)]
pub struct PaymentHandle {
    wallet: ReadSignal<crate::WalletState>,
    session: ReadSignal<PaymentSession>,
    set_session: WriteSignal<PaymentSession>,
}

/// Create a payment handle bound to the shared wallet context. Each call
/// owns an independent session signal.
pub fn use_payment() -> PaymentHandle {
    let (wallet, _) = expect_context::<WalletSignal>();
    let (session, set_session) = create_signal(PaymentSession::new());
    PaymentHandle {
        wallet,
        session,
        set_session,
    }
}

impl PaymentHandle {
    /// The live session state, for deriving UI from the current phase.
    pub fn session(&self) -> ReadSignal<PaymentSession> {
        self.session
    }

    /// Approve `spender` for `amount` CVT and wait for confirmation.
    ///
    /// Returns the approval transaction hash, or `None` on any failure.
    /// A call made while a previous one is still in flight is rejected
    /// immediately and does not disturb the running attempt.
    pub async fn pay(self, options: PayOptions) -> Option<String> {
        let PayOptions {
            amount,
            spender,
            on_success,
            on_error,
        } = options;

        if self.session.get_untracked().in_flight() {
            let message = CovenantError::ApprovalInFlight.to_string();
            web_sys::console::warn_1(&format!("pay: {}", message).into());
            if let Some(cb) = on_error {
                cb.call(message);
            }
            return None;
        }

        let owner = self.wallet.get_untracked().address;
        let request = match PayRequest::build(owner, &amount, spender) {
            Ok(request) => request,
            Err(e) => return self.fail(e.to_string(), on_error),
        };

        // Cannot be rejected: in_flight was checked above and nothing
        // has yielded since.
        self.set_session.update(|s| {
            let _ = s.begin(request.spender, request.amount);
        });

        let calldata = erc20::approve_calldata(request.spender, request.amount);
        let tx_hash =
            match wallet::send_transaction(request.owner, covenant::TOKEN, &calldata).await {
                Ok(hash) => hash,
                Err(e) => return self.fail(e, on_error),
            };

        if let Err(e) = rpc::wait_for_receipt(&tx_hash).await {
            return self.fail(e, on_error);
        }

        self.set_session.update(|s| s.confirm(tx_hash.clone()));
        if let Some(cb) = on_success {
            cb.call(tx_hash.clone());
        }
        Some(tx_hash)
    }

    /// `pay` with an explicit spender and no callbacks.
    pub async fn approve(self, amount: &str, spender: Address) -> Option<String> {
        self.pay(PayOptions {
            amount: amount.to_string(),
            spender: Some(spender),
            ..Default::default()
        })
        .await
    }

    /// Clear the session back to idle.
    pub fn reset(&self) {
        self.set_session.update(|s| s.reset());
    }

    fn fail(self, message: String, on_error: Option<Callback<String>>) -> Option<String> {
        web_sys::console::warn_1(&format!("pay failed: {}", message).into());
        self.set_session.update(|s| s.fail(message.clone()));
        if let Some(cb) = on_error {
            cb.call(message);
        }
        None
    }
}

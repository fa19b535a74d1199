//! Allowance and balance reads with the dashboard's zero-on-failure policy.
//!
//! A failed read is reported as zero, which the UI cannot tell apart
//! from a genuinely empty allowance. That is deliberate: the dashboard
//! treats "cannot prove an allowance" the same as "no allowance", and
//! the real error still lands in the console for debugging.

use covenant::U256;
use leptos::*;

use crate::{rpc, WalletSignal};

/// Handle returned by [`use_allowance`].
#[derive(Clone, Copy)]
pub struct AllowanceHandle {
    wallet: ReadSignal<crate::WalletState>,
    allowance: ReadSignal<U256>,
    set_allowance: WriteSignal<U256>,
    balance: ReadSignal<U256>,
    set_balance: WriteSignal<U256>,
}

/// Create an allowance handle bound to the shared wallet context.
pub fn use_allowance() -> AllowanceHandle {
    let (wallet, _) = expect_context::<WalletSignal>();
    let (allowance, set_allowance) = create_signal(U256::ZERO);
    let (balance, set_balance) = create_signal(U256::ZERO);
    AllowanceHandle {
        wallet,
        allowance,
        set_allowance,
        balance,
        set_balance,
    }
}

impl AllowanceHandle {
    /// Escrow allowance granted by the connected wallet, in base units.
    pub fn allowance(&self) -> ReadSignal<U256> {
        self.allowance
    }

    /// CVT balance of the connected wallet, in base units.
    pub fn balance(&self) -> ReadSignal<U256> {
        self.balance
    }

    /// Re-read the escrow allowance. Returns zero when the wallet is
    /// disconnected or the read fails; only a real value is trusted.
    pub async fn check_allowance(self) -> U256 {
        let value = match self.wallet.get_untracked().address {
            Some(owner) => {
                let read = rpc::allowance(owner, covenant::ESCROW).await;
                if let Err(e) = &read {
                    web_sys::console::warn_1(
                        &format!("Allowance read failed, showing zero: {}", e).into(),
                    );
                }
                zero_on_failure(read)
            }
            None => U256::ZERO,
        };
        self.set_allowance.set(value);
        value
    }

    /// Re-read the wallet's CVT balance, with the same zero fallback.
    pub async fn check_balance(self) -> U256 {
        let value = match self.wallet.get_untracked().address {
            Some(owner) => {
                let read = rpc::balance_of(owner).await;
                if let Err(e) = &read {
                    web_sys::console::warn_1(
                        &format!("Balance read failed, showing zero: {}", e).into(),
                    );
                }
                zero_on_failure(read)
            }
            None => U256::ZERO,
        };
        self.set_balance.set(value);
        value
    }

    /// Refresh both reads.
    pub async fn refresh(self) {
        self.check_allowance().await;
        self.check_balance().await;
    }
}

/// A failed read presents exactly as a genuine zero. Callers log the
/// real error before collapsing.
fn zero_on_failure(read: Result<U256, String>) -> U256 {
    read.unwrap_or(U256::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_read_presents_as_zero() {
        let failed = zero_on_failure(Err("RPC returned HTTP 502".to_string()));
        assert_eq!(failed, U256::ZERO);
        // Indistinguishable from a genuinely empty allowance.
        assert_eq!(failed, zero_on_failure(Ok(U256::ZERO)));
    }

    #[test]
    fn test_successful_read_passes_through() {
        let value = U256::from(25_000u64);
        assert_eq!(zero_on_failure(Ok(value)), value);
    }
}

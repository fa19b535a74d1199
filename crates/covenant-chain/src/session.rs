//! State machine for the approve flow.
//!
//! One approval attempt moves through exactly one phase at a time, so a
//! transaction hash and an error can never coexist and "approving" can
//! never be observed alongside either. UI layers derive their booleans
//! and strings from [`PaymentPhase`] instead of juggling parallel flags.

use alloy::primitives::{Address, U256};

use crate::constants;
use crate::error::CovenantError;
use crate::units;

/// Phase of a single approval attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    /// Nothing running and nothing to report.
    #[default]
    Idle,
    /// `approve` submitted (or about to be); waiting on wallet + receipt.
    Approving { spender: Address, amount: U256 },
    /// Approval mined successfully.
    Confirmed { tx_hash: String },
    /// The attempt failed; `error` is a user-facing message.
    Failed { error: String },
}

/// Observable state of the payment flow.
///
/// `begin` is the only guarded transition: a second attempt while one is
/// in flight is rejected without disturbing the live attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentSession {
    phase: PaymentPhase,
}

impl PaymentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &PaymentPhase {
        &self.phase
    }

    /// True while the approve transaction is out with the wallet or
    /// awaiting its receipt.
    pub fn is_approving(&self) -> bool {
        matches!(self.phase, PaymentPhase::Approving { .. })
    }

    /// True while any async step of the flow is running.
    pub fn is_loading(&self) -> bool {
        self.is_approving()
    }

    /// True while an attempt is running; `begin` refuses a second one.
    pub fn in_flight(&self) -> bool {
        self.is_approving()
    }

    /// Hash of the confirmed approval, if the attempt succeeded.
    pub fn tx_hash(&self) -> Option<&str> {
        match &self.phase {
            PaymentPhase::Confirmed { tx_hash } => Some(tx_hash),
            _ => None,
        }
    }

    /// Message from the failed attempt, if there was one.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            PaymentPhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Enter `Approving`. Starting over from `Confirmed` or `Failed` is
    /// fine; starting while in flight is not.
    pub fn begin(&mut self, spender: Address, amount: U256) -> Result<(), CovenantError> {
        if self.in_flight() {
            return Err(CovenantError::ApprovalInFlight);
        }
        self.phase = PaymentPhase::Approving { spender, amount };
        Ok(())
    }

    /// Record the mined approval.
    pub fn confirm(&mut self, tx_hash: String) {
        self.phase = PaymentPhase::Confirmed { tx_hash };
    }

    /// Record a failure message.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.phase = PaymentPhase::Failed { error: error.into() };
    }

    /// Back to `Idle`, clearing any hash or error.
    pub fn reset(&mut self) {
        self.phase = PaymentPhase::Idle;
    }
}

/// A validated approval request: owner, spender, and base-unit amount.
///
/// This is the pure front half of the pay flow; building one performs all
/// input validation before anything touches the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayRequest {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}

impl PayRequest {
    /// Validate raw inputs. `spender` falls back to the escrow contract;
    /// a zero spender is treated as missing.
    pub fn build(
        owner: Option<Address>,
        amount: &str,
        spender: Option<Address>,
    ) -> Result<Self, CovenantError> {
        let owner = owner.ok_or(CovenantError::WalletNotConnected)?;
        let spender = spender.unwrap_or(constants::ESCROW);
        if spender == Address::ZERO {
            return Err(CovenantError::MissingSpender);
        }
        let amount = units::parse_amount(amount, constants::TOKEN_DECIMALS)?;
        if amount.is_zero() {
            return Err(CovenantError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }
        Ok(Self { owner, spender, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ESCROW;

    fn owner() -> Address {
        Address::new([0xaa; 20])
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = PaymentSession::new();
        assert_eq!(*session.phase(), PaymentPhase::Idle);
        assert!(!session.is_approving());
        assert!(!session.is_loading());
        assert!(session.tx_hash().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_enters_approving() {
        let mut session = PaymentSession::new();
        session.begin(ESCROW, U256::from(5)).unwrap();
        assert!(session.is_approving());
        assert!(session.is_loading());
        assert!(session.tx_hash().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_while_in_flight_is_rejected() {
        let mut session = PaymentSession::new();
        session.begin(ESCROW, U256::from(5)).unwrap();
        let before = session.clone();

        let err = session.begin(ESCROW, U256::from(9)).unwrap_err();
        assert!(matches!(err, CovenantError::ApprovalInFlight));
        // The live attempt is untouched.
        assert_eq!(session, before);
    }

    #[test]
    fn test_confirm_stores_hash_only() {
        let mut session = PaymentSession::new();
        session.begin(ESCROW, U256::from(5)).unwrap();
        session.confirm("0xabc".to_string());
        assert_eq!(session.tx_hash(), Some("0xabc"));
        assert!(session.error().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_fail_stores_error_only() {
        let mut session = PaymentSession::new();
        session.begin(ESCROW, U256::from(5)).unwrap();
        session.fail("wallet rejected");
        assert_eq!(session.error(), Some("wallet rejected"));
        assert!(session.tx_hash().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_begin_after_terminal_states() {
        let mut session = PaymentSession::new();
        session.begin(ESCROW, U256::from(5)).unwrap();
        session.confirm("0xabc".to_string());
        session.begin(ESCROW, U256::from(6)).unwrap();
        assert!(session.is_approving());
        // The old hash is gone; one phase at a time.
        assert!(session.tx_hash().is_none());

        session.fail("boom");
        session.begin(ESCROW, U256::from(7)).unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut session = PaymentSession::new();
        session.reset();
        assert_eq!(*session.phase(), PaymentPhase::Idle);

        session.begin(ESCROW, U256::from(5)).unwrap();
        session.reset();
        assert_eq!(*session.phase(), PaymentPhase::Idle);

        session.begin(ESCROW, U256::from(5)).unwrap();
        session.confirm("0xabc".to_string());
        session.reset();
        assert_eq!(*session.phase(), PaymentPhase::Idle);

        session.begin(ESCROW, U256::from(5)).unwrap();
        session.fail("boom");
        session.reset();
        assert_eq!(*session.phase(), PaymentPhase::Idle);
    }

    #[test]
    fn test_build_requires_wallet() {
        let err = PayRequest::build(None, "5", None).unwrap_err();
        assert!(matches!(err, CovenantError::WalletNotConnected));
    }

    #[test]
    fn test_build_defaults_spender_to_escrow() {
        let req = PayRequest::build(Some(owner()), "2.5", None).unwrap();
        assert_eq!(req.spender, ESCROW);
        assert_eq!(req.owner, owner());
        assert_eq!(
            req.amount,
            U256::from_str_radix("2500000000000000000", 10).unwrap()
        );
    }

    #[test]
    fn test_build_rejects_zero_spender() {
        let err = PayRequest::build(Some(owner()), "5", Some(Address::ZERO)).unwrap_err();
        assert!(matches!(err, CovenantError::MissingSpender));
    }

    #[test]
    fn test_build_rejects_bad_amounts() {
        assert!(matches!(
            PayRequest::build(Some(owner()), "abc", None).unwrap_err(),
            CovenantError::InvalidAmount(_)
        ));
        assert!(matches!(
            PayRequest::build(Some(owner()), "0", None).unwrap_err(),
            CovenantError::InvalidAmount(_)
        ));
        assert!(matches!(
            PayRequest::build(Some(owner()), "", None).unwrap_err(),
            CovenantError::InvalidAmount(_)
        ));
    }

    #[test]
    fn test_build_accepts_explicit_spender() {
        let spender = Address::new([0x42; 20]);
        let req = PayRequest::build(Some(owner()), "1", Some(spender)).unwrap();
        assert_eq!(req.spender, spender);
    }
}

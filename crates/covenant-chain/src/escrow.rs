//! Commitment records and treasury figures shown on the DAO dashboard.

use std::fmt;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Lifecycle of an escrow commitment as the protocol reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommitmentStatus {
    /// Deposit locked; work not yet delivered.
    Funded,
    /// Deliverable submitted; awaiting settlement votes.
    Submitted,
    /// Paid out; the record is historical.
    Settled,
}

impl CommitmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitmentStatus::Funded => "FUNDED",
            CommitmentStatus::Submitted => "SUBMITTED",
            CommitmentStatus::Settled => "SETTLED",
        }
    }

    /// CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CommitmentStatus::Funded => "badge badge-funded",
            CommitmentStatus::Submitted => "badge badge-submitted",
            CommitmentStatus::Settled => "badge badge-settled",
        }
    }
}

impl fmt::Display for CommitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One escrow commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub id: u64,
    pub beneficiary: Address,
    /// Locked amount in CVT base units.
    pub amount: U256,
    pub status: CommitmentStatus,
    /// Unix seconds. Settlement must land before this.
    pub deadline: u64,
    /// Unix seconds at which the deposit was locked.
    pub funded_at: u64,
    /// Settlement transaction, present once `SETTLED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_tx: Option<String>,
}

impl Commitment {
    /// Past-deadline commitments still render; they are just flagged.
    /// Settled records never count as expired.
    pub fn is_expired(&self, now: u64) -> bool {
        self.status != CommitmentStatus::Settled && self.deadline <= now
    }
}

/// Aggregate treasury figures for the dashboard stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryStats {
    /// CVT currently locked across open commitments, in base units.
    pub total_locked: U256,
    /// CVT paid out over the protocol's lifetime, in base units.
    pub total_settled: U256,
    pub active_commitments: u32,
    pub members: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(status: CommitmentStatus, deadline: u64) -> Commitment {
        Commitment {
            id: 1,
            beneficiary: Address::new([0xbe; 20]),
            amount: U256::from(100u64),
            status,
            deadline,
            funded_at: 0,
            settlement_tx: None,
        }
    }

    #[test]
    fn test_status_wire_format_is_screaming() {
        let json = serde_json::to_string(&CommitmentStatus::Funded).unwrap();
        assert_eq!(json, "\"FUNDED\"");
        let status: CommitmentStatus = serde_json::from_str("\"SETTLED\"").unwrap();
        assert_eq!(status, CommitmentStatus::Settled);
    }

    #[test]
    fn test_status_display_matches_wire() {
        assert_eq!(CommitmentStatus::Submitted.to_string(), "SUBMITTED");
    }

    #[test]
    fn test_expiry_ignores_settled() {
        assert!(commitment(CommitmentStatus::Funded, 10).is_expired(10));
        assert!(commitment(CommitmentStatus::Submitted, 10).is_expired(20));
        assert!(!commitment(CommitmentStatus::Funded, 10).is_expired(9));
        assert!(!commitment(CommitmentStatus::Settled, 10).is_expired(20));
    }

    #[test]
    fn test_commitment_wire_shape() {
        let c = commitment(CommitmentStatus::Funded, 42);
        let wire = serde_json::to_value(&c).unwrap();
        assert_eq!(wire["status"], "FUNDED");
        assert!(wire["fundedAt"].is_number());
        // Absent until settled.
        assert!(wire.get("settlementTx").is_none());
    }
}

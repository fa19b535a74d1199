//! Dashboard fixtures. The table renders whatever the protocol indexer
//! will eventually serve; until that service ships, these records stand
//! in. Deadlines are anchored to the caller's clock so countdowns move.

use covenant::{Address, Commitment, CommitmentStatus, TreasuryStats, U256};

const HOUR: u64 = 3_600;
const DAY: u64 = 86_400;

/// DAO member count shown on the stats row.
const MEMBERS: u32 = 128;

fn cvt(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10).pow(U256::from(covenant::TOKEN_DECIMALS))
}

fn beneficiary(seed: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[0] = 0xbe;
    bytes[1] = 0x9f;
    bytes[19] = seed;
    Address::new(bytes)
}

/// Commitment records for the dashboard table.
pub fn commitments(now: u64) -> Vec<Commitment> {
    vec![
        Commitment {
            id: 341,
            beneficiary: beneficiary(0x11),
            amount: cvt(12_500),
            status: CommitmentStatus::Funded,
            deadline: now + 2 * DAY + 5 * HOUR,
            funded_at: now - 3 * DAY,
            settlement_tx: None,
        },
        Commitment {
            id: 338,
            beneficiary: beneficiary(0x27),
            amount: cvt(8_000),
            status: CommitmentStatus::Submitted,
            deadline: now + 9 * HOUR + 30 * 60,
            funded_at: now - 6 * DAY,
            settlement_tx: None,
        },
        Commitment {
            id: 335,
            beneficiary: beneficiary(0x3c),
            amount: cvt(3_250),
            status: CommitmentStatus::Funded,
            deadline: now + 45 * 60,
            funded_at: now - DAY,
            settlement_tx: None,
        },
        Commitment {
            id: 329,
            beneficiary: beneficiary(0x51),
            amount: cvt(1_800),
            status: CommitmentStatus::Funded,
            // Past deadline: renders as Expired, stays in the table.
            deadline: now - HOUR,
            funded_at: now - 9 * DAY,
            settlement_tx: None,
        },
        Commitment {
            id: 311,
            beneficiary: beneficiary(0x68),
            amount: cvt(20_000),
            status: CommitmentStatus::Settled,
            deadline: now - 3 * DAY,
            funded_at: now - 14 * DAY,
            settlement_tx: Some(
                "0x7f3a9c41d2e85b06f8a13779c04ce1545e2b9d8aa60f334c1bd0742d9e5c7a18".to_string(),
            ),
        },
        Commitment {
            id: 298,
            beneficiary: beneficiary(0x7d),
            amount: cvt(5_500),
            status: CommitmentStatus::Settled,
            deadline: now - 10 * DAY,
            funded_at: now - 21 * DAY,
            settlement_tx: Some(
                "0x2b81e06cd4f3a9571c8e20b6d9f4aa3358c17e92504bd6f01a3c58e47d92f660".to_string(),
            ),
        },
    ]
}

/// Aggregate the stat-card figures from the table rows.
pub fn treasury_stats(commitments: &[Commitment]) -> TreasuryStats {
    let mut total_locked = U256::ZERO;
    let mut total_settled = U256::ZERO;
    let mut active = 0u32;

    for c in commitments {
        if c.status == CommitmentStatus::Settled {
            total_settled += c.amount;
        } else {
            total_locked += c.amount;
            active += 1;
        }
    }

    TreasuryStats {
        total_locked,
        total_settled,
        active_commitments: active,
        members: MEMBERS,
    }
}

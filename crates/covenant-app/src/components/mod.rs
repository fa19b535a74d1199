mod backdrop;
mod commitments;
mod countdown;
mod hero;
mod stats;

pub use backdrop::Backdrop;
pub use commitments::{CommitmentDetail, CommitmentsTable};
pub use countdown::Countdown;
pub use hero::Hero;
pub use stats::StatsRow;

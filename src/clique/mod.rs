//! Clique search
//!
//! Finds sets of words that pairwise share no letters, or at most a few
//! letters under fuzzy tolerance.

mod escalation;
mod finder;
mod result;

pub use escalation::{Escalation, EscalationConfig};
pub use finder::{CliqueFinder, DEFAULT_TOLERANCE_CEILING, MAX_TOLERANCE_CEILING, SearchConfig};
pub use result::{Clique, rank_by_overlap};

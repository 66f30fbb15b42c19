//! Season plan: draft order followed by the schedule, as done at league creation.

use serde::{Deserialize, Serialize};

use crate::domain::draft_order::generate_draft_order;
use crate::domain::members::{DraftSlot, MemberId, WeekMatchup};
use crate::domain::schedule::generate_round_robin_schedule;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPlan {
    pub draft_order: Vec<DraftSlot>,
    pub schedule: Vec<WeekMatchup>,
}

/// Generate both halves of a season from the same member list.
///
/// The scheduler does not consume the draft order; only the draft order
/// depends on `seed`.
pub fn generate_season(
    member_ids: &[MemberId],
    weeks_requested: i64,
    seed: Option<&str>,
) -> Result<SeasonPlan, DomainError> {
    let draft_order = generate_draft_order(member_ids, seed);
    let schedule = generate_round_robin_schedule(member_ids, weeks_requested)?;
    Ok(SeasonPlan {
        draft_order,
        schedule,
    })
}

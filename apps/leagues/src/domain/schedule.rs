//! Round-robin season scheduling (circle method) with byes and partner rotation.
//!
//! Every week is derived from scratch: the canonical circle is rotated
//! `week_index mod base_weeks` times, so any single week can be produced in
//! isolation and the pairing pattern repeats every `base_weeks` weeks.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::members::{MemberId, WeekMatchup};
use crate::errors::domain::{DomainError, ValidationKind};

/// A seat in the pairing circle: a real member or the synthetic bye.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircleSlot {
    Member(MemberId),
    Bye,
}

/// Build the canonical circle, appending a bye placeholder for odd counts.
pub fn build_circle(member_ids: &[MemberId]) -> Vec<CircleSlot> {
    let mut circle: Vec<CircleSlot> = member_ids.iter().cloned().map(CircleSlot::Member).collect();
    if circle.len() % 2 == 1 {
        circle.push(CircleSlot::Bye);
    }
    circle
}

/// Number of distinct pairing rounds before the pattern repeats.
pub fn base_weeks(member_count: usize) -> usize {
    let circle_len = member_count + member_count % 2;
    circle_len.saturating_sub(1).max(1)
}

/// Apply the circle-method rotation `times` times.
///
/// The first seat stays fixed; each application moves the last seat of the
/// rotating segment to the front of that segment.
pub fn rotate_circle<T: Clone>(circle: &[T], times: usize) -> Vec<T> {
    let mut rotated = circle.to_vec();
    if rotated.len() > 2 {
        let segment = &mut rotated[1..];
        let len = segment.len();
        segment.rotate_right(times % len);
    }
    rotated
}

/// Accountability partners for week `week_index` (0-based), real members only.
///
/// The member list is rotated left by `(week_index + 1) mod N` and every
/// position is partnered with the next one, wrapping at the end. Self-pairs
/// (only possible with a single member) are skipped.
pub fn partner_map(member_ids: &[MemberId], week_index: usize) -> HashMap<MemberId, MemberId> {
    let n = member_ids.len();
    let mut partners = HashMap::with_capacity(n);
    if n == 0 {
        return partners;
    }

    let mut rotated = member_ids.to_vec();
    rotated.rotate_left((week_index + 1) % n);

    for i in 0..n {
        let member = &rotated[i];
        let partner = &rotated[(i + 1) % n];
        if member != partner {
            partners.insert(member.clone(), partner.clone());
        }
    }
    partners
}

/// Matchups for a single 0-based week, independent of every other week.
pub fn week_matchups(member_ids: &[MemberId], week_index: usize) -> Vec<WeekMatchup> {
    let circle = build_circle(member_ids);
    let base = base_weeks(member_ids.len());
    let rotated = rotate_circle(&circle, week_index % base);
    let partners = partner_map(member_ids, week_index);
    let week = week_index as u32 + 1;

    let half = rotated.len() / 2;
    let mut matchups = Vec::with_capacity(half);
    for i in 0..half {
        let left = &rotated[i];
        let right = &rotated[rotated.len() - 1 - i];
        let matchup = match (left, right) {
            (CircleSlot::Member(a), CircleSlot::Member(b)) => WeekMatchup {
                week,
                member_a_id: a.clone(),
                member_b_id: Some(b.clone()),
                partner_a_id: partner_unless_opponent(&partners, a, b),
                partner_b_id: partner_unless_opponent(&partners, b, a),
                is_bye: false,
            },
            (CircleSlot::Member(a), CircleSlot::Bye) | (CircleSlot::Bye, CircleSlot::Member(a)) => {
                WeekMatchup {
                    week,
                    member_a_id: a.clone(),
                    member_b_id: None,
                    partner_a_id: partners.get(a).cloned(),
                    partner_b_id: None,
                    is_bye: true,
                }
            }
            // The circle holds at most one placeholder.
            (CircleSlot::Bye, CircleSlot::Bye) => continue,
        };
        matchups.push(matchup);
    }
    matchups
}

/// A partner that would also be the opponent is dropped, not reassigned.
fn partner_unless_opponent(
    partners: &HashMap<MemberId, MemberId>,
    member: &MemberId,
    opponent: &MemberId,
) -> Option<MemberId> {
    partners
        .get(member)
        .filter(|partner| *partner != opponent)
        .cloned()
}

/// Full season schedule, week by week in ascending order.
///
/// `weeks_requested` below 1 is treated as 1. At least one member is required.
pub fn generate_round_robin_schedule(
    member_ids: &[MemberId],
    weeks_requested: i64,
) -> Result<Vec<WeekMatchup>, DomainError> {
    if member_ids.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyMembership,
            "a schedule needs at least one member",
        ));
    }

    let total_weeks = weeks_requested.max(1) as usize;
    let per_week = (member_ids.len() + 1) / 2;
    let mut schedule = Vec::with_capacity(total_weeks * per_week);
    for week_index in 0..total_weeks {
        schedule.extend(week_matchups(member_ids, week_index));
    }

    debug!(
        members = member_ids.len(),
        weeks = total_weeks,
        base_weeks = base_weeks(member_ids.len()),
        matchups = schedule.len(),
        "Generated round-robin schedule"
    );

    Ok(schedule)
}

/// Matchups belonging to a 1-based week.
pub fn matchups_for_week(
    schedule: &[WeekMatchup],
    week: u32,
) -> impl Iterator<Item = &WeekMatchup> {
    schedule.iter().filter(move |m| m.week == week)
}

/// Number of weeks covered by a schedule.
pub fn week_count(schedule: &[WeekMatchup]) -> u32 {
    schedule.iter().map(|m| m.week).max().unwrap_or(0)
}

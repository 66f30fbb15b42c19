//! Commissioner-entered score events and the standings derived from them.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::members::{MemberId, WeekMatchup};

/// Points awarded to a member for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub week: u32,
    pub member_id: MemberId,
    pub points: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub member_id: MemberId,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub byes: u32,
    pub points_for: i64,
}

impl StandingRow {
    /// Empty record for a member with no results yet.
    pub fn new(member_id: MemberId) -> Self {
        Self {
            member_id,
            wins: 0,
            losses: 0,
            ties: 0,
            byes: 0,
            points_for: 0,
        }
    }
}

/// Sum of event points per (week, member).
pub fn weekly_totals(events: &[ScoreEvent]) -> HashMap<(u32, MemberId), i64> {
    let mut totals = HashMap::new();
    for e in events {
        *totals.entry((e.week, e.member_id.clone())).or_insert(0) += i64::from(e.points);
    }
    totals
}

/// Win/loss/tie records for every member that appears in `schedule`.
///
/// A week counts as played once any event exists for it; matchups in weeks
/// without events are skipped. Byes record no result.
pub fn compute_standings(schedule: &[WeekMatchup], events: &[ScoreEvent]) -> Vec<StandingRow> {
    let totals = weekly_totals(events);
    let played: BTreeSet<u32> = events.iter().map(|e| e.week).collect();

    let mut rows: BTreeMap<MemberId, StandingRow> = BTreeMap::new();
    for m in schedule {
        for id in std::iter::once(&m.member_a_id).chain(m.member_b_id.iter()) {
            rows.entry(id.clone()).or_insert_with(|| StandingRow::new(id.clone()));
        }
    }

    for e in events {
        if let Some(row) = rows.get_mut(&e.member_id) {
            row.points_for += i64::from(e.points);
        }
    }

    for m in schedule.iter().filter(|m| played.contains(&m.week)) {
        let Some(b) = &m.member_b_id else {
            if let Some(row) = rows.get_mut(&m.member_a_id) {
                row.byes += 1;
            }
            continue;
        };
        let a = &m.member_a_id;
        let score = |id: &MemberId| totals.get(&(m.week, id.clone())).copied().unwrap_or(0);
        let (a_pts, b_pts) = (score(a), score(b));

        match a_pts.cmp(&b_pts) {
            Ordering::Greater => {
                bump(&mut rows, a, |r| r.wins += 1);
                bump(&mut rows, b, |r| r.losses += 1);
            }
            Ordering::Less => {
                bump(&mut rows, a, |r| r.losses += 1);
                bump(&mut rows, b, |r| r.wins += 1);
            }
            Ordering::Equal => {
                bump(&mut rows, a, |r| r.ties += 1);
                bump(&mut rows, b, |r| r.ties += 1);
            }
        }
    }

    let mut table: Vec<StandingRow> = rows.into_values().collect();
    table.sort_by(|x, y| {
        y.wins
            .cmp(&x.wins)
            .then_with(|| y.points_for.cmp(&x.points_for))
            .then_with(|| x.member_id.cmp(&y.member_id))
    });
    table
}

fn bump(
    rows: &mut BTreeMap<MemberId, StandingRow>,
    id: &MemberId,
    f: impl FnOnce(&mut StandingRow),
) {
    if let Some(row) = rows.get_mut(id) {
        f(row);
    }
}

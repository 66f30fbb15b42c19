//! Scenario tests for the round-robin scheduler.

use std::collections::{BTreeSet, HashMap};

use crate::domain::members::{member_ids, MemberId, WeekMatchup};
use crate::domain::schedule::{
    base_weeks, build_circle, generate_round_robin_schedule, matchups_for_week, partner_map,
    rotate_circle, week_count, week_matchups, CircleSlot,
};
use crate::errors::domain::{DomainError, ValidationKind};

fn pair_key(m: &WeekMatchup) -> Option<(String, String)> {
    let b = m.member_b_id.as_ref()?;
    let (x, y) = (m.member_a_id.as_str(), b.as_str());
    Some(if x < y {
        (x.to_string(), y.to_string())
    } else {
        (y.to_string(), x.to_string())
    })
}

#[test]
fn four_members_three_weeks_cover_every_pair_once() {
    let ids = member_ids(["A", "B", "C", "D"]);
    let schedule = generate_round_robin_schedule(&ids, 3).unwrap();

    assert_eq!(schedule.len(), 6);
    assert!(schedule.iter().all(|m| !m.is_bye));

    let pairs: Vec<(String, String)> = schedule.iter().filter_map(pair_key).collect();
    let unique: BTreeSet<_> = pairs.iter().cloned().collect();
    assert_eq!(pairs.len(), 6);
    assert_eq!(unique.len(), 6, "every C(4,2) pair exactly once");
}

#[test]
fn four_members_week_one_uses_unrotated_circle() {
    let ids = member_ids(["A", "B", "C", "D"]);
    let week = week_matchups(&ids, 0);
    assert_eq!(week.len(), 2);
    assert_eq!(week[0].member_a_id.as_str(), "A");
    assert_eq!(week[0].member_b_id.as_ref().map(MemberId::as_str), Some("D"));
    assert_eq!(week[1].member_a_id.as_str(), "B");
    assert_eq!(week[1].member_b_id.as_ref().map(MemberId::as_str), Some("C"));
}

#[test]
fn three_members_rotate_the_bye() {
    let ids = member_ids(["A", "B", "C"]);
    let schedule = generate_round_robin_schedule(&ids, 3).unwrap();

    let mut byes: Vec<String> = Vec::new();
    for week in 1..=3 {
        let week_byes: Vec<&WeekMatchup> =
            matchups_for_week(&schedule, week).filter(|m| m.is_bye).collect();
        assert_eq!(week_byes.len(), 1, "week {week} has exactly one bye");
        byes.push(week_byes[0].member_a_id.to_string());
    }
    byes.sort();
    assert_eq!(byes, vec!["A", "B", "C"]);
}

#[test]
fn bye_matchups_have_no_opponent() {
    let ids = member_ids(["A", "B", "C", "D", "E"]);
    let schedule = generate_round_robin_schedule(&ids, 5).unwrap();
    for m in &schedule {
        assert_eq!(m.is_bye, m.member_b_id.is_none());
        if m.is_bye {
            assert!(m.partner_b_id.is_none());
        }
    }
}

#[test]
fn weeks_below_one_are_coerced() {
    let ids = member_ids(["A", "B"]);
    for requested in [0, -4] {
        let schedule = generate_round_robin_schedule(&ids, requested).unwrap();
        assert_eq!(week_count(&schedule), 1);
        assert_eq!(schedule.len(), 1);
    }
}

#[test]
fn empty_membership_is_rejected() {
    let err = generate_round_robin_schedule(&[], 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::EmptyMembership, _)
    ));
}

#[test]
fn single_member_gets_a_bye_every_week() {
    let ids = member_ids(["solo"]);
    let schedule = generate_round_robin_schedule(&ids, 4).unwrap();
    assert_eq!(schedule.len(), 4);
    for m in &schedule {
        assert!(m.is_bye);
        assert_eq!(m.member_a_id.as_str(), "solo");
        assert!(m.partner_a_id.is_none(), "no self partner");
    }
}

#[test]
fn pattern_repeats_after_base_cycle() {
    let ids = member_ids(["A", "B", "C", "D"]);
    let schedule = generate_round_robin_schedule(&ids, 7).unwrap();
    assert_eq!(base_weeks(4), 3);

    let week1: Vec<_> = matchups_for_week(&schedule, 1).filter_map(pair_key).collect();
    let week4: Vec<_> = matchups_for_week(&schedule, 4).filter_map(pair_key).collect();
    let week7: Vec<_> = matchups_for_week(&schedule, 7).filter_map(pair_key).collect();
    assert_eq!(week1, week4);
    assert_eq!(week1, week7);
}

#[test]
fn fewer_weeks_take_a_prefix() {
    let ids = member_ids(["A", "B", "C", "D", "E", "F"]);
    let full = generate_round_robin_schedule(&ids, 5).unwrap();
    let short = generate_round_robin_schedule(&ids, 2).unwrap();
    assert_eq!(&full[..short.len()], &short[..]);
}

#[test]
fn weeks_are_ascending() {
    let ids = member_ids(["A", "B", "C", "D", "E"]);
    let schedule = generate_round_robin_schedule(&ids, 8).unwrap();
    assert!(schedule.windows(2).all(|w| w[0].week <= w[1].week));
    assert_eq!(schedule.first().map(|m| m.week), Some(1));
    assert_eq!(week_count(&schedule), 8);
}

#[test]
fn circle_gets_placeholder_only_for_odd_counts() {
    assert_eq!(build_circle(&member_ids(["A", "B"])).len(), 2);
    let odd = build_circle(&member_ids(["A", "B", "C"]));
    assert_eq!(odd.len(), 4);
    assert_eq!(odd[3], CircleSlot::Bye);
}

#[test]
fn rotation_fixes_first_seat() {
    let circle = vec![0, 1, 2, 3, 4, 5];
    assert_eq!(rotate_circle(&circle, 0), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(rotate_circle(&circle, 1), vec![0, 5, 1, 2, 3, 4]);
    assert_eq!(rotate_circle(&circle, 2), vec![0, 4, 5, 1, 2, 3]);
    assert_eq!(rotate_circle(&circle, 5), circle);
}

#[test]
fn partners_follow_rotated_successor() {
    let ids = member_ids(["A", "B", "C", "D"]);
    let partners = partner_map(&ids, 0);
    assert_eq!(partners.len(), 4);
    let expect: HashMap<MemberId, MemberId> = [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]
        .into_iter()
        .map(|(a, b)| (MemberId::from(a), MemberId::from(b)))
        .collect();
    assert_eq!(partners, expect);
    assert!(partner_map(&member_ids(["solo"]), 3).is_empty());
}

#[test]
fn partner_equal_to_opponent_is_dropped() {
    // Two members: each one's partner is the other, who is also the opponent.
    let ids = member_ids(["A", "B"]);
    let schedule = generate_round_robin_schedule(&ids, 2).unwrap();
    for m in &schedule {
        assert!(!m.is_bye);
        assert!(m.partner_a_id.is_none());
        assert!(m.partner_b_id.is_none());
    }
}

#[test]
fn partners_never_equal_opponents() {
    let ids = member_ids(["A", "B", "C", "D", "E", "F", "G"]);
    let schedule = generate_round_robin_schedule(&ids, 14).unwrap();
    for m in &schedule {
        if let Some(b) = &m.member_b_id {
            assert_ne!(m.partner_a_id.as_ref(), Some(b));
            assert_ne!(m.partner_b_id.as_ref(), Some(&m.member_a_id));
        }
        assert_ne!(m.partner_a_id.as_ref(), Some(&m.member_a_id));
    }
}

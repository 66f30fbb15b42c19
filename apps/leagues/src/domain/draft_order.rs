//! Draft order generation and manual reordering.

use std::collections::HashSet;

use crate::domain::members::{DraftSlot, MemberId};
use crate::domain::seed::{shuffle_with, EntropySource, IndexSource, Mulberry32};
use crate::errors::domain::{DomainError, ValidationKind};

/// Shuffle `member_ids` into a draft order with positions `1..=N`.
///
/// With a seed the result is fully determined by the input order and the seed
/// string; without one the thread-local entropy source is used. Duplicate ids
/// are not collapsed, the caller is expected to pass a unique set.
pub fn generate_draft_order(member_ids: &[MemberId], seed: Option<&str>) -> Vec<DraftSlot> {
    match seed {
        Some(seed) => draft_order_with(member_ids, &mut Mulberry32::from_seed_str(seed)),
        None => draft_order_with(member_ids, &mut EntropySource::thread_local()),
    }
}

/// Draft order using an explicit index source.
pub fn draft_order_with<S: IndexSource + ?Sized>(
    member_ids: &[MemberId],
    source: &mut S,
) -> Vec<DraftSlot> {
    let mut order = member_ids.to_vec();
    shuffle_with(&mut order, source);
    into_slots(order)
}

/// Replace the draft order with `new_order`, reassigning positions `1..=N`.
///
/// `new_order` must name exactly the members already in `current`, each once.
pub fn reorder_draft(
    current: &[DraftSlot],
    new_order: &[MemberId],
) -> Result<Vec<DraftSlot>, DomainError> {
    if current.len() != new_order.len() {
        return Err(DomainError::validation(
            ValidationKind::DraftOrderMismatch,
            format!(
                "expected {} members in new order, got {}",
                current.len(),
                new_order.len()
            ),
        ));
    }

    let known: HashSet<&MemberId> = current.iter().map(|s| &s.member_id).collect();
    let mut seen: HashSet<&MemberId> = HashSet::with_capacity(new_order.len());
    for id in new_order {
        if !known.contains(id) {
            return Err(DomainError::validation(
                ValidationKind::DraftOrderMismatch,
                format!("member {id} is not in the current draft order"),
            ));
        }
        if !seen.insert(id) {
            return Err(DomainError::validation(
                ValidationKind::DraftOrderMismatch,
                format!("member {id} appears more than once"),
            ));
        }
    }

    Ok(into_slots(new_order.to_vec()))
}

fn into_slots(order: Vec<MemberId>) -> Vec<DraftSlot> {
    order
        .into_iter()
        .zip(1u32..)
        .map(|(member_id, draft_position)| DraftSlot {
            member_id,
            draft_position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::members::member_ids;

    #[test]
    fn empty_input_yields_empty_order() {
        assert!(generate_draft_order(&[], Some("x")).is_empty());
        assert!(generate_draft_order(&[], None).is_empty());
    }

    #[test]
    fn single_member_gets_first_pick() {
        let slots = generate_draft_order(&member_ids(["solo"]), None);
        assert_eq!(
            slots,
            vec![DraftSlot {
                member_id: "solo".into(),
                draft_position: 1
            }]
        );
    }

    #[test]
    fn seeded_order_is_repeatable() {
        let ids = member_ids(["A", "B", "C"]);
        let first = generate_draft_order(&ids, Some("league-42"));
        let second = generate_draft_order(&ids, Some("league-42"));
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_order_matches_manual_replay() {
        // Replays the Fisher-Yates walk by hand against the same stream.
        let ids = member_ids(["A", "B", "C", "D", "E"]);
        let mut rng = Mulberry32::from_seed_str("replay");
        let mut expected = ids.clone();
        for i in (1..expected.len()).rev() {
            let j = rng.index_below(i + 1);
            expected.swap(i, j);
        }

        let slots = generate_draft_order(&ids, Some("replay"));
        let got: Vec<MemberId> = slots.into_iter().map(|s| s.member_id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn positions_are_contiguous() {
        let ids = member_ids(["A", "B", "C", "D", "E", "F"]);
        let slots = generate_draft_order(&ids, None);
        let positions: Vec<u32> = slots.iter().map(|s| s.draft_position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let ids = member_ids(["A", "A", "B"]);
        let slots = generate_draft_order(&ids, Some("dup"));
        assert_eq!(slots.len(), 3);
        assert_eq!(
            slots.iter().filter(|s| s.member_id.as_str() == "A").count(),
            2
        );
    }

    #[test]
    fn reorder_reassigns_positions() {
        let current = generate_draft_order(&member_ids(["A", "B", "C"]), Some("s"));
        let reordered = reorder_draft(&current, &member_ids(["C", "A", "B"])).unwrap();
        assert_eq!(reordered[0].member_id.as_str(), "C");
        assert_eq!(reordered[0].draft_position, 1);
        assert_eq!(reordered[2].member_id.as_str(), "B");
        assert_eq!(reordered[2].draft_position, 3);
    }

    #[test]
    fn reorder_rejects_non_permutations() {
        let current = generate_draft_order(&member_ids(["A", "B", "C"]), Some("s"));

        let short = reorder_draft(&current, &member_ids(["A", "B"]));
        assert!(matches!(
            short,
            Err(DomainError::Validation(ValidationKind::DraftOrderMismatch, _))
        ));

        let stranger = reorder_draft(&current, &member_ids(["A", "B", "Z"]));
        assert!(stranger.is_err());

        let repeated = reorder_draft(&current, &member_ids(["A", "A", "B"]));
        assert!(repeated.is_err());
    }
}

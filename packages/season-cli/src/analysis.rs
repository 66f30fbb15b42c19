//! Fairness audit over a generated schedule.

use std::collections::BTreeMap;

use leagues::{MemberId, WeekMatchup};

/// Per-member tallies across the whole schedule.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberAudit {
    pub games: u32,
    pub byes: u32,
    /// Weeks with no partner (dropped because the partner was the opponent).
    pub unpartnered: u32,
    pub opponents: BTreeMap<MemberId, u32>,
    pub partners: BTreeMap<MemberId, u32>,
}

#[derive(Debug, Default)]
pub struct ScheduleAudit {
    pub members: BTreeMap<MemberId, MemberAudit>,
}

impl ScheduleAudit {
    pub fn from_schedule(schedule: &[WeekMatchup]) -> Self {
        let mut members: BTreeMap<MemberId, MemberAudit> = BTreeMap::new();

        for m in schedule {
            let a = members.entry(m.member_a_id.clone()).or_default();
            tally_partner(a, m.partner_a_id.as_ref());
            match &m.member_b_id {
                None => a.byes += 1,
                Some(b) => {
                    a.games += 1;
                    *a.opponents.entry(b.clone()).or_insert(0) += 1;

                    let b_audit = members.entry(b.clone()).or_default();
                    b_audit.games += 1;
                    *b_audit.opponents.entry(m.member_a_id.clone()).or_insert(0) += 1;
                    tally_partner(b_audit, m.partner_b_id.as_ref());
                }
            }
        }

        Self { members }
    }

    /// Largest difference in bye count between any two members.
    pub fn bye_spread(&self) -> u32 {
        let byes = self.members.values().map(|a| a.byes);
        let max = byes.clone().max().unwrap_or(0);
        let min = byes.min().unwrap_or(0);
        max - min
    }

    /// Pairs of members that never meet.
    pub fn unmet_pairs(&self) -> Vec<(MemberId, MemberId)> {
        let ids: Vec<&MemberId> = self.members.keys().collect();
        let mut unmet = Vec::new();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                if !self.members[*a].opponents.contains_key(*b) {
                    unmet.push(((*a).clone(), (*b).clone()));
                }
            }
        }
        unmet
    }
}

fn tally_partner(audit: &mut MemberAudit, partner: Option<&MemberId>) {
    match partner {
        Some(p) => *audit.partners.entry(p.clone()).or_insert(0) += 1,
        None => audit.unpartnered += 1,
    }
}

/// Print the audit to stdout.
pub fn print_audit(audit: &ScheduleAudit) {
    println!("\n=== Schedule Audit ===");
    for (id, a) in &audit.members {
        let partners: Vec<String> = a
            .partners
            .iter()
            .map(|(p, n)| format!("{p}x{n}"))
            .collect();
        println!(
            "{id}: games={}, byes={}, opponents={}, unpartnered={}, partners=[{}]",
            a.games,
            a.byes,
            a.opponents.len(),
            a.unpartnered,
            partners.join(", ")
        );
    }
    println!("Bye spread: {}", audit.bye_spread());

    let unmet = audit.unmet_pairs();
    if unmet.is_empty() {
        println!("Every pair meets at least once");
    } else {
        println!("Pairs that never meet: {}", unmet.len());
    }
}

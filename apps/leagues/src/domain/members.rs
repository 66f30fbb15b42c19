//! League participant identifiers and the records the season generators emit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, unique token identifying a league participant.
///
/// The generators never interpret the contents; ordering only matters as the
/// input order handed to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One member's place in the draft. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSlot {
    pub member_id: MemberId,
    pub draft_position: u32,
}

/// A single pairing for one week of the season.
///
/// `member_b_id` is `None` exactly when the matchup is a bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekMatchup {
    pub week: u32,
    pub member_a_id: MemberId,
    pub member_b_id: Option<MemberId>,
    pub partner_a_id: Option<MemberId>,
    pub partner_b_id: Option<MemberId>,
    pub is_bye: bool,
}

impl WeekMatchup {
    /// True if `member` plays in this matchup on either side.
    pub fn involves(&self, member: &MemberId) -> bool {
        &self.member_a_id == member || self.member_b_id.as_ref() == Some(member)
    }

    /// The opponent of `member`, if `member` is in this matchup and it is not a bye.
    pub fn opponent_of(&self, member: &MemberId) -> Option<&MemberId> {
        if &self.member_a_id == member {
            self.member_b_id.as_ref()
        } else if self.member_b_id.as_ref() == Some(member) {
            Some(&self.member_a_id)
        } else {
            None
        }
    }
}

/// Build ids from plain strings.
pub fn member_ids<I, S>(ids: I) -> Vec<MemberId>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(|s| MemberId(s.into())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_lookup_covers_both_sides() {
        let m = WeekMatchup {
            week: 1,
            member_a_id: "A".into(),
            member_b_id: Some("B".into()),
            partner_a_id: None,
            partner_b_id: None,
            is_bye: false,
        };
        assert_eq!(m.opponent_of(&"A".into()), Some(&MemberId::from("B")));
        assert_eq!(m.opponent_of(&"B".into()), Some(&MemberId::from("A")));
        assert_eq!(m.opponent_of(&"C".into()), None);
        assert!(m.involves(&"B".into()));
    }

    #[test]
    fn member_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&MemberId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}

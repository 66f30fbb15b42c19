//! Writers for a generated season plan.

use std::io::Write;

use leagues::{DraftSlot, SeasonPlan, WeekMatchup};
use serde::Serialize;

use crate::types::OutputFormat;

/// Flat CSV row for one matchup.
#[derive(Debug, Serialize)]
pub struct MatchupRow<'a> {
    pub week: u32,
    pub member_a: &'a str,
    pub member_b: &'a str,
    pub partner_a: &'a str,
    pub partner_b: &'a str,
    pub is_bye: bool,
}

impl<'a> From<&'a WeekMatchup> for MatchupRow<'a> {
    fn from(m: &'a WeekMatchup) -> Self {
        let name = |id: &'a Option<leagues::MemberId>| id.as_ref().map_or("", |id| id.as_str());
        Self {
            week: m.week,
            member_a: m.member_a_id.as_str(),
            member_b: name(&m.member_b_id),
            partner_a: name(&m.partner_a_id),
            partner_b: name(&m.partner_b_id),
            is_bye: m.is_bye,
        }
    }
}

pub fn write_plan<W: Write>(
    out: W,
    plan: &SeasonPlan,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json(out, plan),
        OutputFormat::Csv => write_csv(out, &plan.schedule),
        OutputFormat::Table => write_table(out, plan),
    }
}

fn write_json<W: Write>(mut out: W, plan: &SeasonPlan) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut out, plan)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: W, schedule: &[WeekMatchup]) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(out);
    for m in schedule {
        writer.serialize(MatchupRow::from(m))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_table<W: Write>(mut out: W, plan: &SeasonPlan) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "=== Draft Order ===")?;
    for DraftSlot {
        member_id,
        draft_position,
    } in &plan.draft_order
    {
        writeln!(out, "{draft_position:>3}. {member_id}")?;
    }

    let mut current_week = 0;
    for m in &plan.schedule {
        if m.week != current_week {
            current_week = m.week;
            writeln!(out, "\n=== Week {current_week} ===")?;
        }
        let row = MatchupRow::from(m);
        if m.is_bye {
            writeln!(out, "  {} has a bye (partner: {})", row.member_a, or_dash(row.partner_a))?;
        } else {
            writeln!(
                out,
                "  {} vs {}  (partners: {} / {})",
                row.member_a,
                row.member_b,
                or_dash(row.partner_a),
                or_dash(row.partner_b)
            )?;
        }
    }
    Ok(())
}

fn or_dash(name: &str) -> &str {
    if name.is_empty() {
        "-"
    } else {
        name
    }
}

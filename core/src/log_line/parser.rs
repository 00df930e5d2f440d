use chrono::NaiveDateTime;
use memchr::memchr_iter;

use super::SkillUsageEvent;
use crate::game_data::get_skill_by_id;

#[cfg(test)]
mod tests;

/// Network log record type codes (field 0)
pub mod line_type {
    /// Local player announcement
    pub const PRIMARY_PLAYER: &str = "02";
    /// Single-target ability use
    pub const ABILITY: &str = "21";
    /// Area-of-effect ability use
    pub const AOE_ABILITY: &str = "22";
}

/// Split a raw network log line into its pipe-delimited fields.
///
/// The delimiter is never escaped in this format, so a plain byte scan is
/// sufficient. A trailing CR/LF is stripped from the last field.
pub fn tokenize(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let bytes = line.as_bytes();

    let mut fields = Vec::new();
    let mut start = 0;
    for pipe in memchr_iter(b'|', bytes) {
        fields.push(&line[start..pipe]);
        start = pipe + 1;
    }
    fields.push(&line[start..]);
    fields
}

/// Decode one tokenized record into a skill usage event.
///
/// Returns `None` for anything that is not a complete ability record with a
/// known skill id. Log traffic is high volume and best effort, so this path
/// never errors and never logs per record.
///
/// Field layout of ability records:
///
/// | index | meaning                      |
/// |-------|------------------------------|
/// | 0     | record type code             |
/// | 1     | record timestamp (ignored)   |
/// | 2     | caster id                    |
/// | 3     | caster name                  |
/// | 4     | skill id, hexadecimal        |
/// | 5     | skill name (may be empty)    |
/// | 6     | target id                    |
/// | 7     | target name                  |
pub fn parse_skill_usage(fields: &[&str], observed_at: NaiveDateTime) -> Option<SkillUsageEvent> {
    if fields.len() < 4 {
        return None;
    }

    if fields[0] != line_type::ABILITY && fields[0] != line_type::AOE_ABILITY {
        return None;
    }

    // Confirmed ability record, but truncated
    if fields.len() < 8 {
        return None;
    }

    let skill_id = u32::from_str_radix(fields[4], 16).ok()?;
    let skill = get_skill_by_id(skill_id)?;

    let skill_name = if fields[5].is_empty() {
        skill.name.to_string()
    } else {
        fields[5].to_string()
    };

    Some(SkillUsageEvent {
        observed_at,
        caster_id: fields[2].to_string(),
        caster_name: fields[3].to_string(),
        skill_id,
        skill_name,
        target_id: fields[6].to_string(),
        target_name: fields[7].to_string(),
    })
}

/// Extract the player name from a primary-player announcement record.
pub fn parse_primary_player<'a>(fields: &[&'a str]) -> Option<&'a str> {
    if fields.len() < 4 || fields[0] != line_type::PRIMARY_PLAYER {
        return None;
    }
    Some(fields[3])
}

use chrono::NaiveDateTime;

/// A qualifying ability use, decoded from one network log record.
///
/// Only constructed when the record's skill id resolves in the skill
/// database; everything else is dropped at the parser boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillUsageEvent {
    /// When the record was observed locally. The record's embedded timestamp
    /// is ignored: the clock that stamped it is not guaranteed to match the
    /// local clock used for expiry math.
    pub observed_at: NaiveDateTime,
    pub caster_id: String,
    pub caster_name: String,
    /// Action id, decoded from the hexadecimal ability field
    pub skill_id: u32,
    /// Name from the record when non-empty, else the database name
    pub skill_name: String,
    pub target_id: String,
    pub target_name: String,
}

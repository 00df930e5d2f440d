//! FFXIV skill database for cooldown tracking.
//!
//! Major party cooldowns and tank mitigation, keyed by the game's action id
//! (the hexadecimal ability field of network log records). A cooldown of 0
//! marks abilities whose recharge is variable (charge or resource gated);
//! those are excluded from the trackable subset.

use phf::phf_map;

use super::Job;

/// Cooldowns shorter than this are not worth a timer bar
pub const TRACKABLE_COOLDOWN_SECS: u32 = 30;

/// Static skill metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillInfo {
    pub id: u32,
    pub name: &'static str,
    /// Nominal recharge in seconds; 0 = variable duration
    pub cooldown_secs: u32,
    pub job: Job,
}

impl SkillInfo {
    const fn new(id: u32, name: &'static str, cooldown_secs: u32, job: Job) -> Self {
        Self {
            id,
            name,
            cooldown_secs,
            job,
        }
    }

    /// Whether this skill's cooldown is significant enough to display
    pub fn is_trackable(&self) -> bool {
        self.cooldown_secs >= TRACKABLE_COOLDOWN_SECS
    }
}

/// Look up a skill by action id
pub fn get_skill_by_id(id: u32) -> Option<&'static SkillInfo> {
    SKILLS.get(&id)
}

/// All skills belonging to a job
pub fn skills_for_job(job: Job) -> Vec<&'static SkillInfo> {
    SKILLS.values().filter(|s| s.job == job).collect()
}

/// The subset of skills with cooldowns worth displaying
pub fn trackable_skills() -> Vec<&'static SkillInfo> {
    SKILLS.values().filter(|s| s.is_trackable()).collect()
}

/// Skill lookup table indexed by action id
pub static SKILLS: phf::Map<u32, SkillInfo> = phf_map! {
    // ═══════════════════════════════════════════════════════════════════════════
    // Tank Mitigation
    // ═══════════════════════════════════════════════════════════════════════════
    // Paladin
    7531u32 => SkillInfo::new(7531, "Hallowed Ground", 420, Job::Paladin),
    7385u32 => SkillInfo::new(7385, "Sentinel", 120, Job::Paladin),
    7382u32 => SkillInfo::new(7382, "Rampart", 90, Job::Paladin),
    16457u32 => SkillInfo::new(16457, "Divine Veil", 90, Job::Paladin),
    7535u32 => SkillInfo::new(7535, "Passage of Arms", 120, Job::Paladin),

    // Warrior
    43u32 => SkillInfo::new(43, "Holmgang", 240, Job::Warrior),
    44u32 => SkillInfo::new(44, "Vengeance", 120, Job::Warrior),
    7388u32 => SkillInfo::new(7388, "Shake It Off", 90, Job::Warrior),
    7389u32 => SkillInfo::new(7389, "Nascent Flash", 25, Job::Warrior),

    // Dark Knight
    3638u32 => SkillInfo::new(3638, "Living Dead", 300, Job::DarkKnight),
    3636u32 => SkillInfo::new(3636, "Shadow Wall", 120, Job::DarkKnight),
    7393u32 => SkillInfo::new(7393, "The Blackest Night", 15, Job::DarkKnight),
    16472u32 => SkillInfo::new(16472, "Dark Missionary", 90, Job::DarkKnight),

    // Gunbreaker
    16152u32 => SkillInfo::new(16152, "Superbolide", 360, Job::Gunbreaker),
    16148u32 => SkillInfo::new(16148, "Nebula", 120, Job::Gunbreaker),
    16160u32 => SkillInfo::new(16160, "Heart of Light", 90, Job::Gunbreaker),
    16161u32 => SkillInfo::new(16161, "Heart of Stone", 25, Job::Gunbreaker),

    // ═══════════════════════════════════════════════════════════════════════════
    // Healer Cooldowns
    // ═══════════════════════════════════════════════════════════════════════════
    // White Mage
    140u32 => SkillInfo::new(140, "Benediction", 180, Job::WhiteMage),
    3569u32 => SkillInfo::new(3569, "Asylum", 90, Job::WhiteMage),
    7432u32 => SkillInfo::new(7432, "Divine Benison", 30, Job::WhiteMage),
    7433u32 => SkillInfo::new(7433, "Plenary Indulgence", 60, Job::WhiteMage),
    16536u32 => SkillInfo::new(16536, "Temperance", 120, Job::WhiteMage),

    // Scholar
    189u32 => SkillInfo::new(189, "Lustrate", 1, Job::Scholar),   // Aetherflow based
    7434u32 => SkillInfo::new(7434, "Fey Illumination", 120, Job::Scholar),
    7436u32 => SkillInfo::new(7436, "Excogitation", 45, Job::Scholar),
    16545u32 => SkillInfo::new(16545, "Seraphic Veil", 30, Job::Scholar),
    16557u32 => SkillInfo::new(16557, "Expedient", 120, Job::Scholar),

    // Astrologian
    3594u32 => SkillInfo::new(3594, "Essential Dignity", 40, Job::Astrologian),
    16559u32 => SkillInfo::new(16559, "Celestial Opposition", 60, Job::Astrologian),
    16556u32 => SkillInfo::new(16556, "Neutral Sect", 120, Job::Astrologian),
    16553u32 => SkillInfo::new(16553, "Earthly Star", 60, Job::Astrologian),

    // Sage
    24285u32 => SkillInfo::new(24285, "Haima", 120, Job::Sage),
    24286u32 => SkillInfo::new(24286, "Panhaima", 120, Job::Sage),
    24298u32 => SkillInfo::new(24298, "Holos", 120, Job::Sage),
    24302u32 => SkillInfo::new(24302, "Pneuma", 120, Job::Sage),
    24304u32 => SkillInfo::new(24304, "Kerachole", 30, Job::Sage),

    // ═══════════════════════════════════════════════════════════════════════════
    // DPS Raid Buffs
    // ═══════════════════════════════════════════════════════════════════════════
    // Dragoon
    7398u32 => SkillInfo::new(7398, "Battle Litany", 120, Job::Dragoon),
    7399u32 => SkillInfo::new(7399, "Dragon Sight", 120, Job::Dragoon),

    // Ninja
    7546u32 => SkillInfo::new(7546, "Trick Attack", 60, Job::Ninja),
    16493u32 => SkillInfo::new(16493, "Mug", 120, Job::Ninja),

    // Bard
    118u32 => SkillInfo::new(118, "Battle Voice", 120, Job::Bard),
    7405u32 => SkillInfo::new(7405, "Radiant Finale", 110, Job::Bard),

    // Dancer
    16015u32 => SkillInfo::new(16015, "Technical Step", 120, Job::Dancer),
    16013u32 => SkillInfo::new(16013, "Standard Step", 30, Job::Dancer),
    16004u32 => SkillInfo::new(16004, "Devilment", 120, Job::Dancer),

    // Monk
    65u32 => SkillInfo::new(65, "Mantra", 90, Job::Monk),
    16476u32 => SkillInfo::new(16476, "Brotherhood", 120, Job::Monk),

    // Samurai
    16481u32 => SkillInfo::new(16481, "Ikishoten", 120, Job::Samurai),

    // Red Mage
    7520u32 => SkillInfo::new(7520, "Embolden", 120, Job::RedMage),

    // Summoner
    25799u32 => SkillInfo::new(25799, "Searing Light", 120, Job::Summoner),

    // Machinist
    16502u32 => SkillInfo::new(16502, "Automaton Queen", 0, Job::Machinist),   // Variable

    // Reaper
    24380u32 => SkillInfo::new(24380, "Arcane Circle", 120, Job::Reaper),

    // Viper
    34620u32 => SkillInfo::new(34620, "Vicewinder", 40, Job::Viper),
    34623u32 => SkillInfo::new(34623, "Vicepit", 40, Job::Viper),
    34647u32 => SkillInfo::new(34647, "Serpent's Ire", 120, Job::Viper),

    // Black Mage
    158u32 => SkillInfo::new(158, "Manafont", 120, Job::BlackMage),
    3573u32 => SkillInfo::new(3573, "Ley Lines", 120, Job::BlackMage),
    7421u32 => SkillInfo::new(7421, "Triplecast", 60, Job::BlackMage),

    // Pictomancer
    34675u32 => SkillInfo::new(34675, "Starry Muse", 120, Job::Pictomancer),
    35347u32 => SkillInfo::new(35347, "Living Muse", 40, Job::Pictomancer),
    35348u32 => SkillInfo::new(35348, "Steel Muse", 40, Job::Pictomancer),
    35349u32 => SkillInfo::new(35349, "Scenic Muse", 40, Job::Pictomancer),
    34685u32 => SkillInfo::new(34685, "Tempera Coat", 120, Job::Pictomancer),
};

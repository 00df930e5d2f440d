//! FFXIV Jobs and Role Mapping
//!
//! Maps job abbreviations from combat data to roles and display colors.
//! Colors match the community-standard job palette.

use serde::{Deserialize, Serialize};

/// Combat role in group content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

impl Role {
    /// Fallback display color (RGBA) when no job color applies
    pub const fn color(&self) -> [u8; 4] {
        match self {
            Role::Tank => [0x3a, 0x7b, 0xd5, 0xff],
            Role::Healer => [0x2e, 0xcc, 0x71, 0xff],
            Role::Dps => [0xe7, 0x4c, 0x3c, 0xff],
        }
    }
}

/// Playable jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    // Tanks
    Paladin,
    Warrior,
    DarkKnight,
    Gunbreaker,
    // Healers
    WhiteMage,
    Scholar,
    Astrologian,
    Sage,
    // Melee DPS
    Monk,
    Dragoon,
    Ninja,
    Samurai,
    Reaper,
    Viper,
    // Ranged physical DPS
    Bard,
    Machinist,
    Dancer,
    // Ranged magical DPS
    BlackMage,
    Summoner,
    RedMage,
    Pictomancer,
    // Limited
    BlueMage,
}

impl Job {
    pub const ALL: [Job; 22] = [
        Job::Paladin,
        Job::Warrior,
        Job::DarkKnight,
        Job::Gunbreaker,
        Job::WhiteMage,
        Job::Scholar,
        Job::Astrologian,
        Job::Sage,
        Job::Monk,
        Job::Dragoon,
        Job::Ninja,
        Job::Samurai,
        Job::Reaper,
        Job::Viper,
        Job::Bard,
        Job::Machinist,
        Job::Dancer,
        Job::BlackMage,
        Job::Summoner,
        Job::RedMage,
        Job::Pictomancer,
        Job::BlueMage,
    ];

    /// Three-letter abbreviation as it appears in combat data
    pub const fn abbr(&self) -> &'static str {
        match self {
            Job::Paladin => "PLD",
            Job::Warrior => "WAR",
            Job::DarkKnight => "DRK",
            Job::Gunbreaker => "GNB",
            Job::WhiteMage => "WHM",
            Job::Scholar => "SCH",
            Job::Astrologian => "AST",
            Job::Sage => "SGE",
            Job::Monk => "MNK",
            Job::Dragoon => "DRG",
            Job::Ninja => "NIN",
            Job::Samurai => "SAM",
            Job::Reaper => "RPR",
            Job::Viper => "VPR",
            Job::Bard => "BRD",
            Job::Machinist => "MCH",
            Job::Dancer => "DNC",
            Job::BlackMage => "BLM",
            Job::Summoner => "SMN",
            Job::RedMage => "RDM",
            Job::Pictomancer => "PCT",
            Job::BlueMage => "BLU",
        }
    }

    /// Full display name
    pub const fn name(&self) -> &'static str {
        match self {
            Job::Paladin => "Paladin",
            Job::Warrior => "Warrior",
            Job::DarkKnight => "Dark Knight",
            Job::Gunbreaker => "Gunbreaker",
            Job::WhiteMage => "White Mage",
            Job::Scholar => "Scholar",
            Job::Astrologian => "Astrologian",
            Job::Sage => "Sage",
            Job::Monk => "Monk",
            Job::Dragoon => "Dragoon",
            Job::Ninja => "Ninja",
            Job::Samurai => "Samurai",
            Job::Reaper => "Reaper",
            Job::Viper => "Viper",
            Job::Bard => "Bard",
            Job::Machinist => "Machinist",
            Job::Dancer => "Dancer",
            Job::BlackMage => "Black Mage",
            Job::Summoner => "Summoner",
            Job::RedMage => "Red Mage",
            Job::Pictomancer => "Pictomancer",
            Job::BlueMage => "Blue Mage",
        }
    }

    pub const fn role(&self) -> Role {
        match self {
            Job::Paladin | Job::Warrior | Job::DarkKnight | Job::Gunbreaker => Role::Tank,
            Job::WhiteMage | Job::Scholar | Job::Astrologian | Job::Sage => Role::Healer,
            _ => Role::Dps,
        }
    }

    /// Job display color (RGBA)
    pub const fn color(&self) -> [u8; 4] {
        match self {
            Job::Paladin => [0xa8, 0xd4, 0xe6, 0xff],
            Job::Warrior => [0xcf, 0x26, 0x21, 0xff],
            Job::DarkKnight => [0xd1, 0x26, 0xcc, 0xff],
            Job::Gunbreaker => [0x79, 0x6d, 0x30, 0xff],
            Job::WhiteMage => [0xff, 0xf0, 0xdc, 0xff],
            Job::Scholar => [0x86, 0x57, 0xff, 0xff],
            Job::Astrologian => [0xff, 0xe7, 0x4a, 0xff],
            Job::Sage => [0x80, 0xa0, 0xf0, 0xff],
            Job::Monk => [0xd6, 0x9c, 0x00, 0xff],
            Job::Dragoon => [0x41, 0x64, 0xcd, 0xff],
            Job::Ninja => [0xaf, 0x19, 0x64, 0xff],
            Job::Samurai => [0xe4, 0x6d, 0x04, 0xff],
            Job::Reaper => [0x96, 0x5a, 0x90, 0xff],
            Job::Viper => [0x10, 0x8b, 0x52, 0xff],
            Job::Bard => [0x91, 0xba, 0x5e, 0xff],
            Job::Machinist => [0x6e, 0xe1, 0xd6, 0xff],
            Job::Dancer => [0xe2, 0xb0, 0xaf, 0xff],
            Job::BlackMage => [0xa5, 0x79, 0xd6, 0xff],
            Job::Summoner => [0x2d, 0x9b, 0x78, 0xff],
            Job::RedMage => [0xe8, 0x7b, 0x7b, 0xff],
            Job::Pictomancer => [0xe6, 0xa8, 0xfa, 0xff],
            Job::BlueMage => [0x33, 0x66, 0xcc, 0xff],
        }
    }

    /// Role fallback color for this job
    pub const fn role_color(&self) -> [u8; 4] {
        self.role().color()
    }

    /// Parse a job from its abbreviation or full name, case-insensitive.
    pub fn from_abbr(s: &str) -> Option<Job> {
        let upper = s.trim().to_uppercase();
        Job::ALL
            .iter()
            .find(|j| j.abbr() == upper || j.name().to_uppercase() == upper)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_abbr_round_trip() {
        for job in Job::ALL {
            assert_eq!(Job::from_abbr(job.abbr()), Some(job));
        }
    }

    #[test]
    fn test_from_abbr_case_insensitive_and_full_name() {
        assert_eq!(Job::from_abbr("pld"), Some(Job::Paladin));
        assert_eq!(Job::from_abbr(" drk "), Some(Job::DarkKnight));
        assert_eq!(Job::from_abbr("Dark Knight"), Some(Job::DarkKnight));
        assert_eq!(Job::from_abbr("white mage"), Some(Job::WhiteMage));
        assert_eq!(Job::from_abbr("XYZ"), None);
    }

    #[test]
    fn test_role_colors() {
        assert_eq!(Role::Tank.color(), [0x3a, 0x7b, 0xd5, 0xff]);
        assert_eq!(Role::Healer.color(), [0x2e, 0xcc, 0x71, 0xff]);
        assert_eq!(Role::Dps.color(), [0xe7, 0x4c, 0x3c, 0xff]);
        assert_eq!(Job::Gunbreaker.role_color(), Role::Tank.color());
    }

    #[test]
    fn test_roles() {
        assert_eq!(Job::Paladin.role(), Role::Tank);
        assert_eq!(Job::Sage.role(), Role::Healer);
        assert_eq!(Job::BlackMage.role(), Role::Dps);
        assert_eq!(Job::BlueMage.role(), Role::Dps);
    }
}

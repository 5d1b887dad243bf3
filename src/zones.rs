//! Story zones. The active zone is derived from player level; the
//! first visit to a zone pauses the game for a story choice, and the
//! visited markers are wiped by prestige so the intros replay.

/// Reward granted by a story choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoryReward {
    Gold(u64),
    /// Timed +100% damage window, in milliseconds.
    DamageBuff(i64),
    /// Timed +100% gold window, in milliseconds.
    GoldBuff(i64),
}

#[derive(Debug, Clone, Copy)]
pub struct StoryChoice {
    pub text: &'static str,
    pub outcome_text: &'static str,
    pub reward: StoryReward,
}

#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mission: &'static str,
    pub min_level: u32,
    pub choices: &'static [StoryChoice],
}

pub const ZONES: &[Zone] = &[
    Zone {
        id: "forest",
        name: "Quiet Forest",
        description: "You wake at the edge of an ancient forest. Leaves rustle; small things squeak.",
        mission: "Clear the forest of slimes and rats to find a road to civilization.",
        min_level: 1,
        choices: &[
            StoryChoice {
                text: "Search the old stump",
                outcome_text: "You found hidden gold!",
                reward: StoryReward::Gold(100),
            },
            StoryChoice {
                text: "Meditate",
                outcome_text: "You feel a surge of strength (+100% damage, 1 min)",
                reward: StoryReward::DamageBuff(60_000),
            },
        ],
    },
    Zone {
        id: "cave",
        name: "Rotting Caves",
        description: "The trail leads into damp, dark caves. The air is stale and smells of danger.",
        mission: "Goblins and skeletons guard the passage. Fight your way through.",
        min_level: 11,
        choices: &[
            StoryChoice {
                text: "Search the goblin corpses",
                outcome_text: "Their pockets held a few coins.",
                reward: StoryReward::Gold(500),
            },
            StoryChoice {
                text: "Hone your weapon on a rock",
                outcome_text: "Your blade is sharper (+100% damage, 2 min)",
                reward: StoryReward::DamageBuff(120_000),
            },
        ],
    },
    Zone {
        id: "castle",
        name: "Cursed Castle",
        description: "Ruined grandeur towers before you. Those who found no rest in death dwell here.",
        mission: "Phantoms and death knights let no living thing pass. Prove your strength.",
        min_level: 21,
        choices: &[
            StoryChoice {
                text: "Read the ancient scroll",
                outcome_text: "Secret knowledge fills you with power (+100% gold, 2 min)",
                reward: StoryReward::GoldBuff(120_000),
            },
            StoryChoice {
                text: "Drink from the fountain",
                outcome_text: "The water was holy! (+100% damage, 2 min)",
                reward: StoryReward::DamageBuff(120_000),
            },
        ],
    },
    Zone {
        id: "volcano",
        name: "Lava Wastes",
        description: "The heat is unbearable. The ground cracks underfoot. You have entered demon territory.",
        mission: "Survive this hell and strike down the creatures of fire.",
        min_level: 31,
        choices: &[StoryChoice {
            text: "Gather fire crystals",
            outcome_text: "They are worth a fortune!",
            reward: StoryReward::Gold(5000),
        }],
    },
    Zone {
        id: "void",
        name: "Edge of Reality",
        description: "Physics does not apply here. Space warps; time runs backwards.",
        mission: "Face the incarnations of chaos and become the Loot Lord.",
        min_level: 41,
        choices: &[StoryChoice {
            text: "Absorb the void's energy",
            outcome_text: "Limitless power! (+100% damage, 5 min)",
            reward: StoryReward::DamageBuff(300_000),
        }],
    },
];

/// The zone a player of the given level is in: the last zone whose
/// `min_level` has been reached.
pub fn zone_for_level(level: u32) -> &'static Zone {
    let mut active = &ZONES[0];
    for zone in ZONES {
        if level >= zone.min_level {
            active = zone;
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(zone_for_level(1).id, "forest");
        assert_eq!(zone_for_level(10).id, "forest");
        assert_eq!(zone_for_level(11).id, "cave");
        assert_eq!(zone_for_level(20).id, "cave");
        assert_eq!(zone_for_level(21).id, "castle");
        assert_eq!(zone_for_level(31).id, "volcano");
        assert_eq!(zone_for_level(41).id, "void");
        assert_eq!(zone_for_level(9999).id, "void");
    }

    #[test]
    fn test_zones_sorted_and_choices_present() {
        let mut prev_min = 0;
        for zone in ZONES {
            assert!(zone.min_level > prev_min || zone.min_level == 1);
            assert!(!zone.choices.is_empty());
            prev_min = zone.min_level;
        }
    }
}

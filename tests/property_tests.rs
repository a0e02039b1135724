//! Property tests for the invariants the engine promises to hold under
//! any input: health bounds, key monotonicity, name uniqueness, occupant
//! bookkeeping, and redistribution limits.

use proptest::prelude::*;

use parlor_games::core::Player;
use parlor_games::hunt::{AddError, HuntEngine};

proptest! {
    /// Health never leaves [0, 100], whatever effects a room throws at it.
    #[test]
    fn test_health_stays_in_bounds(deltas in prop::collection::vec(-40i32..40, 0..50)) {
        let mut player = Player::new("Prop");
        for delta in deltas {
            player.apply_effect(delta);
            prop_assert!((0..=100).contains(&player.health()));
        }
    }

    /// The key is never revoked once granted.
    #[test]
    fn test_key_is_monotonic(
        deltas in prop::collection::vec(-40i32..40, 1..30),
        grant_at in 0usize..30,
    ) {
        let mut player = Player::new("Prop");
        let mut granted = false;
        for (i, delta) in deltas.iter().enumerate() {
            if i == grant_at.min(deltas.len() - 1) {
                player.grant_key();
                granted = true;
            }
            player.apply_effect(*delta);
            prop_assert_eq!(player.has_key(), granted);
        }
    }

    /// Two names that agree under lowercasing always collide.
    #[test]
    fn test_duplicate_names_collide(
        name in "[A-Za-z]{1,12}",
        flips in prop::collection::vec(any::<bool>(), 12),
    ) {
        let variant: String = name
            .chars()
            .zip(flips.iter().copied().chain(std::iter::repeat(false)))
            .map(|(c, flip)| {
                if flip {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();

        let mut engine = HuntEngine::manor();
        engine.add_player(&name, "Main Hall").unwrap();
        prop_assert_eq!(
            engine.add_player(&variant, "Main Hall"),
            Err(AddError::DuplicateName { name: variant.clone() })
        );
    }

    /// One redistribution pass never doubles up on a destination and
    /// accounts for every excess occupant.
    #[test]
    fn test_redistribution_accounting(count in 6usize..20) {
        let mut engine = HuntEngine::manor();
        for i in 0..count {
            engine.add_player(&format!("P{}", i), "Main Hall").unwrap();
        }

        let report = engine.redistribute("Main Hall").unwrap();

        // Main Hall has three exits, each may receive at most one player
        prop_assert!(report.moved.len() <= 3);
        let mut destinations: Vec<&str> =
            report.moved.iter().map(|(_, to)| to.as_str()).collect();
        destinations.sort_unstable();
        destinations.dedup();
        prop_assert_eq!(destinations.len(), report.moved.len());

        // Everyone beyond the cap was either placed or counted unplaced
        prop_assert_eq!(report.moved.len() + report.unplaced, count - 5);
        prop_assert_eq!(
            engine.room("Main Hall").unwrap().occupants.len(),
            5 + report.unplaced
        );
        prop_assert_eq!(engine.player_count(), count);
    }

    /// Room occupant lists always partition the player set, no matter
    /// what sequence of moves (legal or rejected) the players attempt.
    #[test]
    fn test_occupants_partition_players(
        attempts in prop::collection::vec((0usize..4, 0usize..5), 1..60),
    ) {
        let names = ["Ann", "Ben", "Cal", "Dot"];
        let mut engine = HuntEngine::manor();
        for name in names {
            engine.add_player(name, "Main Hall").unwrap();
        }

        for (who, pick) in attempts {
            let name = names[who];
            let Some(current) = engine.locate_player(name).map(String::from) else {
                // Died or the round concluded; their moves now just fail
                prop_assert!(engine.move_player(name, "Kitchen").is_err());
                continue;
            };

            let exits = engine.connections(&current).unwrap();
            let destination = exits[pick % exits.len()].to_string();
            let _ = engine.move_player(name, &destination);

            // Occupant lists and the player set agree exactly
            let rooms = engine.rooms();
            let listed: usize = rooms.iter().map(|r| r.occupants.len()).sum();
            prop_assert_eq!(listed, engine.player_count());
            for room in &rooms {
                for occupant in &room.occupants {
                    prop_assert!(engine.find_player(&occupant.name).is_some());
                    prop_assert_eq!(
                        engine.locate_player(&occupant.name),
                        Some(room.name.as_str())
                    );
                }
            }
        }
    }
}

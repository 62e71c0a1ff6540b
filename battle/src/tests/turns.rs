use super::*;
use crate::battle::Battle;
use crate::limits::ROUND_DURATION_MS;
use crate::replay::Winner;

#[test]
fn test_defender_acts_first_then_alternates() {
    let a_board = vec![create_unit(1, "A", 1, 50)];
    let d_board = vec![create_unit(2, "D", 1, 50)];

    let log = run_battle(&a_board, &d_board);

    for e in &log.entries {
        let expected = if e.round % 2 == 1 {
            Side::Defender
        } else {
            Side::Attacker
        };
        assert_eq!(e.turn_side, expected, "round {}", e.round);
    }
    assert_eq!(entry(&log, 1).actions, vec![attack(2, 1, 1)]);
    assert_eq!(entry(&log, 2).actions, vec![attack(1, 2, 1)]);
}

#[test]
fn test_five_ten_versus_three_ten() {
    // Attacker 5/10, defender 3/10.
    // R1 defender hits: attacker 7. R2 attacker hits: defender 5.
    // R3 defender hits: attacker 4. R4 attacker hits: defender 0 -> dies.
    let a_board = vec![create_unit(1, "Brute", 5, 10)];
    let d_board = vec![create_unit(2, "Guard", 3, 10)];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(log.winner, Winner::Attacker);
    assert_eq!(log.total_rounds, 4);
    assert_eq!(log.attacker_remaining, 1);
    assert_eq!(log.defender_remaining, 0);

    assert_eq!(entry(&log, 1).attacker_deck[0].current_hp, 7);
    assert_eq!(entry(&log, 2).defender_deck[0].current_hp, 5);
    assert_eq!(entry(&log, 3).attacker_deck[0].current_hp, 4);

    let last = entry(&log, 4);
    assert_eq!(last.turn_side, Side::Attacker);
    assert_eq!(last.actions, vec![attack(1, 2, 5), died(2, Side::Defender)]);
    assert!(last.defender_deck.is_empty());
    assert_eq!(last.attacker_deck[0].current_hp, 4);
}

#[test]
fn test_only_front_unit_acts() {
    let a_board = vec![create_unit(1, "Front", 1, 30), create_unit(2, "Back", 9, 30)];
    let d_board = vec![create_unit(3, "Wall", 0, 30)];

    let log = run_battle(&a_board, &d_board);

    let strikers: Vec<UnitId> = log
        .actions()
        .filter_map(|a| match a {
            Action::Attack { attacker_id, .. } => Some(*attacker_id),
            _ => None,
        })
        .collect();
    assert!(!strikers.is_empty());
    assert!(strikers.iter().all(|id| *id == UnitId(1)));
}

#[test]
fn test_zero_damage_round_is_still_logged() {
    let a_board = vec![create_unit(1, "A", 4, 10)];
    let d_board = vec![create_unit(2, "Pacifist", 0, 10)];

    let log = run_battle(&a_board, &d_board);

    let first = entry(&log, 1);
    assert_eq!(first.turn_side, Side::Defender);
    assert!(first.actions.is_empty());
    assert_eq!(first.attacker_deck[0].current_hp, 10);
}

#[test]
fn test_timestamps_advance_by_round_duration() {
    let a_board = vec![create_unit(1, "A", 1, 5)];
    let d_board = vec![create_unit(2, "D", 1, 5)];

    let log = run_battle(&a_board, &d_board);

    for e in &log.entries {
        assert_eq!(e.duration_ms, ROUND_DURATION_MS);
        assert_eq!(
            e.timestamp,
            START_MS + u64::from(e.round - 1) * ROUND_DURATION_MS
        );
    }
    assert_eq!(log.entries[0].timestamp, START_MS);
}

#[test]
fn test_step_by_step_matches_full_resolution() {
    let a_board = vec![create_unit(1, "A", 3, 7), create_unit(2, "B", 2, 4)];
    let d_board = vec![create_unit(3, "C", 2, 9)];

    let mut battle = Battle::new(a_board.clone(), d_board.clone(), START_MS);
    assert_eq!(battle.turn_side(), Side::Defender);
    assert!(battle.entries().is_empty());
    let first_round = battle.step().map(|e| e.round);
    assert_eq!(first_round, Some(1));
    assert_eq!(battle.turn_side(), Side::Attacker);
    assert_eq!(battle.entries().len(), 1);
    // C hit A for 2
    assert_eq!(battle.attacker()[0].current_hp, 5);
    assert_eq!(battle.defender()[0].current_hp, 9);

    while battle.step().is_some() {}
    assert!(battle.is_over());
    assert!(battle.step().is_none());

    let stepped = battle.finish();
    assert_eq!(stepped, run_battle(&a_board, &d_board));
}

#[test]
fn test_same_input_same_log() {
    let a_board = vec![
        create_tagged_unit(1, "A", 3, 7, &["rampage"]),
        create_tagged_unit(2, "B", 2, 4, &["deathrattle", "spawns:capo"]),
    ];
    let d_board = vec![
        create_tagged_unit(3, "C", 2, 9, &["thorns:1"]),
        create_tagged_unit(4, "D", 4, 3, &["taunt"]),
    ];

    assert_eq!(run_battle(&a_board, &d_board), run_battle(&a_board, &d_board));
}

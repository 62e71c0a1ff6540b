use super::*;
use crate::battle::determine_winner;
use crate::deck::Deck;
use crate::limits::MAX_ROUNDS;
use crate::replay::Winner;

#[test]
fn test_inert_fronts_hit_round_cap_and_tie() {
    let a_board = vec![create_tagged_unit(1, "Statue", 3, 10, &["no_attack"])];
    let d_board = vec![create_tagged_unit(2, "Statue", 3, 10, &["no_attack"])];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(log.total_rounds, MAX_ROUNDS);
    assert_eq!(log.entries.len(), MAX_ROUNDS as usize);
    assert_eq!(log.winner, Winner::Tie);
    assert_eq!(log.attacker_remaining, 1);
    assert_eq!(log.defender_remaining, 1);
    assert!(log.actions().next().is_none());
}

#[test]
fn test_round_cap_settled_by_total_health() {
    let a_board = vec![
        create_tagged_unit(1, "Statue", 0, 10, &["no_attack"]),
        create_unit(2, "Spare", 0, 1),
    ];
    let d_board = vec![create_tagged_unit(3, "Statue", 0, 10, &["no_attack"])];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(log.total_rounds, MAX_ROUNDS);
    assert_eq!(log.winner, Winner::Attacker);
    assert_eq!(log.attacker_remaining, 2);
}

#[test]
fn test_round_cap_counts_damage_taken() {
    // 1000 hits each: attacker loses 1000, defender loses 2000
    let a_board = vec![create_unit(1, "Sharp", 2, 5000)];
    let d_board = vec![create_unit(2, "Blunt", 1, 5000)];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(log.total_rounds, MAX_ROUNDS);
    let last = log.last_entry().expect("battle should have rounds");
    assert_eq!(last.attacker_deck[0].current_hp, 4000);
    assert_eq!(last.defender_deck[0].current_hp, 3000);
    assert_eq!(log.winner, Winner::Attacker);
}

#[test]
fn test_defender_wins_by_elimination() {
    let a_board = vec![create_unit(1, "Weak", 1, 3)];
    let d_board = vec![create_unit(2, "Strong", 3, 10)];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(log.total_rounds, 1);
    assert_eq!(entry(&log, 1).actions, vec![attack(2, 1, 3), died(1, Side::Attacker)]);
    assert_eq!(log.winner, Winner::Defender);
    assert_eq!(log.attacker_remaining, 0);
    assert_eq!(log.defender_remaining, 1);
}

#[test]
fn test_next_unit_steps_up_after_death() {
    let a_board = vec![create_unit(1, "A", 10, 30)];
    let d_board = vec![create_unit(2, "First", 1, 5), create_unit(3, "Second", 1, 5)];

    let log = run_battle(&a_board, &d_board);

    assert_eq!(ids(&entry(&log, 2).defender_deck), vec![3]);
    assert_eq!(entry(&log, 3).actions, vec![attack(3, 1, 1)]);
    assert_eq!(log.winner, Winner::Attacker);
    assert_eq!(log.total_rounds, 4);
}

#[test]
fn test_determine_winner_rules() {
    let unit = |id, hp| create_unit(id, "U", 1, hp);

    assert_eq!(
        determine_winner(&Deck::new(vec![unit(1, 1)]), &Deck::default()),
        Winner::Attacker
    );
    assert_eq!(
        determine_winner(&Deck::default(), &Deck::new(vec![unit(2, 1)])),
        Winner::Defender
    );
    assert_eq!(determine_winner(&Deck::default(), &Deck::default()), Winner::Tie);
    assert_eq!(
        determine_winner(
            &Deck::new(vec![unit(1, 3), unit(2, 3)]),
            &Deck::new(vec![unit(3, 5)])
        ),
        Winner::Attacker
    );
    assert_eq!(
        determine_winner(&Deck::new(vec![unit(1, 4)]), &Deck::new(vec![unit(2, 5)])),
        Winner::Defender
    );
    assert_eq!(
        determine_winner(&Deck::new(vec![unit(1, 5)]), &Deck::new(vec![unit(2, 5)])),
        Winner::Tie
    );
}

#[test]
fn test_summary_mirrors_log_header() {
    let a_board = vec![create_unit(1, "Brute", 5, 10)];
    let d_board = vec![create_unit(2, "Guard", 3, 10)];

    let log = run_battle(&a_board, &d_board);
    let summary = log.summary();

    assert_eq!(summary.winner, log.winner);
    assert_eq!(summary.rounds, log.total_rounds);
    assert_eq!(summary.attacker_remaining, 1);
    assert_eq!(summary.defender_remaining, 0);
}

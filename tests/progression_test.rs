//! Door unlocking and endings across whole runs

use idols::core::Variant;
use idols::progression::{Ending, ProgressionGraph};
use idols::roster::BossId;

fn ids(raw: &[u8]) -> Vec<BossId> {
    raw.iter().map(|&i| BossId(i)).collect()
}

fn win_all(graph: &mut ProgressionGraph, order: &[u8]) {
    for &id in order {
        assert!(
            graph.available_doors().contains(&BossId(id)),
            "door {} should be open after {:?}",
            id,
            graph.defeated()
        );
        assert!(graph.record_victory(BossId(id)));
    }
}

#[test]
fn test_first_vice_opens_the_second_tier() {
    let mut graph = ProgressionGraph::for_variant(Variant::Vices);
    assert_eq!(graph.available_doors(), ids(&[0, 1]));
    graph.record_victory(BossId(0));
    let doors = graph.available_doors();
    assert!(doors.contains(&BossId(2)));
    assert!(doors.contains(&BossId(3)));
    assert!(!doors.contains(&BossId(0)));
}

#[test]
fn test_lower_doors_lead_to_the_true_ending() {
    let mut graph = ProgressionGraph::for_variant(Variant::Vices);
    win_all(&mut graph, &[0, 1, 2, 3, 4, 5, 6]);
    assert!(graph.ending().is_none());
    assert!(graph.hidden_door_revealed());
    assert_eq!(graph.available_doors(), ids(&[7]));

    win_all(&mut graph, &[7]);
    assert_eq!(graph.ending(), Some(Ending::TrueEnding));
    assert!(graph.is_complete());
}

#[test]
fn test_skipping_a_door_ends_at_pride() {
    let mut graph = ProgressionGraph::for_variant(Variant::Vices);
    win_all(&mut graph, &[1, 3, 5, 6]);
    assert_eq!(graph.ending(), Some(Ending::VicesEnding));
    assert!(!graph.hidden_door_revealed());
}

#[test]
fn test_a_tier_closes_once_the_next_is_entered() {
    let mut graph = ProgressionGraph::for_variant(Variant::Vices);
    win_all(&mut graph, &[0, 2]);
    // Door 1 belongs to a tier that is behind us now.
    assert!(!graph.available_doors().contains(&BossId(1)));
    assert!(graph.available_doors().contains(&BossId(3)));
}

#[test]
fn test_idols_final_door_needs_all_four() {
    let mut graph = ProgressionGraph::for_variant(Variant::Idols);
    win_all(&mut graph, &[3, 1, 0]);
    assert!(!graph.available_doors().contains(&BossId(4)));
    win_all(&mut graph, &[2]);
    assert_eq!(graph.available_doors(), ids(&[4]));
    win_all(&mut graph, &[4]);
    assert_eq!(graph.ending(), Some(Ending::IdolsVictory));
}

#[test]
fn test_defeated_bosses_never_come_back() {
    for variant in Variant::ALL {
        let mut graph = ProgressionGraph::for_variant(variant);
        while graph.ending().is_none() {
            let doors = graph.available_doors();
            let Some(&next) = doors.last() else {
                panic!("{} ran out of doors", variant);
            };
            for beaten in graph.defeated() {
                assert!(!doors.contains(beaten));
            }
            graph.record_victory(next);
        }
    }
}

use super::*;
use league_core::{LeagueError, Outcome, ScoreSource, Team};

/// Replays a fixed list of scores, in order.
struct Scripted(Vec<u8>);

impl ScoreSource for Scripted {
    fn score(&mut self, _max_score: u8) -> u8 {
        self.0.remove(0)
    }
}

fn league_of(names: &[&str]) -> League {
    let mut league = League::new();
    for name in names {
        league.add_team(Team::new(*name, 7).unwrap()).unwrap();
    }
    league
}

#[test]
fn test_duplicate_team_name_rejected() {
    let mut league = league_of(&["U Mumba"]);
    let err = league
        .add_team(Team::new("U Mumba", 7).unwrap())
        .unwrap_err();
    assert_eq!(err, LeagueError::DuplicateTeamName("U Mumba".to_string()));
    assert_eq!(league.teams().len(), 1);
}

#[test]
fn test_two_team_season() {
    let mut league = league_of(&["A", "B"]);
    let results = league.run_round_robin(&mut Scripted(vec![30, 20]), false);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].outcome, Outcome::WinA);
    assert_eq!(league.teams()[0].wins(), 1);
    assert_eq!(league.teams()[1].wins(), 0);
    assert_eq!(league.history(), ["A (30) vs B (20)"]);
}

#[test]
fn test_four_team_round_robin_accounting() {
    let mut league = league_of(&["A", "B", "C", "D"]);
    // Six pairings, two scores each; pairing order is (0,1) (0,2) (0,3) (1,2) (1,3) (2,3).
    let script = vec![30, 20, 10, 10, 5, 40, 25, 30, 15, 15, 50, 0];
    let results = league.run_round_robin(&mut Scripted(script), false);

    assert_eq!(results.len(), 6);
    assert_eq!(league.history().len(), 6);

    let ties = results.iter().filter(|r| r.outcome.is_tie()).count();
    let wins: u32 = league.teams().iter().map(|t| t.wins()).sum();
    assert_eq!(wins as usize + ties, 6);

    assert_eq!(league.teams()[0].wins(), 1); // A: beat B, tied C, lost to D
    assert_eq!(league.teams()[2].wins(), 2); // C: beat B and D
    assert_eq!(league.teams()[3].wins(), 1); // D: beat A, tied B, lost to C
}

#[test]
fn test_champion_first_seen_tie_break() {
    // Wins [3, 5, 5, 2]: first team on the max count takes it.
    let mut league = League::new();
    for (name, wins) in [("A", 3u32), ("B", 5), ("C", 5), ("D", 2)] {
        let mut team = Team::new(name, 7).unwrap();
        for _ in 0..wins {
            team.record_win();
        }
        league.add_team(team).unwrap();
    }

    let champion = league.champion().unwrap();
    assert_eq!(champion.name(), "B");
    assert_eq!(champion.wins(), 5);
}

#[test]
fn test_champion_of_empty_league() {
    assert!(League::new().champion().is_none());
}

#[test]
fn test_champion_before_any_match_is_first_team() {
    let league = league_of(&["A", "B", "C"]);
    assert_eq!(league.champion().unwrap().name(), "A");
}

//! Standings and history reporting.

use crate::league::League;
use league_core::Team;

/// Standings table, wins descending, ties keeping league order.
pub fn standings_table(league: &League) -> String {
    let mut table = String::new();
    table.push_str("=== League Standings ===\n");
    table.push_str(&format!("{:<6} {:<20} {:>6}\n", "Rank", "Team", "Wins"));
    table.push_str(&"-".repeat(34));
    table.push('\n');

    let mut teams: Vec<&Team> = league.teams().iter().collect();
    teams.sort_by_key(|team| std::cmp::Reverse(team.wins()));

    for (rank, team) in teams.iter().enumerate() {
        table.push_str(&format!(
            "{:<6} {:<20} {:>6}\n",
            rank + 1,
            team.name(),
            team.wins()
        ));
    }

    table
}

/// The line the menu prints when asked for the winner.
pub fn champion_announcement(team: &Team) -> String {
    format!(
        "The Champion Team is: {} with {} wins!",
        team.name(),
        team.wins()
    )
}

/// Match history listing, chronological.
pub fn history_report(league: &League) -> String {
    let mut report = String::from("Match History:\n");
    if league.history().is_empty() {
        report.push_str("(no matches played yet)\n");
        return report;
    }
    for line in league.history() {
        report.push_str(line);
        report.push('\n');
    }
    report
}

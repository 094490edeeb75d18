//! Kabaddi League Menu CLI
//!
//! Interactive menu over the league runner: roster display, round-robin
//! scheduling, champion lookup, and match history.

use league::{
    champion_announcement, history_report, standings_table, League, LeagueConfig, RandomScores,
};
use std::env;
use std::io::{self, Write};
use std::path::Path;

fn print_usage() {
    println!("Kabaddi League Management System");
    println!();
    println!("Usage:");
    println!("  league [league.toml]");
    println!();
    println!("With no argument the built-in four-team league is used.");
    println!("A TOML file describes teams as:");
    println!();
    println!("  [[teams]]");
    println!("  name = \"Dabang Delhi\"");
    println!("  players = [");
    println!("      {{ name = \"Ajay Thakur\", role = \"raider\" }},");
    println!("      # ... exactly seven players per team");
    println!("  ]");
}

/// One line of menu input. EOF is its own case so a closed stdin ends the
/// menu instead of re-prompting forever.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Number(u32),
    Invalid,
    Eof,
}

fn parse_input(bytes_read: usize, line: &str) -> Input {
    if bytes_read == 0 {
        return Input::Eof;
    }
    match line.trim().parse() {
        Ok(number) => Input::Number(number),
        Err(_) => Input::Invalid,
    }
}

/// Prompt and read one menu number from stdin.
fn read_number(prompt: &str) -> Input {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(bytes_read) => parse_input(bytes_read, &line),
        Err(_) => Input::Eof,
    }
}

fn display_team_info(league: &League) {
    println!("Choose a team to display:");
    for (idx, team) in league.teams().iter().enumerate() {
        println!("{}. {}", idx + 1, team.name());
    }

    match read_number("Team number: ") {
        Input::Number(choice) if (1..=league.teams().len() as u32).contains(&choice) => {
            let team = &league.teams()[choice as usize - 1];
            println!();
            for line in team.info_lines() {
                println!("{}", line);
            }
        }
        Input::Number(_) => println!("Invalid team choice!"),
        Input::Invalid => println!("Invalid input! Please enter a number."),
        Input::Eof => {} // the outer menu loop sees EOF next and exits
    }
}

fn display_winner(league: &League) {
    match league.champion() {
        Some(champion) => {
            println!("\n{}", standings_table(league));
            println!("{}", champion_announcement(champion));
        }
        None => println!("The league has no teams."),
    }
}

fn run_menu(mut league: League) {
    loop {
        println!("\n--- Kabaddi League Menu ---");
        println!("1. Display Team Info");
        println!("2. Schedule Matches");
        println!("3. Display Winner");
        println!("4. View Match History");
        println!("5. Exit");

        let choice = match read_number("Choose an option: ") {
            Input::Number(choice) => choice,
            Input::Invalid => {
                println!("Invalid input! Please enter a number.");
                continue;
            }
            Input::Eof => break,
        };

        match choice {
            1 => display_team_info(&league),
            2 => {
                league.run_round_robin(&mut RandomScores::new(), true);
            }
            3 => display_winner(&league),
            4 => {
                println!("\n{}", history_report(&league));
            }
            5 => {
                println!("Thank you for using the Kabaddi League Management System!");
                break;
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let config = match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            print_usage();
            return;
        }
        Some(path) => match LeagueConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => LeagueConfig::default_league(),
    };

    let league = match League::from_config(&config) {
        Ok(league) => league,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    run_menu(league);
}

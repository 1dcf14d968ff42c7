//! CLI round example.
//!
//! Run with `RUST_LOG=debug` to see every card as it is dealt.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{LogObserver, Outcome, Participant, RoundEngine, TableOptions};

const PLAYER_ID: &str = "you";
const DELAY_MS: i64 = 300;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Twenty-one CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let engine = RoundEngine::new(TableOptions::default(), seed);
    engine.add_observer(Arc::new(LogObserver));
    engine.add_participant(Participant::new(PLAYER_ID, "You", 500));

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let points = engine.participant(PLAYER_ID).map_or(0, |p| p.points());
        if points <= 1 {
            println!("You cannot cover a bet any more. Game over.");
            break;
        }

        let Some(bet) = prompt_u64(&mut input, &format!("Bet amount (1-{}, 0 to quit): ", points - 1)) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = engine.place_bet(PLAYER_ID, bet) {
            println!("Bet error: {err}");
            continue;
        }

        let result = match engine.deal_participant(PLAYER_ID, DELAY_MS) {
            Ok(result) => result,
            Err(err) => {
                println!("Deal error: {err}");
                continue;
            }
        };
        println!("You stop on {result}.");

        let summary = match engine.deal_house(DELAY_MS) {
            Ok(summary) => summary,
            Err(err) => {
                println!("House deal error: {err}");
                break;
            }
        };

        let Some(settlement) = summary.settlement(PLAYER_ID) else {
            continue;
        };
        let verdict = match settlement.outcome {
            Outcome::Win => "You win",
            Outcome::Lose => "House wins",
            Outcome::Push => "Push",
        };
        println!(
            "House stops on {}{}. {verdict}. Points: {}",
            summary.house_total,
            if summary.house_bust { " (bust)" } else { "" },
            settlement.points
        );
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn prompt_u64(input: &mut impl BufRead, prompt: &str) -> Option<u64> {
    loop {
        let line = prompt_line(input, prompt)?;
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::prompt_u64;

    #[test]
    fn end_of_input_quits() {
        assert_eq!(prompt_u64(&mut Cursor::new(""), "> "), None);
        assert_eq!(prompt_u64(&mut Cursor::new("abc\n"), "> "), None);
    }

    #[test]
    fn reads_numbers_and_quit() {
        assert_eq!(prompt_u64(&mut Cursor::new("x\n25\n"), "> "), Some(25));
        assert_eq!(prompt_u64(&mut Cursor::new("q\n7\n"), "> "), None);
    }
}

//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bjtable::{Card, Event, Game, GameOptions, Notifier, Phase, Replay, Suit, TableView};
use tracing_subscriber::EnvFilter;

const STEP_DELAY: Duration = Duration::from_millis(250);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bjtable=info")),
        )
        .with_target(false)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::with_notifier(GameOptions::default(), seed, play_sound);

    loop {
        let money = game.balance();
        if money == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{money}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        match game.deal() {
            Ok(replay) => play_back(replay),
            Err(err) => println!("Deal error: {err}"),
        }

        while game.phase() == Phase::PlayerTurn {
            print_table(&game.view());

            println!("{}", format_actions(&game));
            let action = prompt_line("Action: ");

            let result = match action.as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double(),
                "t" | "hints" => {
                    let on = game.toggle_hints();
                    println!("Hints {}.", if on { "on" } else { "off" });
                    continue;
                }
                "m" | "mute" => {
                    let on = game.toggle_sound();
                    println!("Sound {}.", if on { "on" } else { "off" });
                    continue;
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(replay) => play_back(replay),
                Err(err) => println!("Action error: {err}"),
            }
        }

        let view = game.view();
        print_table(&view);
        println!("{}", view.message);
        if let Some(result) = game.result() {
            println!("Payout: {} (net {})", result.payout, result.net());
        }
        print_stats(&view);

        if let Err(err) = game.reset() {
            println!("Reset error: {err}");
            break;
        }
    }
}

fn play_sound(event: Event) {
    let cue = match event {
        Event::CardDealt => "*slide*",
        Event::CardFlip => "*flip*",
        Event::ChipStack => "*clack*",
        Event::Win => "*cheer*",
        Event::Lose => "*groan*",
        Event::Push => "*shrug*",
    };
    println!("{}", colorize(cue, "90"));
}

fn play_back(replay: Replay) {
    for step in replay {
        if step.event == Event::CardDealt || step.event == Event::CardFlip {
            println!(
                "  dealer {} | you {}",
                format_cards(&step.view.dealer),
                format_cards(&step.view.player)
            );
        }
        thread::sleep(STEP_DELAY);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &TableView) {
    println!(
        "\nDealer: {} (value {})",
        format_cards(&view.dealer),
        view.dealer_score
    );
    println!(
        "You:    {} (value {}) | bet {} | balance {}",
        format_cards(&view.player),
        view.player_score,
        view.bet,
        view.balance
    );
    if !view.hint_text().is_empty() {
        println!("Hint: {}", view.hint_text());
    }
    println!();
}

fn print_stats(view: &TableView) {
    let stats = view.stats;
    println!(
        "Played {} | W {} L {} P {} | streak {} (best {}) | biggest win {} loss {}\n",
        stats.games_played,
        stats.wins,
        stats.losses,
        stats.pushes,
        stats.current_streak,
        stats.longest_streak,
        stats.biggest_win,
        stats.biggest_loss
    );
}

fn format_actions<N: Notifier>(game: &Game<N>) -> String {
    let can_double =
        game.round().player().len() == 2 && game.balance() >= game.round().bet();
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", can_double),
        format_action("hints", "t", true),
        format_action("mute", "m", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if !card.is_face_up() {
        return "??".to_string();
    }

    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

use super::*;
use colored::Colorize;
use dialoguer::Input;
use rpsx_rules::Outcome;

/// Interactive console for a real tty: coloured output, and input through
/// `dialoguer` with line editing.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    fn verdict(r: &Resolution) -> colored::ColoredString {
        match r.outcome() {
            Outcome::Win => r.verdict().green().bold(),
            Outcome::Lose => r.verdict().red().bold(),
            Outcome::Draw => r.verdict().yellow().bold(),
        }
    }
}

impl Console for Terminal {
    fn notify(&mut self, event: &Event<'_>) -> std::io::Result<()> {
        match event {
            Event::Committed(commitment) => {
                println!("{} {}", "HMAC:".bold(), commitment.to_string().cyan())
            }
            Event::Rejected(e) => println!("{}", e.to_string().red()),
            Event::Resolved(r) => {
                println!("Your move: {}", r.user_move().bold());
                println!("Computer move: {}", r.computer_move().bold());
                println!("{}", Self::verdict(r));
                println!("{} {}", "HMAC key:".bold(), r.key().to_string().cyan());
            }
            event => println!("{}", event),
        }
        Ok(())
    }
    fn read(&mut self) -> std::io::Result<Option<String>> {
        Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map(Some)
            .map_err(std::io::Error::other)
    }
}

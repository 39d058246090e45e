//! Interactive menu loop, used when the binary runs without a subcommand.
//! Mirrors the subcommand surface through the same API facade and print
//! helpers; the loop itself holds no state beyond "keep going".

use super::print;
use colored::Colorize;
use console::Term;
use std::io::{self, Write};
use troop::api::TroopApi;
use troop::catalog::SeedSource;
use troop::error::Result;

const BANNERS: [&str; 3] = [
    r#"
        .-"-.
       /     \
      | () () |
       \  ^  /
        |||||
   Monkey Explorer
"#,
    r#"
         .--.  .--.
        ( oo )( oo )
         \--/  \--/
          ||    ||
   Two heads, one catalog
"#,
    r#"
          .-"""-.
         /  . .  \
        |    o    |
         \  ___  /
          '-----'
     Finding monkeys...
"#,
];

pub(crate) fn run<S: SeedSource>(api: &TroopApi<S>) -> Result<()> {
    let _ = Term::stdout().clear_screen();
    print_banner();
    println!("Welcome to the monkey catalog. Discover species from around the world!\n");

    let stdin = io::stdin();
    loop {
        print_menu();
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // stdin closed
            return Ok(());
        }

        let result = match line.trim() {
            "1" => api.list()?,
            "2" => {
                let name = prompt("Species name: ")?;
                api.find(&name)?
            }
            "3" => {
                let term = prompt("Search term: ")?;
                api.search(&term)?
            }
            "4" => {
                let term = prompt("Habitat: ")?;
                api.by_location(&term)?
            }
            "5" => api.endangered()?,
            "6" => api.random()?,
            "7" => api.stats(false)?,
            "8" | "q" | "quit" | "exit" => {
                println!("Goodbye!");
                return Ok(());
            }
            other => {
                println!("{}", format!("Invalid choice: {:?}. Pick 1-8.", other).red());
                continue;
            }
        };

        println!();
        print::print_result(&result);
        println!();
    }
}

fn print_banner() {
    let n = rand::random_range(0..BANNERS.len());
    println!("{}", BANNERS[n].yellow());
}

fn print_menu() {
    println!("{}", "What would you like to do?".bold());
    println!("  1. List all species");
    println!("  2. Find a species by name");
    println!("  3. Search species by name");
    println!("  4. Filter by habitat");
    println!("  5. List endangered species");
    println!("  6. Pick a random species");
    println!("  7. Show statistics");
    println!("  8. Exit");
    print!("\nSelect an option (1-8): ");
    let _ = io::stdout().flush();
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

use clap::Parser;
use troop::api::{CmdResult, TroopApi};
use troop::catalog::EmbeddedSeed;
use troop::error::Result;

mod cli;
use cli::args::{Cli, Commands};
use cli::{menu, print};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = TroopApi::new(EmbeddedSeed);

    let result = match cli.command {
        Some(Commands::List) => api.list()?,
        Some(Commands::Find { name }) => api.find(&name.join(" "))?,
        Some(Commands::Search { term }) => api.search(&term)?,
        Some(Commands::Location { term }) => api.by_location(&term)?,
        Some(Commands::Endangered) => api.endangered()?,
        Some(Commands::Random) => api.random()?,
        Some(Commands::Stats { reset }) => api.stats(reset)?,
        Some(Commands::Refresh) => api.refresh()?,
        None => return menu::run(&api),
    };

    render(&result, cli.json)
}

fn render(result: &CmdResult, json: bool) -> Result<()> {
    if json {
        print::print_result_json(result)
    } else {
        print::print_result(result);
        Ok(())
    }
}

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "troop")]
#[command(about = "Explore a catalog of monkey species from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every species in the catalog
    #[command(alias = "ls")]
    List,

    /// Show details for one species by exact name
    #[command(alias = "f")]
    Find {
        /// Name of the species (e.g. "Golden Lion Tamarin", quotes optional)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Search species by name substring
    #[command(alias = "s")]
    Search { term: String },

    /// Filter species by habitat
    #[command(alias = "loc")]
    Location { term: String },

    /// List endangered species
    #[command(alias = "e")]
    Endangered,

    /// Pick a random species
    #[command(alias = "r")]
    Random,

    /// Show catalog statistics
    Stats {
        /// Reset the random pick counter first
        #[arg(long)]
        reset: bool,
    },

    /// Reload the catalog from its seed data
    Refresh,
}

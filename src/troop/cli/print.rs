use colored::Colorize;
use troop::api::{CmdMessage, CmdResult, MessageLevel};
use troop::error::Result;
use troop::model::{CatalogStats, Species};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 20;
const LOCATION_WIDTH: usize = 28;
const POPULATION_WIDTH: usize = 12;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_species_table(species: &[Species]) {
    if species.is_empty() {
        return;
    }

    let header = format!(
        "{:<name$} {:<loc$} {:>pop$}  {}",
        "Name",
        "Location",
        "Population",
        "Status",
        name = NAME_WIDTH,
        loc = LOCATION_WIDTH,
        pop = POPULATION_WIDTH,
    );
    println!("{}", header.cyan());
    println!("{}", "-".repeat(header.width()).cyan());

    for s in species {
        let status = s.conservation_status().to_string();
        let status_colored = if s.is_endangered() {
            status.red()
        } else {
            status.green()
        };
        println!(
            "{} {} {:>pop$}  {}",
            pad_to_width(&s.name, NAME_WIDTH),
            pad_to_width(&s.location, LOCATION_WIDTH),
            group_digits(u64::from(s.population)),
            status_colored,
            pop = POPULATION_WIDTH,
        );
    }
}

pub(crate) fn print_species_card(species: &Species) {
    println!("{}", species.name.bold());
    println!("--------------------------------");
    println!("Location:    {}", species.location);
    println!(
        "Population:  {}",
        group_digits(u64::from(species.population))
    );
    let status = species.conservation_status().to_string();
    println!(
        "Status:      {}",
        if species.is_endangered() {
            status.red()
        } else {
            status.green()
        }
    );
    println!("Coordinates: {}", species.coordinates());
    if let Some(details) = &species.details {
        println!("\n{}", details);
    }
    if let Some(image) = &species.image {
        println!("\n{}", image.dimmed());
    }
}

pub(crate) fn print_stats(stats: &CatalogStats) {
    println!("{}", "Catalog statistics".bold());
    println!("--------------------------------");
    println!("Total species:       {}", stats.total_species);
    println!(
        "Total population:    {}",
        group_digits(stats.total_population)
    );
    println!(
        "Endangered species:  {} ({}%)",
        stats.endangered_species,
        stats.endangered_percentage()
    );
    println!(
        "Average population:  {}",
        group_digits(u64::from(stats.average_population))
    );
    println!(
        "Largest population:  {}",
        group_digits(u64::from(stats.largest_population))
    );
    println!(
        "Smallest population: {}",
        group_digits(u64::from(stats.smallest_population))
    );
    println!("Unique locations:    {}", stats.unique_locations);
    println!("Random picks:        {}", stats.random_access_count);
}

/// Render the whole result for the terminal.
pub(crate) fn print_result(result: &CmdResult) {
    if let Some(stats) = &result.stats {
        print_stats(stats);
    } else if let Some(species) = &result.species {
        print_species_card(species);
    } else if !result.listed.is_empty() {
        print_species_table(&result.listed);
    }
    print_messages(&result.messages);
}

/// Machine-readable rendering; messages go to stderr so stdout stays
/// parseable.
pub(crate) fn print_result_json(result: &CmdResult) -> Result<()> {
    let value = if let Some(stats) = &result.stats {
        let mut value = serde_json::to_value(stats)?;
        if let Some(map) = value.as_object_mut() {
            map.insert(
                "endangered_percentage".into(),
                serde_json::json!(stats.endangered_percentage()),
            );
        }
        value
    } else if let Some(species) = &result.species {
        species_value(species)?
    } else {
        let entries: Vec<serde_json::Value> = result
            .listed
            .iter()
            .map(species_value)
            .collect::<Result<_>>()?;
        serde_json::Value::Array(entries)
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    for message in &result.messages {
        eprintln!("{}", message.content);
    }
    Ok(())
}

fn species_value(species: &Species) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(species)?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "is_endangered".into(),
            serde_json::json!(species.is_endangered()),
        );
        map.insert(
            "conservation_status".into(),
            serde_json::json!(species.conservation_status().to_string()),
        );
    }
    Ok(value)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

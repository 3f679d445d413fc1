//! Interactive front end: a menu loop over stdin/stdout.
//!
//! Input validation lives here as explicit retry loops; the core only
//! reports bad input as an error value.

use std::io::{BufRead, Write};

use anyhow::Result;
use listing_core::{
    normalize_descriptions, parse_items, rewrite_titles, NormalizeOptions, TitleOptions,
};
use listing_logging::{optimizer_info, optimizer_warn};

const BANNER: &str = "=== Product Optimization Tool ===";
const INTRO: &str =
    "This tool helps optimize product titles and descriptions for e-commerce platforms.";

/// Run the menu loop until the user exits or stdin reaches EOF.
pub fn run(mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{INTRO}")?;

    loop {
        writeln!(out, "\n1. Optimize Titles")?;
        writeln!(out, "2. Optimize Descriptions")?;
        writeln!(out, "3. Optimize Both")?;
        writeln!(out, "4. Exit")?;

        let Some(choice) = prompt_line(&mut input, &mut out, "\nSelect an option (1-4): ")? else {
            break;
        };

        if matches!(choice.as_str(), "1" | "3") && !run_titles(&mut input, &mut out)? {
            break;
        }
        if matches!(choice.as_str(), "2" | "3") && !run_descriptions(&mut input, &mut out)? {
            break;
        }

        match choice.as_str() {
            "4" => {
                writeln!(out, "Exiting the product optimization tool.")?;
                break;
            }
            "1" | "2" | "3" => {}
            other => {
                optimizer_warn!("invalid menu choice {other:?}");
                writeln!(out, "Invalid choice. Please select a valid option (1-4).")?;
            }
        }
    }

    Ok(())
}

/// Returns false when stdin reached EOF and the loop should stop.
fn run_titles(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    let Some(titles) = prompt_items(input, out, "titles", "title")? else {
        return Ok(false);
    };

    let rewritten = rewrite_titles(&titles, &TitleOptions::default());
    optimizer_info!("rewrote {} product titles", rewritten.len());

    writeln!(out, "\nOptimized Titles:")?;
    for title in &rewritten {
        writeln!(out, "{title}")?;
    }
    Ok(true)
}

fn run_descriptions(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    let Some(descriptions) = prompt_items(input, out, "descriptions", "description")? else {
        return Ok(false);
    };

    let normalized = normalize_descriptions(&descriptions, &NormalizeOptions::default());
    optimizer_info!("normalized {} product descriptions", normalized.len());

    writeln!(out, "\nOptimized Descriptions:")?;
    for description in &normalized {
        writeln!(out, "{description}")?;
    }
    Ok(true)
}

/// Re-prompts until the input parses; returns None on EOF.
fn prompt_items(
    input: &mut impl BufRead,
    out: &mut impl Write,
    plural: &str,
    singular: &str,
) -> Result<Option<Vec<String>>> {
    loop {
        let text = format!("\nEnter product {plural} to optimize (separated by commas or pipes): ");
        let Some(line) = prompt_line(input, out, &text)? else {
            return Ok(None);
        };
        match parse_items(&line) {
            Ok(items) => return Ok(Some(items)),
            Err(err) => {
                optimizer_warn!("rejected {plural} input: {err}");
                writeln!(
                    out,
                    "Invalid input. Please enter at least one product {singular} separated by commas or pipes."
                )?;
            }
        }
    }
}

fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // EOF
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

//! Info command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use voyage_core::parse;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    title: String,
    author: String,
    year: Option<String>,
    themes: Vec<String>,
    quotes: usize,
    chapters: usize,
    about_words: usize,
    already_expanded: bool,
    missing: Option<&'static str>,
}

/// Display the fields extracted from a book file
pub fn info(input: &str, json: bool) -> Result<()> {
    let raw =
        fs::read_to_string(input).with_context(|| format!("Failed to open input file: {}", input))?;

    let book = parse(&raw);

    let info = BookInfo {
        title: book.title.clone(),
        author: book.author.clone(),
        year: book.year.clone(),
        themes: book.themes.iter().map(|t| t.title.clone()).collect(),
        quotes: book.quotes.len(),
        chapters: book.chapters.len(),
        about_words: book.about.split_whitespace().count(),
        already_expanded: book.already_expanded,
        missing: book.missing_field(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:       {}", info.title);
        println!("Author:      {}", info.author);
        if let Some(year) = &info.year {
            println!("Year:        {}", year);
        }
        if !info.themes.is_empty() {
            println!("Themes:      {}", info.themes.join(", "));
        }
        println!("Quotes:      {}", info.quotes);
        println!("Chapters:    {}", info.chapters);
        println!("About:       {} words", info.about_words);
        println!("Expanded:    {}", if info.already_expanded { "yes" } else { "no" });
        if let Some(field) = info.missing {
            println!("Missing:     {}", field);
        }
    }

    Ok(())
}

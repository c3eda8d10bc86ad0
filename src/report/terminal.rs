use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Paper, COLUMNS};

const COLUMN_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::White,
];

/// Print the papers as a colored table followed by a one-line summary.
pub fn render(papers: &[Paper], quiet: bool) {
    if !quiet {
        println!(
            "\n {}\n",
            "PubMed Papers with Pharma Affiliations".bold()
        );
    }

    println!("{}", build_table(papers));

    if !quiet {
        println!(
            "\n {} {} paper(s) with non-academic pharma/biotech authors",
            "✓".green(),
            papers.len()
        );
    }
}

fn build_table(papers: &[Paper]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            COLUMNS
                .iter()
                .map(|label| Cell::new(label).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

    for paper in papers {
        table.add_row(
            paper
                .to_row()
                .into_iter()
                .zip(COLUMN_COLORS)
                .map(|(text, color)| Cell::new(text).fg(color))
                .collect::<Vec<_>>(),
        );
    }

    table
}

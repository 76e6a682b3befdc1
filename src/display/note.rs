//! Note display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Note;

#[derive(Tabled)]
struct NoteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Preview")]
    preview: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Format a list of notes as a table
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes yet. Create one with 'toolbox note add'.\n".to_string();
    }

    let rows: Vec<NoteRow> = notes
        .iter()
        .map(|note| NoteRow {
            id: note.id.to_string(),
            title: note.title.clone(),
            preview: note.preview(40),
            updated: note.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format a single note in full
pub fn format_note_details(note: &Note) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", note.title));
    output.push_str(&"=".repeat(note.title.chars().count().max(4)));
    output.push('\n');
    output.push_str(&format!(
        "ID: {}  Created: {}  Updated: {}\n\n",
        note.id,
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&note.content);
    if !note.content.ends_with('\n') {
        output.push('\n');
    }
    output
}

//! Text-tool output formatting

use crate::tools::TextStats;

/// Format text statistics as labelled lines
pub fn format_text_stats(stats: &TextStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("Words:        {}\n", stats.words));
    output.push_str(&format!("Characters:   {}\n", stats.characters));
    output.push_str(&format!("No Spaces:    {}\n", stats.characters_no_spaces));
    output.push_str(&format!("Sentences:    {}\n", stats.sentences));
    output.push_str(&format!("Paragraphs:   {}\n", stats.paragraphs));
    output.push_str(&format!("Reading Time: {} min\n", stats.reading_time_minutes));
    output
}

/// Render a 0-5 strength score as a labelled bar
pub fn format_strength(score: u8) -> String {
    let label = match score {
        0..=1 => "weak",
        2..=3 => "fair",
        4 => "strong",
        _ => "very strong",
    };
    let filled = "#".repeat(score as usize);
    let empty = "-".repeat(5usize.saturating_sub(score as usize));
    format!("Strength: [{}{}] {}\n", filled, empty, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_output() {
        let stats = TextStats::analyze("Hello world.");
        let text = format_text_stats(&stats);
        assert!(text.contains("Words:        2"));
        assert!(text.contains("Sentences:    1"));
    }

    #[test]
    fn test_strength_bar() {
        assert_eq!(format_strength(4), "Strength: [####-] strong\n");
        assert_eq!(format_strength(0), "Strength: [-----] weak\n");
        assert_eq!(format_strength(5), "Strength: [#####] very strong\n");
    }
}

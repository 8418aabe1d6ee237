use super::line_filter::filter_lines;
use crate::types::lesson_data::ChordUnit;

/// All chord units of a chord file in order, directive lines skipped.
pub fn read_chords(content: &str) -> Vec<ChordUnit> {
    filter_lines(content)
        .iter()
        .flat_map(|line| line.split_whitespace().map(String::from))
        .collect()
}

/// The chord file's content lines, used as the initial per-sentence display strings.
pub fn chord_sentences(content: &str) -> Vec<String> {
    filter_lines(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chords_are_whitespace_split_across_lines() {
        let content = "<lesson>\nROEZ R RED  KW-BG\n\tSRAOEU R PWHRAOU\n";
        assert_eq!(
            read_chords(content),
            vec!["ROEZ", "R", "RED", "KW-BG", "SRAOEU", "R", "PWHRAOU"]
        );
        assert_eq!(
            chord_sentences(content),
            vec!["ROEZ R RED  KW-BG".to_string(), "\tSRAOEU R PWHRAOU".to_string()]
        );
    }
}

//! Minimal CoNLL-U reader.
//!
//! Only the ID, FORM and LEMMA columns are used. Comment lines, multiword
//! token ranges (`1-2`) and empty nodes (`1.1`) are skipped. A lemma of `_`
//! falls back to the form. Blank lines separate sentences.

use super::{Sentence, Word};
use crate::error::{BhashaError, Result};

const COLLABORATOR: &str = "conllu";

/// Parse CoNLL-U output into sentences.
pub fn parse(input: &str) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut words = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            if !words.is_empty() {
                sentences.push(Sentence::new(std::mem::take(&mut words)));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 3 {
            return Err(BhashaError::collaborator(
                COLLABORATOR,
                format!(
                    "line {}: expected at least 3 tab-separated columns, found {}",
                    number + 1,
                    columns.len()
                ),
            ));
        }

        let id = columns[0];
        if id.contains('-') || id.contains('.') {
            continue;
        }
        if id.parse::<usize>().is_err() {
            return Err(BhashaError::collaborator(
                COLLABORATOR,
                format!("line {}: invalid word id '{id}'", number + 1),
            ));
        }

        let form = columns[1];
        let lemma = match columns[2] {
            "_" => form,
            lemma => lemma,
        };
        words.push(Word::new(form, lemma));
    }

    if !words.is_empty() {
        sentences.push(Sentence::new(words));
    }

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentences() {
        let input = "# sent_id = 1\n\
                     # text = राम ने खाना खाया\n\
                     1\tराम\tराम\tPROPN\t_\t_\t4\tnsubj\t_\t_\n\
                     2\tने\tने\tADP\t_\t_\t1\tcase\t_\t_\n\
                     3\tखाना\tखाना\tNOUN\t_\t_\t4\tobj\t_\t_\n\
                     4\tखाया\tखा\tVERB\t_\t_\t0\troot\t_\t_\n\
                     \n\
                     1\tवह\tवह\tPRON\t_\t_\t0\troot\t_\t_\n\
                     \n";
        let sentences = parse(input).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].words.len(), 4);
        assert_eq!(sentences[0].words[3], Word::new("खाया", "खा"));
        assert_eq!(sentences[1].words[0].lemma, "वह");
    }

    #[test]
    fn test_skips_ranges_and_empty_nodes() {
        let input = "1-2\tdel\t_\n1\tde\tde\n2\tel\tel\n2.1\tx\tx\n3\tmar\tmar\n";
        let sentences = parse(input).unwrap();

        assert_eq!(sentences.len(), 1);
        let forms: Vec<&str> = sentences[0].words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(forms, vec!["de", "el", "mar"]);
    }

    #[test]
    fn test_underscore_lemma_uses_form() {
        let sentences = parse("1\tవాడుగా\t_\n").unwrap();
        assert_eq!(sentences[0].words[0].lemma, "వాడుగా");
    }

    #[test]
    fn test_crlf_and_missing_trailing_blank_line() {
        let sentences = parse("1\ta\tA\r\n2\tb\tB\r\n\r\n1\tc\tC").unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].words[1].lemma, "B");
        assert_eq!(sentences[1].words[0].lemma, "C");
    }

    #[test]
    fn test_malformed_lines() {
        let err = parse("1\tonly-two\n").unwrap_err();
        assert!(matches!(err, BhashaError::CollaboratorUnavailable { .. }));

        let err = parse("x\tform\tlemma\n").unwrap_err();
        assert!(err.to_string().contains("invalid word id"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# only a comment\n\n").unwrap().is_empty());
    }
}

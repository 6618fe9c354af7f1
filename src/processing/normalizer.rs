//! Sentence segmentation, tokenization and word normalization

use crate::processing::lemmatizer::Lemmatizer;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Read-only language resources shared by every normalizer.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl Lexicon {
    pub fn new<I, S>(stop_words: I, lemmatizer: Lemmatizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            lemmatizer,
        }
    }

    /// English stopword list with the default noun lemmatizer.
    pub fn english() -> Self {
        Self::new(stop_words::get(stop_words::LANGUAGE::English), Lemmatizer::new())
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }
}

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "st", "etc", "vs", "no", "fig", "eq", "approx", "cf",
];

/// True when the last word is an abbreviation or a run of initials
/// ("U.S.", "e.g.", "J.").
fn ends_with_abbreviation(sentence: &str) -> bool {
    let Some(word) = sentence.split_whitespace().last() else {
        return false;
    };
    let Some(stem) = word.strip_suffix('.') else {
        return false;
    };
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
    if stem.is_empty() || !stem.chars().all(|c| c.is_alphabetic() || c == '.') {
        return false;
    }

    let lower = stem.to_lowercase();
    ABBREVIATIONS.iter().any(|abbreviation| *abbreviation == lower)
        || lower.split('.').all(|part| part.chars().count() == 1)
}

pub struct Normalizer {
    lexicon: Arc<Lexicon>,
    merge_enumerators: bool,
    whitespace_regex: Regex,
    enumerator_regex: Regex,
    item_start_regex: Regex,
}

impl Normalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");
        let enumerator_regex = Regex::new(r"^\d+\.$").expect("Invalid enumerator regex");
        let item_start_regex = Regex::new(r"(?m)^[ \t]*\d+\.\s").expect("Invalid item start regex");

        Self {
            lexicon,
            merge_enumerators: true,
            whitespace_regex,
            enumerator_regex,
            item_start_regex,
        }
    }

    pub fn with_merge_enumerators(mut self, enable: bool) -> Self {
        self.merge_enumerators = enable;
        self
    }

    /// Full normalization: one cleaned token sequence per sentence.
    pub fn normalize(&self, text: &str) -> Vec<Vec<String>> {
        self.raw_sentences(text)
            .iter()
            .map(|tokens| self.clean(tokens))
            .collect()
    }

    /// Segment into sentences and tokenize, without any filtering.
    pub fn raw_sentences(&self, text: &str) -> Vec<Vec<String>> {
        self.split_sentences(text)
            .iter()
            .map(|sentence| Self::tokenize(sentence))
            .filter(|tokens| !tokens.is_empty())
            .collect()
    }

    /// Split text into sentences. A line opening with "N." always starts a
    /// new block, so headings and wrapped questions stay separate. Within a
    /// block, a break after an initial or a title such as "Dr." is undone.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut pending: Option<String> = None;

        for block in self.item_blocks(text) {
            let collapsed = self.whitespace_regex.replace_all(block, " ");

            for segment in collapsed.unicode_sentences() {
                let segment = segment.trim();
                if segment.is_empty() {
                    continue;
                }

                let sentence = match pending.take() {
                    Some(head) => format!("{} {}", head, segment),
                    None => segment.to_string(),
                };

                let lone_enumerator = self.merge_enumerators && self.enumerator_regex.is_match(&sentence);
                if lone_enumerator || ends_with_abbreviation(&sentence) {
                    pending = Some(sentence);
                } else {
                    sentences.push(sentence);
                }
            }

            // an abbreviation never carries past the end of its block
            if pending.as_deref().is_some_and(|s| !self.enumerator_regex.is_match(s)) {
                sentences.extend(pending.take());
            }
        }

        sentences.extend(pending);
        sentences
    }

    fn item_blocks<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut bounds: Vec<usize> = self
            .item_start_regex
            .find_iter(text)
            .map(|m| m.start())
            .filter(|&start| start > 0)
            .collect();
        bounds.insert(0, 0);
        bounds.push(text.len());

        bounds
            .windows(2)
            .map(|pair| &text[pair[0]..pair[1]])
            .filter(|block| !block.trim().is_empty())
            .collect()
    }

    /// Word tokens of one sentence; punctuation is kept as separate tokens.
    pub fn tokenize(sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Drop non-alphabetic tokens and stopwords, then lowercase and lemmatize.
    pub fn clean<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
            .map(str::to_lowercase)
            .filter(|lower| !self.lexicon.is_stop_word(lower))
            .map(|lower| self.lexicon.lemmatize(&lower))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(Arc::new(Lexicon::english()))
    }

    #[test]
    fn test_tokenization_keeps_punctuation() {
        let tokens = Normalizer::tokenize("12. Explain entropy.");
        assert_eq!(tokens, vec!["12", ".", "Explain", "entropy", "."]);
    }

    #[test]
    fn test_stopwords_and_punctuation_only_sentence_is_empty() {
        let normalizer = normalizer();
        let sentences = normalizer.normalize("The and of, to the! Is it?");

        assert!(!sentences.is_empty());
        assert!(sentences.iter().all(|tokens| tokens.is_empty()));
    }

    #[test]
    fn test_clean_lowercases_and_lemmatizes() {
        let lexicon = Lexicon::new(["the"], Lemmatizer::new());
        let normalizer = Normalizer::new(Arc::new(lexicon));
        let cleaned = normalizer.clean(&["Enzymes", "3", "catalyse", "the", "reactions", "!"]);

        assert_eq!(cleaned, vec!["enzyme", "catalyse", "reaction"]);
    }

    #[test]
    fn test_enumerator_is_merged_with_following_sentence() {
        let normalizer = normalizer();
        let sentences = normalizer.split_sentences("1. Explain photosynthesis.\n2. Describe osmosis.");

        assert_eq!(sentences, vec!["1. Explain photosynthesis.", "2. Describe osmosis."]);
    }

    #[test]
    fn test_numbered_lines_start_new_blocks() {
        let normalizer = normalizer();
        let text = "Section A\n1. Explain the process of\nphotosynthesis.\n2. Describe osmosis.";

        assert_eq!(
            normalizer.split_sentences(text),
            vec![
                "Section A",
                "1. Explain the process of photosynthesis.",
                "2. Describe osmosis.",
            ]
        );
    }

    #[test]
    fn test_abbreviations_do_not_end_a_question() {
        let normalizer = normalizer();
        let text = "1. Discuss Dr. Smith's theory of heat.\n2. Explain the U.S. Constitution briefly.\n";

        assert_eq!(
            normalizer.split_sentences(text),
            vec![
                "1. Discuss Dr. Smith's theory of heat.",
                "2. Explain the U.S. Constitution briefly.",
            ]
        );
    }

    #[test]
    fn test_abbreviation_at_end_of_item_is_kept() {
        let normalizer = normalizer();
        let text = "1. Name three noble gases, e.g.\n2. Define entropy.";

        assert_eq!(
            normalizer.split_sentences(text),
            vec!["1. Name three noble gases, e.g.", "2. Define entropy."]
        );
        assert!(ends_with_abbreviation("Compare Fig."));
        assert!(!ends_with_abbreviation("12."));
        assert!(!ends_with_abbreviation("Explain osmosis."));
    }

    #[test]
    fn test_enumerator_merge_can_be_disabled() {
        let normalizer = normalizer().with_merge_enumerators(false);
        let sentences = normalizer.split_sentences("1. Explain photosynthesis.");

        assert!(sentences.iter().all(|s| s != "1. Explain photosynthesis."));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(["Gamma"], Lemmatizer::new());
        let normalizer = Normalizer::new(Arc::new(lexicon));

        assert_eq!(normalizer.clean(&["alpha", "gamma", "betas"]), vec!["alpha", "beta"]);
    }
}

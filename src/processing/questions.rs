//! Numbered question detection

use crate::config::NumberingMode;
use crate::processing::normalizer::Normalizer;

/// True when a token sequence opens with a "N ." numbering marker.
pub fn has_enumerator<S: AsRef<str>>(tokens: &[S]) -> bool {
    match tokens {
        [number, period, ..] => {
            let number = number.as_ref();
            !number.is_empty()
                && number.chars().all(|c| c.is_ascii_digit())
                && period.as_ref() == "."
        }
        _ => false,
    }
}

pub struct QuestionExtractor {
    mode: NumberingMode,
}

impl QuestionExtractor {
    pub fn new(mode: NumberingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> NumberingMode {
        self.mode
    }

    /// Questions from already tokenized sentences: the words after the
    /// numbering marker joined by single spaces.
    pub fn extract<S: AsRef<str>>(sentences: &[Vec<S>]) -> Vec<String> {
        sentences
            .iter()
            .filter(|tokens| has_enumerator(tokens.as_slice()))
            .map(|tokens| join_tokens(&tokens[2..]))
            .collect()
    }

    /// Run the configured strategy over raw text.
    pub fn extract_from_text(&self, normalizer: &Normalizer, text: &str) -> Vec<String> {
        match self.mode {
            NumberingMode::Raw => normalizer
                .raw_sentences(text)
                .iter()
                .filter(|tokens| has_enumerator(tokens.as_slice()))
                .map(|tokens| normalizer.clean(&tokens[2..]))
                .filter(|cleaned| !cleaned.is_empty())
                .map(|cleaned| cleaned.join(" "))
                .collect(),
            NumberingMode::Cleaned => Self::extract(normalizer.normalize(text).as_slice()),
        }
    }
}

fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

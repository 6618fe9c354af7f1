//! Rule-based English noun lemmatizer.
//!
//! Follows WordNet's morphological approach for nouns: an exception table of
//! irregular plurals is consulted first, then an ordered list of suffix
//! detachment rules. Without a full dictionary to validate candidates, each
//! rule is guarded so that singular words are left alone. The result is always
//! a fixed point, so lemmatizing a lemma returns it unchanged.

use std::collections::HashMap;

/// Upper bound on rule applications for a single word.
const MAX_PASSES: usize = 4;

/// Shortest word a suffix rule may touch.
const MIN_RULE_LEN: usize = 4;

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("media", "medium"),
    ("bacteria", "bacterium"),
    ("curricula", "curriculum"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("crises", "crisis"),
    ("axes", "axis"),
    ("bases", "basis"),
    ("diagnoses", "diagnosis"),
    ("parentheses", "parenthesis"),
    ("nuclei", "nucleus"),
    ("radii", "radius"),
    ("stimuli", "stimulus"),
    ("fungi", "fungus"),
    ("cacti", "cactus"),
    ("alumni", "alumnus"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("selves", "self"),
    ("calves", "calf"),
    ("loaves", "loaf"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("lenses", "lens"),
    ("biases", "bias"),
    ("atlases", "atlas"),
    ("viruses", "virus"),
    ("statuses", "status"),
    ("firemen", "fireman"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("zombies", "zombie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("pies", "pie"),
    ("goes", "go"),
    ("heroes", "hero"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("echoes", "echo"),
    ("volcanoes", "volcano"),
];

/// Words that look plural but are their own base form.
const INVARIANT_NOUNS: &[&str] = &[
    "series", "species", "news", "physics", "mathematics", "economics",
    "statistics", "ethics", "politics", "electronics", "mechanics",
    "genetics", "linguistics", "thermodynamics", "gymnastics", "athletics",
    "means", "headquarters", "crossroads", "analysis", "basis", "thesis",
    "crisis", "axis", "census", "status", "apparatus", "bus", "gas",
    "lens", "atlas", "canvas", "bias", "chaos", "ethos", "pathos",
    "cosmos", "always", "perhaps", "whereas", "towards", "diabetes",
    "rabies", "measles", "mumps", "herpes", "scabies",
];

/// Ordered (suffix, replacement) rules; the first match wins.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("yses", "ysis"),
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("s", ""),
];

/// Endings that mark a word as already singular for the bare "s" rule.
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is"];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
    invariant: Vec<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR_NOUNS.iter().copied().collect(),
            invariant: INVARIANT_NOUNS.to_vec(),
        }
    }

    /// Reduce a lowercase word to its noun base form.
    pub fn lemmatize(&self, word: &str) -> String {
        let mut current = word.to_string();
        for _ in 0..MAX_PASSES {
            match self.step(&current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }

    fn step(&self, word: &str) -> Option<String> {
        if let Some(lemma) = self.exceptions.get(word) {
            return Some((*lemma).to_string());
        }
        if self.invariant.iter().any(|w| *w == word) || word.chars().count() < MIN_RULE_LEN {
            return None;
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if !word.ends_with(suffix) {
                continue;
            }
            if *suffix == "s" && SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
                return None;
            }
            let stem = &word[..word.len() - suffix.len()];
            if stem.chars().count() < 2 {
                // "dies" -> "die", not "dy"
                if *suffix == "ies" {
                    return Some(word[..word.len() - 1].to_string());
                }
                return None;
            }
            return Some(format!("{}{}", stem, replacement));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("questions"), "question");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("studies"), "study");
        assert_eq!(lemmatizer.lemmatize("analyses"), "analysis");
        assert_eq!(lemmatizer.lemmatize("topics"), "topic");
    }

    #[test]
    fn test_irregular_plurals() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("criteria"), "criterion");
        assert_eq!(lemmatizer.lemmatize("matrices"), "matrix");
        assert_eq!(lemmatizer.lemmatize("leaves"), "leaf");
    }

    #[test]
    fn test_ies_and_oes_plurals() {
        let lemmatizer = Lemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("movies"), "movie");
        assert_eq!(lemmatizer.lemmatize("ties"), "tie");
        assert_eq!(lemmatizer.lemmatize("dies"), "die");
        assert_eq!(lemmatizer.lemmatize("goes"), "go");
        assert_eq!(lemmatizer.lemmatize("potatoes"), "potato");
        assert_eq!(lemmatizer.lemmatize("diabetes"), "diabetes");
        assert_eq!(lemmatizer.lemmatize("policies"), "policy");
    }

    #[test]
    fn test_singular_words_untouched() {
        let lemmatizer = Lemmatizer::new();

        for word in ["class", "process", "virus", "analysis", "famous", "topic", "physics", "series", "gas", "run"] {
            assert_eq!(lemmatizer.lemmatize(word), word, "{} should be unchanged", word);
        }
    }

    #[test]
    fn test_lemmatization_is_idempotent() {
        let lemmatizer = Lemmatizer::new();
        let words = [
            "questions", "processes", "analyses", "hypotheses", "children",
            "policies", "matrices", "buses", "wolves", "theories", "bias",
            "species", "dresses", "firemen", "running", "ideas", "atlases",
            "movies", "ties", "goes", "diabetes",
        ];

        for word in words {
            let once = lemmatizer.lemmatize(word);
            let twice = lemmatizer.lemmatize(&once);
            assert_eq!(once, twice, "lemmatize is not idempotent for {}", word);
        }
    }
}

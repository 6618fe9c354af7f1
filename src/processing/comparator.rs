//! Question frequency tables and their intersection

use std::collections::HashMap;

/// Question counts kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCounts {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl QuestionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_questions<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::new();
        for question in questions {
            counts.add(question.as_ref(), 1);
        }
        counts
    }

    pub fn add(&mut self, question: &str, count: usize) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(question) {
            Some(existing) => *existing += count,
            None => {
                self.order.push(question.to_string());
                self.counts.insert(question.to_string(), count);
            }
        }
    }

    pub fn get(&self, question: &str) -> Option<usize> {
        self.counts.get(question).copied()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order
            .iter()
            .map(move |question| (question.as_str(), self.counts[question]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Multiset intersection: keys present in both, with the smaller count,
    /// in this table's order.
    pub fn intersect(&self, other: &QuestionCounts) -> QuestionCounts {
        let mut common = QuestionCounts::new();
        for (question, count) in self.iter() {
            if let Some(other_count) = other.get(question) {
                common.add(question, count.min(other_count));
            }
        }
        common
    }
}

impl<S: AsRef<str>> FromIterator<(S, usize)> for QuestionCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let mut counts = QuestionCounts::new();
        for (question, count) in iter {
            counts.add(question.as_ref(), count);
        }
        counts
    }
}

/// Count both question lists and intersect them by minimum count.
pub fn compare_questions<S: AsRef<str>>(first: &[S], second: &[S]) -> QuestionCounts {
    let first_counts = QuestionCounts::from_questions(first);
    let second_counts = QuestionCounts::from_questions(second);
    first_counts.intersect(&second_counts)
}

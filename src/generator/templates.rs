

use serde::{Deserialize, Serialize};

const DEFAULT_PREFIXES: &[&str] = &[
    "best", "top", "how to", "cheap", "free", "new", "ultimate", "most popular", "trending",
    "affordable", "premium", "essential", "recommended", "value", "reliable", "must-have",
    "exclusive", "diy", "innovative", "advanced", "proven", "favorite", "professional",
    "beginner-friendly", "expert-level", "revolutionary", "limited-edition",
];

const DEFAULT_SUFFIXES: &[&str] = &[
    "guide", "tips", "reviews", "for beginners", "tutorial", "trends", "insights",
    "recommendations", "expert advice", "strategies", "case studies",
    "step-by-step instructions", "how-to guides", "best practices", "in-depth analysis",
    "FAQs", "user stories", "latest updates", "predictions",
];

const DEFAULT_QUESTION_STARTERS: &[&str] = &[
    "how", "what", "why", "where", "when", "who", "which", "whom", "whose", "can", "should",
    "could", "would", "is", "are", "did", "does", "will", "may", "might", "shall",
];


/// Template vocabulary. Lists only grow and may hold repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub question_starters: Vec<String>,
}

impl WordLists {
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            question_starters: Vec::new(),
        }
    }

    pub fn extend(
        &mut self,
        prefixes: Option<&[String]>,
        suffixes: Option<&[String]>,
        questions: Option<&[String]>,
    ) {
        if let Some(prefixes) = prefixes {
            self.prefixes.extend_from_slice(prefixes);
        }
        if let Some(suffixes) = suffixes {
            self.suffixes.extend_from_slice(suffixes);
        }
        if let Some(questions) = questions {
            self.question_starters.extend_from_slice(questions);
        }
    }
}

impl Default for WordLists {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            prefixes: owned(DEFAULT_PREFIXES),
            suffixes: owned(DEFAULT_SUFFIXES),
            question_starters: owned(DEFAULT_QUESTION_STARTERS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_sizes() {
        let lists = WordLists::default();
        assert_eq!(lists.prefixes.len(), 27);
        assert_eq!(lists.suffixes.len(), 19);
        assert_eq!(lists.question_starters.len(), 21);
        assert_eq!(lists.prefixes[0], "best");
    }

    #[test]
    fn test_extend_appends_without_dedup() {
        let mut lists = WordLists::default();
        let extra = vec!["best".to_string()];
        lists.extend(Some(extra.as_slice()), None, None);
        lists.extend(Some(extra.as_slice()), None, None);

        assert_eq!(lists.prefixes.len(), 29);
        assert_eq!(lists.prefixes.iter().filter(|p| *p == "best").count(), 3);
        assert_eq!(lists.suffixes.len(), 19);
    }

    #[test]
    fn test_extend_each_list() {
        let mut lists = WordLists::empty();
        let (p, s, q) = (vec!["p".to_string()], vec!["s".to_string()], vec!["q".to_string()]);
        lists.extend(Some(p.as_slice()), Some(s.as_slice()), Some(q.as_slice()));
        assert_eq!(lists.prefixes, vec!["p"]);
        assert_eq!(lists.suffixes, vec!["s"]);
        assert_eq!(lists.question_starters, vec!["q"]);
    }
}

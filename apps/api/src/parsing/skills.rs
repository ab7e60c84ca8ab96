use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

/// Skills recognised by the keyword matcher, in their canonical spelling.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "React",
    "JavaScript",
    "SQL",
    "AWS",
    "Docker",
    "Machine Learning",
    "Communication",
    "Teamwork",
];

lazy_static! {
    static ref SKILL_PATTERNS: Vec<(&'static str, Regex)> = SKILL_VOCABULARY
        .iter()
        .map(|&skill| (skill, whole_word_pattern(skill)))
        .collect();
}

/// Case-insensitive `\b`-anchored pattern for a literal skill name.
///
/// Both anchors are always present, so a name ending in punctuation (`C++`)
/// only matches when a word character follows it (`C++11`).
fn whole_word_pattern(skill: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(skill)))
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// Every vocabulary skill mentioned anywhere in the text, sorted.
pub fn find_skills(text: &str) -> Vec<String> {
    let found: BTreeSet<&str> = SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(skill, _)| *skill)
        .collect();

    found.into_iter().map(String::from).collect()
}

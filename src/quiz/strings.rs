use crate::quiz::{TextRef, Verdict};

const QUESTION_TEXTS: [(&str, &str); 11] = [
    ("question_australia", "Canberra is the capital of Australia."),
    (
        "question_oceans",
        "The Pacific Ocean is larger than the Atlantic Ocean.",
    ),
    (
        "question_mideast",
        "The Suez Canal connects the Red Sea and the Indian Ocean.",
    ),
    ("question_africa", "The source of the Nile River is in Egypt."),
    (
        "question_americas",
        "The Amazon River is the longest river in the Americas.",
    ),
    (
        "question_asia",
        "Lake Baikal is the world's oldest and deepest freshwater lake.",
    ),
    (
        "question_continental_shift",
        "The continents still drift apart by a few centimeters every year.",
    ),
    (
        "question_mt_thor",
        "Mount Thor in Canada has the greatest purely vertical drop on Earth.",
    ),
    (
        "question_north_hemisphere",
        "Most of the Earth's land lies in the Southern Hemisphere.",
    ),
    (
        "question_california",
        "California is the largest U.S. state by area.",
    ),
    (
        "question_dead_sea",
        "The shore of the Dead Sea is the lowest land elevation on Earth.",
    ),
];

pub const WARNING_TEXT: &str = "Are you sure you want to do this?";

/// Looks up the text for a question.
///
/// Unknown keys are shown verbatim, so question files can carry their text inline.
pub fn resolve(text: &TextRef) -> &str {
    match QUESTION_TEXTS.iter().find(|(key, _)| *key == text.as_str()) {
        Some((_, value)) => *value,
        None => text.as_str(),
    }
}

pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "Correct!",
        Verdict::Incorrect => "Incorrect!",
        Verdict::Judged => "Cheating is wrong.",
    }
}

pub fn answer_label(answer: bool) -> &'static str {
    if answer {
        "True"
    } else {
        "False"
    }
}

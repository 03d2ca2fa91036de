//! Sample assessment question bank. Four questions per dimension, each with
//! five forced-choice answers valued -3..=+3 (positive pulls toward the
//! first pole of the pair).

pub struct QuestionSeed {
    pub text: &'static str,
    pub category: &'static str,
    pub choices: &'static [(&'static str, i32)],
}

pub const QUESTIONS: &[QuestionSeed] = &[
    // Extraversion / Introversion
    QuestionSeed {
        text: "At a party, do you typically:",
        category: "EI",
        choices: &[
            ("Interact with many people, including strangers", 3),
            ("Interact with a few people you know well", -3),
            ("Have deep conversations with a small group", -2),
            ("Circulate and meet new people", 2),
            ("Stay with people you came with", -1),
        ],
    },
    QuestionSeed {
        text: "After a long week of school, you recharge by:",
        category: "EI",
        choices: &[
            ("Going out with a big group of friends", 3),
            ("Spending quiet time alone", -3),
            ("Visiting one close friend", -1),
            ("Organising an outing or game", 2),
            ("Reading or working on a hobby by yourself", -2),
        ],
    },
    QuestionSeed {
        text: "In class discussions, you usually:",
        category: "EI",
        choices: &[
            ("Speak up quickly and think out loud", 3),
            ("Listen and reflect before saying anything", -3),
            ("Contribute once you are sure of your point", -1),
            ("Enjoy debating with several classmates", 2),
            ("Prefer writing your thoughts to speaking them", -2),
        ],
    },
    QuestionSeed {
        text: "When you meet new people, you:",
        category: "EI",
        choices: &[
            ("Start conversations easily", 3),
            ("Wait for them to approach you", -2),
            ("Feel energised by the introductions", 2),
            ("Find it tiring even when it goes well", -3),
            ("Warm up slowly over several meetings", -1),
        ],
    },
    // Sensing / Intuition
    QuestionSeed {
        text: "When learning something new, you prefer:",
        category: "SN",
        choices: &[
            ("Practical, hands-on experience", 3),
            ("Theoretical concepts and big ideas", -3),
            ("Step-by-step instructions", 2),
            ("Understanding the overall meaning", -2),
            ("A mix of theory and practice", 0),
        ],
    },
    QuestionSeed {
        text: "When solving a problem, you trust:",
        category: "SN",
        choices: &[
            ("Facts and past experience", 3),
            ("Hunches and patterns you notice", -3),
            ("Methods that have worked before", 2),
            ("A new approach nobody has tried", -2),
            ("Whichever gets results fastest", 0),
        ],
    },
    QuestionSeed {
        text: "You are more drawn to:",
        category: "SN",
        choices: &[
            ("What is real and useful today", 3),
            ("What could be possible tomorrow", -3),
            ("Concrete details and specifics", 2),
            ("Ideas, symbols and connections", -2),
            ("A balance of both", 0),
        ],
    },
    QuestionSeed {
        text: "Instructions for a task should be:",
        category: "SN",
        choices: &[
            ("Detailed and specific", 3),
            ("A goal with freedom on how to get there", -3),
            ("Shown with a worked example", 2),
            ("A sketch of the overall idea", -2),
            ("Brief but open to questions", -1),
        ],
    },
    // Thinking / Feeling
    QuestionSeed {
        text: "When a friend disagrees with you, you:",
        category: "TF",
        choices: &[
            ("Argue your case with facts", 3),
            ("Consider how the disagreement affects them", -3),
            ("Look for the most logical position", 2),
            ("Look for common ground to keep the peace", -2),
            ("Let it go unless it really matters", -1),
        ],
    },
    QuestionSeed {
        text: "Good decisions are mostly made by:",
        category: "TF",
        choices: &[
            ("Weighing evidence objectively", 3),
            ("Weighing the impact on people", -3),
            ("Applying consistent rules", 2),
            ("Listening to everyone affected", -2),
            ("A mix of head and heart", 0),
        ],
    },
    QuestionSeed {
        text: "You value more highly:",
        category: "TF",
        choices: &[
            ("Being fair even when it is hard", 2),
            ("Being compassionate even when it bends rules", -2),
            ("Truth, plainly spoken", 3),
            ("Harmony in the group", -3),
            ("Honesty delivered kindly", -1),
        ],
    },
    QuestionSeed {
        text: "When giving feedback on a classmate's work, you:",
        category: "TF",
        choices: &[
            ("Point out the flaws directly so they can fix them", 3),
            ("Lead with what they did well", -2),
            ("Focus on the criteria and the marks", 2),
            ("Soften criticism so they stay encouraged", -3),
            ("Ask how they feel about it first", -1),
        ],
    },
    // Judging / Perceiving
    QuestionSeed {
        text: "Your school assignments are usually:",
        category: "JP",
        choices: &[
            ("Finished early, following a plan", 3),
            ("Done in a burst close to the deadline", -3),
            ("Scheduled into your week in advance", 2),
            ("Started when inspiration strikes", -2),
            ("Somewhere in between", 0),
        ],
    },
    QuestionSeed {
        text: "Weekends are best when they are:",
        category: "JP",
        choices: &[
            ("Planned in advance", 3),
            ("Left completely open", -3),
            ("Loosely sketched with room to adjust", 1),
            ("Decided on the morning itself", -2),
            ("A routine you repeat most weeks", 2),
        ],
    },
    QuestionSeed {
        text: "Your desk and notes are:",
        category: "JP",
        choices: &[
            ("Organised and tidy", 3),
            ("A creative mess you still navigate", -3),
            ("Ordered when exams approach", -1),
            ("Filed by subject and date", 2),
            ("Tidied only when you cannot find things", -2),
        ],
    },
    QuestionSeed {
        text: "A sudden change of plans:",
        category: "JP",
        choices: &[
            ("Annoys you until a new plan exists", 3),
            ("Excites you with new possibilities", -3),
            ("Is fine if there is time to adjust", 1),
            ("Is welcome when the old plan was dull", -2),
            ("Depends entirely on what changed", 0),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::mbti::Dimension;

    #[test]
    fn test_every_dimension_has_questions() {
        for d in Dimension::ALL {
            let count = QUESTIONS.iter().filter(|q| q.category == d.as_str()).count();
            assert!(count >= 4, "dimension {} has only {count} questions", d.as_str());
        }
    }

    #[test]
    fn test_choice_values_within_scale() {
        for q in QUESTIONS {
            for (text, value) in q.choices {
                assert!(
                    (-3..=3).contains(value),
                    "choice '{text}' of '{}' outside -3..=3",
                    q.text
                );
            }
        }
    }

    #[test]
    fn test_every_question_offers_both_poles() {
        for q in QUESTIONS {
            assert!(q.choices.iter().any(|(_, v)| *v > 0), "'{}' has no positive pole", q.text);
            assert!(q.choices.iter().any(|(_, v)| *v < 0), "'{}' has no negative pole", q.text);
        }
    }
}

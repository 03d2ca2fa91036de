//! Canned advice tables and the keyword router behind `RuleBasedCoach`.
//!
//! Every reply is reproducible from the personality type and the message
//! text alone.

use crate::assessment::mbti::MbtiType;
use crate::coach::learning_style::{learning_style_for, LearningStyle};

const CAREER_WORDS: &[&str] = &["career", "job", "work", "profession"];
const STUDY_WORDS: &[&str] = &["study", "learn", "exam", "subject"];
const MOTIVATION_WORDS: &[&str] = &["motivate", "encourage", "stressed", "tired"];

pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "Remember the Swahili proverb: 'Kidole kimoja hakivunji chawa' - one finger can't crush a louse. Success comes through persistent effort!",
    "You're building your future step by step. Every subject you master opens new doors in Kenya's growing economy.",
    "Greatness takes time. Even the tallest building in Nairobi started with a single foundation. Keep building yours!",
    "Your unique personality strengths are exactly what Kenya needs. The country is growing fast and needs diverse talents like yours.",
    "Remember that challenges are what make success meaningful. Every successful Kenyan professional once sat where you are now.",
    "Education is your passport to the future. Each day of study is stamping that passport for journeys you haven't even imagined yet.",
];

const DEFAULT_REPLY: &str = "I understand you're looking for guidance. Could you tell me more \
    about what specific area you'd like help with - career choices, study strategies, or \
    personal development?";

/// Career advice per personality type.
pub fn career_advice(mbti: MbtiType) -> &'static str {
    match mbti {
        MbtiType::INTJ => "you excel in strategic planning and complex problem-solving. Consider careers in engineering, architecture, or research where you can develop innovative solutions.",
        MbtiType::INTP => "your analytical thinking and curiosity make you great in theoretical fields. Look into computer science, research, or academic careers.",
        MbtiType::ENTJ => "your leadership and organizational skills are assets. Business management, law, or entrepreneurship could be excellent fits.",
        MbtiType::ENTP => "you thrive on innovation and debate. Consider marketing, law, or technology roles that challenge your creativity.",
        MbtiType::INFJ => "your empathy and insight are valuable. Counseling, teaching, or humanitarian work might be fulfilling.",
        MbtiType::INFP => "your creativity and values drive you. Writing, arts, or psychology could align well with your personality.",
        MbtiType::ENFJ => "your people skills and idealism are strengths. Consider teaching, human resources, or community development.",
        MbtiType::ENFP => "your enthusiasm and creativity are infectious. Marketing, event planning, or counseling might suit you.",
        MbtiType::ISTJ => "your reliability and attention to detail are valuable. Accounting, administration, or technical fields could be good fits.",
        MbtiType::ISFJ => "your compassion and practicality are assets. Healthcare, teaching, or social work might be rewarding.",
        MbtiType::ESTJ => "your organizational skills and practicality are strengths. Business management, law enforcement, or project management could suit you.",
        MbtiType::ESFJ => "your sociability and care for others are valuable. Teaching, healthcare, or customer service roles might be fulfilling.",
        MbtiType::ISTP => "your hands-on problem-solving is a strength. Engineering, mechanics, or technology roles could be good fits.",
        MbtiType::ISFP => "your artistic sensitivity and practicality combine well. Design, healthcare, or environmental work might appeal to you.",
        MbtiType::ESTP => "your energy and practicality are assets. Sales, entrepreneurship, or emergency services could be exciting.",
        MbtiType::ESFP => "your enthusiasm and people skills are strengths. Entertainment, hospitality, or teaching might be fulfilling.",
    }
}

/// Study tips per learning style, used in chat replies.
pub fn study_tip(style: LearningStyle) -> &'static str {
    match style {
        LearningStyle::Visual => {
            "Try using mind maps, diagrams, and color-coded notes. Watch educational videos and \
             create visual summaries of your topics."
        }
        LearningStyle::Auditory => {
            "Record your notes and listen to them. Study in groups and explain concepts aloud. \
             Use rhymes or songs to remember information."
        }
        LearningStyle::Reading => {
            "Focus on textbooks and written materials. Take detailed notes and rewrite them. \
             Create summaries and read them repeatedly."
        }
        LearningStyle::Kinesthetic => {
            "Use hands-on activities and experiments. Take frequent breaks to move around. \
             Create physical models or use flashcards you can handle."
        }
    }
}

/// Picks a motivational message deterministically from the message text, so
/// identical input always produces the same reply.
pub fn motivational_message(message: &str) -> &'static str {
    MOTIVATIONAL_MESSAGES[message.chars().count() % MOTIVATIONAL_MESSAGES.len()]
}

/// Routes a chat message to one of the canned reply generators by keyword.
pub fn canned_reply(mbti: MbtiType, message: &str) -> String {
    let message_lower = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| message_lower.contains(w));

    if mentions(CAREER_WORDS) {
        format!("Based on your {} personality, {}", mbti, career_advice(mbti))
    } else if mentions(STUDY_WORDS) {
        let style = learning_style_for(mbti);
        format!("As a {} learner, {}", style.as_str(), study_tip(style))
    } else if mentions(MOTIVATION_WORDS) {
        motivational_message(message).to_string()
    } else {
        DEFAULT_REPLY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advice_table_covers_all_types() {
        for t in MbtiType::ALL {
            assert!(!career_advice(t).is_empty(), "no advice for {}", t.as_str());
        }
    }

    #[test]
    fn test_career_keyword_routes_to_career_advice() {
        let reply = canned_reply(MbtiType::INTJ, "What career should I pursue?");
        assert!(reply.starts_with("Based on your INTJ personality,"));
        assert!(reply.contains("strategic planning"));
    }

    #[test]
    fn test_study_keyword_routes_to_study_tip() {
        let reply = canned_reply(MbtiType::ENTJ, "How should I study for my exam?");
        // ENTJ maps to the visual style
        assert!(reply.starts_with("As a visual learner,"));
        assert!(reply.contains("mind maps"));
    }

    #[test]
    fn test_motivation_keyword_routes_to_motivation() {
        let reply = canned_reply(MbtiType::ISFP, "I am so stressed");
        assert!(MOTIVATIONAL_MESSAGES.contains(&reply.as_str()));
    }

    #[test]
    fn test_unmatched_message_gets_clarification() {
        let reply = canned_reply(MbtiType::ESFP, "hello there");
        assert!(reply.contains("career choices, study strategies, or personal development"));
    }

    #[test]
    fn test_motivational_pick_is_deterministic() {
        let message = "I feel tired today";
        assert_eq!(motivational_message(message), motivational_message(message));
    }

    #[test]
    fn test_routing_is_case_insensitive() {
        let reply = canned_reply(MbtiType::INTP, "CAREER advice please");
        assert!(reply.starts_with("Based on your INTP personality,"));
    }

    #[test]
    fn test_career_takes_priority_over_study() {
        // message mentions both; career words are checked first
        let reply = canned_reply(MbtiType::INTJ, "Which job fits my study habits?");
        assert!(reply.starts_with("Based on your INTJ personality,"));
    }
}

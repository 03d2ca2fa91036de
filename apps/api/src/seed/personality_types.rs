//! The 16 MBTI personality type catalog entries.

pub struct PersonalityTypeSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub strengths: &'static str,
    pub weaknesses: &'static str,
    pub career_recommendations: &'static str,
}

pub const PERSONALITY_TYPES: &[PersonalityTypeSeed] = &[
    PersonalityTypeSeed {
        code: "INTJ",
        name: "The Architect",
        description: "Imaginative and strategic thinkers, with a plan for everything.",
        strengths: "Rational, informed, independent, determined, curious",
        weaknesses: "Arrogant, dismissive of emotions, overly critical",
        career_recommendations: "Scientists, engineers, professors, judges, managers",
    },
    PersonalityTypeSeed {
        code: "INTP",
        name: "The Logician",
        description: "Innovative inventors with an unquenchable thirst for knowledge.",
        strengths: "Analytical, original, open-minded, curious, objective",
        weaknesses: "Insensitive, absent-minded, condescending, impatient",
        career_recommendations: "Physicists, programmers, mathematicians, philosophers",
    },
    PersonalityTypeSeed {
        code: "ENTJ",
        name: "The Commander",
        description: "Bold, imaginative and strong-willed leaders, always finding a way.",
        strengths: "Efficient, energetic, self-confident, strong-willed, strategic",
        weaknesses: "Impatient, stubborn, dominant, intolerant",
        career_recommendations: "CEOs, entrepreneurs, lawyers, consultants",
    },
    PersonalityTypeSeed {
        code: "ENTP",
        name: "The Debater",
        description: "Smart and curious thinkers who cannot resist an intellectual challenge.",
        strengths: "Knowledgeable, quick-thinking, original, excellent brainstormers",
        weaknesses: "Argumentative, insensitive, intolerant",
        career_recommendations: "Entrepreneurs, lawyers, psychologists, engineers",
    },
    PersonalityTypeSeed {
        code: "INFJ",
        name: "The Advocate",
        description: "Quiet and mystical, yet very inspiring and tireless idealists.",
        strengths: "Creative, insightful, principled, passionate, altruistic",
        weaknesses: "Sensitive, extremely private, perfectionistic",
        career_recommendations: "Counselors, psychologists, writers, human resources",
    },
    PersonalityTypeSeed {
        code: "INFP",
        name: "The Mediator",
        description: "Poetic, kind and altruistic people, always eager to help a good cause.",
        strengths: "Empathetic, creative, idealistic, passionate, open-minded",
        weaknesses: "Unrealistic, self-isolating, unfocused",
        career_recommendations: "Writers, artists, psychologists, social workers",
    },
    PersonalityTypeSeed {
        code: "ENFJ",
        name: "The Protagonist",
        description: "Charismatic and inspiring leaders, able to mesmerize their listeners.",
        strengths: "Natural leaders, passionate, reliable, charismatic",
        weaknesses: "Overly idealistic, too selfless, fluctuating self-esteem",
        career_recommendations: "Teachers, consultants, psychologists, sales",
    },
    PersonalityTypeSeed {
        code: "ENFP",
        name: "The Campaigner",
        description: "Enthusiastic, creative and sociable free spirits, who can always find a reason to smile.",
        strengths: "Curious, perceptive, enthusiastic, excellent communicators",
        weaknesses: "Poor practical skills, unfocused, easily stressed",
        career_recommendations: "Actors, journalists, consultants, entrepreneurs",
    },
    PersonalityTypeSeed {
        code: "ISTJ",
        name: "The Logistician",
        description: "Practical and fact-minded individuals, whose reliability cannot be doubted.",
        strengths: "Honest, direct, strong-willed, dutiful, responsible",
        weaknesses: "Stubborn, insensitive, always by the book, judgmental",
        career_recommendations: "Accountants, auditors, administrators, military officers",
    },
    PersonalityTypeSeed {
        code: "ISFJ",
        name: "The Defender",
        description: "Very dedicated and warm protectors, always ready to defend their loved ones.",
        strengths: "Supportive, reliable, patient, imaginative, observant",
        weaknesses: "Humble, shy, overcommitted, reluctant to change",
        career_recommendations: "Nurses, teachers, social workers, administrators",
    },
    PersonalityTypeSeed {
        code: "ESTJ",
        name: "The Executive",
        description: "Excellent administrators, unsurpassed at managing things and people.",
        strengths: "Dedicated, strong-willed, direct, honest, organized",
        weaknesses: "Inflexible, uncomfortable with the unconventional, judgmental",
        career_recommendations: "Managers, administrators, judges, financial officers",
    },
    PersonalityTypeSeed {
        code: "ESFJ",
        name: "The Consul",
        description: "Extraordinarily caring, social and popular people, always eager to help.",
        strengths: "Strong practical skills, dutiful, loyal, sensitive, warm",
        weaknesses: "Worried about social status, inflexible, vulnerable to criticism",
        career_recommendations: "Teachers, nurses, office managers, event planners",
    },
    PersonalityTypeSeed {
        code: "ISTP",
        name: "The Virtuoso",
        description: "Bold and practical experimenters, masters of all kinds of tools.",
        strengths: "Optimistic, energetic, creative, practical, spontaneous",
        weaknesses: "Stubborn, insensitive, private, easily bored",
        career_recommendations: "Mechanics, engineers, pilots, forensic scientists",
    },
    PersonalityTypeSeed {
        code: "ISFP",
        name: "The Adventurer",
        description: "Flexible and charming artists, always ready to explore and experience something new.",
        strengths: "Charming, sensitive to others, imaginative, passionate, curious",
        weaknesses: "Fiercely independent, unpredictable, easily stressed",
        career_recommendations: "Artists, designers, veterinarians, physiotherapists",
    },
    PersonalityTypeSeed {
        code: "ESTP",
        name: "The Entrepreneur",
        description: "Smart, energetic and very perceptive people, who truly enjoy living on the edge.",
        strengths: "Bold, rational, practical, original, perceptive",
        weaknesses: "Insensitive, impatient, risk-prone, unstructured",
        career_recommendations: "Sales representatives, entrepreneurs, paramedics, detectives",
    },
    PersonalityTypeSeed {
        code: "ESFP",
        name: "The Entertainer",
        description: "Spontaneous, energetic and enthusiastic people around whom life is never boring.",
        strengths: "Bold, original, practical, observant, excellent people skills",
        weaknesses: "Sensitive, conflict-averse, easily bored, poor long-term planners",
        career_recommendations: "Event planners, tour guides, performers, sales representatives",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::mbti::MbtiType;

    #[test]
    fn test_catalog_covers_all_sixteen_codes() {
        assert_eq!(PERSONALITY_TYPES.len(), 16);
        for t in MbtiType::ALL {
            assert!(
                PERSONALITY_TYPES.iter().any(|p| p.code == t.as_str()),
                "missing catalog entry for {}",
                t.as_str()
            );
        }
    }
}

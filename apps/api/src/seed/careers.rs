//! Kenyan subject and career catalog entries.

pub struct SubjectSeed {
    pub name: &'static str,
    /// KCSE subject code
    pub code: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
}

pub const SUBJECTS: &[SubjectSeed] = &[
    SubjectSeed { name: "Mathematics", code: "121", category: "sciences", difficulty: "hard" },
    SubjectSeed { name: "English", code: "101", category: "languages", difficulty: "medium" },
    SubjectSeed { name: "Kiswahili", code: "102", category: "languages", difficulty: "medium" },
    SubjectSeed { name: "Physics", code: "232", category: "sciences", difficulty: "hard" },
    SubjectSeed { name: "Chemistry", code: "233", category: "sciences", difficulty: "hard" },
    SubjectSeed { name: "Biology", code: "231", category: "sciences", difficulty: "medium" },
    SubjectSeed { name: "Geography", code: "312", category: "humanities", difficulty: "medium" },
    SubjectSeed { name: "History", code: "311", category: "humanities", difficulty: "medium" },
    SubjectSeed { name: "Business Studies", code: "565", category: "business", difficulty: "medium" },
    SubjectSeed { name: "Computer Studies", code: "451", category: "technical", difficulty: "medium" },
];

/// A (personality code, compatibility, rationale) row for the join table.
pub struct MatchSeed {
    pub mbti_code: &'static str,
    pub score: f64,
    pub rationale: &'static str,
}

pub struct CareerSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub job_outlook: &'static str,
    pub kenyan_market_demand: &'static str,
    pub average_salary: f64,
    pub required_subjects: &'static [&'static str],
    pub recommended_subjects: &'static [&'static str],
    pub personality_matches: &'static [MatchSeed],
}

pub const CAREERS: &[CareerSeed] = &[
    CareerSeed {
        name: "Software Developer",
        description: "Design and develop software applications and systems for various industries.",
        category: "stem",
        job_outlook: "high",
        kenyan_market_demand: "growing",
        average_salary: 120_000.0,
        required_subjects: &["Mathematics", "Physics"],
        recommended_subjects: &["Computer Studies", "English"],
        personality_matches: &[
            MatchSeed { mbti_code: "INTJ", score: 0.9, rationale: "Strategic problem-solvers thrive on systems design" },
            MatchSeed { mbti_code: "INTP", score: 0.8, rationale: "Analytical curiosity fits deep technical work" },
            MatchSeed { mbti_code: "ENTJ", score: 0.7, rationale: "Leads technical teams and product direction" },
        ],
    },
    CareerSeed {
        name: "Doctor",
        description: "Medical professional diagnosing and treating patients in healthcare settings.",
        category: "health",
        job_outlook: "high",
        kenyan_market_demand: "growing",
        average_salary: 150_000.0,
        required_subjects: &["Biology", "Chemistry"],
        recommended_subjects: &["Mathematics", "Physics", "English"],
        personality_matches: &[
            MatchSeed { mbti_code: "ISFJ", score: 0.9, rationale: "Patient, caring attention to individual needs" },
            MatchSeed { mbti_code: "ESFJ", score: 0.8, rationale: "Warm, practical care in clinical settings" },
            MatchSeed { mbti_code: "ISTJ", score: 0.7, rationale: "Methodical diagnosis and procedure discipline" },
        ],
    },
    CareerSeed {
        name: "Teacher",
        description: "Educate students in various subjects and grade levels.",
        category: "education",
        job_outlook: "medium",
        kenyan_market_demand: "stable",
        average_salary: 80_000.0,
        required_subjects: &["English"],
        recommended_subjects: &["Mathematics", "History", "Geography"],
        personality_matches: &[
            MatchSeed { mbti_code: "ENFJ", score: 0.9, rationale: "Natural mentors who inspire learners" },
            MatchSeed { mbti_code: "ESFJ", score: 0.8, rationale: "Thrives in supportive classroom communities" },
            MatchSeed { mbti_code: "INFJ", score: 0.7, rationale: "Principled, insightful guidance for students" },
        ],
    },
    CareerSeed {
        name: "Accountant",
        description: "Prepare and audit financial records for organisations and individuals.",
        category: "business",
        job_outlook: "medium",
        kenyan_market_demand: "stable",
        average_salary: 90_000.0,
        required_subjects: &["Mathematics"],
        recommended_subjects: &["Business Studies", "English"],
        personality_matches: &[
            MatchSeed { mbti_code: "ISTJ", score: 0.9, rationale: "Reliability and detail in financial records" },
            MatchSeed { mbti_code: "ESTJ", score: 0.8, rationale: "Organised management of audits and compliance" },
            MatchSeed { mbti_code: "INTJ", score: 0.6, rationale: "Structured analysis of financial systems" },
        ],
    },
    CareerSeed {
        name: "Nurse",
        description: "Provide patient care and health education in hospitals and communities.",
        category: "health",
        job_outlook: "high",
        kenyan_market_demand: "growing",
        average_salary: 70_000.0,
        required_subjects: &["Biology"],
        recommended_subjects: &["Chemistry", "English", "Kiswahili"],
        personality_matches: &[
            MatchSeed { mbti_code: "ISFJ", score: 0.9, rationale: "Dedicated, protective patient care" },
            MatchSeed { mbti_code: "ESFJ", score: 0.9, rationale: "Social warmth in ward and community work" },
            MatchSeed { mbti_code: "INFJ", score: 0.7, rationale: "Empathy for long-term patient wellbeing" },
        ],
    },
    CareerSeed {
        name: "Civil Engineer",
        description: "Plan and supervise construction of roads, dams and buildings.",
        category: "stem",
        job_outlook: "high",
        kenyan_market_demand: "growing",
        average_salary: 130_000.0,
        required_subjects: &["Mathematics", "Physics"],
        recommended_subjects: &["Chemistry", "Geography"],
        personality_matches: &[
            MatchSeed { mbti_code: "ISTP", score: 0.9, rationale: "Hands-on mastery of structures and tools" },
            MatchSeed { mbti_code: "INTJ", score: 0.8, rationale: "Long-horizon planning of infrastructure" },
            MatchSeed { mbti_code: "ESTJ", score: 0.6, rationale: "Runs site teams and delivery schedules" },
        ],
    },
    CareerSeed {
        name: "Lawyer",
        description: "Advise and represent clients in legal matters and court proceedings.",
        category: "arts",
        job_outlook: "medium",
        kenyan_market_demand: "stable",
        average_salary: 140_000.0,
        required_subjects: &["English"],
        recommended_subjects: &["History", "Kiswahili", "Business Studies"],
        personality_matches: &[
            MatchSeed { mbti_code: "ENTJ", score: 0.9, rationale: "Commanding advocacy and case strategy" },
            MatchSeed { mbti_code: "ENTP", score: 0.8, rationale: "Sharp argumentation and debate" },
            MatchSeed { mbti_code: "ESTJ", score: 0.7, rationale: "Procedural rigour in legal practice" },
        ],
    },
    CareerSeed {
        name: "Agricultural Officer",
        description: "Support farmers with modern crop and livestock production techniques.",
        category: "technical",
        job_outlook: "medium",
        kenyan_market_demand: "growing",
        average_salary: 85_000.0,
        required_subjects: &["Biology", "Chemistry"],
        recommended_subjects: &["Geography", "Mathematics"],
        personality_matches: &[
            MatchSeed { mbti_code: "ISTJ", score: 0.7, rationale: "Systematic field records and extension work" },
            MatchSeed { mbti_code: "ISFP", score: 0.6, rationale: "Practical, grounded work with the land" },
            MatchSeed { mbti_code: "ESTP", score: 0.6, rationale: "Energetic outreach across farming communities" },
        ],
    },
    CareerSeed {
        name: "Journalist",
        description: "Research and report news stories for print, broadcast and online media.",
        category: "arts",
        job_outlook: "medium",
        kenyan_market_demand: "stable",
        average_salary: 75_000.0,
        required_subjects: &["English"],
        recommended_subjects: &["Kiswahili", "History", "Geography"],
        personality_matches: &[
            MatchSeed { mbti_code: "ENFP", score: 0.9, rationale: "Curious storytellers who connect with people" },
            MatchSeed { mbti_code: "ENTP", score: 0.7, rationale: "Probing questions and quick thinking" },
            MatchSeed { mbti_code: "ESFP", score: 0.7, rationale: "Lively presence for broadcast reporting" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_subjects_exist_in_subject_catalog() {
        for career in CAREERS {
            for name in career
                .required_subjects
                .iter()
                .chain(career.recommended_subjects)
            {
                assert!(
                    SUBJECTS.iter().any(|s| &s.name == name),
                    "career '{}' references unknown subject '{}'",
                    career.name,
                    name
                );
            }
        }
    }

    #[test]
    fn test_compatibility_scores_in_unit_interval() {
        for career in CAREERS {
            for m in career.personality_matches {
                assert!(
                    (0.0..=1.0).contains(&m.score),
                    "career '{}' has out-of-range score for {}",
                    career.name,
                    m.mbti_code
                );
            }
        }
    }

    #[test]
    fn test_market_demand_labels_are_known() {
        use crate::models::catalog::MarketDemand;
        for career in CAREERS {
            assert!(
                MarketDemand::parse(career.kenyan_market_demand).is_some(),
                "career '{}' has unknown market demand label",
                career.name
            );
        }
    }
}

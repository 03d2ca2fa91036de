//! Learning styles and the fixed personality-type mapping.

use serde::{Deserialize, Serialize};

use crate::assessment::mbti::MbtiType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "Learn through seeing and visual aids",
            LearningStyle::Auditory => "Learn through listening and verbal instruction",
            LearningStyle::Reading => "Learn through reading and writing",
            LearningStyle::Kinesthetic => "Learn through hands-on experience and movement",
        }
    }

    pub fn study_recommendations(&self) -> &'static str {
        match self {
            LearningStyle::Visual => {
                "Use diagrams, mind maps, color coding, and visual presentations"
            }
            LearningStyle::Auditory => {
                "Record lectures, participate in discussions, use verbal repetition"
            }
            LearningStyle::Reading => "Take detailed notes, read textbooks, write summaries",
            LearningStyle::Kinesthetic => {
                "Use hands-on activities, take breaks to move, create physical models"
            }
        }
    }
}

/// Fixed mapping from personality type to dominant learning style.
pub fn learning_style_for(mbti: MbtiType) -> LearningStyle {
    match mbti {
        MbtiType::INTJ => LearningStyle::Reading,
        MbtiType::INTP => LearningStyle::Reading,
        MbtiType::ENTJ => LearningStyle::Visual,
        MbtiType::ENTP => LearningStyle::Kinesthetic,
        MbtiType::INFJ => LearningStyle::Reading,
        MbtiType::INFP => LearningStyle::Reading,
        MbtiType::ENFJ => LearningStyle::Auditory,
        MbtiType::ENFP => LearningStyle::Kinesthetic,
        MbtiType::ISTJ => LearningStyle::Reading,
        MbtiType::ISFJ => LearningStyle::Reading,
        MbtiType::ESTJ => LearningStyle::Visual,
        MbtiType::ESFJ => LearningStyle::Auditory,
        MbtiType::ISTP => LearningStyle::Kinesthetic,
        MbtiType::ISFP => LearningStyle::Kinesthetic,
        MbtiType::ESTP => LearningStyle::Kinesthetic,
        MbtiType::ESFP => LearningStyle::Kinesthetic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_covers_all_types() {
        for t in MbtiType::ALL {
            // every style carries usable advice text
            let style = learning_style_for(t);
            assert!(!style.study_recommendations().is_empty());
            assert!(!style.description().is_empty());
        }
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(learning_style_for(MbtiType::INTJ), LearningStyle::Reading);
        assert_eq!(learning_style_for(MbtiType::ENTJ), LearningStyle::Visual);
        assert_eq!(learning_style_for(MbtiType::ENFJ), LearningStyle::Auditory);
        assert_eq!(
            learning_style_for(MbtiType::ESTP),
            LearningStyle::Kinesthetic
        );
    }
}

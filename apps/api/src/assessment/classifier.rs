//! MBTI Classifier — reduces a session's responses to four dimension sums,
//! a 16-way type code, and a confidence value.
//!
//! Pure arithmetic over already-resolved responses; persistence is handled
//! by `sessions::complete_session`.

use serde::{Deserialize, Serialize};

use crate::assessment::mbti::{Dimension, DimensionScores, MbtiType};

/// Maximum plausible total score magnitude: 20 questions per dimension at
/// strength 3. Fixed calibration constant — deliberately NOT derived from
/// the live question count, so confidence is comparable across deployments.
const CONFIDENCE_DIVISOR: f64 = 60.0;

/// A response resolved to its question's dimension and its chosen value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredResponse {
    pub dimension: Dimension,
    pub value: i32,
}

/// Output of classification, ready to persist as an assessment result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub scores: DimensionScores,
    pub mbti: MbtiType,
    pub confidence: f64,
}

/// Classifies a set of responses.
///
/// 1. Sum answer values per dimension (one response per question is
///    guaranteed upstream by the upsert on (session, question)).
/// 2. Map each sum to a letter: >= 0 takes the first pole (E/S/T/J).
/// 3. Confidence = min(1.0, total magnitude / 60), rounded to 2 decimals.
pub fn classify(responses: &[ScoredResponse]) -> Classification {
    let mut scores = DimensionScores::default();
    for response in responses {
        scores.add(response.dimension, response.value);
    }

    let mbti = MbtiType::from_scores(&scores);
    let confidence = round2((f64::from(scores.total_magnitude()) / CONFIDENCE_DIVISOR).min(1.0));

    Classification {
        scores,
        mbti,
        confidence,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(dimension: Dimension, value: i32) -> ScoredResponse {
        ScoredResponse { dimension, value }
    }

    #[test]
    fn test_worked_example_entj() {
        // EI=+2, SN=-5, TF=+1, JP=0 -> ENTJ with confidence 8/60 = 0.13
        let responses = vec![
            r(Dimension::EI, 3),
            r(Dimension::EI, -1),
            r(Dimension::SN, -3),
            r(Dimension::SN, -2),
            r(Dimension::TF, 1),
            r(Dimension::JP, 2),
            r(Dimension::JP, -2),
        ];
        let result = classify(&responses);
        assert_eq!(
            result.scores,
            DimensionScores {
                ei: 2,
                sn: -5,
                tf: 1,
                jp: 0
            }
        );
        assert_eq!(result.mbti, MbtiType::ENTJ);
        assert_eq!(result.confidence, 0.13);
    }

    #[test]
    fn test_all_zero_sums_resolve_to_estj() {
        let result = classify(&[]);
        assert_eq!(result.mbti, MbtiType::ESTJ);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_confidence_clamps_at_one() {
        let responses: Vec<_> = (0..30)
            .flat_map(|_| [r(Dimension::EI, 3), r(Dimension::SN, -3)])
            .collect();
        let result = classify(&responses);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        let cases = vec![
            vec![],
            vec![r(Dimension::TF, -3)],
            vec![r(Dimension::EI, 3), r(Dimension::EI, 3), r(Dimension::EI, 3)],
            vec![r(Dimension::JP, -1), r(Dimension::SN, 2)],
        ];
        for responses in &cases {
            let c = classify(responses).confidence;
            assert!((0.0..=1.0).contains(&c), "confidence {c} out of range");
        }
    }

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        // |5| / 60 = 0.08333... -> 0.08
        let result = classify(&[r(Dimension::EI, 3), r(Dimension::EI, 2)]);
        assert_eq!(result.confidence, 0.08);
    }

    #[test]
    fn test_opposing_answers_cancel_within_dimension() {
        let result = classify(&[r(Dimension::SN, 3), r(Dimension::SN, -3)]);
        assert_eq!(result.scores.sn, 0);
        // cancelled answers contribute nothing to confidence
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let responses = vec![
            r(Dimension::EI, -2),
            r(Dimension::SN, 1),
            r(Dimension::TF, -3),
            r(Dimension::JP, 2),
        ];
        let first = classify(&responses);
        let second = classify(&responses);
        assert_eq!(first, second);
        assert_eq!(first.mbti, MbtiType::ISFJ);
    }
}

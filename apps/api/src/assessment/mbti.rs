//! MBTI domain types: the four bipolar dimensions and the 16 type codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four bipolar dimensions. The first pole of each pair is the
/// positive direction of its score sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Extraversion (+) vs Introversion (-)
    EI,
    /// Sensing (+) vs Intuition (-)
    SN,
    /// Thinking (+) vs Feeling (-)
    TF,
    /// Judging (+) vs Perceiving (-)
    JP,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::EI, Dimension::SN, Dimension::TF, Dimension::JP];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::EI => "EI",
            Dimension::SN => "SN",
            Dimension::TF => "TF",
            Dimension::JP => "JP",
        }
    }

    pub fn parse(s: &str) -> Option<Dimension> {
        match s {
            "EI" => Some(Dimension::EI),
            "SN" => Some(Dimension::SN),
            "TF" => Some(Dimension::TF),
            "JP" => Some(Dimension::JP),
            _ => None,
        }
    }

}

/// Summed dimension scores for one assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub ei: i32,
    pub sn: i32,
    pub tf: i32,
    pub jp: i32,
}

impl DimensionScores {
    pub fn add(&mut self, dimension: Dimension, value: i32) {
        match dimension {
            Dimension::EI => self.ei += value,
            Dimension::SN => self.sn += value,
            Dimension::TF => self.tf += value,
            Dimension::JP => self.jp += value,
        }
    }

    /// Sum of absolute dimension scores; feeds the confidence metric.
    pub fn total_magnitude(&self) -> i32 {
        self.ei.abs() + self.sn.abs() + self.tf.abs() + self.jp.abs()
    }
}

/// The 16 fixed MBTI type codes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MbtiType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

impl MbtiType {
    pub const ALL: [MbtiType; 16] = [
        MbtiType::INTJ,
        MbtiType::INTP,
        MbtiType::ENTJ,
        MbtiType::ENTP,
        MbtiType::INFJ,
        MbtiType::INFP,
        MbtiType::ENFJ,
        MbtiType::ENFP,
        MbtiType::ISTJ,
        MbtiType::ISFJ,
        MbtiType::ESTJ,
        MbtiType::ESFJ,
        MbtiType::ISTP,
        MbtiType::ISFP,
        MbtiType::ESTP,
        MbtiType::ESFP,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MbtiType::INTJ => "INTJ",
            MbtiType::INTP => "INTP",
            MbtiType::ENTJ => "ENTJ",
            MbtiType::ENTP => "ENTP",
            MbtiType::INFJ => "INFJ",
            MbtiType::INFP => "INFP",
            MbtiType::ENFJ => "ENFJ",
            MbtiType::ENFP => "ENFP",
            MbtiType::ISTJ => "ISTJ",
            MbtiType::ISFJ => "ISFJ",
            MbtiType::ESTJ => "ESTJ",
            MbtiType::ESFJ => "ESFJ",
            MbtiType::ISTP => "ISTP",
            MbtiType::ISFP => "ISFP",
            MbtiType::ESTP => "ESTP",
            MbtiType::ESFP => "ESFP",
        }
    }

    /// Resolves the type from summed dimension scores. Zero and positive
    /// sums take the first pole of each pair; only strictly negative sums
    /// flip to the second. Fixed tie-break rule.
    pub fn from_scores(scores: &DimensionScores) -> MbtiType {
        use MbtiType::*;
        // (E, S, T, J) flags; false is the second pole (I, N, F, P)
        match (
            scores.ei >= 0,
            scores.sn >= 0,
            scores.tf >= 0,
            scores.jp >= 0,
        ) {
            (false, false, true, true) => INTJ,
            (false, false, true, false) => INTP,
            (true, false, true, true) => ENTJ,
            (true, false, true, false) => ENTP,
            (false, false, false, true) => INFJ,
            (false, false, false, false) => INFP,
            (true, false, false, true) => ENFJ,
            (true, false, false, false) => ENFP,
            (false, true, true, true) => ISTJ,
            (false, true, false, true) => ISFJ,
            (true, true, true, true) => ESTJ,
            (true, true, false, true) => ESFJ,
            (false, true, true, false) => ISTP,
            (false, true, false, false) => ISFP,
            (true, true, true, false) => ESTP,
            (true, true, false, false) => ESFP,
        }
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MbtiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MbtiType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown MBTI code '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sums_resolve_to_first_pole() {
        let scores = DimensionScores::default();
        assert_eq!(MbtiType::from_scores(&scores), MbtiType::ESTJ);

        // zero and negative mixed: E/N/T/P
        let scores = DimensionScores {
            ei: 0,
            sn: -1,
            tf: 0,
            jp: -1,
        };
        assert_eq!(MbtiType::from_scores(&scores), MbtiType::ENTP);
    }

    #[test]
    fn test_strictly_negative_sums_flip() {
        let scores = DimensionScores {
            ei: -1,
            sn: -7,
            tf: -2,
            jp: -3,
        };
        assert_eq!(MbtiType::from_scores(&scores), MbtiType::INFP);
    }

    #[test]
    fn test_from_scores_matches_letters() {
        for t in MbtiType::ALL {
            let code = t.as_str();
            let scores = DimensionScores {
                ei: if code.starts_with('E') { 1 } else { -1 },
                sn: if &code[1..2] == "S" { 1 } else { -1 },
                tf: if &code[2..3] == "T" { 1 } else { -1 },
                jp: if &code[3..4] == "J" { 1 } else { -1 },
            };
            assert_eq!(MbtiType::from_scores(&scores), t);
        }
    }

    #[test]
    fn test_round_trip_codes() {
        for t in MbtiType::ALL {
            assert_eq!(t.as_str().parse::<MbtiType>().unwrap(), t);
        }
        assert!("XXXX".parse::<MbtiType>().is_err());
    }

    #[test]
    fn test_dimension_parse() {
        for d in Dimension::ALL {
            assert_eq!(Dimension::parse(d.as_str()), Some(d));
        }
        assert_eq!(Dimension::parse("XY"), None);
    }
}

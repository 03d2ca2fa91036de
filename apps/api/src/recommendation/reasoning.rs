//! Reasoning strings for recommendations: deterministic template selection
//! by score band, concatenated across the personality, academic, and market
//! signals. Reproducible from its inputs — no randomness.

use crate::models::catalog::MarketDemand;

/// Builds the human-readable justification for one scored career.
pub fn build_reasoning(
    career_name: &str,
    market_demand: Option<MarketDemand>,
    personality_score: f64,
    academic_score: f64,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if personality_score >= 0.8 {
        parts.push(format!("Excellent personality match with {career_name}"));
    } else if personality_score >= 0.6 {
        parts.push(format!("Good personality alignment with {career_name}"));
    } else {
        parts.push(format!("Moderate personality fit for {career_name}"));
    }

    if academic_score >= 0.8 {
        parts.push("Strong academic preparation".to_string());
    } else if academic_score >= 0.6 {
        parts.push("Good academic foundation".to_string());
    } else {
        parts.push("May need additional subject preparation".to_string());
    }

    match market_demand {
        Some(MarketDemand::Growing) => {
            parts.push("High growth potential in Kenyan market".to_string());
        }
        Some(MarketDemand::Stable) => {
            parts.push("Stable career opportunities in Kenya".to_string());
        }
        Some(MarketDemand::Declining) | None => {}
    }

    parts.join(". ") + "."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excellent_band_at_exactly_0_8() {
        let text = build_reasoning("Doctor", None, 0.8, 0.0);
        assert!(text.starts_with("Excellent personality match with Doctor"));
    }

    #[test]
    fn test_good_band_at_exactly_0_6() {
        let text = build_reasoning("Doctor", None, 0.6, 0.0);
        assert!(text.starts_with("Good personality alignment with Doctor"));
    }

    #[test]
    fn test_moderate_band_below_0_6() {
        let text = build_reasoning("Doctor", None, 0.59, 0.0);
        assert!(text.starts_with("Moderate personality fit for Doctor"));
    }

    #[test]
    fn test_academic_bands() {
        assert!(build_reasoning("X", None, 0.0, 0.85).contains("Strong academic preparation"));
        assert!(build_reasoning("X", None, 0.0, 0.6).contains("Good academic foundation"));
        assert!(
            build_reasoning("X", None, 0.0, 0.2).contains("May need additional subject preparation")
        );
    }

    #[test]
    fn test_market_clauses() {
        let growing = build_reasoning("X", Some(MarketDemand::Growing), 0.9, 0.9);
        assert!(growing.contains("High growth potential in Kenyan market"));

        let stable = build_reasoning("X", Some(MarketDemand::Stable), 0.9, 0.9);
        assert!(stable.contains("Stable career opportunities in Kenya"));

        let declining = build_reasoning("X", Some(MarketDemand::Declining), 0.9, 0.9);
        assert!(!declining.contains("Kenya"));
    }

    #[test]
    fn test_full_sentence_shape() {
        let text = build_reasoning("Software Developer", Some(MarketDemand::Growing), 0.9, 0.5);
        assert_eq!(
            text,
            "Excellent personality match with Software Developer. \
             May need additional subject preparation. \
             High growth potential in Kenyan market."
        );
    }

    #[test]
    fn test_reproducible() {
        let a = build_reasoning("Nurse", Some(MarketDemand::Stable), 0.7, 0.7);
        let b = build_reasoning("Nurse", Some(MarketDemand::Stable), 0.7, 0.7);
        assert_eq!(a, b);
    }
}

// Personality assessment: question bank, sessions, and the MBTI classifier.
// The classifier itself is pure; all persistence goes through sessions.rs.

pub mod classifier;
pub mod handlers;
pub mod mbti;
pub mod sessions;

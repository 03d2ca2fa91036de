// Career recommendation engine: weighted personality/academic scoring over
// the career catalog, reasoning-string generation, and subject suggestions.
// Scoring is pure; persistence wraps it in one transaction per student.

pub mod engine;
pub mod handlers;
pub mod reasoning;
pub mod subjects;

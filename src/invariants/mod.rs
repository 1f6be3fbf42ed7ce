//! First-class invariants over round state.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and serve as documentation of the
//! engine's guarantees; the engine checks the full set after every
//! accepted move in debug builds.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurn;
pub use history_consistent::HistoryConsistent;
pub use monotonic_board::MonotonicBoard;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, enabling composition of
/// multiple invariants into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or the list of
    /// violations if any fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MonotonicBoard, AlternatingTurn, HistoryConsistent);

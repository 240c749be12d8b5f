use serde::{Deserialize, Serialize};

/// Result of checking whether a run may advance another tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    PredatorsExtinct,
    VictimsExtinct,
    IterationsExhausted,
    Continue,
}

impl Termination {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Termination::Continue
    }

    /// Message shown on the field when the run ends.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Termination::PredatorsExtinct => Some("All predators are dead"),
            Termination::VictimsExtinct => Some("All victims are dead"),
            Termination::IterationsExhausted => Some("Iterations end"),
            Termination::Continue => None,
        }
    }
}

/// Checks, in priority order, predator extinction, victim extinction and
/// the remaining tick budget.
#[must_use]
pub fn evaluate(predators: usize, victims: usize, iterations_left: u32) -> Termination {
    if predators == 0 {
        Termination::PredatorsExtinct
    } else if victims == 0 {
        Termination::VictimsExtinct
    } else if iterations_left == 0 {
        Termination::IterationsExhausted
    } else {
        Termination::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(evaluate(0, 0, 0), Termination::PredatorsExtinct);
        assert_eq!(evaluate(0, 5, 10), Termination::PredatorsExtinct);
        assert_eq!(evaluate(3, 0, 0), Termination::VictimsExtinct);
        assert_eq!(evaluate(3, 4, 0), Termination::IterationsExhausted);
        assert_eq!(evaluate(3, 4, 1), Termination::Continue);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Termination::IterationsExhausted.message(),
            Some("Iterations end")
        );
        assert_eq!(Termination::Continue.message(), None);
        assert!(!Termination::Continue.is_terminal());
        assert!(Termination::VictimsExtinct.is_terminal());
    }
}

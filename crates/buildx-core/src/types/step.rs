//! Wizard step enumeration.

use serde::{Deserialize, Serialize};

/// The steps of the order wizard, plus the terminal submitted state.
///
/// Forward movement goes through the gated transitions on the wizard;
/// backward navigation to any earlier step is always allowed and never
/// clears entered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    /// Step 1: pick a fabrication service.
    ServiceSelection,
    /// Step 2: attach the part file.
    FileIntake,
    /// Step 3: choose material and process options.
    Configuration,
    /// Step 4: review the summary and enter contact details.
    Review,
    /// Terminal state after a successful submission.
    Submitted,
}

impl WizardStep {
    /// 1-based step number shown in the progress indicator.
    ///
    /// `Submitted` reports 4: the progress bar stays on the final step.
    pub fn number(&self) -> u8 {
        match self {
            Self::ServiceSelection => 1,
            Self::FileIntake => 2,
            Self::Configuration => 3,
            Self::Review => 4,
            Self::Submitted => 4,
        }
    }

    /// Whether the wizard has reached the terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::ServiceSelection.number(), 1);
        assert_eq!(WizardStep::FileIntake.number(), 2);
        assert_eq!(WizardStep::Configuration.number(), 3);
        assert_eq!(WizardStep::Review.number(), 4);
        assert_eq!(WizardStep::Submitted.number(), 4);
    }

    #[test]
    fn test_ordering_matches_flow() {
        assert!(WizardStep::ServiceSelection < WizardStep::FileIntake);
        assert!(WizardStep::Review < WizardStep::Submitted);
    }
}

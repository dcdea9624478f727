//! Step machine for the two-slide reservation editor.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    #[default]
    PickingDates,
    PickingGuestsAndExtras,
    ReviewingPrice,
    Submitting,
}

impl WizardStep {
    /// Advance one step; `Submitting` is terminal on success.
    pub fn next(self) -> Self {
        match self {
            Self::PickingDates => Self::PickingGuestsAndExtras,
            Self::PickingGuestsAndExtras => Self::ReviewingPrice,
            Self::ReviewingPrice | Self::Submitting => Self::Submitting,
        }
    }

    /// Go back one step; submission failures return to the price review.
    pub fn back(self) -> Self {
        match self {
            Self::PickingDates | Self::PickingGuestsAndExtras => Self::PickingDates,
            Self::ReviewingPrice => Self::PickingGuestsAndExtras,
            Self::Submitting => Self::ReviewingPrice,
        }
    }
}

use common::{MedicineName, Period, RegionName, SelectionRequest};

/// Pending operator choices for the next forecast request.
///
/// The three fields are independent: setting one never validates or clears
/// another. Acceptance of incomplete selections is left to the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub period: Period,
    pub medicine: MedicineName,
    pub region: RegionName,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_period(self, period: Period) -> Self {
        Self { period, ..self }
    }

    pub fn set_medicine(self, medicine: impl Into<MedicineName>) -> Self {
        Self {
            medicine: medicine.into(),
            ..self
        }
    }

    pub fn set_region(self, region: impl Into<RegionName>) -> Self {
        Self {
            region: region.into(),
            ..self
        }
    }

    /// Packages the current triple as-is, whether or not every field is set.
    pub fn submit(&self) -> SelectionRequest {
        SelectionRequest::new(self.period, self.medicine.clone(), self.region.clone())
    }

    /// Whether all three fields carry a value. Informational only.
    pub fn is_complete(&self) -> bool {
        self.period.is_selected() && !self.medicine.is_empty() && !self.region.is_empty()
    }
}

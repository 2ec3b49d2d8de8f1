use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{MedicineName, RegionName};

/// Forecast granularity chosen by the operator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Period {
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "daily")]
    Daily,
    #[default]
    #[serde(rename = "")]
    Unselected,
}

impl Period {
    /// Selectable variants, in the order they are offered to the operator.
    pub const OPTIONS: [Period; 3] = [Period::Monthly, Period::Weekly, Period::Daily];

    /// Value sent to the service in the `time` field.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Weekly => "weekly",
            Period::Daily => "daily",
            Period::Unselected => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Monthly => "Monthly",
            Period::Weekly => "Weekly",
            Period::Daily => "Daily",
            Period::Unselected => "Select period",
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Period::Unselected)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for Period {
    type Err = String;

    /// Accepts wire values case-insensitively; the empty string is `Unselected`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Period::Monthly),
            "weekly" => Ok(Period::Weekly),
            "daily" => Ok(Period::Daily),
            "" => Ok(Period::Unselected),
            other => Err(format!("Unknown period '{}'", other)),
        }
    }
}

/// Payload of `POST /selection`. Partial selections are sent as-is; the
/// service decides whether to accept them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SelectionRequest {
    #[serde(rename = "time")]
    pub period: Period,
    pub medicine: MedicineName,
    #[serde(rename = "state")]
    pub region: RegionName,
}

impl SelectionRequest {
    pub fn new(period: Period, medicine: impl Into<MedicineName>, region: impl Into<RegionName>) -> Self {
        Self {
            period,
            medicine: medicine.into(),
            region: region.into(),
        }
    }
}

use odata_client::Filter;
use serde::{Deserialize, Serialize};

/// Identifies a profit center within its controlling area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitCenterKey {
    pub controlling_area: String,
    pub profit_center: String,
}

impl ProfitCenterKey {
    pub fn new(controlling_area: impl Into<String>, profit_center: impl Into<String>) -> Self {
        Self {
            controlling_area: controlling_area.into(),
            profit_center: profit_center.into(),
        }
    }

    /// `ControllingArea eq '<area>' and ProfitCenter eq '<center>'`
    pub fn filter(&self) -> Filter {
        Filter::eq("ControllingArea", &self.controlling_area)
            .and_eq("ProfitCenter", &self.profit_center)
    }
}

/// Identifies a localized profit center name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitCenterTextKey {
    pub language: String,
    pub profit_center_name: String,
}

impl ProfitCenterTextKey {
    pub fn new(language: impl Into<String>, profit_center_name: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            profit_center_name: profit_center_name.into(),
        }
    }

    /// `Language eq '<lang>' and ProfitCenterName eq '<name>'`
    pub fn filter(&self) -> Filter {
        Filter::eq("Language", &self.language).and_eq("ProfitCenterName", &self.profit_center_name)
    }
}

use serde::Deserialize;

/// One entry of the provider's per-year holiday list.
///
/// Only `date` is required. Everything else defaults so that a sparse record
/// does not fail the whole list, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderHoliday {
    pub date: String,
    #[serde(default, rename = "localName")]
    pub local_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "type")]
    pub holiday_type: Option<String>,
}

impl ProviderHoliday {
    /// Name to report for this holiday: the canonical name, else the local one.
    ///
    /// Empty strings count as missing.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.local_name.as_deref().filter(|n| !n.trim().is_empty()))
    }
}

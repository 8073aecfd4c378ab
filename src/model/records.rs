//! Records returned by `API_PROFITCENTER_SRV`.
//!
//! Field names follow the service's PascalCase properties. Every attribute is
//! defaulted so a service that omits a property (or a narrower `$select`)
//! still decodes, and an explicit `null` (unset `Edm.DateTime` values, for
//! one) decodes as the empty string. Unknown properties such as `__metadata`
//! are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Maps an explicit JSON `null` to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An OData v2 navigation property left unexpanded by the service.
///
/// ```json
/// { "__deferred": { "uri": "https://host/.../A_ProfitCenter(...)/to_Text" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    #[serde(rename = "__deferred", default)]
    pub deferred: Option<DeferredUri>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredUri {
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

impl Deferred {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            deferred: Some(DeferredUri { uri: uri.into() }),
        }
    }

    /// The link target, when the service sent a non-empty one.
    pub fn uri(&self) -> Option<&str> {
        self.deferred
            .as_ref()
            .map(|d| d.uri.as_str())
            .filter(|uri| !uri.is_empty())
    }
}

/// A row of `A_ProfitCenter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HeaderRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub controlling_area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validity_end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validity_start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creation_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entered_by_user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_ctr_responsible_person_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_ctr_responsible_user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center_standard_hierarchy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub segment: String,
    #[serde(deserialize_with = "null_as_default")]
    pub formula_planning_template: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_of_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center_addr_name3: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center_addr_name4: String,
    #[serde(deserialize_with = "null_as_default")]
    pub street_address_name: String,
    #[serde(rename = "POBox")]
    #[serde(deserialize_with = "null_as_default")]
    pub po_box: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub district: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_jurisdiction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fax_number: String,
    #[serde(rename = "to_CompanyCode", alias = "to_CompanyCodeAssignment")]
    pub to_company_code_assignment: Option<Deferred>,
    #[serde(rename = "to_Text")]
    pub to_text: Option<Deferred>,
}

impl HeaderRecord {
    /// Link to the company-code assignments of this profit center.
    pub fn company_code_assignment_url(&self) -> Option<&str> {
        self.to_company_code_assignment.as_ref().and_then(Deferred::uri)
    }

    /// Link to the localized texts of this profit center.
    pub fn text_url(&self) -> Option<&str> {
        self.to_text.as_ref().and_then(Deferred::uri)
    }
}

/// A row of `A_PrftCtrCompanyCodeAssignment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CompanyCodeAssignmentRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub controlling_area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_code: String,
}

/// A row of `A_ProfitCenterText`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub controlling_area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validity_end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profit_center_long_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use odata_client::parse_results;

    #[test]
    fn header_decodes_navigation_links() {
        let body = br#"{"d":{"results":[{
            "__metadata": {"type": "API_PROFITCENTER_SRV.A_ProfitCenterType"},
            "ControllingArea": "1000",
            "ProfitCenter": "YB200",
            "POBox": "42",
            "to_CompanyCode": {"__deferred": {"uri": "https://host/to_CompanyCode"}},
            "to_Text": {"__deferred": {"uri": "https://host/to_Text"}}
        }]}}"#;

        let headers: Vec<HeaderRecord> = parse_results(body).unwrap();
        assert_eq!(headers.len(), 1);
        let header = &headers[0];
        assert_eq!(header.controlling_area, "1000");
        assert_eq!(header.po_box, "42");
        assert_eq!(
            header.company_code_assignment_url(),
            Some("https://host/to_CompanyCode")
        );
        assert_eq!(header.text_url(), Some("https://host/to_Text"));
    }

    #[test]
    fn header_accepts_long_navigation_name() {
        let body = br#"{"d":{"results":[{
            "to_CompanyCodeAssignment": {"__deferred": {"uri": "https://host/cca"}}
        }]}}"#;
        let headers: Vec<HeaderRecord> = parse_results(body).unwrap();
        assert_eq!(headers[0].company_code_assignment_url(), Some("https://host/cca"));
        assert_eq!(headers[0].text_url(), None);
    }

    #[test]
    fn expanded_or_empty_links_are_not_followable() {
        let body = br#"{"d":{"results":[{
            "to_CompanyCode": {"results": []},
            "to_Text": {"__deferred": {"uri": ""}}
        }]}}"#;
        let headers: Vec<HeaderRecord> = parse_results(body).unwrap();
        assert_eq!(headers[0].company_code_assignment_url(), None);
        assert_eq!(headers[0].text_url(), None);
    }

    #[test]
    fn null_attributes_decode_as_empty() {
        let body = br#"{"d":{"results":[{
            "ControllingArea": "1000",
            "ProfitCenter": "YB200",
            "CreationDate": null,
            "ValidityEndDate": null,
            "to_Text": {"__deferred": {"uri": "https://host/to_Text"}}
        }]}}"#;

        let headers: Vec<HeaderRecord> = parse_results(body).unwrap();
        assert_eq!(headers[0].profit_center, "YB200");
        assert_eq!(headers[0].creation_date, "");
        assert_eq!(headers[0].validity_end_date, "");
        assert_eq!(headers[0].text_url(), Some("https://host/to_Text"));

        let texts: Vec<TextRecord> = parse_results(
            br#"{"d":{"results":[{"Language":"EN","ProfitCenterLongName":null}]}}"#,
        )
        .unwrap();
        assert_eq!(texts[0].profit_center_long_name, "");
    }

    #[test]
    fn text_record_decodes() {
        let body = br#"{"d":{"results":[{"Language":"EN","ProfitCenterName":"Finance","ProfitCenterLongName":"Finance Dept."}]}}"#;
        let texts: Vec<TextRecord> = parse_results(body).unwrap();
        assert_eq!(texts[0].profit_center_name, "Finance");
        assert_eq!(texts[0].profit_center_long_name, "Finance Dept.");
    }
}

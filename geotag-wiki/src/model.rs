use serde::{Deserialize, Serialize};
use std::fmt;

/// Wikidata entity identifier, e.g. `Q90`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A globe coordinate taken from a P625 ("coordinate location") claim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// MediaWiki action=query responses (formatversion=2)

#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    pub query: Option<QueryBody>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QueryBody {
    #[serde(default)]
    pub pages: Vec<PageInfo>,
    #[serde(default)]
    pub redirects: Vec<RedirectEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageInfo {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub redirect: bool,
    pub pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageProps {
    pub wikibase_item: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedirectEntry {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

// Wikibase action=wbgetclaims responses

#[derive(Debug, Deserialize)]
pub(crate) struct ClaimsResponse {
    #[serde(default)]
    pub claims: std::collections::HashMap<String, Vec<Claim>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Claim {
    pub mainsnak: Snak,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Snak {
    pub snaktype: String,
    pub datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DataValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: serde_json::Value,
}

impl Snak {
    /// The globe coordinate carried by this snak, if it has one.
    pub fn coordinate(&self) -> Option<Coordinate> {
        if self.snaktype != "value" {
            return None;
        }
        let datavalue = self.datavalue.as_ref()?;
        if datavalue.kind != "globecoordinate" {
            return None;
        }
        let latitude = datavalue.value.pointer("/latitude").and_then(|v| v.as_f64())?;
        let longitude = datavalue.value.pointer("/longitude").and_then(|v| v.as_f64())?;
        Some(Coordinate::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snak_coordinate_value() {
        let snak: Snak = serde_json::from_str(
            r#"{"snaktype":"value","property":"P625","datavalue":{"value":{"latitude":48.856944,"longitude":2.351389,"altitude":null,"precision":0.000277,"globe":"http://www.wikidata.org/entity/Q2"},"type":"globecoordinate"},"datatype":"globe-coordinate"}"#,
        )
        .unwrap();
        assert_eq!(snak.coordinate(), Some(Coordinate::new(48.856944, 2.351389)));
    }

    #[test]
    fn test_snak_without_value() {
        let snak: Snak =
            serde_json::from_str(r#"{"snaktype":"somevalue","property":"P625"}"#).unwrap();
        assert_eq!(snak.coordinate(), None);
    }

    #[test]
    fn test_page_info_missing_defaults() {
        let page: PageInfo = serde_json::from_str(r#"{"ns":0,"title":"Nowhere","missing":true}"#)
            .unwrap();
        assert!(page.missing);
        assert!(!page.redirect);
        assert!(page.pageprops.is_none());
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::new("Q90").to_string(), "Q90");
    }
}

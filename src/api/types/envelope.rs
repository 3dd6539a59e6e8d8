//! Response and request envelopes shared by every resource

use serde::{Deserialize, Serialize};

use crate::domain::ResourceList;

/// Wraps a payload under the `data` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "data", alias = "Data")]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Collection envelope; paging fields sit beside `items` inside `data`
pub type ListEnvelope<T> = Envelope<ResourceList<T>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MetadataValue, ModelVersion, RegisteredModel};

    #[test]
    fn test_single_resource_under_data() {
        let envelope = Envelope::new(RegisteredModel::new("Model One").with_id("1"));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["data"]["name"], "Model One");
        assert_eq!(json["data"]["id"], "1");
    }

    #[test]
    fn test_capitalised_key_accepted() {
        let envelope: Envelope<RegisteredModel> =
            serde_json::from_str(r#"{"Data":{"name":"Model One"}}"#).unwrap();

        assert_eq!(envelope.data.name, "Model One");
    }

    #[test]
    fn test_missing_data_rejected() {
        assert!(serde_json::from_str::<Envelope<RegisteredModel>>(r#"{"name":"x"}"#).is_err());
    }

    #[test]
    fn test_list_envelope_layout() {
        let envelope: ListEnvelope<ModelVersion> =
            Envelope::new(ResourceList::single_page(vec![ModelVersion::new("v1", "1")]));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["data"]["size"], 1);
        assert_eq!(json["data"]["pageSize"], 1);
        assert_eq!(json["data"]["nextPageToken"], "");
        assert_eq!(json["data"]["items"][0]["name"], "v1");
        assert!(json["data"]["items"][0].get("size").is_none());
    }

    #[test]
    fn test_reencoding_is_structurally_stable() {
        let mut model = RegisteredModel::new("Model One").with_id("1");
        model.custom_properties = Some(
            [
                ("b".to_string(), MetadataValue::int(3)),
                ("a".to_string(), MetadataValue::string("x")),
            ]
            .into_iter()
            .collect(),
        );

        let first = serde_json::to_value(Envelope::new(model)).unwrap();
        let decoded: Envelope<RegisteredModel> = serde_json::from_value(first.clone()).unwrap();
        let second = serde_json::to_value(&decoded).unwrap();

        assert_eq!(first, second);
    }
}

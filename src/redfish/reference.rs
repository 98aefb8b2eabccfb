use serde_json::Value;

use crate::path;
use crate::redfish::navigate::get_str;

/// Local identifier of an `@odata.id` reference: its last non-empty segment.
///
/// `/redfish/v1/Chassis/7/` gives `7`; an empty string or a path made only of
/// slashes gives `None`.
pub fn last_segment(odata_id: Option<&str>) -> Option<&str> {
    let trimmed = odata_id?.trim_end_matches('/');
    trimmed.rsplit('/').next().filter(|segment| !segment.is_empty())
}

/// Identifier of a reference object such as `{"@odata.id": "/redfish/v1/Systems/1"}`.
pub fn member_id(reference: &Value) -> Option<String> {
    last_segment(get_str(reference, &path!["@odata.id"])).map(str::to_string)
}

/// Identifiers of every resolvable entry in `references`, in order.
pub fn member_ids(references: &[Value]) -> Vec<String> {
    references.iter().filter_map(member_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment(Some("/redfish/v1/Chassis/7/")), Some("7"));
        assert_eq!(last_segment(Some("/redfish/v1/Chassis/System.Embedded.1")), Some("System.Embedded.1"));
        assert_eq!(last_segment(Some("7")), Some("7"));
        assert_eq!(last_segment(Some("")), None);
        assert_eq!(last_segment(Some("/")), None);
        assert_eq!(last_segment(Some("///")), None);
        assert_eq!(last_segment(None), None);
    }

    #[test]
    fn test_member_ids_skip_unresolvable() {
        let members = json!([
            {"@odata.id": "/redfish/v1/Chassis/1"},
            {"@odata.id": "/"},
            {"Name": "no reference"},
            {"@odata.id": 12},
            "not an object",
            {"@odata.id": "/redfish/v1/Chassis/Enclosure.Internal.0-1/"}
        ]);
        let ids = member_ids(members.as_array().unwrap());
        assert_eq!(ids, vec!["1", "Enclosure.Internal.0-1"]);
    }
}

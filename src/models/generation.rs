use serde::{Deserialize, Serialize};

/// How many distinct yarn colors the mockup should use. Unknown values are
/// rejected at deserialization time; there is no fallback palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorCount {
    #[serde(rename = "monochrome")]
    Monochrome,
    #[serde(rename = "2-4")]
    TwoToFour,
    #[serde(rename = "5-7")]
    FiveToSeven,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub project_description: String,
    pub color_vibe: String,
    pub color_count: ColorCount,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub images: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_count_deserializes_wire_names() {
        let monochrome: ColorCount = serde_json::from_str("\"monochrome\"").unwrap();
        assert_eq!(monochrome, ColorCount::Monochrome);

        let two_to_four: ColorCount = serde_json::from_str("\"2-4\"").unwrap();
        assert_eq!(two_to_four, ColorCount::TwoToFour);

        let five_to_seven: ColorCount = serde_json::from_str("\"5-7\"").unwrap();
        assert_eq!(five_to_seven, ColorCount::FiveToSeven);
    }

    #[test]
    fn test_color_count_rejects_unknown_values() {
        assert!(serde_json::from_str::<ColorCount>("\"rainbow\"").is_err());
        assert!(serde_json::from_str::<ColorCount>("\"8-10\"").is_err());
    }

    #[test]
    fn test_generate_request_requires_all_fields() {
        let missing_vibe = r#"{"projectDescription": "a scarf", "colorCount": "2-4"}"#;
        assert!(serde_json::from_str::<GenerateRequest>(missing_vibe).is_err());

        let complete = r#"{
            "projectDescription": "a scarf",
            "colorVibe": "cozy winter",
            "colorCount": "monochrome"
        }"#;
        let request: GenerateRequest = serde_json::from_str(complete).unwrap();
        assert_eq!(request.project_description, "a scarf");
        assert_eq!(request.color_count, ColorCount::Monochrome);
    }
}

use crate::models::{ColorCount, GenerateRequest};

/// Fixed palette phrase for each color count. The request type guarantees
/// membership, so the lookup is total.
pub fn color_phrase(color_count: ColorCount) -> &'static str {
    match color_count {
        ColorCount::Monochrome => "in a single consistent color palette",
        ColorCount::TwoToFour => "using 2 to 4 complementary colors",
        ColorCount::FiveToSeven => "with a bold mix of 5 to 7 different colors",
    }
}

/// Build the image-generation prompt for a mockup request. Deterministic and
/// side-effect free: identical requests always produce identical prompts.
pub fn build_prompt(request: &GenerateRequest) -> String {
    format!(
        "A highly detailed image of a handmade crochet project. \
         The project is described as: {}. \
         The overall color vibe is: {}. \
         Please visualize the crochet item {}, with realistic yarn textures \
         such as cotton, chenille, or wool. \
         The background should be minimal, studio-lit, and clean.",
        request.project_description,
        request.color_vibe,
        color_phrase(request.color_count)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(color_count: ColorCount) -> GenerateRequest {
        GenerateRequest {
            project_description: "amigurumi fox".to_string(),
            color_vibe: "warm autumn".to_string(),
            color_count,
        }
    }

    #[test]
    fn test_prompt_contains_each_color_phrase_exactly_once() {
        let cases = [
            (ColorCount::Monochrome, "in a single consistent color palette"),
            (ColorCount::TwoToFour, "using 2 to 4 complementary colors"),
            (
                ColorCount::FiveToSeven,
                "with a bold mix of 5 to 7 different colors",
            ),
        ];

        for (color_count, phrase) in cases {
            let prompt = build_prompt(&request(color_count));
            assert_eq!(
                prompt.matches(phrase).count(),
                1,
                "expected exactly one occurrence of {:?}",
                phrase
            );
        }
    }

    #[test]
    fn test_prompt_includes_user_input() {
        let prompt = build_prompt(&request(ColorCount::TwoToFour));
        assert!(prompt.contains("amigurumi fox"));
        assert!(prompt.contains("warm autumn"));
        assert!(prompt.contains("using 2 to 4 complementary colors"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let input = request(ColorCount::Monochrome);
        assert_eq!(build_prompt(&input), build_prompt(&input));
    }
}

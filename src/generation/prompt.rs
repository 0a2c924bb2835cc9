use crate::models::CandidateRecipe;

pub fn build_recipe_prompt(query: &str) -> String {
    format!(
        r#"You are a recipe API. Generate a JSON array of all highly relevant recipes found for: "{query}".
Strict Schema: [{{"title": "String", "ingredients": ["String"], "instructions": ["String"], "duration": "String", "imageUrl": ""}}]
Return ONLY the JSON array.
If the request is not about food or drinks, return an empty array: [].
Answer in the language the request is written in.
Format duration example: 1 h 20 min and a '.' at the end of duration
DO NOT limit the count. Generate as many relevant recipes as possible."#
    )
}

/// Returns the span from the first `[` to the last `]`, or `"[]"` when there is none.
pub fn extract_json_array(text: &str) -> &str {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => "[]",
    }
}

pub fn parse_candidates(text: &str) -> Result<Vec<CandidateRecipe>, serde_json::Error> {
    serde_json::from_str(extract_json_array(text))
}

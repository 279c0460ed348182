//! services/api/src/adapters/recommend_llm.rs
//!
//! This module contains the adapter for the recommendation LLM.
//! It implements the `RecommendationService` port from the `core` crate.

const SYSTEM_INSTRUCTIONS: &str = r#"You are CampusBot, a helpful assistant for university students looking for study spots.
You have access to a list of study spots on campus (provided in JSON).

Your goal is to recommend the best spot based on the user's natural language query.

Rules:
1. Only recommend spots from the provided list.
2. Be concise and friendly.
3. Explain WHY you recommended a spot (e.g., "because you asked for coffee...").
4. If no spot perfectly matches, suggest the closest alternative.
5. Format the response as a short paragraph.

Data: {spots}"#;

/// Reply used when the model returns no text at all.
const NO_RECOMMENDATION: &str = "I couldn't find a recommendation at this time.";

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use serde::Serialize;
use study_spots_core::{
    domain::Spot,
    ports::{PortError, PortResult, RecommendationService},
};

//=========================================================================================
// Catalog Projection
//=========================================================================================

/// The reduced spot projection serialized into the system instruction.
/// Only amenities the spot actually has are listed.
#[derive(Serialize)]
struct SpotContext<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    spot_type: String,
    noise: String,
    crowd: String,
    features: Vec<&'static str>,
    rating: f32,
    location: &'a str,
}

fn spot_context(spot: &Spot) -> SpotContext<'_> {
    let mut features = Vec::new();
    if spot.has_food {
        features.push("food");
    }
    if spot.has_outlets {
        features.push("power outlets");
    }
    if spot.has_wifi {
        features.push("wifi");
    }
    SpotContext {
        name: &spot.name,
        spot_type: spot.spot_type.to_string(),
        noise: spot.noise_level.to_string(),
        crowd: spot.crowd_level.to_string(),
        features,
        rating: spot.rating,
        location: &spot.location,
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `RecommendationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiRecommendAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiRecommendAdapter {
    /// Creates a new `OpenAiRecommendAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `RecommendationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl RecommendationService for OpenAiRecommendAdapter {
    /// Recommends a spot from `spots` for the user's free-text query.
    async fn recommend(&self, query: &str, spots: &[Spot]) -> PortResult<String> {
        let context: Vec<SpotContext<'_>> = spots.iter().map(spot_context).collect();
        let context_json =
            serde_json::to_string(&context).map_err(|e| PortError::Unexpected(e.to_string()))?;
        let instructions = SYSTEM_INSTRUCTIONS.replace("{spots}", &context_json);

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(instructions)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(query.to_string())
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        // Extract the text content from the first choice in the response.
        // No text counts as "no recommendation", not as a failure.
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            Ok(NO_RECOMMENDATION.to_string())
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_spots_core::domain::{CrowdLevel, NoiseLevel, SpotType};

    fn spot() -> Spot {
        Spot {
            id: "1".to_string(),
            name: "Central Library".to_string(),
            spot_type: SpotType::CommonArea,
            description: "Stacks".to_string(),
            image: String::new(),
            noise_level: NoiseLevel::Quiet,
            crowd_level: CrowdLevel::Low,
            last_updated: None,
            has_outlets: true,
            has_food: false,
            has_wifi: true,
            rating: 4.7,
            reviews: Vec::new(),
            location: "Main Quad".to_string(),
        }
    }

    #[test]
    fn projection_lists_only_present_amenities() {
        let spot = spot();
        let context = spot_context(&spot);
        assert_eq!(context.features, ["power outlets", "wifi"]);
        assert_eq!(context.spot_type, "Common Area");
        assert_eq!(context.noise, "Quiet");
        assert_eq!(context.crowd, "Low");
    }

    #[test]
    fn projection_serializes_without_internal_fields() {
        let json = serde_json::to_string(&spot_context(&spot())).unwrap();
        assert!(json.contains("\"type\":\"Common Area\""));
        // The description and id stay out of the prompt.
        assert!(!json.contains("Stacks"));
        assert!(!json.contains("\"id\""));
    }
}

use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::{config::ImageApiConfig, generation::ports::ImageGenerator};

#[derive(Debug, Clone)]
pub struct FalImageClient {
    base_url: String,
    api_key: String,
    fallback_url: String,
    client: Client,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FalImageRequest {
    pub prompt: String,
    pub aspect_ratio: String,
    pub sync_mode: bool,
    pub num_images: u8,
    pub output_format: String,
}

#[derive(Debug, Deserialize)]
struct FalResponse {
    images: Vec<FalImage>,
}

#[derive(Debug, Deserialize)]
struct FalImage {
    url: String,
    #[allow(dead_code)]
    content_type: Option<String>,
}

impl FalImageRequest {
    /// Builds the request from the title and the first two ingredients.
    pub fn for_recipe(title: &str, ingredients: &[String]) -> Self {
        let highlights = ingredients
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            prompt: format!("Food photo, {title}, {highlights}, 4k"),
            aspect_ratio: "1:1".to_string(),
            sync_mode: true,
            num_images: 1,
            output_format: "jpeg".to_string(),
        }
    }
}

enum ImageFailure {
    Status(reqwest::StatusCode),
    Other(String),
}

impl FalImageClient {
    pub fn new(config: &ImageApiConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            fallback_url: config.fallback_url.clone(),
            client,
        }
    }

    async fn request_image(&self, request: &FalImageRequest) -> Result<String, ImageFailure> {
        let response = self
            .client
            .post(&self.base_url)
            .header(AUTHORIZATION, format!("Key {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| ImageFailure::Other(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageFailure::Status(response.status()));
        }

        let body: FalResponse = response
            .json()
            .await
            .map_err(|e| ImageFailure::Other(e.to_string()))?;

        body.images
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| ImageFailure::Other("no images in response".to_string()))
    }
}

impl ImageGenerator for FalImageClient {
    async fn generate_image(&self, title: String, ingredients: Vec<String>) -> String {
        let request = FalImageRequest::for_recipe(&title, &ingredients);

        match self.request_image(&request).await {
            Ok(url) => url,
            Err(ImageFailure::Status(status)) => {
                tracing::warn!(%status, title = %title, "image API rejected request, using fallback image");
                self.fallback_url.clone()
            }
            Err(ImageFailure::Other(error)) => {
                tracing::error!(%error, title = %title, "image generation failed");
                String::new()
            }
        }
    }
}

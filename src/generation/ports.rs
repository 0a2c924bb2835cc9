use std::future::Future;

use crate::error::AppResult;

/// Hosted generative-language model.
pub trait TextGenerator: Send + Sync {
    /// Returns the model output, or `None` when the model answered without text.
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = AppResult<Option<String>>> + Send;
}

/// Hosted image-generation model.
///
/// Implementations never fail: errors are folded into the returned URL,
/// which may be a fallback URL or empty.
pub trait ImageGenerator: Send + Sync {
    fn generate_image(
        &self,
        title: String,
        ingredients: Vec<String>,
    ) -> impl Future<Output = String> + Send;
}

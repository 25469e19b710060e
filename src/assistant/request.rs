//! Requests to the generative-content service

use crate::model::ImageRef;
use crate::{Error, Result};

/// Free-text product details plus reference photos.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantRequest {
    pub product_name: String,
    pub product_details: String,
    pub reference_images: Vec<ImageRef>,
}

impl AssistantRequest {
    pub fn new(
        product_name: impl Into<String>,
        product_details: impl Into<String>,
        reference_images: Vec<ImageRef>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            product_details: product_details.into(),
            reference_images,
        }
    }

    /// Reject requests the service cannot do anything useful with.
    ///
    /// At least one reference image is required so generated visuals keep
    /// the real product.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() || self.product_details.trim().is_empty() {
            return Err(Error::InvalidInput(
                "product name and details are required".to_string(),
            ));
        }
        if self.reference_images.is_empty() {
            return Err(Error::InvalidInput(
                "at least one product image is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Copywriting instructions sent alongside the reference images.
    pub fn prompt(&self) -> String {
        format!(
            r#"You are a professional marketing copywriter and product designer.
Task: write complete, persuasive marketing content for a product using only the data provided.

Product name: "{name}"
Raw product details: "{details}"

Content rules:
1. Quality: fluent, persuasive, professional copy. Focus on the benefits the customer gets, not only the specifications.
2. Source fidelity: use only the provided details and the attached images. Never invent technical specifications. If information is scarce, phrase what exists creatively without adding claims.
3. Style: use strong, evocative words in titles.

Image instructions:
- There are {count} product images attached, indexed from 0.
- For each features, reasons and boxContentsItems entry, prefer imageSource "upload" with userImageIndex set to the best matching image.
- If an entry needs a visual that does not exist, use imageSource "generate": the product image at userImageIndex will be edited.
- In generationPrompt (English) describe precisely what to add next to the product without changing the product itself.
  Example: "Keep the product exactly as is. Add a lightning bolt icon next to it to symbolize fast charging."

Return JSON with: headlines and descriptions, features (title, description), reasons, comparisonRows against a realistic competitor, faqs, and boxContentsItems (text, count)."#,
            name = self.product_name,
            details = self.product_details,
            count = self.reference_images.len(),
        )
    }
}

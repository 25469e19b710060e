//! HTTP client for the Gemini `generateContent` API.

use futures::future::BoxFuture;
use futures::FutureExt;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use super::request::AssistantRequest;
use super::service::GenerativeService;
use super::AssistantConfig;
use crate::model::ImageRef;
use crate::{Error, Result};

pub struct GeminiService {
    client: Client,
    config: AssistantConfig,
    api_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GenerateResponse {
    fn parts(self) -> Vec<Part> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
    }
}

fn inline_part(image: &ImageRef) -> Result<Value> {
    let data = image.base64_payload().ok_or_else(|| {
        Error::InvalidInput(format!("image is not a data URL: {:.32}", image.as_str()))
    })?;
    Ok(json!({ "inlineData": { "mimeType": image.mime_type(), "data": data } }))
}

fn string_props(fields: &[&str]) -> serde_json::Map<String, Value> {
    fields
        .iter()
        .map(|f| (f.to_string(), json!({ "type": "STRING" })))
        .collect()
}

fn image_item_schema(text_field: &str, extra: &str) -> Value {
    let mut props = string_props(&[text_field, extra, "generationPrompt"]);
    props.insert(
        "imageSource".into(),
        json!({ "type": "STRING", "enum": ["upload", "generate"] }),
    );
    props.insert("userImageIndex".into(), json!({ "type": "INTEGER" }));
    json!({ "type": "OBJECT", "properties": props })
}

fn string_object(fields: &[&str]) -> Value {
    json!({ "type": "OBJECT", "properties": string_props(fields) })
}

/// Response schema mirroring `GeneratedContent`.
pub fn response_schema() -> Value {
    let mut props = serde_json::Map::new();
    for key in [
        "headline",
        "description",
        "ctaText",
        "soldCount",
        "rating",
        "ratingCount",
        "stockText",
        "featuresTitle",
        "featuresSubtitle",
        "whyChooseTitle",
        "whyChooseSubtitle",
        "comparisonTitle",
        "comparisonSubtitle",
        "comparisonProductName",
        "comparisonCompetitorName",
        "faqTitle",
        "faqSubtitle",
        "boxContentsTitle",
        "buyNowHeadline",
        "buyNowSubHeadline",
        "buyNowCtaText",
    ] {
        props.insert(key.to_string(), json!({ "type": "STRING" }));
    }
    let array = |items: Value| json!({ "type": "ARRAY", "items": items });
    props.insert("features".into(), array(image_item_schema("title", "description")));
    props.insert("reasons".into(), array(image_item_schema("title", "description")));
    props.insert("boxContentsItems".into(), array(image_item_schema("text", "count")));
    props.insert(
        "comparisonRows".into(),
        array(string_object(&["featureName", "productValue", "competitorValue"])),
    );
    props.insert("faqs".into(), array(string_object(&["question", "answer"])));
    props.insert("buyNowFooterFeatures".into(), array(json!({ "type": "STRING" })));
    json!({ "type": "OBJECT", "properties": props })
}

impl GeminiService {
    pub fn new(config: AssistantConfig) -> Result<Self> {
        let api_key = config
            .resolved_api_key()
            .ok_or_else(|| Error::Config("no API key configured".to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn model_url(&self, model: &str) -> Result<url::Url> {
        let base = url::Url::parse(&self.config.endpoint)
            .map_err(|e| Error::Config(format!("bad endpoint {}: {}", self.config.endpoint, e)))?;
        let mut url = base
            .join(&format!("v1beta/models/{}:generateContent", model))
            .map_err(|e| Error::Config(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    async fn call(&self, model: &str, body: Value) -> Result<GenerateResponse> {
        let url = self.model_url(model)?;
        debug!("POST {}", url.path());
        let resp = self.client.post(url).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Network(format!("{} returned {}: {}", model, status, text)));
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn generate(&self, request: &AssistantRequest) -> Result<String> {
        let mut parts = request
            .reference_images
            .iter()
            .map(inline_part)
            .collect::<Result<Vec<_>>>()?;
        parts.push(json!({ "text": request.prompt() }));

        let body = json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });
        info!("requesting content from {}", self.config.text_model);
        let text: String = self
            .call(&self.config.text_model, body)
            .await?
            .parts()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.trim().is_empty() {
            return Err(Error::Validation("empty response".to_string()));
        }
        Ok(text)
    }

    async fn edit(&self, base: &ImageRef, instruction: &str) -> Result<Option<ImageRef>> {
        let body = json!({
            "contents": [{ "parts": [inline_part(base)?, { "text": instruction }] }]
        });
        let parts = self.call(&self.config.image_model, body).await?.parts();
        Ok(parts.into_iter().find_map(|p| {
            p.inline_data
                .map(|d| ImageRef::new(format!("data:{};base64,{}", d.mime_type, d.data)))
        }))
    }
}

impl GenerativeService for GeminiService {
    fn generate_content<'a>(
        &'a self,
        request: &'a AssistantRequest,
    ) -> BoxFuture<'a, Result<String>> {
        self.generate(request).boxed()
    }

    fn edit_image<'a>(
        &'a self,
        base: &'a ImageRef,
        instruction: &'a str,
    ) -> BoxFuture<'a, Result<Option<ImageRef>>> {
        self.edit(base, instruction).boxed()
    }
}

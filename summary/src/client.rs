//! The call to the generative-language service. Everything here resolves
//! to a usable string: the summary text or one of the fixed fallbacks,
//! never a raw fault.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Headers, Request, RequestInit, Response};

/// Model the summaries are generated with.
pub const MODEL: &str = "gemini-3-flash-preview";
/// Sampling parameters mirrored from the production prompt.
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.8;

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown when the service answers but produces no text.
pub const FALLBACK_EMPTY: &str = "لم يتمكن الذكاء الاصطناعي من توليد ملخص.";
/// Shown on any failure: network, credentials, malformed response.
pub const FALLBACK_ERROR: &str = "حدث خطأ أثناء محاولة تلخيص المقال.";

/// The academic summarization prompt wrapped around the article.
fn prompt(title: &str, content: &str) -> String {
    format!(
        "بصفتك مساعداً أكاديمياً، قم بتلخيص هذا المقال باللغة العربية بأسلوب رصين ومختصر (في 3 نقاط أساسية):\nالعنوان: {}\nالمحتوى: {}",
        title, content
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Serialize, Deserialize, Default)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

/// The JSON body posted to the service.
pub fn build_request_body(title: &str, content: &str) -> Result<String, String> {
    let request = GenerateRequest {
        contents: vec![RequestContent {
            parts: vec![TextPart {
                text: prompt(title, content),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
        },
    };
    serde_json::to_string(&request).map_err(|e| e.to_string())
}

/// Pull the first non-empty candidate text out of a service response.
/// `None` for anything unusable: malformed JSON, no candidates, blank
/// text.
pub fn parse_summary(body: &str) -> Option<String> {
    let response: GenerateResponse = serde_json::from_str(body).ok()?;
    response
        .candidates
        .into_iter()
        .flat_map(|c| c.content.parts)
        .map(|p| p.text)
        .find(|text| !text.trim().is_empty())
}

/// Ask the service for a summary of (title, content). Always resolves to
/// a displayable string; failures collapse to the fixed fallbacks.
#[wasm_bindgen]
pub async fn summarize(title: String, content: String, api_key: String) -> String {
    match request_summary(&title, &content, &api_key).await {
        Ok(Some(text)) => text,
        Ok(None) => FALLBACK_EMPTY.to_string(),
        Err(err) => {
            console::log_1(&JsValue::from_str(&format!(
                "summary request failed: {:?}",
                err
            )));
            FALLBACK_ERROR.to_string()
        }
    }
}

async fn request_summary(
    title: &str,
    content: &str,
    api_key: &str,
) -> Result<Option<String>, JsValue> {
    let body = build_request_body(title, content).map_err(|e| JsValue::from_str(&e))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let url = format!("{}/{}:generateContent?key={}", ENDPOINT, MODEL, api_key);
    let request = Request::new_with_str_and_init(&url, &init)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "service answered {}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("non-text response body"))?;

    Ok(parse_summary(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_prompt_and_sampling() {
        let body = build_request_body("عنوان المقال", "نص المقال").unwrap();
        assert!(body.contains("عنوان المقال"));
        assert!(body.contains("نقاط أساسية"));
        assert!(body.contains("\"temperature\":0.7"));
        assert!(body.contains("\"topP\":0.8"));
    }

    #[test]
    fn well_formed_response_yields_the_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"ملخص من ثلاث نقاط."}]}}]}"#;
        assert_eq!(parse_summary(body).as_deref(), Some("ملخص من ثلاث نقاط."));
    }

    #[test]
    fn first_non_empty_part_wins() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  "},{"text":"الملخص"}]}}]}"#;
        assert_eq!(parse_summary(body).as_deref(), Some("الملخص"));
    }

    #[test]
    fn unusable_responses_parse_to_none() {
        assert_eq!(parse_summary("{definitely not json"), None);
        assert_eq!(parse_summary("{}"), None);
        assert_eq!(parse_summary(r#"{"candidates":[]}"#), None);
        assert_eq!(
            parse_summary(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#),
            None
        );
    }
}

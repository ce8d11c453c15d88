//! HTTP routes of the web studio

use super::pages;
use super::state::AppState;
use crate::output::html_text::display_text;
use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use studio_application::{
    CheckSystemUseCase, CreateContentError, CreateContentInput, LlmGateway,
};
use studio_domain::{
    ContentOptions, ContentRequest, ContentType, ResearchDepth, SeoFocus, Tone, WordCount,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Fields of the generation form
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub topic: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default = "default_target")]
    pub word_count: u32,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub research_depth: ResearchDepth,
    #[serde(default)]
    pub seo_focus: SeoFocus,
}

fn default_target() -> u32 {
    1000
}

impl GenerateForm {
    fn to_request(&self) -> Result<ContentRequest, studio_domain::DomainError> {
        ContentRequest::builder(&self.topic)
            .audience(&self.audience)
            .content_type(self.content_type.clone())
            .word_count(WordCount::from_slider(self.word_count))
            .options(ContentOptions {
                tone: self.tone,
                research_depth: self.research_depth,
                seo_focus: self.seo_focus,
            })
            .build()
    }
}

/// Build the studio router
pub fn router<G: LlmGateway + 'static>(state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/", get(index::<G>))
        .route("/generate", post(generate_form::<G>))
        .route("/download/{id}", get(download::<G>))
        .route("/api/status", get(api_status::<G>))
        .route("/api/generate", post(api_generate::<G>))
        .route("/api/check", post(api_check::<G>))
        .route("/api/stats", get(api_stats::<G>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index<G: LlmGateway + 'static>(State(state): State<Arc<AppState<G>>>) -> Html<String> {
    Html(pages::index(&state.api_status, &state.settings))
}

async fn generate_form<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let error_page = |code: StatusCode, title: &str, message: &str, hint: Option<&str>| {
        (
            code,
            Html(pages::error(
                title,
                message,
                hint,
                &state.api_status,
                &state.settings,
            )),
        )
            .into_response()
    };

    if !state.api_status.all_configured() {
        return error_page(
            StatusCode::SERVICE_UNAVAILABLE,
            "API keys not configured",
            &format!(
                "Set {} and restart the studio.",
                state.api_status.missing().join(" and ")
            ),
            None,
        );
    }

    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            return error_page(StatusCode::BAD_REQUEST, "Invalid request", &e.to_string(), None);
        }
    };

    info!("Web generation requested for '{}'", request.topic);
    let input = CreateContentInput::new(request).with_settings(state.settings.clone());
    match state.use_case.execute(input).await {
        Ok(result) => {
            let id = state.record(result.clone());
            Html(pages::result(
                &result,
                id,
                &state.api_status,
                &state.settings,
            ))
            .into_response()
        }
        Err(e) => {
            warn!("Web generation failed: {}", e);
            state.record_failure();
            error_page(
                failure_status(&e),
                "Content generation failed",
                &e.to_string(),
                Some(e.troubleshooting()),
            )
        }
    }
}

async fn download<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Path(id): Path<u64>,
) -> Response {
    let Some(stored) = state.stored(id) else {
        return (StatusCode::NOT_FOUND, "No such result").into_response();
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", stored.file_name()),
            ),
        ],
        display_text(&stored.result.body),
    )
        .into_response()
}

async fn api_status<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "apis": state.api_status,
        "all_configured": state.api_status.all_configured(),
        "missing": state.api_status.missing(),
        "models": state.settings.models,
        "workflow": state.settings.workflow,
    }))
}

async fn api_generate<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
    Json(request): Json<ContentRequest>,
) -> Response {
    info!("API generation requested for '{}'", request.topic);
    let input = CreateContentInput::new(request).with_settings(state.settings.clone());

    match state.use_case.execute(input).await {
        Ok(result) => {
            let id = state.record(result.clone());
            Json(json!({
                "id": id,
                "download_url": format!("/download/{}", id),
                "result": result,
            }))
            .into_response()
        }
        Err(e) => {
            warn!("API generation failed: {}", e);
            state.record_failure();
            (
                failure_status(&e),
                Json(json!({
                    "error": e.to_string(),
                    "hint": e.troubleshooting(),
                })),
            )
                .into_response()
        }
    }
}

async fn api_check<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<serde_json::Value> {
    let check = CheckSystemUseCase::new(&state.use_case)
        .execute(state.settings.clone(), &state.api_status)
        .await;
    Json(json!({
        "healthy": check.is_healthy(),
        "check": check,
    }))
}

async fn api_stats<G: LlmGateway + 'static>(
    State(state): State<Arc<AppState<G>>>,
) -> Json<serde_json::Value> {
    let stats = state.stats();
    Json(json!({
        "total_runs": stats.total_runs,
        "successes": stats.successes,
        "simulations": stats.simulations,
        "failures": stats.failures,
        "success_rate": stats.success_rate(),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn failure_status(error: &CreateContentError) -> StatusCode {
    if error.is_cancelled() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::BAD_GATEWAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ammonia::clean_text;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use studio_application::{
        ApiStatus, BehaviorConfig, CreateContentUseCase, GatewayError, GenerationSettings,
        LlmSession,
    };
    use studio_domain::Model;
    use tower::ServiceExt;

    struct FixedSession {
        model: Model,
        reply: Result<String, GatewayError>,
    }

    #[async_trait]
    impl LlmSession for FixedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, _content: &str) -> Result<String, GatewayError> {
            self.reply.clone()
        }
    }

    struct FixedGateway {
        reply: Result<String, GatewayError>,
    }

    #[async_trait]
    impl LlmGateway for FixedGateway {
        async fn create_session_with_system_prompt(
            &self,
            model: &Model,
            _system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(FixedSession {
                model: model.clone(),
                reply: self.reply.clone(),
            }))
        }
    }

    fn app(reply: Result<String, GatewayError>, fallback: bool, keys: bool) -> Router {
        let use_case = CreateContentUseCase::new(Arc::new(FixedGateway { reply }))
            .with_behavior(BehaviorConfig::default().with_fallback(fallback));
        let state = AppState::new(
            use_case,
            GenerationSettings::default(),
            ApiStatus::new(keys, keys),
            10,
        );
        router(Arc::new(state))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let response = app(Ok("text".into()), true, true)
            .oneshot(get_request("/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"action="/generate""#));
        assert!(html.contains("API Status"));
    }

    #[tokio::test]
    async fn test_form_without_keys_does_not_run() {
        let response = app(Ok("text".into()), true, false)
            .oneshot(form_request("topic=Rust&word_count=1200"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let html = body_string(response).await;
        assert!(html.contains(&clean_text("API keys not configured")));
        assert!(html.contains(&clean_text("GOOGLE_API_KEY and SERPER_API_KEY")));
    }

    #[tokio::test]
    async fn test_form_generates_and_result_downloads() {
        let app = app(Ok("Final piece".into()), true, true);

        let response = app
            .clone()
            .oneshot(form_request(
                "topic=Rust+at+the+Edge&audience=devs&content_type=article&word_count=1500&tone=casual",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(&clean_text("Content created successfully!")));
        assert!(html.contains("Word Count: 1300-1700"));
        assert!(html.contains(r#"href="/download/1""#));

        let response = app.oneshot(get_request("/download/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"content_"));
        assert_eq!(body_string(response).await, "Final piece");
    }

    #[tokio::test]
    async fn test_blank_topic_is_bad_request() {
        let response = app(Ok("text".into()), true, true)
            .oneshot(form_request("topic=+++"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_download_is_not_found() {
        let response = app(Ok("text".into()), true, true)
            .oneshot(get_request("/download/42"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_api_generate_returns_result() {
        let app = app(Ok("Generated".into()), true, true);
        let response = app
            .clone()
            .oneshot(json_request(
                "/api/generate",
                json!({"topic": "Rust", "word_count": "1000"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["download_url"], "/download/1");
        assert_eq!(body["result"]["status"], "success");
        assert_eq!(body["result"]["request"]["word_count"], "800-1200");

        let stats: serde_json::Value = serde_json::from_str(
            &body_string(app.oneshot(get_request("/api/stats")).await.unwrap()).await,
        )
        .unwrap();
        assert_eq!(stats["total_runs"], 1);
        assert_eq!(stats["successes"], 1);
    }

    #[tokio::test]
    async fn test_api_generate_falls_back_to_simulation() {
        let response = app(Err(GatewayError::RateLimited("quota".into())), true, true)
            .oneshot(json_request("/api/generate", json!({"topic": "Rust"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["result"]["status"], "simulation");
    }

    #[tokio::test]
    async fn test_api_generate_failure_has_hint() {
        let app = app(Err(GatewayError::RateLimited("quota".into())), false, true);
        let response = app
            .clone()
            .oneshot(json_request("/api/generate", json!({"topic": "Rust"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().contains("quota"));
        assert!(body["hint"].as_str().unwrap().contains("Wait a minute"));

        let stats: serde_json::Value = serde_json::from_str(
            &body_string(app.oneshot(get_request("/api/stats")).await.unwrap()).await,
        )
        .unwrap();
        assert_eq!(stats["failures"], 1);
    }

    #[tokio::test]
    async fn test_api_check_and_status() {
        let app = app(Ok("Checked".into()), false, true);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/check")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["healthy"], true);
        assert_eq!(body["check"]["status"], "healthy");

        let status: serde_json::Value = serde_json::from_str(
            &body_string(app.oneshot(get_request("/api/status")).await.unwrap()).await,
        )
        .unwrap();
        assert_eq!(status["all_configured"], true);
        assert_eq!(status["apis"]["gemini"], true);
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Ok("x".into()), true, true)
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }
}

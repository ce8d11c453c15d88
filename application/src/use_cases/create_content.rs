//! Create Content use case
//!
//! Runs the content team's sequential workflow. Each stage may research its
//! query first, then asks its model to work from the previous stage's output.
//! The last stage's output becomes the content body.

use crate::config::{AgentModels, BehaviorConfig, GenerationSettings};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::search_gateway::SearchGateway;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use studio_domain::{
    AgentRole, ContentRequest, ContentResult, Model, PromptTemplate, Research, StageOutput,
    TaskSpec, Workflow, parse_seo_metadata, research_query, simulated_content,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a content run
#[derive(Error, Debug)]
pub enum CreateContentError {
    #[error("{role} failed: {source}")]
    StageFailed {
        role: AgentRole,
        #[source]
        source: GatewayError,
    },

    #[error("{role} timed out after {seconds}s")]
    StageTimeout { role: AgentRole, seconds: u64 },

    #[error("{role} returned empty content")]
    EmptyOutput { role: AgentRole },

    #[error("Operation cancelled")]
    Cancelled,
}

impl CreateContentError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CreateContentError::Cancelled)
    }

    /// User-facing hint for resolving the error
    pub fn troubleshooting(&self) -> &'static str {
        match self {
            CreateContentError::StageFailed { source, .. } => source.troubleshooting(),
            CreateContentError::StageTimeout { .. } => GatewayError::Timeout.troubleshooting(),
            CreateContentError::EmptyOutput { .. } => {
                "The model returned nothing. Retry, or pick a different model for this agent."
            }
            CreateContentError::Cancelled => "The run was cancelled.",
        }
    }
}

/// Input for the CreateContent use case
#[derive(Debug, Clone)]
pub struct CreateContentInput {
    pub request: ContentRequest,
    pub models: AgentModels,
    pub workflow: Workflow,
}

impl CreateContentInput {
    pub fn new(request: ContentRequest) -> Self {
        Self {
            request,
            models: AgentModels::default(),
            workflow: Workflow::default(),
        }
    }

    /// Use the process-wide models and workflow
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.models = settings.models;
        self.workflow = settings.workflow;
        self
    }

    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflow = workflow;
        self
    }
}

/// Use case for running the content team
pub struct CreateContentUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    search: Option<Arc<dyn SearchGateway>>,
    behavior: BehaviorConfig,
    logger: Arc<dyn GenerationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: LlmGateway + 'static> CreateContentUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            search: None,
            behavior: BehaviorConfig::default(),
            logger: Arc::new(NoGenerationLogger),
            cancellation_token: None,
        }
    }

    /// Give search-enabled agents access to web research
    pub fn with_search(mut self, search: Arc<dyn SearchGateway>) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for graceful interruption
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: CreateContentInput,
    ) -> Result<ContentResult, CreateContentError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: CreateContentInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ContentResult, CreateContentError> {
        info!(
            "Starting content run for '{}' with {} stages",
            input.request.topic,
            input.workflow.len()
        );
        progress.on_run_start(input.workflow.len());
        self.logger.log(GenerationEvent::new(
            "run_started",
            json!({
                "topic": input.request.topic.as_str(),
                "audience": input.request.audience,
                "content_type": input.request.content_type.as_str(),
                "word_count": input.request.word_count.to_string(),
                "stages": input.workflow.stages(),
            }),
        ));

        match self.run_workflow(&input, progress).await {
            Ok(result) => {
                info!("Content run completed ({} words)", result.body_word_count());
                self.logger.log(GenerationEvent::new(
                    "run_completed",
                    json!({
                        "status": result.status,
                        "words": result.body_word_count(),
                        "apis_used": result.apis_used,
                    }),
                ));
                progress.on_run_complete(result.status);
                Ok(result)
            }
            Err(e) if e.is_cancelled() => {
                info!("Content run cancelled");
                Err(e)
            }
            Err(e) if self.behavior.fallback_to_simulation => {
                warn!("Content run failed, falling back to simulation: {}", e);
                let reason = e.to_string();
                progress.on_fallback(&reason);
                self.logger.log(GenerationEvent::new(
                    "fallback",
                    json!({ "reason": reason }),
                ));
                let result = self.simulate(&input, reason);
                progress.on_run_complete(result.status);
                Ok(result)
            }
            Err(e) => Err(e),
        }
    }

    /// Build the simulation-mode result for `input`
    pub fn simulate(&self, input: &CreateContentInput, reason: impl Into<String>) -> ContentResult {
        let llm_label = input
            .models
            .distinct()
            .iter()
            .map(|m| m.display_name())
            .collect::<Vec<_>>()
            .join(" / ");
        let search_label = self
            .search
            .as_ref()
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| "web search".to_string());

        ContentResult::simulation(
            input.request.clone(),
            simulated_content(&input.request),
            input.workflow.describe(&llm_label, &search_label),
            self.apis_used(&input.models, &input.workflow, self.search.is_some()),
            reason,
        )
    }

    async fn run_workflow(
        &self,
        input: &CreateContentInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ContentResult, CreateContentError> {
        let mut stages: Vec<StageOutput> = Vec::with_capacity(input.workflow.len());

        for &role in input.workflow.stages() {
            self.check_cancelled()?;

            let model = input.models.for_role(role);
            progress.on_stage_start(role, model);
            info!("Stage {}: {} ({})", stages.len() + 1, role, model);

            let previous = stages.last().map(|s| (s.role.title(), s.content.as_str()));
            let outcome = self
                .run_stage_bounded(role, model, &input.request, previous, progress)
                .await;

            match outcome {
                Ok(output) => {
                    progress.on_stage_complete(role, true);
                    self.logger.log(GenerationEvent::new(
                        "stage_completed",
                        json!({
                            "role": role,
                            "model": output.model,
                            "researched": output.researched,
                            "duration_ms": output.duration_ms,
                            "text": output.content,
                        }),
                    ));
                    stages.push(output);
                }
                Err(e) => {
                    warn!("Stage {} failed: {}", role, e);
                    progress.on_stage_complete(role, false);
                    self.logger.log(GenerationEvent::new(
                        "stage_failed",
                        json!({ "role": role, "error": e.to_string() }),
                    ));
                    return Err(e);
                }
            }
        }

        let seo = stages
            .iter()
            .find(|s| s.role == AgentRole::SeoSpecialist)
            .and_then(|s| parse_seo_metadata(&s.content));
        let researched = stages.iter().any(|s| s.researched);
        let apis_used = self.apis_used(&input.models, &input.workflow, researched);

        Ok(ContentResult::success(
            input.request.clone(),
            stages,
            seo,
            apis_used,
        ))
    }

    /// Run one stage under the configured timeout and cancellation token
    async fn run_stage_bounded(
        &self,
        role: AgentRole,
        model: &Model,
        request: &ContentRequest,
        previous: Option<(&str, &str)>,
        progress: &dyn ProgressNotifier,
    ) -> Result<StageOutput, CreateContentError> {
        let timeout = self.behavior.stage_timeout;
        let stage = async move {
            let fut = self.run_stage(role, model, request, previous, progress);
            match timeout {
                Some(limit) => tokio::time::timeout(limit, fut).await.map_err(|_| {
                    CreateContentError::StageTimeout {
                        role,
                        seconds: limit.as_secs(),
                    }
                })?,
                None => fut.await,
            }
        };

        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(CreateContentError::Cancelled),
                    result = stage => result,
                }
            }
            None => stage.await,
        }
    }

    async fn run_stage(
        &self,
        role: AgentRole,
        model: &Model,
        request: &ContentRequest,
        previous: Option<(&str, &str)>,
        progress: &dyn ProgressNotifier,
    ) -> Result<StageOutput, CreateContentError> {
        let started = Instant::now();
        let profile = role.profile();
        let task = TaskSpec::for_role(role, request);
        let research = self.research(role, request, progress).await;

        let system_prompt = PromptTemplate::agent_system(&profile);
        let prompt = PromptTemplate::task_prompt(&task, research.as_ref(), previous);
        debug!("{} prompt is {} bytes", role, prompt.len());
        self.logger.log(GenerationEvent::new(
            "llm_request",
            json!({
                "role": role,
                "model": model.as_str(),
                "bytes": prompt.len(),
                "prompt": prompt,
            }),
        ));

        let session = self
            .gateway
            .create_session_with_system_prompt(model, &system_prompt)
            .await
            .map_err(|source| CreateContentError::StageFailed { role, source })?;

        let content = session
            .send(&prompt)
            .await
            .map_err(|source| CreateContentError::StageFailed { role, source })?;

        let content = content.trim();
        if content.is_empty() {
            return Err(CreateContentError::EmptyOutput { role });
        }

        Ok(StageOutput::new(role, model.as_str(), content)
            .with_research(research.is_some())
            .with_duration_ms(started.elapsed().as_millis() as u64))
    }

    /// Search for the stage's query; failures only drop the research block
    async fn research(
        &self,
        role: AgentRole,
        request: &ContentRequest,
        progress: &dyn ProgressNotifier,
    ) -> Option<Research> {
        let search = self.search.as_ref()?;
        let query = research_query(role, request)?;
        let limit = request.options.research_depth.result_count();

        match search.search(&query, limit).await {
            Ok(research) => {
                debug!("{} research returned {} hits", role, research.hits.len());
                progress.on_research(role, research.hits.len());
                self.logger.log(GenerationEvent::new(
                    "research",
                    json!({ "role": role, "query": query, "hits": research.hits.len() }),
                ));
                (!research.is_empty()).then_some(research)
            }
            Err(e) => {
                warn!("Research for {} failed, continuing without it: {}", role, e);
                self.logger.log(GenerationEvent::new(
                    "research_failed",
                    json!({ "role": role, "query": query, "error": e.to_string() }),
                ));
                None
            }
        }
    }

    fn apis_used(&self, models: &AgentModels, workflow: &Workflow, with_search: bool) -> Vec<String> {
        let mut apis: Vec<String> = Vec::new();
        for &role in workflow.stages() {
            let label = format!("{} API", models.for_role(role).display_name());
            if !apis.contains(&label) {
                apis.push(label);
            }
        }
        if with_search && let Some(search) = &self.search {
            apis.push(search.name().to_string());
        }
        apis
    }

    fn check_cancelled(&self) -> Result<(), CreateContentError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(CreateContentError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use crate::ports::search_gateway::SearchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use studio_domain::{GenerationStatus, SearchHit};

    // ==================== Test Mocks ====================

    type PromptLog = Arc<Mutex<Vec<(AgentRole, String)>>>;

    struct ScriptedSession {
        model: Model,
        role: AgentRole,
        response: Result<String, GatewayError>,
        prompts: PromptLog,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl LlmSession for ScriptedSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.prompts
                .lock()
                .unwrap()
                .push((self.role, content.to_string()));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.response.clone()
        }
    }

    struct ScriptedGateway {
        responses: HashMap<AgentRole, Result<String, GatewayError>>,
        prompts: PromptLog,
        delay: Option<Duration>,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            let mut responses = HashMap::new();
            responses.insert(AgentRole::Writer, Ok("WRITER DRAFT".to_string()));
            responses.insert(AgentRole::Editor, Ok("EDITED DRAFT".to_string()));
            responses.insert(
                AgentRole::SeoSpecialist,
                Ok("Title: Great Title\nKeywords: a, b\n\nFINAL BODY".to_string()),
            );
            Self {
                responses,
                prompts: Arc::new(Mutex::new(Vec::new())),
                delay: None,
            }
        }

        fn respond(mut self, role: AgentRole, response: Result<String, GatewayError>) -> Self {
            self.responses.insert(role, response);
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn prompt_for(&self, role: AgentRole) -> Option<String> {
            self.prompts
                .lock()
                .unwrap()
                .iter()
                .find(|(r, _)| *r == role)
                .map(|(_, p)| p.clone())
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        async fn create_session_with_system_prompt(
            &self,
            model: &Model,
            system_prompt: &str,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            let role = AgentRole::all()
                .into_iter()
                .find(|r| system_prompt.contains(r.title()))
                .ok_or_else(|| GatewayError::Other("unknown persona".to_string()))?;
            Ok(Box::new(ScriptedSession {
                model: model.clone(),
                role,
                response: self.responses[&role].clone(),
                prompts: Arc::clone(&self.prompts),
                delay: self.delay,
            }))
        }
    }

    struct MockSearch {
        fail: bool,
        queries: Mutex<Vec<(String, usize)>>,
    }

    impl MockSearch {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SearchGateway for MockSearch {
        fn name(&self) -> &str {
            "Serper API"
        }

        async fn search(&self, query: &str, limit: usize) -> Result<Research, SearchError> {
            self.queries
                .lock()
                .unwrap()
                .push((query.to_string(), limit));
            if self.fail {
                return Err(SearchError::RateLimited);
            }
            let mut research = Research::new(query);
            research.hits.push(SearchHit::new(
                "Source One",
                "https://example.com/one",
                "A useful snippet",
            ));
            Ok(research)
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_run_start(&self, total_stages: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", total_stages));
        }

        fn on_stage_start(&self, role: AgentRole, _model: &Model) {
            self.events
                .lock()
                .unwrap()
                .push(format!("stage:{}", role.as_str()));
        }

        fn on_stage_complete(&self, role: AgentRole, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", role.as_str(), success));
        }

        fn on_fallback(&self, _reason: &str) {
            self.events.lock().unwrap().push("fallback".to_string());
        }

        fn on_run_complete(&self, status: GenerationStatus) {
            self.events
                .lock()
                .unwrap()
                .push(format!("complete:{}", status));
        }
    }

    fn input() -> CreateContentInput {
        CreateContentInput::new(ContentRequest::new("Rust at the Edge").unwrap())
    }

    // ==================== Error Types ====================

    #[test]
    fn test_error_is_cancelled() {
        assert!(CreateContentError::Cancelled.is_cancelled());
        assert!(
            !CreateContentError::EmptyOutput {
                role: AgentRole::Writer
            }
            .is_cancelled()
        );
    }

    #[test]
    fn test_error_display_uses_role_title() {
        let error = CreateContentError::StageFailed {
            role: AgentRole::Editor,
            source: GatewayError::RateLimited("429".to_string()),
        };
        assert_eq!(error.to_string(), "Content Editor failed: Rate limited: 429");
        assert!(error.troubleshooting().contains("rate limiting"));
    }

    // ==================== Workflow ====================

    #[tokio::test]
    async fn test_full_workflow_success() {
        let gateway = Arc::new(ScriptedGateway::new());
        let search = Arc::new(MockSearch::new(false));
        let use_case = CreateContentUseCase::new(Arc::clone(&gateway)).with_search(search);

        let result = use_case.execute(input()).await.unwrap();

        assert_eq!(result.status, GenerationStatus::Success);
        assert_eq!(result.stages.len(), 3);
        assert!(result.body.ends_with("FINAL BODY"));
        let seo = result.seo.as_ref().unwrap();
        assert_eq!(seo.title.as_deref(), Some("Great Title"));
        assert_eq!(seo.keywords, vec!["a", "b"]);
        assert_eq!(
            result.apis_used,
            vec!["Gemini 2.0 Flash API".to_string(), "Serper API".to_string()]
        );
    }

    #[tokio::test]
    async fn test_stage_receives_previous_output() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = CreateContentUseCase::new(Arc::clone(&gateway));

        use_case.execute(input()).await.unwrap();

        let editor_prompt = gateway.prompt_for(AgentRole::Editor).unwrap();
        assert!(editor_prompt.contains("WRITER DRAFT"));
        assert!(editor_prompt.contains("BEGIN CONTENT WRITER OUTPUT"));
        let seo_prompt = gateway.prompt_for(AgentRole::SeoSpecialist).unwrap();
        assert!(seo_prompt.contains("EDITED DRAFT"));
        assert!(!seo_prompt.contains("WRITER DRAFT"));
    }

    #[tokio::test]
    async fn test_only_search_enabled_agents_research() {
        let gateway = Arc::new(ScriptedGateway::new());
        let search = Arc::new(MockSearch::new(false));
        let use_case = CreateContentUseCase::new(Arc::clone(&gateway))
            .with_search(Arc::clone(&search) as Arc<dyn SearchGateway>);

        let result = use_case.execute(input()).await.unwrap();

        let queries = search.queries.lock().unwrap().clone();
        assert_eq!(
            queries,
            vec![
                ("Rust at the Edge".to_string(), 5),
                ("Rust at the Edge keywords".to_string(), 5),
            ]
        );
        assert!(result.stage(AgentRole::Writer).unwrap().researched);
        assert!(!result.stage(AgentRole::Editor).unwrap().researched);
        let writer_prompt = gateway.prompt_for(AgentRole::Writer).unwrap();
        assert!(writer_prompt.contains("Source One (https://example.com/one)"));
    }

    #[tokio::test]
    async fn test_search_failure_does_not_fail_run() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = CreateContentUseCase::new(gateway).with_search(Arc::new(MockSearch::new(true)));

        let result = use_case.execute(input()).await.unwrap();

        assert_eq!(result.status, GenerationStatus::Success);
        assert!(result.stages.iter().all(|s| !s.researched));
        assert_eq!(result.apis_used, vec!["Gemini 2.0 Flash API".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_simulation() {
        let gateway = Arc::new(
            ScriptedGateway::new().respond(
                AgentRole::Editor,
                Err(GatewayError::RateLimited("quota".to_string())),
            ),
        );
        let progress = RecordingProgress::default();
        let use_case = CreateContentUseCase::new(gateway);

        let result = use_case
            .execute_with_progress(input(), &progress)
            .await
            .unwrap();

        assert_eq!(result.status, GenerationStatus::Simulation);
        assert!(result.body.starts_with("# Rust at the Edge"));
        assert!(result.fallback_reason.unwrap().contains("quota"));
        assert_eq!(result.workflow.len(), 3);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start:3",
                "stage:writer",
                "done:writer:true",
                "stage:editor",
                "done:editor:false",
                "fallback",
                "complete:simulation",
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_without_fallback_is_error() {
        let gateway = Arc::new(ScriptedGateway::new().respond(
            AgentRole::Writer,
            Err(GatewayError::MissingApiKey("no key".to_string())),
        ));
        let use_case = CreateContentUseCase::new(gateway)
            .with_behavior(BehaviorConfig::default().with_fallback(false));

        let error = use_case.execute(input()).await.unwrap_err();

        match error {
            CreateContentError::StageFailed { role, source } => {
                assert_eq!(role, AgentRole::Writer);
                assert!(matches!(source, GatewayError::MissingApiKey(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_output_is_rejected() {
        let gateway =
            Arc::new(ScriptedGateway::new().respond(AgentRole::Writer, Ok("   \n".to_string())));
        let use_case = CreateContentUseCase::new(gateway)
            .with_behavior(BehaviorConfig::default().with_fallback(false));

        let error = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(
            error,
            CreateContentError::EmptyOutput {
                role: AgentRole::Writer
            }
        ));
    }

    #[tokio::test]
    async fn test_cancellation_never_falls_back() {
        let token = CancellationToken::new();
        token.cancel();
        let use_case = CreateContentUseCase::new(Arc::new(ScriptedGateway::new()))
            .with_cancellation(token);

        let error = use_case.execute(input()).await.unwrap_err();
        assert!(error.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stage_timeout() {
        let gateway = Arc::new(ScriptedGateway::new().with_delay(Duration::from_secs(30)));
        let use_case = CreateContentUseCase::new(gateway).with_behavior(BehaviorConfig {
            stage_timeout: Some(Duration::from_secs(5)),
            fallback_to_simulation: false,
        });

        let error = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(
            error,
            CreateContentError::StageTimeout {
                role: AgentRole::Writer,
                seconds: 5
            }
        ));
    }

    #[tokio::test]
    async fn test_custom_workflow_writer_only() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = CreateContentUseCase::new(gateway);
        let input = input().with_workflow(Workflow::new(vec![AgentRole::Writer]).unwrap());

        let result = use_case.execute(input).await.unwrap();

        assert_eq!(result.body, "WRITER DRAFT");
        assert!(result.seo.is_none());
    }
}

use std::sync::Arc;

use business_case::{
    extract, system_prompt, user_prompt, BusinessCaseRequest, BusinessCaseResponse, Completion,
};
use tracing::{debug, info, warn};

use crate::config::GenerationSettings;
use crate::error::ServiceError;
use crate::llm_client::{LlmClient, LlmMessage, LlmRequest};

/// Shared, read-only state for every generation: one client per process.
#[derive(Clone)]
pub struct GenerateContext {
    pub llm: Arc<LlmClient>,
    pub settings: GenerationSettings,
}

impl GenerateContext {
    pub fn new(llm: LlmClient) -> Self {
        Self::with_settings(llm, GenerationSettings::default())
    }

    pub fn with_settings(llm: LlmClient, settings: GenerationSettings) -> Self {
        Self {
            llm: Arc::new(llm),
            settings,
        }
    }
}

/// Build both prompts and make the single completion call.
pub async fn complete(
    req: &BusinessCaseRequest,
    ctx: &GenerateContext,
) -> Result<Completion, ServiceError> {
    let inputs = req.prompt_inputs();
    let system_prompt = system_prompt();
    let user_prompt = user_prompt(&inputs);

    info!(
        company = %req.company_name,
        customer_analysis = inputs.customer_analysis.is_some(),
        market_research = inputs.market_research.is_some(),
        refine = inputs.existing_output.is_some() && inputs.feedback.is_some(),
        model = ctx.llm.model(),
        "requesting business case"
    );

    let llm_req = LlmRequest {
        messages: vec![
            LlmMessage::system(system_prompt.clone()),
            LlmMessage::user(user_prompt.clone()),
        ],
        temperature: ctx.settings.temperature,
        max_tokens: ctx.settings.max_tokens,
        timeout: ctx.settings.timeout,
    };
    let resp = ctx.llm.complete(llm_req).await.map_err(|e| {
        warn!(error = %e, "completion call failed");
        ServiceError::from(e)
    })?;
    debug!(chars = resp.content.len(), "completion received");

    Ok(Completion {
        system_prompt,
        user_prompt,
        raw_text: resp.content,
    })
}

pub async fn generate(
    req: &BusinessCaseRequest,
    ctx: &GenerateContext,
) -> Result<BusinessCaseResponse, ServiceError> {
    let completion = complete(req, ctx).await?;
    extract(&completion.raw_text).map_err(|e| {
        warn!(
            error = %e,
            raw = %truncate_log(&completion.raw_text, 1200),
            "failed to extract business case"
        );
        ServiceError::from(e)
    })
}

fn truncate_log(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

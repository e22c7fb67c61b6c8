use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCaseRequest {
    pub company_name: String,
    #[serde(default)]
    pub previous_data: Option<PreviousData>,
    #[serde(default)]
    pub current_prompt_data: Option<CurrentPromptData>,
    // Accepted for forward compatibility; nothing reads it.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub other_input_data: Map<String, JsonValue>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviousData {
    #[serde(default)]
    pub customer_analysis: Option<String>,
    #[serde(default)]
    pub market_research: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPromptData {
    pub existing_generated_output: String,
    pub user_feedback: String,
}

/// Flattened view of a request: the only fields the prompt builder looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptInputs<'a> {
    pub company_name: &'a str,
    pub customer_analysis: Option<&'a str>,
    pub market_research: Option<&'a str>,
    pub existing_output: Option<&'a str>,
    pub feedback: Option<&'a str>,
}

impl<'a> PromptInputs<'a> {
    pub fn new(company_name: &'a str) -> Self {
        Self {
            company_name,
            ..Self::default()
        }
    }
}

impl BusinessCaseRequest {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            previous_data: None,
            current_prompt_data: None,
            other_input_data: Map::new(),
        }
    }

    pub fn prompt_inputs(&self) -> PromptInputs<'_> {
        let previous = self.previous_data.as_ref();
        let current = self.current_prompt_data.as_ref();
        PromptInputs {
            company_name: &self.company_name,
            customer_analysis: previous.and_then(|p| p.customer_analysis.as_deref()),
            market_research: previous.and_then(|p| p.market_research.as_deref()),
            existing_output: current.map(|c| c.existing_generated_output.as_str()),
            feedback: current.map(|c| c.user_feedback.as_str()),
        }
    }
}

/// What went out to the completion service and what came back, for one request.
#[derive(Debug, Clone)]
pub struct Completion {
    pub system_prompt: String,
    pub user_prompt: String,
    pub raw_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessCaseResponse {
    pub generated_output: String,
    pub structured_data: JsonValue,
}

impl BusinessCaseResponse {
    /// Typed view of `structured_data["business_case"]`.
    ///
    /// The shape is only advisory: the model is asked for it in the system prompt but
    /// nothing enforces it, so a mismatch yields `None` rather than an error.
    pub fn business_case(&self) -> Option<BusinessCase> {
        let inner = self.structured_data.get("business_case")?;
        serde_json::from_value(inner.clone()).ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessCase {
    pub executive_summary: String,
    pub investment_required: f64,
    pub payback_period: String,
    #[serde(default)]
    pub five_year_projections: Vec<FinancialProjection>,
    #[serde(default)]
    pub key_assumptions: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialProjection {
    pub year: i64,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub roi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_defaults_optional_fields() {
        let req: BusinessCaseRequest =
            serde_json::from_value(json!({"company_name": "Acme"})).unwrap();
        assert_eq!(req.company_name, "Acme");
        assert!(req.previous_data.is_none());
        assert!(req.current_prompt_data.is_none());
        assert!(req.other_input_data.is_empty());
        assert_eq!(req.prompt_inputs(), PromptInputs::new("Acme"));
    }

    #[test]
    fn other_input_data_defaults_to_empty_map() {
        let req: BusinessCaseRequest = serde_json::from_value(json!({
            "company_name": "Acme",
            "other_input_data": null
        }))
        .unwrap();
        assert!(req.other_input_data.is_empty());

        let req: BusinessCaseRequest = serde_json::from_value(json!({
            "company_name": "Acme",
            "other_input_data": {"region": "EU"}
        }))
        .unwrap();
        assert_eq!(req.other_input_data.get("region"), Some(&json!("EU")));

        let res: Result<BusinessCaseRequest, _> = serde_json::from_value(json!({
            "company_name": "Acme",
            "other_input_data": [1, 2]
        }));
        assert!(res.is_err());
    }

    #[test]
    fn current_prompt_data_requires_both_fields() {
        let res: Result<BusinessCaseRequest, _> = serde_json::from_value(json!({
            "company_name": "Acme",
            "current_prompt_data": {"user_feedback": "shorter"}
        }));
        assert!(res.is_err());
    }

    #[test]
    fn prompt_inputs_flatten_nested_context() {
        let req: BusinessCaseRequest = serde_json::from_value(json!({
            "company_name": "Acme",
            "previous_data": {"market_research": "growing"},
            "current_prompt_data": {
                "existing_generated_output": "draft",
                "user_feedback": "more detail"
            },
            "other_input_data": {"ignored": true}
        }))
        .unwrap();
        let inputs = req.prompt_inputs();
        assert_eq!(inputs.customer_analysis, None);
        assert_eq!(inputs.market_research, Some("growing"));
        assert_eq!(inputs.existing_output, Some("draft"));
        assert_eq!(inputs.feedback, Some("more detail"));
    }

    #[test]
    fn business_case_view_is_lenient() {
        let resp = BusinessCaseResponse {
            generated_output: String::new(),
            structured_data: json!({"something_else": 1}),
        };
        assert!(resp.business_case().is_none());

        let resp = BusinessCaseResponse {
            generated_output: String::new(),
            structured_data: json!({"business_case": {
                "executive_summary": "ok",
                "investment_required": 1000,
                "payback_period": "1yr",
                "five_year_projections": [
                    {"year": 1, "revenue": 10.0, "costs": 5.0, "profit": 5.0, "roi": 0.5}
                ]
            }}),
        };
        let case = resp.business_case().unwrap();
        assert_eq!(case.investment_required, 1000.0);
        assert_eq!(case.five_year_projections.len(), 1);
        assert!(case.risk_factors.is_empty());
    }
}

use crate::model::PromptInputs;

pub const JSON_START_MARKER: &str = "[JSON_START]";
pub const JSON_END_MARKER: &str = "[JSON_END]";

pub fn system_prompt() -> String {
    [
        "You are an expert in loyalty program business case development and financial analysis.",
        "Create a comprehensive business case for a loyalty program, including financial projections and ROI analysis.",
        "",
        "Consider:",
        "1. Initial investment requirements",
        "2. Operational costs",
        "3. Revenue projections and ROI",
        "4. Market analysis and competition",
        "5. Risk factors and mitigation strategies",
        "",
        "Provide your response in two parts:",
        "1. A detailed business case narrative including:",
        "   - Executive summary",
        "   - Market opportunity",
        "   - Financial analysis",
        "   - Implementation considerations",
        "   - Risk assessment",
        "",
        "2. A structured JSON object with this schema:",
        "{",
        r#"    "business_case": {"#,
        r#"        "executive_summary": "string","#,
        r#"        "investment_required": float,"#,
        r#"        "payback_period": "string","#,
        r#"        "five_year_projections": ["#,
        "            {",
        r#"                "year": int,"#,
        r#"                "revenue": float,"#,
        r#"                "costs": float,"#,
        r#"                "profit": float,"#,
        r#"                "roi": float"#,
        "            }",
        "        ],",
        r#"        "key_assumptions": ["assumption1", "assumption2"],"#,
        r#"        "risk_factors": ["risk1", "risk2"],"#,
        r#"        "success_metrics": ["metric1", "metric2"]"#,
        "    }",
        "}",
        "",
        "The five_year_projections list must contain exactly five entries, one per year.",
        "",
        "Separate the two parts with [JSON_START] and [JSON_END] markers:",
        "write the narrative first, then [JSON_START], then only the JSON object, then [JSON_END].",
    ]
    .join("\n")
}

/// Base sentence plus whichever context sections are present, in a fixed order.
///
/// Empty strings are treated like missing fields. The refinement section needs both the
/// previous output and the feedback; either one alone contributes nothing.
pub fn user_prompt(inputs: &PromptInputs<'_>) -> String {
    let mut prompt = format!(
        "Create a business case for {}'s loyalty program.",
        inputs.company_name
    );

    if let Some(analysis) = present(inputs.customer_analysis) {
        prompt.push_str(&format!("\n\nCustomer Analysis:\n{analysis}"));
    }

    if let Some(research) = present(inputs.market_research) {
        prompt.push_str(&format!("\n\nMarket Research:\n{research}"));
    }

    if let (Some(existing), Some(feedback)) =
        (present(inputs.existing_output), present(inputs.feedback))
    {
        prompt.push_str(&format!(
            "\n\nPrevious Business Case:\n{existing}\n\nPlease refine based on this feedback:\n{feedback}"
        ));
    }

    prompt
}

fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

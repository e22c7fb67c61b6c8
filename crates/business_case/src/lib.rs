pub mod error;
pub mod extract;
pub mod model;
pub mod prompt;

pub use error::ExtractError;
pub use extract::{extract, extract_narrative, extract_structured_data};
pub use model::{
    BusinessCase, BusinessCaseRequest, BusinessCaseResponse, Completion, CurrentPromptData,
    FinancialProjection, PreviousData, PromptInputs,
};
pub use prompt::{system_prompt, user_prompt, JSON_END_MARKER, JSON_START_MARKER};

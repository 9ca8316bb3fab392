pub mod assistant;
pub mod llm;
pub mod scan;

pub use assistant::{AssistantError, AssistantService};
pub use llm::{
    BackendError, ChatBackend, ChatCompletionClient, ClassifierBackend, GenerativeContentClient,
};
pub use scan::{ScanError, ScanService};

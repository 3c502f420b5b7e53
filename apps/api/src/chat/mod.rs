// Chat assistant: forwards user questions, optionally augmented with the
// latest analysis, to the generative model through llm_client.

pub mod context;
pub mod handlers;
pub mod prompts;

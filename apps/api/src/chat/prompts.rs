// Prompt constants and canned replies for the chat assistant.
// Reuses the bullet format rules from llm_client::prompts.

use crate::llm_client::prompts::BULLET_REPLY_RULES;

/// Assistant prompt template. Replace `{rules}` then `{context}` before sending.
pub const CHAT_PROMPT_TEMPLATE: &str = "You are the SkillSync AI Assistant.
{rules}

User Context: {context}";

/// Shown in place of a model reply when the upstream quota is exhausted.
pub const RATE_LIMITED_REPLY: &str = "\
• Daily request limit reached for the AI assistant.
• The free tier allows a limited number of requests per day.
• Quota resets at midnight Pacific Time.";

/// Shown in place of a model reply for every other upstream failure.
pub const UNAVAILABLE_REPLY: &str = "\
• AI service is temporarily unavailable.
• Please try again in 30 seconds.";

/// Renders the full prompt sent to the model. The user context is substituted
/// last so placeholder-looking text typed by the user is left alone.
pub fn render_chat_prompt(context: &str) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{rules}", BULLET_REPLY_RULES)
        .replace("{context}", context)
}

// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces they have in common.

/// Output format every assistant reply must follow. The chat widget renders
/// replies line by line, so each point sits on its own "•" line.
pub const BULLET_REPLY_RULES: &str = "\
Format your answer using the following rules:
- Use \"•\" for every single point.
- Provide exactly 3-4 professional points.
- Keep language concise and career-focused.";

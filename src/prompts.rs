pub const ANALYSIS_SYSTEM: &str = include_str!("../data/prompts/analysis_system.txt");

/// Exact phrase the system prompt instructs the model to return for prompts
/// unrelated to video analysis. Compared case-insensitively against replies.
pub const OFF_TOPIC_REPLY: &str =
    "Error: I can only analyze video and answer related questions.";

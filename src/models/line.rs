use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct UsageBlock {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

/// One line of a `conversation.jsonl` file. Every field is optional: the log
/// mixes record shapes and only `api_response` lines carry usage.
#[derive(Deserialize, Debug)]
pub struct LogLine {
    pub r#type: Option<String>,
    pub timestamp: Option<String>,
    pub model: Option<String>,
    pub usage: Option<UsageBlock>,
}

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct MessageBody {
    pub usage: Option<MessageUsage>,
}

/// One line of the JSONL transcript. Only assistant lines carry usage; the
/// timestamp is kept raw and parsed leniently later.
#[derive(Deserialize, Debug)]
pub struct TranscriptLine {
    pub r#type: Option<String>,
    pub timestamp: Option<String>,
    pub message: Option<MessageBody>,
}

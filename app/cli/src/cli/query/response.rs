use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TokensTransferredResponse {
    pub total_tokens_transferred: String,
}

#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    pub is_interaction: bool,
}

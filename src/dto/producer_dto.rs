use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterProducerPayload {
    pub url: String,
}

//! ML helpers - tokenization, device selection and vector similarity

/// Compute backend probing and candle device construction
pub mod device;

/// Cosine similarity over embedding vectors
pub mod similarity;

/// BPE tokenizer over the tiktoken vocabularies
pub mod tokenizer;

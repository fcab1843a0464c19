//! Subword tokenization over the tiktoken BPE tables
//!
//! The vocabulary is loaded once into a [`Tokenizer`] and passed to whoever
//! needs it. Loading `cl100k_base` parses the bundled rank table, so build
//! one tokenizer per process and share it by reference.

use crate::error::TextError;
use crate::storage::config::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use tiktoken_rs::CoreBPE;

const ENDOFTEXT: &str = "<|endoftext|>";
const FIM_PREFIX: &str = "<|fim_prefix|>";
const FIM_MIDDLE: &str = "<|fim_middle|>";
const FIM_SUFFIX: &str = "<|fim_suffix|>";
const ENDOFPROMPT: &str = "<|endofprompt|>";

/// Supported BPE vocabularies
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    #[serde(rename = "cl100k_base")]
    Cl100kBase,
    #[serde(rename = "o200k_base")]
    O200kBase,
    #[serde(rename = "p50k_base")]
    P50kBase,
    #[serde(rename = "r50k_base")]
    R50kBase,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::R50kBase => "r50k_base",
        }
    }

    /// Special-token literals that plain text may not contain
    pub fn special_tokens(&self) -> &'static [&'static str] {
        match self {
            Encoding::Cl100kBase => &[ENDOFTEXT, FIM_PREFIX, FIM_MIDDLE, FIM_SUFFIX, ENDOFPROMPT],
            Encoding::O200kBase => &[ENDOFTEXT, ENDOFPROMPT],
            Encoding::P50kBase | Encoding::R50kBase => &[ENDOFTEXT],
        }
    }

    fn load(&self) -> Result<CoreBPE, TextError> {
        let loaded = match self {
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
            Encoding::P50kBase => tiktoken_rs::p50k_base(),
            Encoding::R50kBase => tiktoken_rs::r50k_base(),
        };

        loaded.map_err(|e| TextError::EncodingLoad {
            encoding: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A loaded BPE vocabulary
pub struct Tokenizer {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl Tokenizer {
    pub fn new(encoding: Encoding) -> crate::Result<Self> {
        let bpe = encoding.load()?;
        log::debug!("Loaded {} tokenizer", encoding);
        Ok(Self { encoding, bpe })
    }

    /// Tokenizer for `cl100k_base`
    pub fn cl100k() -> crate::Result<Self> {
        Self::new(Encoding::Cl100kBase)
    }

    pub fn from_settings(settings: &Settings) -> crate::Result<Self> {
        Self::new(settings.encoding)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode `text` into token ids without any normalization.
    ///
    /// Text that contains a special-token literal such as `<|endoftext|>` is
    /// rejected rather than silently encoded.
    ///
    /// # Examples
    /// ```
    /// use common_utils::ml::tokenizer::Tokenizer;
    ///
    /// # fn main() -> common_utils::Result<()> {
    /// let tokenizer = Tokenizer::cl100k()?;
    /// assert_eq!(tokenizer.tokenize("hello world")?, vec![15339, 1917]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn tokenize(&self, text: &str) -> crate::Result<Vec<u32>> {
        if let Some(token) = self.find_special_token(text) {
            return Err(TextError::DisallowedSpecialToken {
                token: token.to_string(),
            }
            .into());
        }

        Ok(self
            .bpe
            .encode_ordinary(text)
            .into_iter()
            .map(|rank| rank as u32)
            .collect())
    }

    /// Number of tokens [`Tokenizer::tokenize`] would produce
    pub fn count(&self, text: &str) -> crate::Result<usize> {
        self.tokenize(text).map(|tokens| tokens.len())
    }

    // Earliest special-token literal in `text`, if any.
    fn find_special_token(&self, text: &str) -> Option<&'static str> {
        self.encoding
            .special_tokens()
            .iter()
            .filter_map(|token| text.find(token).map(|pos| (pos, *token)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, token)| token)
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

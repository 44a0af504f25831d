mod interface;
mod openai_compatible;

pub use interface::{ChatMessage, CompletionProvider};
pub use openai_compatible::OpenAiCompatibleProvider;

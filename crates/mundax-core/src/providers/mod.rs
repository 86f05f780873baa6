pub mod deepseek;
pub mod google;
pub mod openai;
pub mod provider;

pub use deepseek::{DeepseekProvider, DEEPSEEK_BASE_URL};
pub use google::{GoogleProvider, GOOGLE_BASE_URL};
pub use openai::{OpenAiProvider, OPENAI_BASE_URL};
pub use provider::{ProviderError, ProviderId, ProviderResult, TextProvider};

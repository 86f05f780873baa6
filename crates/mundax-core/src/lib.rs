pub mod config;
pub mod context;
pub mod gateway;
pub mod knowledge;
pub mod prompts;
pub mod providers;
pub mod records;
pub mod synthesis;

pub use config::credentials::ApiKeys;
pub use config::settings::Settings;
pub use context::{FarmRecord, QueryContext};
pub use gateway::AiBridge;
pub use providers::provider::{ProviderError, ProviderId, ProviderResult, TextProvider};
pub use providers::{DeepseekProvider, GoogleProvider, OpenAiProvider};
pub use records::RecordStore;
pub use synthesis::Solution;

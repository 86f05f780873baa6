pub mod credentials;
pub mod settings;

pub use credentials::ApiKeys;
pub use settings::Settings;

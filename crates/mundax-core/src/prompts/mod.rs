pub mod system;

pub use system::{farmer_query, master_prompt};

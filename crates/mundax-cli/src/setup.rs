use anyhow::Result;
use mundax_core::ApiKeys;
use std::io::{self, Write};

fn read_key(label: &str, current: &str) -> Result<String> {
    if current.is_empty() {
        print!("{label} API key: ");
    } else {
        print!("{label} API key [keep existing]: ");
    }
    io::stdout().flush()?;
    let key = rpassword::read_password()?.trim().to_string();
    if key.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(key)
    }
}

pub fn run_setup(existing: ApiKeys) -> Result<ApiKeys> {
    println!("\nWelcome to MundaX");
    println!("All three AI providers need a key before dispatch will go online.\n");

    let keys = ApiKeys {
        deepseek: read_key("DeepSeek", &existing.deepseek)?,
        openai: read_key("OpenAI", &existing.openai)?,
        google: read_key("Google", &existing.google)?,
    };

    keys.save()?;
    println!("Saved to {}\n", ApiKeys::path().display());

    if !keys.is_configured() {
        println!("Note: one or more keys still look missing or placeholder.");
        println!("Questions will be answered from the local knowledge base until fixed.\n");
    }

    Ok(keys)
}

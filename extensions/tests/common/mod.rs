use std::env;

use serde_json::json;
use ullama_core::Preferences;

// Helper function to get the live server address or skip the test
#[allow(dead_code)]
pub fn get_host_or_skip(var_name: &str, test_name: &str) -> Option<String> {
    dotenv::dotenv().ok(); // Load .env file if present

    match env::var(var_name) {
        Ok(host) if !host.is_empty() => Some(host),
        _ => {
            println!("Skipping integration test {} - {} environment variable not set.", test_name, var_name);
            None // Signal to skip
        }
    }
}

// Preferences as a launcher would hand them over, pointing at `host`
pub fn preferences(host: &str) -> Preferences {
    Preferences::new()
        .with("llama_host", host)
        .with("llama_headers", "")
        .with("llama_kw", "llama")
        .with("llama_system_prompt", "")
        .with("llama_max_context_length", 2048)
        .with("llama_max_length", 80)
        .with("llama_rep_pen", 1.1)
        .with("llama_rep_pen_range", 320)
        .with("llama_rep_pen_slope", 0.7)
        .with("llama_temperature", 0.7)
        .with("llama_top_k", 40)
        .with("llama_top_p", 0.9)
}

#[allow(dead_code)]
pub fn generation_params_json() -> serde_json::Value {
    json!({
        "llama_max_context_length": 2048,
        "llama_max_length": 80,
        "llama_rep_pen": 1.1,
        "llama_rep_pen_range": 320,
        "llama_rep_pen_slope": 0.7,
        "llama_temperature": 0.7,
        "llama_top_k": 40,
        "llama_top_p": 0.9,
    })
}

// Helper to initialize tracing subscriber
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

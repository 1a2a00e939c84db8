use atelier_core::models::token_count::{ModelPricing, TokenCount, TokenUsage};

/// Attach an estimated dollar cost to a token count.
pub fn usage_for(tokens: TokenCount, model_id: &str) -> TokenUsage {
    let cost_usd = pricing_for(model_id)
        .map(|p| p.estimate_cost(tokens))
        .unwrap_or(0.0);
    TokenUsage { tokens, cost_usd }
}

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn pricing_for(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("gpt-4o-mini") => Some(ModelPricing {
            input_per_million: 0.15,
            output_per_million: 0.60,
        }),
        id if id.contains("gpt-4o") => Some(ModelPricing {
            input_per_million: 2.50,
            output_per_million: 10.0,
        }),
        _ => None,
    }
}

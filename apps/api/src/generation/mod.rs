// Interview question generation: prompt building, the provider gateway, and the
// HTTP handler. All provider calls go through llm_client via the gateway.

pub mod gateway;
pub mod handlers;
pub mod prompts;

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `foliogen_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use foliogen_core::PortfolioStore;

fn main() {
    println!("foliogen_core ping={}", foliogen_core::ping());
    println!("foliogen_core version={}", foliogen_core::core_version());

    // Empty-document probe: confirms the default document shape survives a
    // serde round trip outside the core crate.
    let store = PortfolioStore::new();
    match serde_json::to_string(&store.document()) {
        Ok(json) => println!("foliogen_core empty_document={json}"),
        Err(err) => eprintln!("foliogen_core empty_document_error={err}"),
    }
}

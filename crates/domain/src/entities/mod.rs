pub mod trade;

// Re-export for easier access
pub use trade::Trade;

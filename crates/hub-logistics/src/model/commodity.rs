use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Volatility {
    Low,
    Medium,
    High,
}

/// Tradeable material. Reference data: never changes once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commodity {
    pub name: String,
    /// Currency per unit.
    pub base_price: f64,
    /// Usable fraction of a delivered unit, `0.0..=1.0`.
    pub yield_rate: f64,
    pub volatility: Volatility,
    pub sentiment: String,
}

impl Commodity {
    pub fn quote(&self, quantity: u64) -> f64 {
        self.base_price * quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityCreate {
    pub name: String,
    pub base_price: f64,
    pub yield_rate: f64,
    pub volatility: Volatility,
    #[serde(default)]
    pub sentiment: String,
}

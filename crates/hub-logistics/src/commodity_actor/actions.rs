#[derive(Debug, Clone)]
pub enum CommodityAction {
    /// Price a quantity at the base price.
    Quote(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommodityActionResult {
    Quote(f64),
}

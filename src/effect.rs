//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the area catalog
    LoadCatalog,
    /// Fetch the forecast for an office
    LoadForecast { code: String },
}

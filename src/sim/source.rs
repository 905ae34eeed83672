use crate::types::*;

/// Localized heat source and/or sink acting on one fixed interior cell,
/// once per time step. Both flags may be set; the source is added first,
/// then the sink subtracted, so equal strengths cancel up to rounding.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSinkConfig {
    /// Cell the source/sink acts on, `x` the column and `y` the row.
    /// Must lie strictly inside the plate interior when enabled.
    pub position: Index2,

    /// Temperature added (source) or removed (sink) per step.
    pub strength: Scalar,

    pub source_enabled: bool,
    pub sink_enabled: bool,
}

impl SourceSinkConfig {
    pub fn disabled() -> Self {
        return SourceSinkConfig {
            position: idx!(0, 0),
            strength: 0.0,
            source_enabled: false,
            sink_enabled: false,
        };
    }

    pub fn is_active(&self) -> bool {
        return self.source_enabled || self.sink_enabled;
    }
}

//! Display formatting for metric values.

/// Unit kinds with a fixed display rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKind {
    /// 1 decimal, "°C"
    Temperature,
    /// 1 decimal, "%"
    Percentage,
    /// 1 decimal, " µg/m³"
    Pm,
    /// 1 decimal, " km²"
    Area,
    /// 0 decimals, no suffix
    Index,
    /// 2 decimals, followed by the unit text
    Other(String),
}

impl UnitKind {
    /// Parse a unit name. Unrecognized names become `Other`.
    pub fn from_name(unit: &str) -> Self {
        match unit {
            "temperature" => UnitKind::Temperature,
            "percentage" => UnitKind::Percentage,
            "pm" => UnitKind::Pm,
            "area" => UnitKind::Area,
            "index" => UnitKind::Index,
            other => UnitKind::Other(other.to_string()),
        }
    }

    /// Render `value` using this unit's precision and suffix
    pub fn format(&self, value: f64) -> String {
        match self {
            UnitKind::Temperature => format!("{:.1}°C", value),
            UnitKind::Percentage => format!("{:.1}%", value),
            UnitKind::Pm => format!("{:.1} µg/m³", value),
            UnitKind::Area => format!("{:.1} km²", value),
            UnitKind::Index => format!("{:.0}", value),
            UnitKind::Other(unit) => format!("{:.2} {}", value, unit),
        }
    }
}

/// Format a number for display with the rule for `unit`
pub fn format_number_with_units(value: f64, unit: &str) -> String {
    UnitKind::from_name(unit).format(value)
}

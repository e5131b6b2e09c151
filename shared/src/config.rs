use serde::{Deserialize, Serialize};

/// How the viewport moves when a navigation button is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Entrance transition applied to every content card on mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntranceConfig {
    pub duration_ms: u32,
    /// Extra delay added per card, multiplied by the card's position
    pub stagger_ms: u32,
    /// Initial downward offset in CSS pixels
    pub offset_px: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            stagger_ms: 100,
            offset_px: 20.0,
        }
    }
}

impl EntranceConfig {
    /// Transition delay for the card at `index` in render order.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub scroll_mode: ScrollMode,
    /// Fraction of the viewport height, measured from the top, in which a
    /// section anchor counts as current.
    pub activation_ratio: f64,
    pub entrance: EntranceConfig,
    pub log_level: LogLevel,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scroll_mode: ScrollMode::Smooth,
            activation_ratio: 0.5,
            entrance: EntranceConfig::default(),
            log_level: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PortfolioConfig::default();
        assert_eq!(config.scroll_mode, ScrollMode::Smooth);
        assert_eq!(config.activation_ratio, 0.5);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.entrance.duration_ms, 500);
        assert_eq!(config.entrance.stagger_ms, 100);
        assert_eq!(config.entrance.offset_px, 20.0);
    }

    #[test]
    fn test_entrance_delay_is_staggered_by_position() {
        let entrance = EntranceConfig::default();
        let delays: Vec<u32> = (0..5).map(|i| entrance.delay_for(i)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = PortfolioConfig {
            scroll_mode: ScrollMode::Instant,
            ..PortfolioConfig::default()
        };
        assert_eq!(config.scroll_mode, ScrollMode::Instant);
        assert_eq!(config.activation_ratio, 0.5);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["scroll_mode"], "instant");
        assert_eq!(json["log_level"], "info");
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}

use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub seat_map: SeatMapSettings,
    #[serde(default)]
    pub selector: SelectorSettings,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    /// Черновик события (JSON), если путь не передан аргументом
    #[serde(default)]
    pub draft_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            rust_log: "tickit_editor=debug".to_string(),
            draft_path: None,
        }
    }
}

// Настройки редактора схемы зала
#[derive(Debug, Clone, Deserialize)]
pub struct SeatMapSettings {
    pub default_rows: u32,
    pub default_cols: u32,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for SeatMapSettings {
    fn default() -> Self {
        Self {
            default_rows: 5,
            default_cols: 10,
            min_zoom: 0.2,
            max_zoom: 3.0,
        }
    }
}

// Настройки публичного выбора мест
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSettings {
    pub max_tickets_per_order: usize,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            max_tickets_per_order: 10,
        }
    }
}

impl Config {
    /// Значения по умолчанию, поверх них переменные `TICKIT__SECTION__KEY`.
    /// `RUST_LOG` перекрывает `app.rust_log`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Config::default();

        let mut config: Config = config::Config::builder()
            .set_default("app.environment", defaults.app.environment)?
            .set_default("app.rust_log", defaults.app.rust_log)?
            .set_default("seat_map.default_rows", i64::from(defaults.seat_map.default_rows))?
            .set_default("seat_map.default_cols", i64::from(defaults.seat_map.default_cols))?
            .set_default("seat_map.min_zoom", defaults.seat_map.min_zoom)?
            .set_default("seat_map.max_zoom", defaults.seat_map.max_zoom)?
            .set_default("selector.max_tickets_per_order", defaults.selector.max_tickets_per_order as i64)?
            .add_source(
                config::Environment::with_prefix("TICKIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Ok(rust_log) = env::var("RUST_LOG") {
            config.app.rust_log = rust_log;
        }

        config.seat_map.check_zoom()?;

        Ok(config)
    }
}

impl SeatMapSettings {
    /// Оба предела конечны, положительны и не перевернуты
    pub fn check_zoom(&self) -> Result<(), config::ConfigError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(config::ConfigError::Message(format!(
                "seat_map zoom limits must be finite with 0 < min_zoom <= max_zoom, got {}..{}",
                min, max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_editor_limits() {
        let config = Config::default();
        assert_eq!((config.seat_map.default_rows, config.seat_map.default_cols), (5, 10));
        assert_eq!((config.seat_map.min_zoom, config.seat_map.max_zoom), (0.2, 3.0));
        assert_eq!(config.selector.max_tickets_per_order, 10);
        assert!(config.app.draft_path.is_none());
    }

    #[test]
    fn sections_deserialize_with_missing_parts() {
        let config: Config = serde_json::from_str(r#"{"selector": {"max_tickets_per_order": 4}}"#).unwrap();
        assert_eq!(config.selector.max_tickets_per_order, 4);
        assert_eq!(config.seat_map.default_cols, 10);
    }

    #[test]
    fn zoom_limits_are_checked() {
        assert!(SeatMapSettings::default().check_zoom().is_ok());
        for (min, max) in [(3.0, 0.2), (f64::NAN, 3.0), (0.2, f64::INFINITY), (0.0, 1.0), (-1.0, 1.0)] {
            let settings = SeatMapSettings {
                min_zoom: min,
                max_zoom: max,
                ..Default::default()
            };
            assert!(settings.check_zoom().is_err(), "{}..{} should be rejected", min, max);
        }
    }

    #[test]
    fn nan_zoom_from_env_is_rejected() {
        env::set_var("TICKIT__SEAT_MAP__MIN_ZOOM", "NaN");
        let result = Config::from_env();
        env::remove_var("TICKIT__SEAT_MAP__MIN_ZOOM");
        assert!(result.is_err());
    }
}

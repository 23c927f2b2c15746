//! Card icons derived from JMA weather text
//!
//! JMA describes the weather in free Japanese text ("晴れ　時々　くもり").
//! The condition is taken from the earliest keyword in the text, so the
//! leading phrase wins over later "時々"/"後" clauses.

use ratatui::style::Color;

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
}

const KEYWORDS: [(&str, WeatherCondition); 7] = [
    ("晴", WeatherCondition::Clear),
    ("曇", WeatherCondition::Cloudy),
    ("くもり", WeatherCondition::Cloudy),
    ("雨", WeatherCondition::Rain),
    ("雪", WeatherCondition::Snow),
    ("みぞれ", WeatherCondition::Snow),
    ("雷", WeatherCondition::Thunderstorm),
];

impl WeatherCondition {
    /// Map weather text to a condition; unrecognised text shows the sun.
    pub fn from_text(text: &str) -> Self {
        KEYWORDS
            .iter()
            .filter_map(|(keyword, condition)| text.find(keyword).map(|pos| (pos, *condition)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, condition)| condition)
            .unwrap_or(WeatherCondition::Clear)
    }

    pub fn icon(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "\u{2600}",
            WeatherCondition::Cloudy => "\u{2601}",
            WeatherCondition::Rain => "\u{2602}",
            WeatherCondition::Snow => "\u{2744}",
            WeatherCondition::Thunderstorm => "\u{26a1}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            WeatherCondition::Clear => Color::Rgb(255, 152, 0), // Orange
            WeatherCondition::Cloudy => Color::Rgb(117, 117, 117),
            WeatherCondition::Rain => Color::Rgb(30, 136, 229),
            WeatherCondition::Snow => Color::Rgb(79, 195, 247),
            WeatherCondition::Thunderstorm => Color::Rgb(253, 216, 53),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_text() {
        assert_eq!(WeatherCondition::from_text("晴れ"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_text("くもり"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_text("雨"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_text("雪　時々　くもり"), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_text("雷雨"), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_leading_phrase_wins() {
        assert_eq!(
            WeatherCondition::from_text("くもり　夕方　から　雨"),
            WeatherCondition::Cloudy
        );
        assert_eq!(
            WeatherCondition::from_text("晴れ　時々　くもり"),
            WeatherCondition::Clear
        );
    }

    #[test]
    fn test_unknown_text_shows_sun() {
        assert_eq!(WeatherCondition::from_text(""), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_text("Sunny"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::Clear.icon(), "\u{2600}");
    }
}

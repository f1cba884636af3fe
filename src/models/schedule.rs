use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// Whether a showing is the original audio, subtitled, or dubbed.
/// Serialized as the literal marker found in listing titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtitle {
    Original,
    Caption,
    Dub,
}

impl Subtitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtitle::Original => "",
            Subtitle::Caption => "字幕",
            Subtitle::Dub => "吹替",
        }
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Subtitle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Premium screen format advertised in a listing title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenType {
    None,
    FourDx,
    Imax,
    ImaxLaser,
    Dolby,
    Bestia,
}

impl ScreenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenType::None => "",
            ScreenType::FourDx => "4DX",
            ScreenType::Imax => "IMAX",
            ScreenType::ImaxLaser => "IMAXレーザー",
            ScreenType::Dolby => "DOLBY",
            ScreenType::Bestia => "BESTIA",
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ScreenType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A listing title with its embedded markers extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    pub title: String,
    pub subtitle: Subtitle,
    pub screen_type: ScreenType,
}

/// One screening's start and end as literal "HH:MM" text.
/// Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowtimeInterval {
    pub start: String,
    pub end: String,
}

impl ShowtimeInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Serialize for ShowtimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.start)?;
        seq.serialize_element(&self.end)?;
        seq.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub title: String,
    pub subtitle: Subtitle,
    pub screen_type: ScreenType,
    pub showtimes: Vec<ShowtimeInterval>,
}

impl Movie {
    pub fn new(normalized: NormalizedTitle, showtimes: Vec<ShowtimeInterval>) -> Self {
        Self {
            title: normalized.title,
            subtitle: normalized.subtitle,
            screen_type: normalized.screen_type,
            showtimes,
        }
    }
}

/// One theater's schedule for a single capture date. Constructed once,
/// then serialized; no further lifecycle.
#[derive(Debug, Clone, Serialize)]
pub struct MovieSchedule {
    pub theater_name: String,
    pub theater_name_en: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub movies: Vec<Movie>,
    pub scrape_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn showtime_interval_serializes_as_pair() {
        let interval = ShowtimeInterval::new("11:45", "14:50");
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(json, r#"["11:45","14:50"]"#);
    }

    #[test]
    fn movie_serializes_with_marker_strings() {
        let movie = Movie {
            title: "アベンジャーズ".to_string(),
            subtitle: Subtitle::Caption,
            screen_type: ScreenType::Imax,
            showtimes: vec![ShowtimeInterval::new("09:00", "11:30")],
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["subtitle"], "字幕");
        assert_eq!(json["screen_type"], "IMAX");
        assert_eq!(json["showtimes"][0][0], "09:00");
    }

    #[test]
    fn original_and_none_serialize_empty() {
        assert_eq!(Subtitle::Original.as_str(), "");
        assert_eq!(ScreenType::None.as_str(), "");
    }
}

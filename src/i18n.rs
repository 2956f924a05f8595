//! Locale tables for calendar text
//!
//! Hand-written tables rather than a message catalog: the widget needs a date
//! pattern, weekday and month labels, and a handful of short strings.

use crate::date::CalendarDate;

/// Per-mode placeholder strings for the read-only input
#[derive(Debug)]
pub struct Placeholders {
    pub single: &'static str,
    pub multiple: &'static str,
    pub week: &'static str,
    pub month: &'static str,
    pub year: &'static str,
    pub range: &'static str,
}

/// Static strings for one language
#[derive(Debug)]
pub struct Messages {
    /// Weekday header labels, Sunday first
    pub weekdays: [&'static str; 7],
    /// Month cell labels
    pub months_short: [&'static str; 12],
    /// Month names used in titles and display text
    pub months_long: [&'static str; 12],
    pub placeholders: Placeholders,
    /// Hint shown while a range has a start but no end
    pub range_hint: &'static str,
}

static KOREAN: Messages = Messages {
    weekdays: ["일", "월", "화", "수", "목", "금", "토"],
    months_short: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    months_long: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    placeholders: Placeholders {
        single: "날짜 선택",
        multiple: "날짜 선택 (다중)",
        week: "주 선택",
        month: "월 선택",
        year: "연도 선택",
        range: "기간 선택",
    },
    range_hint: "종료일을 선택하세요",
};

static ENGLISH: Messages = Messages {
    weekdays: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    months_long: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    placeholders: Placeholders {
        single: "Select date",
        multiple: "Select dates",
        week: "Select week",
        month: "Select month",
        year: "Select year",
        range: "Select period",
    },
    range_hint: "Select end date",
};

/// Locale information for calendar formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Language code (ISO 639-1): "en", "ko", "ja", etc.
    pub language: String,

    /// Optional region code (ISO 3166-1): "US", "GB", "KR", etc.
    pub region: Option<String>,

    /// strftime pattern, chosen from language and region
    date_format: String,
}

impl Locale {
    /// Create a new locale from language and optional region
    pub fn new(language: impl Into<String>, region: Option<String>) -> Self {
        let language = language.into();

        let date_format = match language.as_str() {
            "en" if region.as_deref() == Some("US") => "%m/%d/%Y",
            "en" => "%d/%m/%Y",
            "ja" | "zh" | "ko" => "%Y-%m-%d",
            _ => "%d.%m.%Y",
        }
        .to_string();

        Locale {
            language,
            region,
            date_format,
        }
    }

    /// Parse locale from string like "en-US" or "ko-KR"
    pub fn from_string(locale_str: &str) -> Self {
        if locale_str.is_empty() {
            return Self::default();
        }

        let mut parts = locale_str.split(['-', '_']);
        let language = parts
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or("en")
            .to_lowercase();
        let region = parts.next().map(|s| s.to_uppercase());

        Self::new(language, region)
    }

    /// Detect locale from the LANG environment variable
    pub fn from_env() -> Self {
        match std::env::var("LANG") {
            // LANG is typically like "en_US.UTF-8" or "ko_KR.UTF-8"
            Ok(lang) => {
                let locale_part = lang.split('.').next().unwrap_or("en_US");
                match locale_part {
                    "C" | "POSIX" | "" => Self::default(),
                    other => Self::from_string(other),
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Static strings for this locale's language
    pub fn messages(&self) -> &'static Messages {
        match self.language.as_str() {
            "ko" => &KOREAN,
            _ => &ENGLISH,
        }
    }

    fn is_korean(&self) -> bool {
        self.language == "ko"
    }

    /// strftime pattern used for dates (e.g. "%Y-%m-%d", "%d/%m/%Y")
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Format a date with this locale's pattern
    pub fn format_date(&self, date: &CalendarDate) -> String {
        date.format(&self.date_format)
    }

    /// Label for a whole year ("2024년" / "2024")
    pub fn year_label(&self, year: i32) -> String {
        if self.is_korean() {
            format!("{}년", year)
        } else {
            year.to_string()
        }
    }

    /// Label for a month of a year ("2024년 3월" / "March 2024")
    pub fn year_month_label(&self, year: i32, month0: u32) -> String {
        let month = self.messages().months_long[(month0 % 12) as usize];
        if self.is_korean() {
            format!("{}년 {}", year, month)
        } else {
            format!("{} {}", month, year)
        }
    }

    /// Running count of selected dates
    pub fn selected_count(&self, count: usize) -> String {
        if self.is_korean() {
            format!("{}개 선택됨", count)
        } else {
            format!("{} selected", count)
        }
    }

    /// Label of the button that closes a multiple selection
    pub fn done_label(&self, count: usize) -> String {
        if self.is_korean() {
            format!("완료 ({}개)", count)
        } else {
            format!("Done ({})", count)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US".to_string()))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref region) = self.region {
            write!(f, "{}-{}", self.language, region)
        } else {
            write!(f, "{}", self.language)
        }
    }
}

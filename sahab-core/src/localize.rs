use anyhow::anyhow;

/// Languages the app ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Native-script name, shown in the language switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "العربية",
        }
    }

    pub fn is_rtl(&self) -> bool {
        *self == Language::Arabic
    }

    /// The other language; the in-app switcher is a two-way toggle.
    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Language::English, Language::Arabic]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" => Ok(Language::Arabic),
            _ => Err(anyhow!(
                "Unknown language '{value}'. Supported languages: en, ar."
            )),
        }
    }
}

/// Text layout direction for the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Key, English, Arabic.
const STRINGS: &[(&str, &str, &str)] = &[
    ("loading", "Loading...", "جارٍ التحميل..."),
    ("retry", "Retry", "إعادة المحاولة"),
    ("error", "Error", "خطأ"),
    (
        "data_error",
        "Something went wrong while loading weather data",
        "حدث خطأ أثناء تحميل بيانات الطقس",
    ),
    ("feels_like", "Feels like", "الإحساس كأنها"),
    ("high", "High", "العظمى"),
    ("low", "Low", "الصغرى"),
    ("humidity", "Humidity", "الرطوبة"),
    ("wind_direction", "Wind Direction", "اتجاه الرياح"),
    ("wind_speed", "Wind Speed", "سرعة الرياح"),
    ("error_invalid_url", "Invalid URL", "رابط غير صالح"),
    (
        "error_invalid_response",
        "Invalid response from server",
        "استجابة غير صالحة من الخادم",
    ),
    ("error_decoding", "Failed to decode data", "تعذر فك ترميز البيانات"),
    ("weather_news_title", "Weather News", "أخبار الطقس"),
    (
        "latest_weather_updates",
        "Latest Weather Updates",
        "آخر مستجدات الطقس",
    ),
    (
        "weather_forecast",
        "Stay informed with the latest forecasts",
        "ابقَ على اطلاع بآخر التوقعات",
    ),
    ("menu_dashboard", "Dashboard", "لوحة المعلومات"),
    ("menu_weather_news", "Weather News", "أخبار الطقس"),
    ("menu_rain_radar", "Rain Radar", "رادار الأمطار"),
    ("menu_weather_stations", "Weather Stations", "محطات الطقس"),
    ("menu_notification_center", "Notification Center", "مركز الإشعارات"),
    ("menu_monthly_reports", "Monthly Reports", "التقارير الشهرية"),
    ("menu_worldwide_cities", "Worldwide Cities", "مدن حول العالم"),
    ("menu_about_us", "About Us", "من نحن"),
    ("menu_settings", "Settings", "الإعدادات"),
    ("menu_disclaimer", "Disclaimer", "إخلاء المسؤولية"),
];

/// String lookup bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer {
    lang: Language,
}

impl Localizer {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn direction(&self) -> Direction {
        if self.lang.is_rtl() {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    /// Translated string for `key`. Unknown keys echo the key itself, so a
    /// missing table entry shows up on screen instead of crashing.
    pub fn localized(&self, key: &'static str) -> &'static str {
        STRINGS
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, en, ar)| match self.lang {
                Language::English => *en,
                Language::Arabic => *ar,
            })
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_as_str_roundtrip() {
        for lang in Language::all() {
            let parsed = Language::try_from(lang.as_str()).expect("roundtrip should succeed");
            assert_eq!(*lang, parsed);
        }
    }

    #[test]
    fn language_parse_accepts_long_names_any_case() {
        assert_eq!(Language::try_from("Arabic").unwrap(), Language::Arabic);
        assert_eq!(Language::try_from("ENGLISH").unwrap(), Language::English);
    }

    #[test]
    fn unknown_language_error() {
        let err = Language::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert!(Language::Arabic.is_rtl());
        assert!(!Language::English.is_rtl());

        assert_eq!(
            Localizer::new(Language::Arabic).direction(),
            Direction::RightToLeft
        );
        assert_eq!(
            Localizer::new(Language::English).direction(),
            Direction::LeftToRight
        );
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::English.toggled(), Language::Arabic);
        assert_eq!(Language::Arabic.toggled(), Language::English);
    }

    #[test]
    fn lookup_returns_the_language_column() {
        let en = Localizer::new(Language::English);
        let ar = Localizer::new(Language::Arabic);

        assert_eq!(en.localized("retry"), "Retry");
        assert_eq!(ar.localized("retry"), "إعادة المحاولة");

        assert_eq!(en.localized("menu_settings"), "Settings");
        assert_eq!(ar.localized("menu_settings"), "الإعدادات");
    }

    #[test]
    fn unknown_key_echoes_the_key() {
        let en = Localizer::new(Language::English);
        assert_eq!(en.localized("no_such_key"), "no_such_key");
    }
}

/// Entries of the slide-out menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Dashboard,
    WeatherNews,
    RainRadar,
    WeatherStations,
    NotificationCenter,
    MonthlyReports,
    WorldwideCities,
    AboutUs,
    Settings,
    Disclaimer,
}

impl MenuItem {
    pub const fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Dashboard,
            MenuItem::WeatherNews,
            MenuItem::RainRadar,
            MenuItem::WeatherStations,
            MenuItem::NotificationCenter,
            MenuItem::MonthlyReports,
            MenuItem::WorldwideCities,
            MenuItem::AboutUs,
            MenuItem::Settings,
            MenuItem::Disclaimer,
        ]
    }

    /// Key into the localization table.
    pub fn localized_key(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "menu_dashboard",
            MenuItem::WeatherNews => "menu_weather_news",
            MenuItem::RainRadar => "menu_rain_radar",
            MenuItem::WeatherStations => "menu_weather_stations",
            MenuItem::NotificationCenter => "menu_notification_center",
            MenuItem::MonthlyReports => "menu_monthly_reports",
            MenuItem::WorldwideCities => "menu_worldwide_cities",
            MenuItem::AboutUs => "menu_about_us",
            MenuItem::Settings => "menu_settings",
            MenuItem::Disclaimer => "menu_disclaimer",
        }
    }

    /// Only a few entries lead anywhere; the rest are placeholders.
    pub fn is_navigable(&self) -> bool {
        matches!(
            self,
            MenuItem::Dashboard | MenuItem::WeatherNews | MenuItem::Settings
        )
    }
}

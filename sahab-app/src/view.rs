//! Terminal renditions of the app's screens.
//!
//! Everything here observes the controller's published state and prints;
//! no fetch or decode logic lives in this crate.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;

use sahab_core::{
    Direction, HttpWeatherSource, Localizer, WeatherController, WeatherReport, WeatherState,
};

use crate::menu::MenuItem;

const FRAME_WIDTH: usize = 52;

/// Static placeholder forecast shown on the news screen.
const FORECAST: &[(&str, &str, i32, i32)] = &[
    ("Today", "Sunny", 28, 18),
    ("Tomorrow", "Partly Cloudy", 26, 16),
    ("Saturday", "Mostly Sunny", 29, 19),
    ("Sunday", "Sunny", 31, 21),
    ("Monday", "Hot", 33, 23),
    ("Tuesday", "Very Hot", 35, 25),
    ("Wednesday", "Sunny", 32, 22),
];

const TIPS: &[(&str, &str)] = &[
    (
        "Sun Protection",
        "High UV levels expected. Wear sunscreen, protective clothing, and seek shade during peak hours (10 AM - 4 PM).",
    ),
    (
        "Stay Hydrated",
        "Hot weather increases dehydration risk. Drink plenty of water throughout the day, even if you don't feel thirsty.",
    ),
    (
        "Wind Advisory",
        "Moderate winds expected. Secure outdoor items and be cautious when driving high-profile vehicles.",
    ),
];

/// Print one line honoring the layout direction: RTL lines are pushed to
/// the right edge of the frame and the terminal's bidi does the rest.
fn emit(localizer: Localizer, line: &str) {
    match localizer.direction() {
        Direction::LeftToRight => println!("{line}"),
        Direction::RightToLeft => println!("{line:>width$}", width = FRAME_WIDTH),
    }
}

/// Wait for the in-flight fetch to finish.
async fn settled(rx: &mut watch::Receiver<WeatherState>) -> WeatherState {
    loop {
        {
            let state = rx.borrow_and_update();
            if !state.is_loading {
                return state.clone();
            }
        }
        if rx.changed().await.is_err() {
            return WeatherState::default();
        }
    }
}

/// The current-conditions screen.
pub async fn show_current(localizer: Localizer) -> Result<()> {
    let controller = WeatherController::new(Arc::new(HttpWeatherSource::new()), localizer);
    let mut rx = controller.subscribe();

    emit(localizer, localizer.localized("loading"));

    let state = settled(&mut rx).await;

    if state.has_error {
        render_error(&state, localizer);
        return Ok(());
    }

    if let Some(report) = state.data.as_ref() {
        render_report(&controller, report, localizer);
    }

    Ok(())
}

/// The weather-news screen: localized headers, the live summary when data
/// is available, then the static forecast and tips content.
pub async fn show_news(localizer: Localizer) -> Result<()> {
    let controller = WeatherController::new(Arc::new(HttpWeatherSource::new()), localizer);
    let mut rx = controller.subscribe();

    emit(localizer, localizer.localized("weather_news_title"));
    emit(localizer, localizer.localized("latest_weather_updates"));
    emit(localizer, localizer.localized("weather_forecast"));
    println!();

    let state = settled(&mut rx).await;
    if let Some(report) = state.data.as_ref() {
        emit(
            localizer,
            &format!("{}  {}", report.city, report.formatted_temp()),
        );
        emit(
            localizer,
            &format!(
                "{}  {}",
                report.capitalized_weather(),
                report.formatted_high_low()
            ),
        );
        println!();
    }

    for (day, conditions, high, low) in FORECAST {
        emit(
            localizer,
            &format!("{day:<10} {conditions:<14} H:{high}° L:{low}°"),
        );
    }
    println!();

    for (title, advice) in TIPS {
        emit(localizer, &format!("{title}: {advice}"));
    }

    Ok(())
}

/// The side-menu as a flat list; `›` marks the entries that navigate.
pub fn show_menu(localizer: Localizer) {
    for item in MenuItem::all() {
        let marker = if item.is_navigable() { "›" } else { " " };
        emit(
            localizer,
            &format!("{marker} {}", localizer.localized(item.localized_key())),
        );
    }
    emit(
        localizer,
        &format!("· {}", localizer.language().display_name()),
    );
}

fn render_error(state: &WeatherState, localizer: Localizer) {
    let message = state
        .error_message
        .clone()
        .unwrap_or_else(|| localizer.localized("data_error").to_string());

    emit(
        localizer,
        &format!("{}: {}", localizer.localized("error"), message),
    );
    emit(localizer, localizer.localized("retry"));
}

fn render_report(controller: &WeatherController, report: &WeatherReport, localizer: Localizer) {
    emit(localizer, &report.city);
    emit(localizer, &controller.formatted_date());
    emit(
        localizer,
        &format!(
            "{}  {}",
            report.formatted_temp(),
            report.capitalized_weather()
        ),
    );
    emit(
        localizer,
        &format!(
            "{} {}",
            localizer.localized("feels_like"),
            report.feels_like
        ),
    );
    emit(localizer, &report.formatted_high_low());
    emit(
        localizer,
        &format!("{}: {}", localizer.localized("humidity"), report.humidity),
    );
    emit(
        localizer,
        &format!(
            "{}: {} ({})",
            localizer.localized("wind_direction"),
            report.wind_direction,
            report.wind_direction_icon()
        ),
    );
    emit(
        localizer,
        &format!(
            "{}: {}",
            localizer.localized("wind_speed"),
            report.formatted_wind_speed()
        ),
    );
}

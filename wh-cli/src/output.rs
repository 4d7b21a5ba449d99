//! Plain-text rendering of a dashboard `Screen`.

use wh_dashboard::render::{
    ChartSurface, ForecastTile, HistoryRow, ListSurface, PlanCard, Screen,
};

fn heading(title: &str) {
    println!();
    println!("== {} ==", title);
}

pub fn print_health(screen: &Screen) {
    println!("API: {}", screen.health.label);
}

pub fn print_weather(screen: &Screen) {
    heading("Weather");
    match &screen.weather_card {
        Some(card) => {
            println!("{} {}  ({})", card.icon, card.city, card.source);
            println!("{}  {}", card.temp, card.condition);
            println!(
                "Wind {}  Humidity {}  Feels like {}",
                card.wind, card.humidity, card.feels_like
            );
            println!("{}", card.updated);
        }
        None => println!("No weather yet"),
    }
}

pub fn print_plan(screen: &Screen) {
    heading("Plan");
    match &screen.plan_card {
        PlanCard::Empty(text) => println!("{}", text),
        PlanCard::Plan {
            source,
            chips,
            generated,
        } => {
            println!("Source: {}", source);
            for chip in chips {
                println!("  {} {}", chip.icon, chip.label);
            }
            println!("{}", generated);
        }
    }
}

fn print_tiles(label: &str, tiles: &ListSurface<ForecastTile>) {
    match tiles {
        ListSurface::Placeholder(text) => println!("{}: {}", label, text),
        ListSurface::Items(items) => {
            let line: Vec<String> = items
                .iter()
                .map(|t| format!("{} {} {}", t.label, t.icon, t.temp))
                .collect();
            println!("{}: {}", label, line.join(" | "));
        }
    }
}

pub fn print_forecast(screen: &Screen) {
    heading("Forecast (simulated)");
    print_tiles("Hourly", &screen.forecast.hourly);
    print_tiles("Daily", &screen.forecast.daily);
}

fn print_rows(title: &str, rows: &ListSurface<HistoryRow>) {
    println!("{}:", title);
    match rows {
        ListSurface::Placeholder(text) => println!("  {}", text),
        ListSurface::Items(items) => {
            for row in items {
                println!("  {} {}  {}", row.icon, row.title, row.meta);
            }
        }
    }
}

pub fn print_history(screen: &Screen) {
    heading("History");
    print_rows("Weather", &screen.history.weather);
    print_rows("Plans", &screen.history.plans);
}

fn print_chart(title: &str, surface: &ChartSurface) {
    match surface {
        ChartSurface::Placeholder(text) => println!("{}: {}", title, text),
        ChartSurface::Chart(spec) => {
            let points: Vec<String> = spec
                .labels
                .iter()
                .zip(&spec.values)
                .map(|(label, value)| format!("{}={}", label, value))
                .collect();
            println!("{}: {}", title, points.join(", "));
        }
    }
}

pub fn print_charts(screen: &Screen) {
    heading("Charts");
    print_chart("Temperature", &screen.charts.temperature);
    print_chart("Conditions", &screen.charts.conditions);
}

/// Everything, in page order.
pub fn print_screen(screen: &Screen) {
    print_health(screen);
    print_weather(screen);
    print_plan(screen);
    print_forecast(screen);
    print_charts(screen);
    print_history(screen);
    if let Some(notice) = &screen.notice {
        println!();
        println!("! {}", notice);
    }
}

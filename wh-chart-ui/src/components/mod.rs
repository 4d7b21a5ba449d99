//! RSX views over the dashboard's rendered `Screen`.

mod chart_container;
mod chart_header;
mod charts_panel;
mod city_form;
mod forecast_strip;
mod health_badge;
mod history_panel;
mod loading_spinner;
mod plan_card;
mod toast;
mod weather_card;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use charts_panel::ChartsPanelView;
pub use city_form::CityForm;
pub use forecast_strip::ForecastStrip;
pub use health_badge::HealthBadgeView;
pub use history_panel::HistoryPanelView;
pub use loading_spinner::LoadingSpinner;
pub use plan_card::PlanCardView;
pub use toast::Toast;
pub use weather_card::WeatherCardView;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::json;

use crate::config::AppConfig;

const STYLES: &str = include_str!("dashboard.css");
const SCRIPT: &str = include_str!("dashboard.js");

/// Render the dashboard page once at startup.
///
/// The page is static. The browser script reads `/api/accounts` for the
/// cards and `/api/summary` for the header totals, every
/// `dashboard_refresh_secs`.
pub fn render_dashboard(config: &AppConfig) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.dashboard_title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                div class="header" {
                    h1 { (config.dashboard_title) }
                }
                div class="stats" {
                    (stat_card("totalAccounts", "Accounts"))
                    (stat_card("totalBalance", "Total Balance"))
                    (stat_card("todayProfit", "Today's Profit"))
                    (stat_card("openPositions", "Open Positions"))
                }
                div class="last-update" {
                    "Last refresh: " span id="lastUpdate" { "-" }
                }
                div class="container" id="accounts" {
                    div class="loading" { "Loading..." }
                }
                button class="refresh-btn" onclick="loadData()" { "Refresh" }
                script { (PreEscaped(client_config(config))) }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    };

    markup.into_string()
}

fn stat_card(value_id: &str, label: &str) -> Markup {
    html! {
        div class="stat-card" {
            div class="stat-value" id=(value_id) { "-" }
            div class="stat-label" { (label) }
        }
    }
}

// `</` is split so a configured value cannot close the script element.
fn client_config(config: &AppConfig) -> String {
    let settings = json!({
        "currency": config.dashboard_currency,
        "locale": config.dashboard_locale,
        "refreshMs": config.dashboard_refresh_secs.saturating_mul(1000),
    });
    format!("window.DASHBOARD_CONFIG = {};", settings).replace("</", "<\\/")
}

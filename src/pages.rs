//! Server-rendered landing page.

use crate::get_conn;
use crate::models::PantryItem;
use crate::schema::pantry_items;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use diesel::prelude::*;

/// Serve the main HTML page listing the current pantry contents.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let items: Vec<PantryItem> = {
        let mut conn = get_conn!(state.pool);
        match pantry_items::table
            .select(PantryItem::as_select())
            .load(&mut conn)
        {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to fetch pantry items for landing page: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>PantryChef AI</h1><p>Failed to load pantry.</p>".to_string()),
                )
                    .into_response();
            }
        }
    };

    let today = chrono::Utc::now().date_naive();
    Html(render_index(&items, today)).into_response()
}

fn render_index(items: &[PantryItem], today: chrono::NaiveDate) -> String {
    let rows = if items.is_empty() {
        "      <li class=\"empty\">Your pantry is empty. Add some ingredients!</li>\n".to_string()
    } else {
        items
            .iter()
            .map(|item| {
                let name = html_escape::encode_text(&item.name);
                let expiry = match item.expiry_date {
                    Some(date) => format!("expires {}", date),
                    None => "no expiry date".to_string(),
                };
                let class = if item.is_expiring_soon(today) {
                    " class=\"expiring\""
                } else {
                    ""
                };
                format!(
                    "      <li{class} data-id=\"{id}\">{name} <span class=\"expiry\">({expiry})</span></li>\n",
                    class = class,
                    id = item.id,
                    name = name,
                    expiry = expiry,
                )
            })
            .collect()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>PantryChef AI</title>
    <link rel="stylesheet" href="/static/style.css">
  </head>
  <body>
    <h1>PantryChef AI</h1>
    <p>Smart pantry manager that generates recipes from your ingredients</p>
    <ul id="pantry">
{rows}    </ul>
  </body>
</html>
"#,
        rows = rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_item_names_are_escaped() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let items = vec![PantryItem {
            id: 1,
            name: "<script>milk".to_string(),
            expiry_date: None,
        }];

        let html = render_index(&items, today);
        assert!(html.contains("&lt;script&gt;milk"));
        assert!(!html.contains("<script>milk"));
    }

    #[test]
    fn test_expiring_items_are_marked() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let items = vec![
            PantryItem {
                id: 1,
                name: "milk".to_string(),
                expiry_date: Some(today + Duration::days(1)),
            },
            PantryItem {
                id: 2,
                name: "flour".to_string(),
                expiry_date: Some(today + Duration::days(30)),
            },
        ];

        let html = render_index(&items, today);
        assert!(html.contains(r#"class="expiring" data-id="1""#));
        assert!(html.contains(r#"<li data-id="2">flour"#));
    }

    #[test]
    fn test_empty_pantry_shows_placeholder() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let html = render_index(&[], today);
        assert!(html.contains("Your pantry is empty"));
    }
}

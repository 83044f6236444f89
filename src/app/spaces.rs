use crate::state;
use crate::templates;
use crate::types::{Room, Roof};

use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Deserialize;

use super::auth::{authorized_client, manager_email};

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardQuery {
    tab: Option<String>,
    selected: Option<String>,
}

pub(crate) async fn dashboard(
    State(state): State<state::AppState>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> templates::DashboardTemplate {
    let manager = manager_email(&state, &headers);
    let client = authorized_client(&state, &headers);

    let rooms = client.rooms(&state.config.room_ids).await;
    let mut error = String::new();
    let roofs = match client.roofs().await {
        Ok(roofs) => roofs,
        Err(err) => {
            eprintln!("failed to fetch roofs: {err}");
            error = "Failed to load data.".to_string();
            Vec::new()
        }
    };

    let rooms: Vec<templates::SpaceCard> = rooms
        .into_iter()
        .enumerate()
        .map(|(index, room)| room_card(room, index))
        .collect();
    let roofs: Vec<templates::SpaceCard> = roofs
        .into_iter()
        .enumerate()
        .map(|(index, roof)| roof_card(roof, index))
        .collect();

    let active_tab = match query.tab.as_deref() {
        Some("roof") => "roof".to_string(),
        _ => "room".to_string(),
    };
    let selected = query.selected.as_deref().and_then(|id| {
        let cards = if active_tab == "roof" { &roofs } else { &rooms };
        selected_detail(cards, id, &active_tab)
    });

    templates::DashboardTemplate {
        app_name: state.config.app_name,
        manager,
        active_page: "dashboard",
        error,
        active_tab,
        rooms,
        roofs,
        selected,
    }
}

/// The backend leaves gaps in room records; every field falls back the same
/// way the display name does: `name-en`, then `name`, then a positional
/// placeholder.
fn room_card(room: Room, index: usize) -> templates::SpaceCard {
    let Room {
        id,
        name,
        name_en,
        status,
        capacity,
        ..
    } = room;
    let display_name = name_en
        .filter(|name| !name.trim().is_empty())
        .or_else(|| some_nonempty(&name))
        .unwrap_or_else(|| format!("Room {}", index + 1));
    let id = some_nonempty(&id)
        .or_else(|| some_nonempty(&name))
        .unwrap_or_else(|| format!("room-{index}"));

    templates::SpaceCard {
        id,
        name: display_name,
        capacity,
        status: status
            .filter(|status| !status.trim().is_empty())
            .unwrap_or_else(|| "Available".to_string()),
    }
}

fn roof_card(roof: Roof, index: usize) -> templates::SpaceCard {
    let Roof {
        id,
        name,
        status,
        capacity,
        ..
    } = roof;
    let display_name = some_nonempty(&name).unwrap_or_else(|| format!("Roof {}", index + 1));
    let id = some_nonempty(&id)
        .or_else(|| some_nonempty(&name))
        .unwrap_or_else(|| format!("roof-{index}"));

    templates::SpaceCard {
        id,
        name: display_name,
        capacity,
        status: status
            .filter(|status| !status.trim().is_empty())
            .unwrap_or_else(|| "Available".to_string()),
    }
}

fn selected_detail(
    cards: &[templates::SpaceCard],
    id: &str,
    active_tab: &str,
) -> Option<templates::SpaceDetail> {
    let card = cards.iter().find(|card| card.id == id)?;
    Some(templates::SpaceDetail {
        id: card.id.clone(),
        name: card.name.clone(),
        kind: space_kind(active_tab, &card.name),
        capacity: card.capacity,
        status: card.status.clone(),
        available: card.status == "Available",
    })
}

fn space_kind(active_tab: &str, name: &str) -> String {
    if active_tab == "roof" {
        return "Roof".to_string();
    }
    if name.to_lowercase().contains("gaming") {
        return "Gaming Room".to_string();
    }
    "Room".to_string()
}

fn some_nonempty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(value.to_string())
}

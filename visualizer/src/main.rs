use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text},
        checkbox, column, row, scrollable, text, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;
use theatercore::layers::{LayerId, LegendEntry};
use theatercore::prelude::Faction;
use theatercore::style::MarkerIcon;
use theatercore::surface::{MarkerAction, Primitive, Scene};

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Theater Map Visualizer".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    payload: Option<ScenePayload>,
    legend: Vec<LegendEntry>,
    visible: BTreeMap<String, (LayerId, bool)>,
    zoom: f32,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    SceneFetched(Result<ScenePayload, String>),
    LegendFetched(Result<Vec<LegendEntry>, String>),
    ToggleLayer(LayerId, bool),
    SelectFlight(u32),
    OpenBaseMenu(u32),
    CommandSubmitted(Result<String, String>),
    ZoomIn,
    ZoomOut,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                payload: None,
                legend: Vec::new(),
                visible: BTreeMap::new(),
                zoom: 110.0,
                status: "Waiting for the scene bridge...".into(),
                history: Vec::new(),
            },
            Task::batch([
                Task::perform(fetch_legend(), Message::LegendFetched),
                Task::perform(fetch_scene(), Message::SceneFetched),
            ]),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_scene(), Message::SceneFetched),
            Message::SceneFetched(Ok(payload)) => {
                state.status = format!(
                    "Scene received: {} primitives / {} passes",
                    payload.primitives, payload.passes
                );
                state.payload = Some(payload);
                Task::none()
            }
            Message::SceneFetched(Err(err)) => {
                state.status = format!("Scene error: {err}");
                Task::none()
            }
            Message::LegendFetched(Ok(legend)) => {
                for entry in &legend {
                    state
                        .visible
                        .entry(legend_key(entry))
                        .or_insert((entry.id, entry.default_visible));
                }
                state.legend = legend;
                Task::none()
            }
            Message::LegendFetched(Err(err)) => {
                state.status = format!("Legend error: {err}");
                Task::none()
            }
            Message::ToggleLayer(id, enabled) => {
                state.apply_toggle(id, enabled);
                Task::none()
            }
            Message::SelectFlight(id) => {
                state.push_history(format!("Selecting flight {id}"));
                Task::perform(post_select(id), Message::CommandSubmitted)
            }
            Message::OpenBaseMenu(id) => {
                state.push_history(format!("Opening base menu for control point {id}"));
                Task::perform(
                    post_action(MarkerAction::OpenBaseMenu { control_point: id }),
                    Message::CommandSubmitted,
                )
            }
            Message::CommandSubmitted(Ok(message)) => {
                state.status = message;
                Task::none()
            }
            Message::CommandSubmitted(Err(err)) => {
                state.status = format!("Command error: {err}");
                Task::none()
            }
            Message::ZoomIn => {
                state.zoom = (state.zoom * 1.25).min(2_000.0);
                Task::none()
            }
            Message::ZoomOut => {
                state.zoom = (state.zoom / 1.25).max(10.0);
                Task::none()
            }
        }
    }

    /// Applies a toggle, keeping at most one layer visible per exclusive
    /// group.
    fn apply_toggle(&mut self, id: LayerId, enabled: bool) {
        let group = self
            .legend
            .iter()
            .find(|entry| entry.id == id)
            .and_then(|entry| entry.exclusive_group.clone());

        if enabled {
            if let Some(group) = group {
                let rivals: Vec<LayerId> = self
                    .legend
                    .iter()
                    .filter(|entry| entry.exclusive_group.as_deref() == Some(group.as_str()))
                    .map(|entry| entry.id)
                    .collect();
                for (_, slot) in self.visible.iter_mut() {
                    if rivals.contains(&slot.0) {
                        slot.1 = false;
                    }
                }
            }
        }
        for (_, slot) in self.visible.iter_mut() {
            if slot.0 == id {
                slot.1 = enabled;
            }
        }
    }

    fn visible_layers(&self) -> HashSet<LayerId> {
        self.visible
            .values()
            .filter(|(_, enabled)| *enabled)
            .map(|(id, _)| *id)
            .collect()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scene = state
            .payload
            .as_ref()
            .map(|payload| payload.scene.clone())
            .unwrap_or_default();

        let map = Canvas::new(MapCanvas {
            scene,
            visible: state.visible_layers(),
            zoom: state.zoom,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut toggles = Column::new().spacing(4);
        let mut last_group = "";
        for entry in &state.legend {
            if entry.group != last_group {
                toggles = toggles.push(text(entry.group.clone()).size(16));
                last_group = &entry.group;
            }
            let enabled = state
                .visible
                .get(&legend_key(entry))
                .map(|(_, enabled)| *enabled)
                .unwrap_or(entry.default_visible);
            let id = entry.id;
            toggles = toggles.push(
                checkbox(enabled)
                    .label(entry.title.clone())
                    .on_toggle(move |value| Message::ToggleLayer(id, value))
                    .size(14),
            );
        }

        let flights = match &state.payload {
            Some(payload) if !payload.flights.is_empty() => payload.flights.iter().fold(
                Column::new().spacing(4),
                |col, flight| {
                    let label = if flight.selected {
                        format!("{} (selected)", flight.callsign)
                    } else {
                        flight.callsign.clone()
                    };
                    col.push(
                        button(text(label).size(12))
                            .on_press(Message::SelectFlight(flight.id))
                            .padding(4),
                    )
                },
            ),
            _ => Column::new().push(text("No flights yet").size(12)),
        };

        let bases = match &state.payload {
            Some(payload) if !payload.control_points.is_empty() => {
                payload.control_points.iter().fold(
                    Column::new().spacing(4),
                    |col, cp| {
                        let side = match cp.faction {
                            Faction::Blue => "ally",
                            Faction::Red => "enemy",
                        };
                        col.push(
                            button(text(format!("{} ({side})", cp.name)).size(12))
                                .on_press(Message::OpenBaseMenu(cp.id))
                                .padding(4),
                        )
                    },
                )
            }
            _ => Column::new().push(text("No control points yet").size(12)),
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let side_column = column![
            text("Theater Map").size(26),
            text(&state.status).size(14),
            row![
                button("Zoom in").on_press(Message::ZoomIn).padding(6),
                button("Zoom out").on_press(Message::ZoomOut).padding(6),
            ]
            .spacing(8),
            text("Layers").size(18),
            toggles,
            text("Flights").size(18),
            scrollable(flights).height(Length::Fixed(120.0)),
            text("Control points").size(18),
            scrollable(bases).height(Length::Fixed(120.0)),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(110.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0));

        let layout = row![side_column, map]
            .spacing(12)
            .align_y(Alignment::Start)
            .padding(12);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn legend_key(entry: &LegendEntry) -> String {
    format!("{}/{}", entry.group, entry.title)
}

async fn fetch_scene() -> Result<ScenePayload, String> {
    let response = reqwest::get("http://127.0.0.1:9000/scene")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<ScenePayload>()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_legend() -> Result<Vec<LegendEntry>, String> {
    let response = reqwest::get("http://127.0.0.1:9000/legend")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<Vec<LegendEntry>>()
        .await
        .map_err(|e| e.to_string())
}

async fn post_action(action: MarkerAction) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/action")
        .json(&action)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok("Base menu requested".into())
    } else {
        Err(response.status().to_string())
    }
}

async fn post_select(flight: u32) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/select")
        .json(&SelectRequest { flight })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok(format!("Flight {flight} selected"))
    } else {
        Err(response.status().to_string())
    }
}

#[derive(Debug, Serialize)]
struct SelectRequest {
    flight: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct ScenePayload {
    #[serde(default)]
    scene: Scene,
    #[serde(default)]
    passes: usize,
    #[serde(default)]
    primitives: usize,
    #[serde(default)]
    flights: Vec<FlightSummary>,
    #[serde(default)]
    control_points: Vec<ControlPointSummary>,
}

#[derive(Debug, Clone, Deserialize)]
struct FlightSummary {
    id: u32,
    callsign: String,
    #[serde(default)]
    selected: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ControlPointSummary {
    id: u32,
    name: String,
    faction: Faction,
}

#[derive(Clone)]
struct MapCanvas {
    scene: Scene,
    visible: HashSet<LayerId>,
    zoom: f32,
}

impl MapCanvas {
    fn project(&self, bounds: &Rectangle, lat: f64, lon: f64) -> Point {
        let center = self.scene.center.unwrap_or_default();
        let scale = self.zoom as f64;
        let x = bounds.width as f64 / 2.0
            + (lon - center.lon) * scale * center.lat.to_radians().cos();
        let y = bounds.height as f64 / 2.0 - (lat - center.lat) * scale;
        Point::new(x as f32, y as f32)
    }

    fn meters_to_pixels(&self, meters: f64) -> f32 {
        // One degree of latitude is close to 111.32 km everywhere.
        ((meters / 111_320.0) * self.zoom as f64) as f32
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::WHITE;
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).unwrap_or(255) as f32 / 255.0
    };
    Color::from_rgb(component(0..2), component(2..4), component(4..6))
}

fn icon_color(icon: MarkerIcon) -> Color {
    match icon {
        MarkerIcon::FriendlyCp => parse_hex_color("#0084ff"),
        MarkerIcon::EnemyCp => parse_hex_color("#c85050"),
        MarkerIcon::Waypoint => Color::from_rgb(0.9, 0.9, 0.9),
    }
}

impl canvas::Program<Message> for MapCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.04, 0.06, 0.09),
        );

        // Layers arrive in z-order; paint back to front.
        for layer in &self.scene.layers {
            if !self.visible.contains(&layer.id) {
                continue;
            }
            for primitive in &layer.primitives {
                match primitive {
                    Primitive::Circle(ring) => {
                        let center = self.project(&bounds, ring.center.lat, ring.center.lon);
                        let radius = self.meters_to_pixels(ring.radius_m);
                        let path = Path::new(|builder| builder.circle(center, radius));
                        frame.stroke(
                            &path,
                            Stroke::default()
                                .with_color(parse_hex_color(&ring.color))
                                .with_width(ring.weight),
                        );
                    }
                    Primitive::Path(line) => {
                        if line.points.len() < 2 {
                            continue;
                        }
                        let path = Path::new(|builder| {
                            for (i, point) in line.points.iter().enumerate() {
                                let projected = self.project(&bounds, point.lat, point.lon);
                                if i == 0 {
                                    builder.move_to(projected);
                                } else {
                                    builder.line_to(projected);
                                }
                            }
                        });
                        frame.stroke(
                            &path,
                            Stroke::default()
                                .with_color(parse_hex_color(&line.color))
                                .with_width(2.5),
                        );
                    }
                    Primitive::Marker(marker) => {
                        let position =
                            self.project(&bounds, marker.position.lat, marker.position.lon);
                        let pin = Path::new(|builder| builder.circle(position, 5.0));
                        frame.fill(&pin, icon_color(marker.icon));
                        frame.stroke(
                            &pin,
                            Stroke::default()
                                .with_color(Color::from_rgb(0.1, 0.1, 0.1))
                                .with_width(1.0),
                        );

                        if let Some(tooltip) = &marker.tooltip {
                            for (i, line) in tooltip.lines().enumerate() {
                                frame.fill_text(Text {
                                    content: line.to_string(),
                                    position: Point::new(
                                        position.x + 8.0,
                                        position.y + i as f32 * 12.0 - 6.0,
                                    ),
                                    color: Color::from_rgb(0.92, 0.92, 0.8),
                                    size: 11.0.into(),
                                    ..Text::default()
                                });
                            }
                        }
                    }
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

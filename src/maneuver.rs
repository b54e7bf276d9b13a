//! Route and maneuver data model.
//!
//! Mirrors the maneuver objects handed out by the navigation engine.
//! Everything here is read-only input to the classifier and the
//! guidance resolver. Routes cross the JNI boundary as JSON.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in WGS84 degrees.
///
/// Only used to tell maneuvers apart, so equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
}

/// Raw maneuver action as reported by the routing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Depart,
    DepartAirport,
    Arrive,
    ArriveAirport,
    ArriveLeft,
    ArriveRight,
    LeftLoop,
    SharpLeftTurn,
    LeftTurn,
    SlightLeftTurn,
    ContinueOn,
    SlightRightTurn,
    RightTurn,
    SharpRightTurn,
    RightLoop,
    LeftExit,
    RightExit,
    LeftRamp,
    RightRamp,
    LeftFork,
    MiddleFork,
    RightFork,
    LeftMerge,
    RightMerge,
    NameChange,
    TrafficCircle,
    Ferry,
    #[serde(rename = "LEFT_U_TURN")]
    LeftUTurn,
    #[serde(rename = "RIGHT_U_TURN")]
    RightUTurn,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_1")]
    LeftRoundaboutExit1,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_2")]
    LeftRoundaboutExit2,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_3")]
    LeftRoundaboutExit3,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_4")]
    LeftRoundaboutExit4,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_5")]
    LeftRoundaboutExit5,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_6")]
    LeftRoundaboutExit6,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_7")]
    LeftRoundaboutExit7,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_8")]
    LeftRoundaboutExit8,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_9")]
    LeftRoundaboutExit9,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_10")]
    LeftRoundaboutExit10,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_11")]
    LeftRoundaboutExit11,
    #[serde(rename = "LEFT_ROUNDABOUT_EXIT_12")]
    LeftRoundaboutExit12,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_1")]
    RightRoundaboutExit1,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_2")]
    RightRoundaboutExit2,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_3")]
    RightRoundaboutExit3,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_4")]
    RightRoundaboutExit4,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_5")]
    RightRoundaboutExit5,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_6")]
    RightRoundaboutExit6,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_7")]
    RightRoundaboutExit7,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_8")]
    RightRoundaboutExit8,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_9")]
    RightRoundaboutExit9,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_10")]
    RightRoundaboutExit10,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_11")]
    RightRoundaboutExit11,
    #[serde(rename = "RIGHT_ROUNDABOUT_EXIT_12")]
    RightRoundaboutExit12,
    #[serde(other)]
    Undefined,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 54] = [
        Action::Depart,
        Action::DepartAirport,
        Action::Arrive,
        Action::ArriveAirport,
        Action::ArriveLeft,
        Action::ArriveRight,
        Action::LeftLoop,
        Action::SharpLeftTurn,
        Action::LeftTurn,
        Action::SlightLeftTurn,
        Action::ContinueOn,
        Action::SlightRightTurn,
        Action::RightTurn,
        Action::SharpRightTurn,
        Action::RightLoop,
        Action::LeftExit,
        Action::RightExit,
        Action::LeftRamp,
        Action::RightRamp,
        Action::LeftFork,
        Action::MiddleFork,
        Action::RightFork,
        Action::LeftMerge,
        Action::RightMerge,
        Action::NameChange,
        Action::TrafficCircle,
        Action::Ferry,
        Action::LeftUTurn,
        Action::RightUTurn,
        Action::LeftRoundaboutExit1,
        Action::LeftRoundaboutExit2,
        Action::LeftRoundaboutExit3,
        Action::LeftRoundaboutExit4,
        Action::LeftRoundaboutExit5,
        Action::LeftRoundaboutExit6,
        Action::LeftRoundaboutExit7,
        Action::LeftRoundaboutExit8,
        Action::LeftRoundaboutExit9,
        Action::LeftRoundaboutExit10,
        Action::LeftRoundaboutExit11,
        Action::LeftRoundaboutExit12,
        Action::RightRoundaboutExit1,
        Action::RightRoundaboutExit2,
        Action::RightRoundaboutExit3,
        Action::RightRoundaboutExit4,
        Action::RightRoundaboutExit5,
        Action::RightRoundaboutExit6,
        Action::RightRoundaboutExit7,
        Action::RightRoundaboutExit8,
        Action::RightRoundaboutExit9,
        Action::RightRoundaboutExit10,
        Action::RightRoundaboutExit11,
        Action::RightRoundaboutExit12,
        Action::Undefined,
    ];

    /// Rotation side and 1-based exit index for roundabout actions.
    pub fn roundabout_exit(self) -> Option<(Rotation, u8)> {
        use Action::*;
        let exit = match self {
            LeftRoundaboutExit1 => (Rotation::Left, 1),
            LeftRoundaboutExit2 => (Rotation::Left, 2),
            LeftRoundaboutExit3 => (Rotation::Left, 3),
            LeftRoundaboutExit4 => (Rotation::Left, 4),
            LeftRoundaboutExit5 => (Rotation::Left, 5),
            LeftRoundaboutExit6 => (Rotation::Left, 6),
            LeftRoundaboutExit7 => (Rotation::Left, 7),
            LeftRoundaboutExit8 => (Rotation::Left, 8),
            LeftRoundaboutExit9 => (Rotation::Left, 9),
            LeftRoundaboutExit10 => (Rotation::Left, 10),
            LeftRoundaboutExit11 => (Rotation::Left, 11),
            LeftRoundaboutExit12 => (Rotation::Left, 12),
            RightRoundaboutExit1 => (Rotation::Right, 1),
            RightRoundaboutExit2 => (Rotation::Right, 2),
            RightRoundaboutExit3 => (Rotation::Right, 3),
            RightRoundaboutExit4 => (Rotation::Right, 4),
            RightRoundaboutExit5 => (Rotation::Right, 5),
            RightRoundaboutExit6 => (Rotation::Right, 6),
            RightRoundaboutExit7 => (Rotation::Right, 7),
            RightRoundaboutExit8 => (Rotation::Right, 8),
            RightRoundaboutExit9 => (Rotation::Right, 9),
            RightRoundaboutExit10 => (Rotation::Right, 10),
            RightRoundaboutExit11 => (Rotation::Right, 11),
            RightRoundaboutExit12 => (Rotation::Right, 12),
            _ => return None,
        };
        Some(exit)
    }
}

/// Rotation side of a roundabout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left-hand traffic, driving clockwise.
    Left,
    Right,
}

/// Direction of travel at a maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Forward,
    BearRight,
    LightRight,
    Right,
    HardRight,
    #[serde(rename = "U_TURN_RIGHT")]
    UTurnRight,
    #[serde(rename = "U_TURN_LEFT")]
    UTurnLeft,
    HardLeft,
    Left,
    LightLeft,
    BearLeft,
    #[serde(other)]
    Undefined,
}

impl Direction {
    pub const ALL: [Direction; 12] = [
        Direction::Forward,
        Direction::BearRight,
        Direction::LightRight,
        Direction::Right,
        Direction::HardRight,
        Direction::UTurnRight,
        Direction::UTurnLeft,
        Direction::HardLeft,
        Direction::Left,
        Direction::LightLeft,
        Direction::BearLeft,
        Direction::Undefined,
    ];
}

/// A single step along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maneuver {
    pub action: Action,
    pub direction: Direction,
    pub position: GeoCoordinate,
    /// Length in meters of the stretch from this maneuver to the following one.
    #[serde(default)]
    pub length_m: f64,
    /// Names of the road this maneuver is on.
    #[serde(default)]
    pub road_names: Vec<String>,
    /// Names of the road this maneuver leads onto.
    #[serde(default)]
    pub next_road_names: Vec<String>,
}

impl Maneuver {
    /// First name of the road this maneuver is on, or "".
    pub fn road_name(&self) -> &str {
        self.road_names.first().map(String::as_str).unwrap_or("")
    }

    /// First name of the road this maneuver leads onto, or "".
    pub fn next_road_name(&self) -> &str {
        self.next_road_names.first().map(String::as_str).unwrap_or("")
    }
}

/// A calculated route: maneuvers in travel order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub maneuvers: Vec<Maneuver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<u64>,
}

impl Route {
    pub fn new(maneuvers: Vec<Maneuver>) -> Self {
        Route {
            maneuvers,
            length_m: None,
            duration_s: None,
        }
    }
}

/// Parse a route from its JSON representation.
pub fn parse_route_json(data: &[u8]) -> Result<Route, String> {
    serde_json::from_slice(data).map_err(|e| format!("Route parse error: {e}"))
}

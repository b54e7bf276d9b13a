//! Maneuver classification.
//!
//! Maps a raw (action, direction) pair onto the display categories the
//! guidance UI understands: a high-level action, a turn severity and an
//! icon. The three mappings are independent total functions. The raw
//! backend data is coarser than the categories, so anything that cannot
//! be matched lands in `Undefined` rather than being guessed.

use serde::Serialize;
use crate::maneuver::{Action, Direction, Rotation};

/// High-level maneuver action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Undefined,
    End,
    UTurn,
    Roundabout,
    HeadTo,
    Junction,
    /// Leaving a highway at an exit. The backend does not report this
    /// yet, so no raw action maps here.
    LeaveHighway,
}

/// Turn severity, or the exit index for roundabouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnSeverity {
    Undefined,
    LightRight,
    QuiteRight,
    HeavyRight,
    LightLeft,
    QuiteLeft,
    HeavyLeft,
    Return,
    Roundabout1,
    Roundabout2,
    Roundabout3,
    Roundabout4,
    Roundabout5,
    Roundabout6,
    Roundabout7,
    Roundabout8,
    Roundabout9,
    Roundabout10,
    Roundabout11,
    Roundabout12,
}

impl TurnSeverity {
    const ROUNDABOUT: [TurnSeverity; 12] = [
        TurnSeverity::Roundabout1,
        TurnSeverity::Roundabout2,
        TurnSeverity::Roundabout3,
        TurnSeverity::Roundabout4,
        TurnSeverity::Roundabout5,
        TurnSeverity::Roundabout6,
        TurnSeverity::Roundabout7,
        TurnSeverity::Roundabout8,
        TurnSeverity::Roundabout9,
        TurnSeverity::Roundabout10,
        TurnSeverity::Roundabout11,
        TurnSeverity::Roundabout12,
    ];

    /// Severity for a 1-based roundabout exit. Out-of-range exits are `Undefined`.
    pub fn roundabout(exit: u8) -> TurnSeverity {
        match exit {
            1..=12 => Self::ROUNDABOUT[usize::from(exit - 1)],
            _ => TurnSeverity::Undefined,
        }
    }
}

/// Maneuver icon.
///
/// Discriminants follow the icon ordering of the navigation SDK; the
/// Android layer resolves them to `ic_maneuver_icon_<n>` drawables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Undefined = 0,
    UTurnRight = 2,
    UTurnLeft = 3,
    LightRight = 5,
    QuiteRight = 6,
    HeavyRight = 7,
    LightLeft = 10,
    QuiteLeft = 11,
    HeavyLeft = 12,
    LeaveHighwayRightLane = 15,
    LeaveHighwayLeftLane = 16,
    Roundabout1 = 19,
    Roundabout2 = 20,
    Roundabout3 = 21,
    Roundabout4 = 22,
    Roundabout5 = 23,
    Roundabout6 = 24,
    Roundabout7 = 25,
    Roundabout8 = 26,
    Roundabout9 = 27,
    Roundabout10 = 28,
    Roundabout11 = 29,
    Roundabout12 = 30,
    #[serde(rename = "roundabout_1_lh")]
    Roundabout1Lh = 31,
    #[serde(rename = "roundabout_2_lh")]
    Roundabout2Lh = 32,
    #[serde(rename = "roundabout_3_lh")]
    Roundabout3Lh = 33,
    #[serde(rename = "roundabout_4_lh")]
    Roundabout4Lh = 34,
    #[serde(rename = "roundabout_5_lh")]
    Roundabout5Lh = 35,
    #[serde(rename = "roundabout_6_lh")]
    Roundabout6Lh = 36,
    #[serde(rename = "roundabout_7_lh")]
    Roundabout7Lh = 37,
    #[serde(rename = "roundabout_8_lh")]
    Roundabout8Lh = 38,
    #[serde(rename = "roundabout_9_lh")]
    Roundabout9Lh = 39,
    #[serde(rename = "roundabout_10_lh")]
    Roundabout10Lh = 40,
    #[serde(rename = "roundabout_11_lh")]
    Roundabout11Lh = 41,
    #[serde(rename = "roundabout_12_lh")]
    Roundabout12Lh = 42,
    Start = 43,
    End = 44,
    Ferry = 45,
}

impl IconId {
    const ROUNDABOUT: [IconId; 12] = [
        IconId::Roundabout1,
        IconId::Roundabout2,
        IconId::Roundabout3,
        IconId::Roundabout4,
        IconId::Roundabout5,
        IconId::Roundabout6,
        IconId::Roundabout7,
        IconId::Roundabout8,
        IconId::Roundabout9,
        IconId::Roundabout10,
        IconId::Roundabout11,
        IconId::Roundabout12,
    ];

    const ROUNDABOUT_LH: [IconId; 12] = [
        IconId::Roundabout1Lh,
        IconId::Roundabout2Lh,
        IconId::Roundabout3Lh,
        IconId::Roundabout4Lh,
        IconId::Roundabout5Lh,
        IconId::Roundabout6Lh,
        IconId::Roundabout7Lh,
        IconId::Roundabout8Lh,
        IconId::Roundabout9Lh,
        IconId::Roundabout10Lh,
        IconId::Roundabout11Lh,
        IconId::Roundabout12Lh,
    ];

    /// Icon for a 1-based roundabout exit.
    ///
    /// Left-rotation roundabouts get the `_LH` icons; right-rotation ones
    /// use the plain icons.
    pub fn roundabout(rotation: Rotation, exit: u8) -> IconId {
        let table = match rotation {
            Rotation::Left => &Self::ROUNDABOUT_LH,
            Rotation::Right => &Self::ROUNDABOUT,
        };
        match exit {
            1..=12 => table[usize::from(exit - 1)],
            _ => IconId::Undefined,
        }
    }

    /// Stable number of this icon.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Drawable resource name of this icon.
    pub fn resource_name(self) -> String {
        format!("ic_maneuver_icon_{}", self.ordinal())
    }
}

/// Display categories of one maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManeuverCategory {
    pub action: ActionKind,
    pub turn: TurnSeverity,
    pub icon: IconId,
}

/// Classify a raw maneuver into its display categories.
pub fn classify(action: Action, direction: Direction) -> ManeuverCategory {
    ManeuverCategory {
        action: action_kind(action, direction),
        turn: turn_severity(action, direction),
        icon: icon(action),
    }
}

/// Actions whose category is decided by the travel direction.
fn is_simple(action: Action) -> bool {
    use Action::*;
    matches!(
        action,
        LeftLoop
            | SharpLeftTurn
            | LeftTurn
            | SlightLeftTurn
            | ContinueOn
            | SlightRightTurn
            | RightTurn
            | SharpRightTurn
            | RightLoop
            | LeftExit
            | RightExit
            | LeftRamp
            | RightRamp
            | LeftFork
            | MiddleFork
            | RightFork
            | LeftMerge
            | RightMerge
            | NameChange
            | TrafficCircle
            | Ferry
    )
}

/// High-level action of a maneuver.
pub fn action_kind(action: Action, direction: Direction) -> ActionKind {
    use Action::*;

    if action.roundabout_exit().is_some() {
        return ActionKind::Roundabout;
    }
    if is_simple(action) {
        return match direction {
            Direction::Forward => ActionKind::HeadTo,
            Direction::BearRight
            | Direction::LightRight
            | Direction::Right
            | Direction::HardRight
            | Direction::BearLeft
            | Direction::LightLeft
            | Direction::Left
            | Direction::HardLeft => ActionKind::Junction,
            Direction::UTurnRight | Direction::UTurnLeft => ActionKind::UTurn,
            Direction::Undefined => ActionKind::Undefined,
        };
    }
    match action {
        Arrive | ArriveAirport | ArriveLeft | ArriveRight => ActionKind::End,
        LeftUTurn | RightUTurn => ActionKind::UTurn,
        // Departures have no matching high-level action.
        _ => ActionKind::Undefined,
    }
}

/// Turn severity of a maneuver.
pub fn turn_severity(action: Action, direction: Direction) -> TurnSeverity {
    // Rotation side does not matter for the severity, only the exit.
    if let Some((_, exit)) = action.roundabout_exit() {
        return TurnSeverity::roundabout(exit);
    }
    if matches!(action, Action::LeftUTurn | Action::RightUTurn) {
        return TurnSeverity::Return;
    }
    if !is_simple(action) {
        return TurnSeverity::Undefined;
    }
    match direction {
        Direction::BearRight | Direction::Right => TurnSeverity::QuiteRight,
        Direction::LightRight => TurnSeverity::LightRight,
        Direction::HardRight => TurnSeverity::HeavyRight,
        Direction::BearLeft | Direction::Left => TurnSeverity::QuiteLeft,
        Direction::LightLeft => TurnSeverity::LightLeft,
        Direction::HardLeft => TurnSeverity::HeavyLeft,
        Direction::UTurnRight | Direction::UTurnLeft => TurnSeverity::Return,
        Direction::Forward | Direction::Undefined => TurnSeverity::Undefined,
    }
}

/// Icon of a maneuver. Depends on the action only.
pub fn icon(action: Action) -> IconId {
    use Action::*;

    if let Some((rotation, exit)) = action.roundabout_exit() {
        return IconId::roundabout(rotation, exit);
    }
    match action {
        LeftUTurn => IconId::UTurnLeft,
        RightUTurn => IconId::UTurnRight,
        Depart | DepartAirport => IconId::Start,
        Arrive | ArriveAirport | ArriveLeft | ArriveRight => IconId::End,
        SharpLeftTurn => IconId::HeavyLeft,
        LeftTurn => IconId::QuiteLeft,
        SlightLeftTurn => IconId::LightLeft,
        SharpRightTurn => IconId::HeavyRight,
        RightTurn => IconId::QuiteRight,
        SlightRightTurn => IconId::LightRight,
        Ferry => IconId::Ferry,
        LeftExit => IconId::LeaveHighwayLeftLane,
        RightExit => IconId::LeaveHighwayRightLane,
        // No finer data from the backend for continue-on, ramps, forks,
        // merges, name changes, traffic circles and loops.
        _ => IconId::Undefined,
    }
}

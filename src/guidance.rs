//! Guidance lookahead.
//!
//! Finds neighbouring maneuvers on a route, the distances between them,
//! and the street name to show for an upcoming maneuver. All functions
//! are pure: they read the maneuver list and never keep references to it.
//!
//! Maneuvers are identified by position and action only. Two maneuvers
//! with the same position and action but different lengths or road names
//! are the same maneuver.

use crate::classify::{action_kind, ActionKind};
use crate::config::GuidanceConfig;
use crate::maneuver::Maneuver;

/// Whether two maneuvers are the same step of a route.
pub fn maneuvers_equal(a: &Maneuver, b: &Maneuver) -> bool {
    a.position == b.position && a.action == b.action
}

/// Index of the first maneuver equal to `maneuver`.
pub fn index_of(maneuver: &Maneuver, maneuvers: &[Maneuver]) -> Option<usize> {
    maneuvers.iter().position(|m| maneuvers_equal(m, maneuver))
}

/// The maneuver right after `maneuver`.
///
/// None if `maneuver` is the last one or not part of the route.
pub fn following<'a>(maneuvers: &'a [Maneuver], maneuver: &Maneuver) -> Option<&'a Maneuver> {
    let index = index_of(maneuver, maneuvers)?;
    maneuvers.get(index + 1)
}

/// The maneuver right before `maneuver`.
///
/// None if `maneuver` is the first one or not part of the route.
pub fn preceding<'a>(maneuvers: &'a [Maneuver], maneuver: &Maneuver) -> Option<&'a Maneuver> {
    let index = index_of(maneuver, maneuvers)?;
    index.checked_sub(1).map(|i| &maneuvers[i])
}

/// Distance in meters from the preceding maneuver to `maneuver`.
///
/// That is the length of the preceding maneuver. Zero for the first
/// maneuver and for maneuvers not on the route.
pub fn distance_from_previous(maneuvers: &[Maneuver], maneuver: &Maneuver) -> u64 {
    preceding(maneuvers, maneuver)
        .map(|prev| meters(prev.length_m))
        .unwrap_or(0)
}

/// Whole meters, truncated. Negative and NaN lengths count as zero.
fn meters(length_m: f64) -> u64 {
    length_m as u64
}

/// Combine a road number and a road name into one display string.
///
/// `kind` is the high-level action of the maneuver the road belongs to.
/// When leaving a highway the exit signpost replaces the road name; the
/// backend has no signpost text, so only the number is left.
pub fn combine_road(kind: ActionKind, number: &str, name: &str, config: &GuidanceConfig) -> String {
    let name = if kind == ActionKind::LeaveHighway { "" } else { name };

    if name.is_empty() {
        return number.to_string();
    }
    // "I-90 West" already says "I-90".
    if !number.is_empty() && name.contains(number) {
        return name.to_string();
    }
    if !number.is_empty() {
        return config.join_road(number, name);
    }
    name.to_string()
}

fn combine_for(maneuver: &Maneuver, name: &str, config: &GuidanceConfig) -> String {
    let kind = action_kind(maneuver.action, maneuver.direction);
    // The backend reports road names only, never route numbers.
    combine_road(kind, "", name, config)
}

/// Street the maneuver leads onto.
pub fn current_street(maneuver: &Maneuver, config: &GuidanceConfig) -> String {
    combine_for(maneuver, maneuver.next_road_name(), config)
}

/// Street name to display for an upcoming maneuver.
///
/// Tries, in order, the road the maneuver leads onto, the first named
/// road among the maneuvers that follow within the lookahead threshold,
/// and finally the road the maneuver is on. Returns None only when there
/// is no maneuver; the result may be empty.
pub fn resolve_display_street(
    maneuvers: &[Maneuver],
    maneuver: Option<&Maneuver>,
    config: &GuidanceConfig,
) -> Option<String> {
    let maneuver = maneuver?;

    let street = current_street(maneuver, config);
    if !street.is_empty() {
        return Some(street);
    }
    if let Some(street) = lookahead_street(maneuvers, maneuver, config) {
        return Some(street);
    }
    Some(combine_for(maneuver, maneuver.road_name(), config))
}

/// Walk the maneuvers after `maneuver` until one leads onto a named road.
///
/// Gives up once the distance covered reaches the lookahead threshold or
/// the route ends.
fn lookahead_street(
    maneuvers: &[Maneuver],
    maneuver: &Maneuver,
    config: &GuidanceConfig,
) -> Option<String> {
    let start = index_of(maneuver, maneuvers)?;

    let mut distance = 0u64;
    for window in maneuvers[start..].windows(2) {
        let (prev, candidate) = (&window[0], &window[1]);

        distance = distance.saturating_add(meters(prev.length_m));
        if distance >= config.lookahead_threshold_m {
            return None;
        }

        let street = current_street(candidate, config);
        if !street.is_empty() {
            return Some(street);
        }
    }
    None
}

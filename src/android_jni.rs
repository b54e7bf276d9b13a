//! JNI bindings for the Android guidance widgets.
//!
//! Each public function here corresponds to an `external fun` declaration
//! in RustBridge.kt. The function names follow JNI naming conventions:
//! Java_<package>_<class>_<method> with dots replaced by underscores.
//!
//! Routes cross the boundary as JSON. Failures are logged and reported
//! to Kotlin as `null` (or 0 for distances).

use jni::JNIEnv;
use jni::objects::{JClass, JString};
use jni::sys::{jint, jlong, jstring};
use log::{error, LevelFilter};

use crate::classify::classify;
use crate::config::GuidanceConfig;
use crate::guidance::{distance_from_previous, resolve_display_street};
use crate::maneuver::{parse_route_json, Action, Direction, Maneuver, Route};

const LOG_TAG: &str = "MsdkGuidance";

/// Route logcat output through the `log` facade. Safe to call repeatedly.
/// Maps to: RustBridge.init()
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_here_msdkui_ftcr_guidance_RustBridge_init(
    _env: JNIEnv,
    _class: JClass,
) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );
}

/// Returns the library version.
/// Maps to: RustBridge.version() -> String
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_here_msdkui_ftcr_guidance_RustBridge_version(
    env: JNIEnv,
    _class: JClass,
) -> jstring {
    new_jstring(&env, crate::VERSION)
}

/// Maps to: RustBridge.classifyManeuver(action: String, direction: String) -> String?
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_here_msdkui_ftcr_guidance_RustBridge_classifyManeuver<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    action: JString<'local>,
    direction: JString<'local>,
) -> jstring {
    let result = read_string(&mut env, &action).and_then(|action| {
        let direction = read_string(&mut env, &direction)?;
        classify_json(&action, &direction)
    });
    match result {
        Ok(json) => new_jstring(&env, &json),
        Err(e) => {
            error!("{e}");
            std::ptr::null_mut()
        }
    }
}

/// Maps to: RustBridge.resolveDisplayStreet(routeJson: String, index: Int) -> String?
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_here_msdkui_ftcr_guidance_RustBridge_resolveDisplayStreet<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    route_json: JString<'local>,
    index: jint,
) -> jstring {
    let result = read_string(&mut env, &route_json)
        .and_then(|json| display_street(json.as_bytes(), index));
    match result {
        Ok(Some(street)) => new_jstring(&env, &street),
        Ok(None) => std::ptr::null_mut(),
        Err(e) => {
            error!("{e}");
            std::ptr::null_mut()
        }
    }
}

/// Maps to: RustBridge.nextManeuverDistance(routeJson: String, index: Int) -> Long
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_here_msdkui_ftcr_guidance_RustBridge_nextManeuverDistance<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    route_json: JString<'local>,
    index: jint,
) -> jlong {
    let result = read_string(&mut env, &route_json)
        .and_then(|json| maneuver_distance(json.as_bytes(), index));
    match result {
        Ok(distance) => jlong::try_from(distance).unwrap_or(jlong::MAX),
        Err(e) => {
            error!("{e}");
            0
        }
    }
}

fn new_jstring(env: &JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("failed to create Java string: {e}");
            std::ptr::null_mut()
        }
    }
}

fn read_string(env: &mut JNIEnv, value: &JString) -> Result<String, String> {
    let java_str = env
        .get_string(value)
        .map_err(|e| format!("JNI string error: {e}"))?;
    Ok(java_str.into())
}

/// Classify backend action and direction names, answering with JSON.
fn classify_json(action: &str, direction: &str) -> Result<String, String> {
    let action: Action = serde_json::from_value(serde_json::Value::from(action))
        .map_err(|e| format!("Action parse error: {e}"))?;
    let direction: Direction = serde_json::from_value(serde_json::Value::from(direction))
        .map_err(|e| format!("Direction parse error: {e}"))?;
    serde_json::to_string(&classify(action, direction))
        .map_err(|e| format!("JSON serialize error: {e}"))
}

fn maneuver_at(route: &Route, index: jint) -> Option<&Maneuver> {
    usize::try_from(index).ok().and_then(|i| route.maneuvers.get(i))
}

/// Display street for the maneuver at `index`. None if out of range.
fn display_street(route_json: &[u8], index: jint) -> Result<Option<String>, String> {
    let route = parse_route_json(route_json)?;
    let config = GuidanceConfig::default();
    Ok(resolve_display_street(
        &route.maneuvers,
        maneuver_at(&route, index),
        &config,
    ))
}

/// Distance from the previous maneuver to the one at `index`.
fn maneuver_distance(route_json: &[u8], index: jint) -> Result<u64, String> {
    let route = parse_route_json(route_json)?;
    Ok(maneuver_at(&route, index)
        .map(|m| distance_from_previous(&route.maneuvers, m))
        .unwrap_or(0))
}

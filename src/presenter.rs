//! Guidance presenters.
//!
//! Turn navigation engine events into display records for the maneuver
//! panels. The engine is reached through [`NavigationSource`]; events are
//! pushed in through `handle_event` on the thread that delivers them, and
//! records go out to subscribed listeners in subscription order.

use std::time::{Duration, SystemTime};

use log::{debug, info, warn};
use serde::Serialize;

use crate::classify::{action_kind, icon, ActionKind, IconId};
use crate::config::GuidanceConfig;
use crate::error::RoutingError;
use crate::guidance::{distance_from_previous, resolve_display_street};
use crate::maneuver::{Maneuver, Route};

/// Read access to the running navigation engine.
pub trait NavigationSource {
    /// The maneuver the driver is heading to.
    fn current_maneuver(&self) -> Option<Maneuver>;
    /// The maneuver after the current one.
    fn next_maneuver(&self) -> Option<Maneuver>;
    /// Meters to the current maneuver.
    fn distance_to_current_maneuver(&self) -> u64;
    /// Meters left to the destination.
    fn remaining_distance(&self) -> u64;
    /// Seconds left to the destination.
    fn remaining_time(&self) -> u64;
}

/// Events delivered by the navigation engine.
#[derive(Debug, Clone)]
pub enum NavigationEvent {
    CurrentManeuverChanged,
    PositionUpdated,
    RerouteBegin,
    RerouteEnd(Result<Route, RoutingError>),
}

/// What a maneuver panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub icon: IconId,
    pub distance_m: u64,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signpost: Option<String>,
}

/// Receives presenter output.
pub trait GuidanceListener {
    /// New display data, or None to clear the panel.
    fn on_data_changed(&mut self, data: Option<&DisplayRecord>);

    fn on_destination_reached(&mut self) {}

    fn on_reroute_failed(&mut self, _error: &RoutingError) {}
}

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Listeners in subscription order.
pub struct Subscribers<L: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<L>)>,
}

impl<L: ?Sized> Default for Subscribers<L> {
    fn default() -> Self {
        Subscribers {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<L: ?Sized> Subscribers<L> {
    pub fn subscribe(&mut self, listener: Box<L>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_each(&mut self, mut f: impl FnMut(&mut L)) {
        for (_, listener) in &mut self.entries {
            f(listener.as_mut());
        }
    }
}

/// State shared by both presenters: the engine, the route being
/// followed and whether events are being consumed.
pub struct GuidanceSession<S> {
    source: S,
    route: Route,
    config: GuidanceConfig,
    active: bool,
}

impl<S: NavigationSource> GuidanceSession<S> {
    pub fn new(source: S, route: Route, config: GuidanceConfig) -> Self {
        GuidanceSession {
            source,
            route,
            config,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Replace the route, e.g. after rerouting.
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    /// The maneuver the driver is heading to.
    pub fn next_maneuver(&self) -> Option<Maneuver> {
        self.source.current_maneuver()
    }

    /// The maneuver after [`next_maneuver`](Self::next_maneuver).
    pub fn after_next_maneuver(&self) -> Option<Maneuver> {
        self.source.next_maneuver()
    }

    pub fn next_maneuver_distance(&self) -> u64 {
        self.source.distance_to_current_maneuver()
    }

    pub fn destination_distance(&self) -> u64 {
        self.source.remaining_distance()
    }

    /// Seconds to arrival.
    pub fn time_to_arrival(&self) -> u64 {
        self.source.remaining_time()
    }

    /// Estimated arrival time as seen from `now`.
    pub fn eta(&self, now: SystemTime) -> SystemTime {
        now + Duration::from_secs(self.time_to_arrival())
    }

    fn street(&self, maneuver: &Maneuver) -> String {
        resolve_display_street(&self.route.maneuvers, Some(maneuver), &self.config)
            .unwrap_or_default()
    }
}

/// Presents the maneuver the driver is heading to.
pub struct GuidanceManeuverPresenter<S> {
    session: GuidanceSession<S>,
    listeners: Subscribers<dyn GuidanceListener>,
    destination_notified: bool,
}

impl<S: NavigationSource> GuidanceManeuverPresenter<S> {
    pub fn new(source: S, route: Route, config: GuidanceConfig) -> Self {
        GuidanceManeuverPresenter {
            session: GuidanceSession::new(source, route, config),
            listeners: Subscribers::default(),
            destination_notified: false,
        }
    }

    pub fn session(&self) -> &GuidanceSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GuidanceSession<S> {
        &mut self.session
    }

    pub fn subscribe(&mut self, listener: Box<dyn GuidanceListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Start consuming navigation events.
    pub fn resume(&mut self) {
        debug!("maneuver presenter resumed");
        self.session.active = true;
    }

    /// Stop consuming navigation events.
    pub fn pause(&mut self) {
        debug!("maneuver presenter paused");
        self.session.active = false;
    }

    pub fn handle_event(&mut self, event: NavigationEvent) {
        if !self.session.active {
            return;
        }
        match event {
            NavigationEvent::CurrentManeuverChanged | NavigationEvent::PositionUpdated => {
                self.update();
            }
            NavigationEvent::RerouteBegin => {
                debug!("rerouting, clearing maneuver panel");
                self.notify_data(None);
            }
            NavigationEvent::RerouteEnd(Ok(route)) => {
                info!("rerouted, {} maneuvers", route.maneuvers.len());
                self.session.set_route(route);
                self.destination_notified = false;
            }
            NavigationEvent::RerouteEnd(Err(error)) => {
                warn!("{error}");
                self.listeners.for_each(|l| l.on_reroute_failed(&error));
            }
        }
    }

    fn update(&mut self) {
        let Some(maneuver) = self.session.next_maneuver() else {
            return;
        };
        if action_kind(maneuver.action, maneuver.direction) == ActionKind::End {
            self.update_destination(&maneuver);
        } else {
            self.destination_notified = false;
            let record = DisplayRecord {
                icon: icon(maneuver.action),
                distance_m: self.session.next_maneuver_distance(),
                street: self.session.street(&maneuver),
                signpost: None,
            };
            self.notify_data(Some(&record));
        }
    }

    fn update_destination(&mut self, maneuver: &Maneuver) {
        let distance = self.session.destination_distance();

        if distance < self.session.config.destination_threshold_m {
            if !self.destination_notified {
                info!("destination reached, {distance} m left");
                self.destination_notified = true;
                self.listeners.for_each(|l| l.on_destination_reached());
            }
        } else {
            self.destination_notified = false;
        }

        let record = DisplayRecord {
            icon: icon(maneuver.action),
            distance_m: distance,
            street: self.session.street(maneuver),
            signpost: None,
        };
        self.notify_data(Some(&record));
    }

    fn notify_data(&mut self, data: Option<&DisplayRecord>) {
        self.listeners.for_each(|l| l.on_data_changed(data));
    }
}

/// Presents the maneuver after the one the driver is heading to.
pub struct GuidanceNextManeuverPresenter<S> {
    session: GuidanceSession<S>,
    listeners: Subscribers<dyn GuidanceListener>,
}

impl<S: NavigationSource> GuidanceNextManeuverPresenter<S> {
    pub fn new(source: S, route: Route, config: GuidanceConfig) -> Self {
        GuidanceNextManeuverPresenter {
            session: GuidanceSession::new(source, route, config),
            listeners: Subscribers::default(),
        }
    }

    pub fn session(&self) -> &GuidanceSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GuidanceSession<S> {
        &mut self.session
    }

    pub fn subscribe(&mut self, listener: Box<dyn GuidanceListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn resume(&mut self) {
        debug!("next maneuver presenter resumed");
        self.session.active = true;
    }

    pub fn pause(&mut self) {
        debug!("next maneuver presenter paused");
        self.session.active = false;
    }

    pub fn handle_event(&mut self, event: NavigationEvent) {
        if !self.session.active {
            return;
        }
        match event {
            NavigationEvent::CurrentManeuverChanged => self.update(),
            // Only maneuver changes move the after-next maneuver.
            NavigationEvent::PositionUpdated => {}
            NavigationEvent::RerouteBegin => self.notify_data(None),
            NavigationEvent::RerouteEnd(Ok(route)) => self.session.set_route(route),
            NavigationEvent::RerouteEnd(Err(error)) => {
                warn!("{error}");
                self.listeners.for_each(|l| l.on_reroute_failed(&error));
            }
        }
    }

    fn update(&mut self) {
        let record = self.session.after_next_maneuver().and_then(|maneuver| {
            let icon = icon(maneuver.action);
            // No drawable to show for maneuvers the backend cannot classify.
            if icon == IconId::Undefined {
                return None;
            }
            let distance = distance_from_previous(&self.session.route.maneuvers, &maneuver);
            if distance > self.session.config.next_maneuver_max_distance_m {
                return None;
            }
            Some(DisplayRecord {
                icon,
                distance_m: distance,
                street: self.session.street(&maneuver),
                signpost: None,
            })
        });
        self.notify_data(record.as_ref());
    }

    fn notify_data(&mut self, data: Option<&DisplayRecord>) {
        self.listeners.for_each(|l| l.on_data_changed(data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingErrorCode;
    use crate::maneuver::{Action, Direction, GeoCoordinate};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Note {
        Data(Option<DisplayRecord>),
        DestinationReached,
        RerouteFailed(RoutingError),
    }

    struct Recorder(Rc<RefCell<Vec<Note>>>);

    impl GuidanceListener for Recorder {
        fn on_data_changed(&mut self, data: Option<&DisplayRecord>) {
            self.0.borrow_mut().push(Note::Data(data.cloned()));
        }

        fn on_destination_reached(&mut self) {
            self.0.borrow_mut().push(Note::DestinationReached);
        }

        fn on_reroute_failed(&mut self, error: &RoutingError) {
            self.0.borrow_mut().push(Note::RerouteFailed(error.clone()));
        }
    }

    #[derive(Default)]
    struct StubEngine {
        current: Option<Maneuver>,
        next: Option<Maneuver>,
        to_current_m: u64,
        remaining_m: u64,
        remaining_s: u64,
    }

    impl NavigationSource for StubEngine {
        fn current_maneuver(&self) -> Option<Maneuver> {
            self.current.clone()
        }
        fn next_maneuver(&self) -> Option<Maneuver> {
            self.next.clone()
        }
        fn distance_to_current_maneuver(&self) -> u64 {
            self.to_current_m
        }
        fn remaining_distance(&self) -> u64 {
            self.remaining_m
        }
        fn remaining_time(&self) -> u64 {
            self.remaining_s
        }
    }

    fn maneuver(lat: f64, action: Action, length_m: f64, next_road: &str) -> Maneuver {
        Maneuver {
            action,
            direction: Direction::Left,
            position: GeoCoordinate { lat, lon: 8.68, alt: None },
            length_m,
            road_names: vec!["Zeil".to_string()],
            next_road_names: if next_road.is_empty() {
                Vec::new()
            } else {
                vec![next_road.to_string()]
            },
        }
    }

    fn route() -> Route {
        Route::new(vec![
            maneuver(50.10, Action::Depart, 400.0, "Zeil"),
            maneuver(50.11, Action::LeftTurn, 1500.0, "Hasengasse"),
            maneuver(50.12, Action::RightTurn, 200.0, "Berliner Str"),
            maneuver(50.13, Action::Arrive, 0.0, ""),
        ])
    }

    fn maneuver_presenter(
        engine: StubEngine,
    ) -> (GuidanceManeuverPresenter<StubEngine>, Rc<RefCell<Vec<Note>>>) {
        let notes = Rc::new(RefCell::new(Vec::new()));
        let mut presenter =
            GuidanceManeuverPresenter::new(engine, route(), GuidanceConfig::default());
        presenter.subscribe(Box::new(Recorder(notes.clone())));
        presenter.resume();
        (presenter, notes)
    }

    fn next_presenter(
        engine: StubEngine,
    ) -> (GuidanceNextManeuverPresenter<StubEngine>, Rc<RefCell<Vec<Note>>>) {
        let notes = Rc::new(RefCell::new(Vec::new()));
        let mut presenter =
            GuidanceNextManeuverPresenter::new(engine, route(), GuidanceConfig::default());
        presenter.subscribe(Box::new(Recorder(notes.clone())));
        presenter.resume();
        (presenter, notes)
    }

    #[test]
    fn maneuver_change_emits_record() {
        let engine = StubEngine {
            current: Some(route().maneuvers[1].clone()),
            to_current_m: 320,
            ..StubEngine::default()
        };
        let (mut presenter, notes) = maneuver_presenter(engine);

        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);

        assert_eq!(
            *notes.borrow(),
            vec![Note::Data(Some(DisplayRecord {
                icon: IconId::QuiteLeft,
                distance_m: 320,
                street: "Hasengasse".to_string(),
                signpost: None,
            }))]
        );
    }

    #[test]
    fn no_current_maneuver_emits_nothing() {
        let (mut presenter, notes) = maneuver_presenter(StubEngine::default());
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn paused_presenter_ignores_events() {
        let engine = StubEngine {
            current: Some(route().maneuvers[1].clone()),
            ..StubEngine::default()
        };
        let (mut presenter, notes) = maneuver_presenter(engine);

        presenter.pause();
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);
        assert!(notes.borrow().is_empty());

        presenter.resume();
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);
        assert_eq!(notes.borrow().len(), 1);
    }

    #[test]
    fn reroute_begin_clears_display() {
        let (mut presenter, notes) = maneuver_presenter(StubEngine::default());
        presenter.handle_event(NavigationEvent::RerouteBegin);
        assert_eq!(*notes.borrow(), vec![Note::Data(None)]);
    }

    #[test]
    fn reroute_end_replaces_route() {
        let (mut presenter, notes) = maneuver_presenter(StubEngine::default());
        let new_route = Route::new(vec![maneuver(1.0, Action::Depart, 10.0, "")]);

        presenter.handle_event(NavigationEvent::RerouteEnd(Ok(new_route)));

        assert_eq!(presenter.session().route().maneuvers.len(), 1);
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn reroute_failure_is_passed_on() {
        let (mut presenter, notes) = maneuver_presenter(StubEngine::default());
        let error = RoutingError::new(RoutingErrorCode::NoConnectivity, "offline");

        presenter.handle_event(NavigationEvent::RerouteEnd(Err(error.clone())));

        assert_eq!(*notes.borrow(), vec![Note::RerouteFailed(error)]);
        assert_eq!(presenter.session().route().maneuvers.len(), 4);
    }

    #[test]
    fn destination_reached_fires_once() {
        let engine = StubEngine {
            current: Some(route().maneuvers[3].clone()),
            remaining_m: 120,
            ..StubEngine::default()
        };
        let (mut presenter, notes) = maneuver_presenter(engine);

        presenter.handle_event(NavigationEvent::PositionUpdated);
        for remaining in [45, 30, 10] {
            presenter.session_mut().source_mut().remaining_m = remaining;
            presenter.handle_event(NavigationEvent::PositionUpdated);
        }

        let notes = notes.borrow();
        let reached = notes
            .iter()
            .filter(|n| **n == Note::DestinationReached)
            .count();
        assert_eq!(reached, 1);
        assert_eq!(notes.len(), 5);
        // The notification precedes the record of the same update.
        assert_eq!(notes[1], Note::DestinationReached);
        match &notes[2] {
            Note::Data(Some(record)) => {
                assert_eq!(record.icon, IconId::End);
                assert_eq!(record.distance_m, 45);
                assert_eq!(record.street, "Zeil");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn destination_latch_rearms_after_leaving_threshold() {
        let engine = StubEngine {
            current: Some(route().maneuvers[3].clone()),
            remaining_m: 20,
            ..StubEngine::default()
        };
        let (mut presenter, notes) = maneuver_presenter(engine);

        presenter.handle_event(NavigationEvent::PositionUpdated);
        presenter.session_mut().source_mut().remaining_m = 80;
        presenter.handle_event(NavigationEvent::PositionUpdated);
        presenter.session_mut().source_mut().remaining_m = 20;
        presenter.handle_event(NavigationEvent::PositionUpdated);

        let reached = notes
            .borrow()
            .iter()
            .filter(|n| **n == Note::DestinationReached)
            .count();
        assert_eq!(reached, 2);
    }

    #[test]
    fn destination_latch_rearms_after_other_maneuver() {
        let engine = StubEngine {
            current: Some(route().maneuvers[3].clone()),
            remaining_m: 20,
            ..StubEngine::default()
        };
        let (mut presenter, notes) = maneuver_presenter(engine);

        presenter.handle_event(NavigationEvent::PositionUpdated);
        presenter.session_mut().source_mut().current = Some(route().maneuvers[2].clone());
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);
        presenter.session_mut().source_mut().current = Some(route().maneuvers[3].clone());
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);

        let reached = notes
            .borrow()
            .iter()
            .filter(|n| **n == Note::DestinationReached)
            .count();
        assert_eq!(reached, 2);
    }

    #[test]
    fn listeners_notified_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
        impl GuidanceListener for Tagged {
            fn on_data_changed(&mut self, _data: Option<&DisplayRecord>) {
                self.1.borrow_mut().push(self.0);
            }
        }

        let mut presenter =
            GuidanceManeuverPresenter::new(StubEngine::default(), route(), GuidanceConfig::default());
        presenter.subscribe(Box::new(Tagged("first", order.clone())));
        let second = presenter.subscribe(Box::new(Tagged("second", order.clone())));
        presenter.subscribe(Box::new(Tagged("third", order.clone())));
        presenter.resume();

        presenter.handle_event(NavigationEvent::RerouteBegin);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);

        assert!(presenter.unsubscribe(second));
        assert!(!presenter.unsubscribe(second));
        order.borrow_mut().clear();
        presenter.handle_event(NavigationEvent::RerouteBegin);
        assert_eq!(*order.borrow(), vec!["first", "third"]);
    }

    #[test]
    fn next_maneuver_uses_distance_from_previous() {
        let engine = StubEngine {
            current: Some(route().maneuvers[0].clone()),
            next: Some(route().maneuvers[1].clone()),
            ..StubEngine::default()
        };
        let (mut presenter, notes) = next_presenter(engine);

        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);

        assert_eq!(
            *notes.borrow(),
            vec![Note::Data(Some(DisplayRecord {
                icon: IconId::QuiteLeft,
                distance_m: 400,
                street: "Hasengasse".to_string(),
                signpost: None,
            }))]
        );
    }

    #[test]
    fn next_maneuver_too_far_is_hidden() {
        // The right turn is 1500 m after the left turn.
        let engine = StubEngine {
            next: Some(route().maneuvers[2].clone()),
            ..StubEngine::default()
        };
        let (mut presenter, notes) = next_presenter(engine);

        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);

        assert_eq!(*notes.borrow(), vec![Note::Data(None)]);
    }

    #[test]
    fn next_maneuver_without_icon_is_hidden() {
        let ramp = maneuver(50.115, Action::RightRamp, 900.0, "A661");
        let mut route = route();
        route.maneuvers.insert(2, ramp.clone());
        route.maneuvers[1].length_m = 300.0;

        let engine = StubEngine {
            current: Some(route.maneuvers[1].clone()),
            next: Some(ramp),
            ..StubEngine::default()
        };
        let notes = Rc::new(RefCell::new(Vec::new()));
        let mut presenter =
            GuidanceNextManeuverPresenter::new(engine, route, GuidanceConfig::default());
        presenter.subscribe(Box::new(Recorder(notes.clone())));
        presenter.resume();

        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);

        assert_eq!(*notes.borrow(), vec![Note::Data(None)]);
    }

    #[test]
    fn missing_next_maneuver_clears_display() {
        let (mut presenter, notes) = next_presenter(StubEngine::default());
        presenter.handle_event(NavigationEvent::CurrentManeuverChanged);
        presenter.handle_event(NavigationEvent::PositionUpdated);
        assert_eq!(*notes.borrow(), vec![Note::Data(None)]);
    }

    #[test]
    fn next_presenter_follows_reroute() {
        let (mut presenter, notes) = next_presenter(StubEngine::default());

        presenter.handle_event(NavigationEvent::RerouteBegin);
        let new_route = Route::new(vec![maneuver(1.0, Action::Depart, 10.0, "")]);
        presenter.handle_event(NavigationEvent::RerouteEnd(Ok(new_route)));
        let error = RoutingError::new(RoutingErrorCode::RequestTimeout, "");
        presenter.handle_event(NavigationEvent::RerouteEnd(Err(error.clone())));

        assert_eq!(presenter.session().route().maneuvers.len(), 1);
        assert_eq!(
            *notes.borrow(),
            vec![Note::Data(None), Note::RerouteFailed(error)]
        );
    }

    #[test]
    fn session_arrival_estimates() {
        let engine = StubEngine {
            remaining_m: 5400,
            remaining_s: 600,
            ..StubEngine::default()
        };
        let session = GuidanceSession::new(engine, route(), GuidanceConfig::default());
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);

        assert_eq!(session.destination_distance(), 5400);
        assert_eq!(session.time_to_arrival(), 600);
        assert_eq!(
            session.eta(now),
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_600)
        );
        assert!(!session.is_active());
    }

    #[test]
    fn subscribers_registry() {
        let mut subscribers: Subscribers<dyn GuidanceListener> = Subscribers::default();
        assert!(subscribers.is_empty());
        let notes = Rc::new(RefCell::new(Vec::new()));
        let a = subscribers.subscribe(Box::new(Recorder(notes.clone())));
        let b = subscribers.subscribe(Box::new(Recorder(notes)));
        assert_ne!(a, b);
        assert_eq!(subscribers.len(), 2);
        assert!(subscribers.unsubscribe(a));
        assert_eq!(subscribers.len(), 1);
    }
}

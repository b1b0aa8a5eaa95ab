//! View registry and notification fan-out.
//!
//! Views are shared, interior-mutable handles owned jointly by the caller
//! and the simulation. The simulation only ever borrows a view for the
//! duration of a single delivery.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use armada_core::events::{Notification, View};
use armada_core::types::Point;

/// Handle returned by `attach`, used to `detach` the same view later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

pub type SharedView = Rc<RefCell<dyn View>>;

#[derive(Default)]
pub struct Observers {
    next_id: u64,
    views: Vec<(ViewId, SharedView)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("views", &self.views.len())
            .finish()
    }
}

impl Observers {
    pub fn attach(&mut self, view: SharedView) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.views.push((id, view));
        id
    }

    /// Returns false if `id` was not attached.
    pub fn detach(&mut self, id: ViewId) -> bool {
        let before = self.views.len();
        self.views.retain(|(attached, _)| *attached != id);
        self.views.len() != before
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Deliver every notification to every attached view, in order.
    pub fn publish(&self, notifications: &[Notification]) {
        for notification in notifications {
            for (_, view) in &self.views {
                notification.deliver(&mut *view.borrow_mut());
            }
        }
    }

    /// Deliver to a single view.
    pub fn send_to(view: &SharedView, notifications: &[Notification]) {
        let mut view = view.borrow_mut();
        for notification in notifications {
            notification.deliver(&mut *view);
        }
    }
}

/// A view that keeps every notification it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub received: Vec<Notification>,
}

impl RecordingView {
    pub fn clear(&mut self) {
        self.received.clear();
    }

    /// Notifications about `name`, in arrival order.
    pub fn about<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Notification> + 'a {
        self.received
            .iter()
            .filter(move |notification| notification.subject() == name)
    }
}

impl View for RecordingView {
    fn on_ship_location(&mut self, name: &str, position: Point) {
        self.received.push(Notification::ShipLocation {
            name: name.to_string(),
            position,
        });
    }

    fn on_island_location(&mut self, name: &str, position: Point) {
        self.received.push(Notification::IslandLocation {
            name: name.to_string(),
            position,
        });
    }

    fn on_course_speed(&mut self, name: &str, course: f64, speed: f64) {
        self.received.push(Notification::CourseSpeed {
            name: name.to_string(),
            course,
            speed,
        });
    }

    fn on_fuel(&mut self, name: &str, fuel: f64) {
        self.received.push(Notification::Fuel {
            name: name.to_string(),
            fuel,
        });
    }

    fn on_removed(&mut self, name: &str) {
        self.received.push(Notification::Removed {
            name: name.to_string(),
        });
    }
}

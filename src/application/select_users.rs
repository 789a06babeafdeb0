//! Select users of a linked record
//!
//! Resolves a list row to its record in the host store and selects every
//! scene object that uses it. Hidden or unselectable objects are skipped
//! silently, as are objects the host refuses to select.

use tracing::debug;

use crate::domain::entities::ViewNode;
use crate::domain::ports::HostStore;
use crate::domain::services::selectable_users;
use crate::domain::value_objects::{Kind, Outcome, OutcomeCode};

use super::view_controller::{HostEvent, ViewController};

/// Select the users of the row currently selected in `view`
pub fn select_users_of_selected<S: HostStore + ?Sized>(
    store: &mut S,
    view: &mut ViewController,
) -> Outcome {
    match view.selected_node() {
        Some(ViewNode::Row { kind, name, .. }) => {
            let (kind, name) = (*kind, name.clone());
            select_users_of(store, view, kind, &name)
        }
        _ => view.report(
            "select_users",
            Outcome::warning(
                OutcomeCode::NotFound,
                "Select a linked data row first; category headers have no users.",
            ),
        ),
    }
}

/// Select every scene object using the record `(kind, name)`
pub fn select_users_of<S: HostStore + ?Sized>(
    store: &mut S,
    view: &mut ViewController,
    kind: Kind,
    name: &str,
) -> Outcome {
    let Some(record) = store.find_record(kind, name) else {
        return view.report(
            "select_users",
            Outcome::error(
                OutcomeCode::NotFound,
                format!(
                    "Selected data block '{}' not found in current scene data.",
                    name
                ),
            ),
        );
    };

    let objects = store.scene_objects();
    let users: Vec<String> = selectable_users(&objects, &record)
        .map(|object| object.name.clone())
        .collect();

    store.deselect_all();
    let mut last_selected = None;
    let mut selected_count = 0;
    for user in users {
        match store.select_object(&user) {
            Ok(()) => {
                selected_count += 1;
                last_selected = Some(user);
            }
            Err(err) => debug!(object = %user, error = %err, "skipping unselectable object"),
        }
    }

    if let Some(active) = last_selected {
        if let Err(err) = store.set_active_object(&active) {
            debug!(object = %active, error = %err, "could not make object active");
        }
    }

    let outcome = if selected_count > 0 {
        view.on_host_event(HostEvent::RecordsChanged, &*store);
        Outcome::ok(format!(
            "Selected {} object(s) using linked data '{}'.",
            selected_count, name
        ))
        .with_count(selected_count)
    } else {
        Outcome::warning(
            OutcomeCode::NoUsers,
            format!("No objects using '{}' were found in the scene.", name),
        )
    };
    view.report("select_users", outcome)
}

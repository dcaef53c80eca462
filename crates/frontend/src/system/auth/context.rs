use contracts::system::auth::PermissionSet;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;

/// The session's permission set, fetched once at startup.
///
/// Pages use it to decide which affordances to render. Purely presentational;
/// every write still goes through the backend on its own terms.
#[derive(Clone, Copy)]
pub struct PermissionsContext(pub RwSignal<PermissionSet>);

impl PermissionsContext {
    /// Reactive membership check for one permission name
    pub fn can(&self, permission: &'static str) -> Signal<bool> {
        let permissions = self.0;
        Signal::derive(move || permissions.get().allows(permission))
    }
}

pub fn provide_permissions() {
    let permissions = RwSignal::new(PermissionSet::default());
    provide_context(PermissionsContext(permissions));

    spawn_local(async move {
        match api::fetch_permissions().await {
            Ok(set) => permissions.set(set),
            Err(e) => log::error!("Failed to load permissions: {}", e),
        }
    });
}

pub fn use_permissions() -> PermissionsContext {
    use_context::<PermissionsContext>().expect("PermissionsContext not found in context")
}

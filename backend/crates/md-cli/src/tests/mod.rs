
use crate::App;

use md_auth::{IdentityProvider, MemoryStore, ReconcilerConfig, SignedOutIdentity};
use md_client::ProfileClient;
use md_core::{LegacyUserRecord, Role};

use std::sync::Arc;

pub(crate) const LEGACY_KEY: &str = "mundoctor_user";

pub(crate) fn legacy_json(role: Role) -> String {
    LegacyUserRecord::new("legacy-1", "Juan Pérez", "juan@mail.com", role)
        .to_json()
        .unwrap()
}

pub(crate) fn app_with(provider: Arc<dyn IdentityProvider>, store: Arc<MemoryStore>) -> App {
    App::new(
        provider,
        store,
        ReconcilerConfig::default(),
        ProfileClient::new("http://127.0.0.1:9/api"),
    )
}

pub(crate) fn signed_out_app(store: Arc<MemoryStore>) -> App {
    app_with(Arc::new(SignedOutIdentity), store)
}

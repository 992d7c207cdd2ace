//! Response payloads shared across handlers.

use serde::Serialize;

/// Delete acknowledgement: `{"ok": true}`.
#[derive(Serialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Ack { ok: true }
    }
}

mod cli;

use crate::Runner;

use roster_core::{Capability, MemorySlot, RosterController, RosterStore};

pub(crate) const STORED: &str = r#"[
    {"id":"m-1","sn":1,"name":"Ann","phone":"0711000001","amount":100,"savings":50,"loan":500,"interest":0},
    {"id":"m-2","sn":2,"name":"Ben","phone":"071-100-0002","amount":80,"savings":20,"loan":0,"interest":0}
]"#;

/// Runner over an in-memory slot preloaded with [`STORED`].
pub(crate) fn runner(capability: Capability) -> Runner<MemorySlot> {
    Runner::new(
        RosterStore::new(MemorySlot::with_contents(STORED)),
        RosterController::default(),
        capability,
    )
}

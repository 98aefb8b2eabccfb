// Resource resolution over an on-disk Redfish snapshot
pub mod navigate;
pub mod reference;
pub mod loader;
pub mod resources;
pub mod walk;
pub mod snapshot;
pub mod collector;

pub use collector::collect_all;
pub use loader::{read_json, HostDir};
pub use navigate::{safe_get, Key};
pub use reference::last_segment;
pub use snapshot::Snapshot;
pub use walk::{walk_chassis, walk_storage, ChassisProjection, WalkOutcome};

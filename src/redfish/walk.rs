//! Reference-chain walks over one host's snapshot.
//!
//! The chassis walk is shared by every chassis-based report: it resolves
//! `Chassis.json` → `Chassis/<id>.json` and hands each loaded chassis to a
//! [`ChassisProjection`]. The storage walk follows
//! `Systems.json` → `Systems/<sys>/Storage[s].json` → storage → volumes.

use tracing::debug;

use crate::path;
use crate::redfish::loader::HostDir;
use crate::redfish::navigate::get_array;
use crate::redfish::reference::member_id;
use crate::redfish::resources::{
    ChassisDetail, Collection, PowerControl, StorageController, StorageResource, ThermalResource,
    VolumeResource,
};

/// Collection names tried, in order, for a system's storage.
/// Some BMCs publish the plural form.
pub const STORAGE_COLLECTION_CANDIDATES: &[&str] = &["Storage", "Storages"];

/// How far a walk got before it ran out of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The top-level collection document is missing or unreadable.
    NoCollection,
    /// The collection loaded but lists no members.
    NoMembers,
    Walked,
}

/// Per-report extraction applied to every chassis the walk loads.
pub trait ChassisProjection {
    fn visit(&mut self, host: &HostDir, chassis_id: &str, chassis: &ChassisDetail);
}

impl<F> ChassisProjection for F
where
    F: FnMut(&HostDir, &str, &ChassisDetail),
{
    fn visit(&mut self, host: &HostDir, chassis_id: &str, chassis: &ChassisDetail) {
        self(host, chassis_id, chassis)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChassisWalk {
    pub outcome: WalkOutcome,
    /// Lower-cased `PowerState` of each loaded chassis, in member order.
    pub power_states: Vec<String>,
}

pub fn walk_chassis<P>(host: &HostDir, projection: &mut P) -> ChassisWalk
where
    P: ChassisProjection + ?Sized,
{
    let mut walk = ChassisWalk {
        outcome: WalkOutcome::NoCollection,
        power_states: Vec::new(),
    };

    let Some(doc) = host.load(&["Chassis.json"]) else {
        return walk;
    };
    let collection = Collection::from_value(&doc);
    if collection.is_empty() {
        walk.outcome = WalkOutcome::NoMembers;
        return walk;
    }
    walk.outcome = WalkOutcome::Walked;

    for chassis_id in &collection.member_ids {
        let Some(doc) = host.load_member(&["Chassis"], chassis_id) else {
            debug!(host = %host.label(), chassis = %chassis_id, "skipping chassis without detail");
            continue;
        };
        let chassis = ChassisDetail::from_value(&doc);

        if let Some(state) = &chassis.power_state {
            walk.power_states.push(state.clone());
        }
        projection.visit(host, chassis_id, &chassis);
    }

    walk
}

/// `Chassis/<id>/Thermal.json`, if the chassis links one and it loads.
pub fn load_thermal(host: &HostDir, chassis_id: &str, chassis: &ChassisDetail) -> Option<ThermalResource> {
    if !chassis.has_thermal {
        return None;
    }
    let doc = host.load(&["Chassis", chassis_id, "Thermal.json"])?;
    Some(ThermalResource::from_value(&doc))
}

/// First `PowerControl` entry of `Chassis/<id>/Power.json`, if linked and present.
pub fn load_power(host: &HostDir, chassis_id: &str, chassis: &ChassisDetail) -> Option<PowerControl> {
    if !chassis.has_power {
        return None;
    }
    let doc = host.load(&["Chassis", chassis_id, "Power.json"])?;
    PowerControl::first_from(&doc)
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeEntry {
    pub storage_id: String,
    pub volume: VolumeResource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorageWalk {
    /// `NoMembers` also covers a first system whose reference cannot be resolved.
    pub system_outcome: WalkOutcome,
    pub storage_outcome: WalkOutcome,
    /// Which of [`STORAGE_COLLECTION_CANDIDATES`] was found.
    pub storage_collection: Option<&'static str>,
    pub controllers: Vec<StorageController>,
    pub volumes: Vec<VolumeEntry>,
}

impl StorageWalk {
    fn empty() -> Self {
        Self {
            system_outcome: WalkOutcome::NoCollection,
            storage_outcome: WalkOutcome::NoCollection,
            storage_collection: None,
            controllers: Vec::new(),
            volumes: Vec::new(),
        }
    }
}

/// Walk storage of the first listed system only.
pub fn walk_storage(host: &HostDir) -> StorageWalk {
    let mut walk = StorageWalk::empty();

    let Some(systems) = host.load(&["Systems.json"]) else {
        return walk;
    };
    // only the first entry counts, even when it cannot be resolved
    let Some(system_id) = get_array(&systems, &path!["Members"]).first().and_then(member_id) else {
        walk.system_outcome = WalkOutcome::NoMembers;
        return walk;
    };
    walk.system_outcome = WalkOutcome::Walked;

    let Some((collection_name, storages)) = load_storage_collection(host, &system_id) else {
        return walk;
    };
    walk.storage_collection = Some(collection_name);

    let storages = Collection::from_value(&storages);
    if storages.is_empty() {
        walk.storage_outcome = WalkOutcome::NoMembers;
        return walk;
    }
    walk.storage_outcome = WalkOutcome::Walked;

    let system_id = system_id.as_str();
    for storage_id in &storages.member_ids {
        let storage_id = storage_id.as_str();
        let Some(doc) = host.load_member(&["Systems", system_id, collection_name], storage_id) else {
            debug!(host = %host.label(), storage = %storage_id, "skipping storage without detail");
            continue;
        };
        let storage = StorageResource::from_value(&doc);
        walk.controllers.extend(storage.controllers);

        if !storage.has_volumes {
            continue;
        }
        let Some(volumes) = host.load(&["Systems", system_id, collection_name, storage_id, "Volumes.json"]) else {
            continue;
        };

        let volumes_dir = ["Systems", system_id, collection_name, storage_id, "Volumes"];
        for volume_id in Collection::from_value(&volumes).member_ids {
            let Some(doc) = host.load_member(&volumes_dir, &volume_id) else {
                debug!(host = %host.label(), volume = %volume_id, "skipping volume without detail");
                continue;
            };
            walk.volumes.push(VolumeEntry {
                storage_id: storage_id.to_string(),
                volume: VolumeResource::from_value(&doc),
            });
        }
    }

    walk
}

fn load_storage_collection(host: &HostDir, system_id: &str) -> Option<(&'static str, serde_json::Value)> {
    STORAGE_COLLECTION_CANDIDATES.iter().find_map(|name| {
        let file_name = format!("{}.json", name);
        host.load(&["Systems", system_id, &file_name]).map(|doc| (*name, doc))
    })
}

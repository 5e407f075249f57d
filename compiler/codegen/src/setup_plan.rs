//! The ordered calls that topology setup makes on component instances.
//!
//! Setup runs three phases: every instance is initialized, then every
//! instance with a base identifier gets it, then every instance registers
//! its commands. Within a phase the instances appear in model order. The
//! emitter renders the helper functions from this plan.
use fppgen_model::topology::TopologyDefinition;

/// One call on a component instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WiringCall<'a> {
    Init { instance: &'a str, queued: bool },
    SetIdBase { instance: &'a str },
    RegCommands { instance: &'a str, special: bool },
}

impl WiringCall<'_> {
    pub fn instance(&self) -> &str {
        match self {
            WiringCall::Init { instance, .. }
            | WiringCall::SetIdBase { instance }
            | WiringCall::RegCommands { instance, .. } => *instance,
        }
    }

    /// The C++ statement for the call, where `receiver` prefixes the
    /// instance name (empty for file-scope instances).
    pub fn statement(&self, receiver: &str) -> String {
        match self {
            WiringCall::Init {
                instance,
                queued: false,
            } => format!("{receiver}{instance}.init(InstanceIds::{instance});"),
            WiringCall::Init {
                instance,
                queued: true,
            } => format!(
                "{receiver}{instance}.init(QueueSizes::{instance}, InstanceIds::{instance});"
            ),
            WiringCall::SetIdBase { instance } => {
                format!("{receiver}{instance}.setIdBase(BaseIds::{instance});")
            }
            WiringCall::RegCommands {
                instance,
                special: false,
            } => format!("{receiver}{instance}.regCommands();"),
            WiringCall::RegCommands {
                instance,
                special: true,
            } => format!("{receiver}{instance}.regCommandsSpecial();"),
        }
    }
}

/// The calls of each setup phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupPlan<'a> {
    pub init: Vec<WiringCall<'a>>,
    pub base_ids: Vec<WiringCall<'a>>,
    pub registrations: Vec<WiringCall<'a>>,
}

impl<'a> SetupPlan<'a> {
    pub fn new(topology: &'a TopologyDefinition) -> Self {
        let instances = &topology.instances;
        Self {
            init: instances
                .iter()
                .map(|i| WiringCall::Init {
                    instance: &i.name,
                    queued: i.queue_size.is_some(),
                })
                .collect(),
            base_ids: instances
                .iter()
                .filter(|i| i.base_id.is_some())
                .map(|i| WiringCall::SetIdBase { instance: &i.name })
                .collect(),
            registrations: instances
                .iter()
                .map(|i| WiringCall::RegCommands {
                    instance: &i.name,
                    special: i.special_registration,
                })
                .collect(),
        }
    }

    /// Every call in the order setup makes them.
    pub fn calls(&self) -> impl Iterator<Item = &WiringCall<'a>> {
        self.init
            .iter()
            .chain(self.base_ids.iter())
            .chain(self.registrations.iter())
    }
}

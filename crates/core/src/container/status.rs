use std::fmt;

/// Lifecycle of a single container instance.
///
/// `Initializing -> InUse -> UpdateRequested`. `UpdateRequested` is terminal,
/// also when building the replacement failed. A replacement instance starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ContainerStatus {
    Initializing = 0,
    InUse = 1,
    UpdateRequested = 2,
}

impl ContainerStatus {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => ContainerStatus::Initializing,
            1 => ContainerStatus::InUse,
            _ => ContainerStatus::UpdateRequested,
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContainerStatus::Initializing => "initializing",
            ContainerStatus::InUse => "in use",
            ContainerStatus::UpdateRequested => "update requested",
        };
        f.write_str(label)
    }
}

//! Conversion between graph-native status codes and the domain status.

use serde::{Deserialize, Serialize};

use crate::instance::InstanceStatus;

/// Lifecycle status exposed on typed beans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Unknown,
    Draft,
    Prepared,
    Proposed,
    Approved,
    Rejected,
    Active,
    Deprecated,
    Deleted,
    /// A graph status with no dedicated domain counterpart
    Other,
}

impl Status {
    pub const ALL: [Status; 10] = [
        Self::Unknown,
        Self::Draft,
        Self::Prepared,
        Self::Proposed,
        Self::Approved,
        Self::Rejected,
        Self::Active,
        Self::Deprecated,
        Self::Deleted,
        Self::Other,
    ];
}

/// Maps status codes between the graph and the domain.
///
/// Both directions are total. `to_graph_status` must be injective so a
/// domain status written back to the graph is never ambiguous.
pub trait StatusConverter: Send + Sync {
    fn to_domain_status(&self, status: InstanceStatus) -> Status;

    fn to_graph_status(&self, status: Status) -> InstanceStatus;
}

/// The standard open metadata status mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct OmrsStatusConverter;

impl StatusConverter for OmrsStatusConverter {
    fn to_domain_status(&self, status: InstanceStatus) -> Status {
        match status {
            InstanceStatus::Unknown => Status::Unknown,
            InstanceStatus::Draft => Status::Draft,
            InstanceStatus::Prepared => Status::Prepared,
            InstanceStatus::Proposed => Status::Proposed,
            InstanceStatus::Approved => Status::Approved,
            InstanceStatus::Rejected => Status::Rejected,
            InstanceStatus::Active => Status::Active,
            InstanceStatus::Deprecated => Status::Deprecated,
            InstanceStatus::Deleted => Status::Deleted,
            InstanceStatus::ApprovedConcept
            | InstanceStatus::UnderDevelopment
            | InstanceStatus::DevelopmentComplete
            | InstanceStatus::ApprovedForDeployment
            | InstanceStatus::Standby
            | InstanceStatus::Failed
            | InstanceStatus::Disabled
            | InstanceStatus::Complete
            | InstanceStatus::Other => Status::Other,
        }
    }

    fn to_graph_status(&self, status: Status) -> InstanceStatus {
        match status {
            Status::Unknown => InstanceStatus::Unknown,
            Status::Draft => InstanceStatus::Draft,
            Status::Prepared => InstanceStatus::Prepared,
            Status::Proposed => InstanceStatus::Proposed,
            Status::Approved => InstanceStatus::Approved,
            Status::Rejected => InstanceStatus::Rejected,
            Status::Active => InstanceStatus::Active,
            Status::Deprecated => InstanceStatus::Deprecated,
            Status::Deleted => InstanceStatus::Deleted,
            Status::Other => InstanceStatus::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_graph_is_injective() {
        let converter = OmrsStatusConverter;
        let graph: HashSet<_> = Status::ALL
            .iter()
            .map(|s| converter.to_graph_status(*s))
            .collect();
        assert_eq!(graph.len(), Status::ALL.len());
    }

    #[test]
    fn test_exposed_statuses_round_trip() {
        let converter = OmrsStatusConverter;
        for status in Status::ALL {
            let graph = converter.to_graph_status(status);
            assert_eq!(converter.to_domain_status(graph), status);
        }
    }

    #[test]
    fn test_unexposed_codes_map_to_other() {
        let converter = OmrsStatusConverter;
        assert_eq!(
            converter.to_domain_status(InstanceStatus::Standby),
            Status::Other
        );
        assert_eq!(
            converter.to_domain_status(InstanceStatus::ApprovedConcept),
            Status::Other
        );
    }
}

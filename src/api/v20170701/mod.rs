// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Container service API, version 2017-07-01.

pub mod orchestrator;
pub mod types;

/// API version string of this module.
pub const API_VERSION: &str = "2017-07-01";

pub use orchestrator::{DecodeError, OrchestratorType, OrchestratorVersion, OsType};
pub use types::{
    AgentPoolProfile, ContainerService, CustomProfile, LinuxProfile, MasterProfile,
    OrchestratorProfile, Properties, ProvisioningState, PublicKey, ResourcePurchasePlan,
    ServicePrincipalProfile, SshConfiguration, WindowsProfile,
};

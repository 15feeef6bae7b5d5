// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource model of a container service, API version 2017-07-01.
//!
//! Field names follow the ARM JSON template. Unset optional values and
//! empty strings are left out of the serialized form; `properties` is
//! always written. Decoding is lenient: missing or `null` fields take their
//! zero value, so an unknown orchestrator is the only payload rejected.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::orchestrator::{OrchestratorType, OrchestratorVersion, OsType};
use crate::api::common::{MANAGED_DISKS, STORAGE_ACCOUNT};
use crate::api::keyvault::KeyVaultSecretRef;

static DEFAULT_OS_TYPE: OsType = OsType::Linux;

/// Read `null` as the zero value of the field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Billing plan attached to a resource, as required by ARM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePurchasePlan {
    /// Plan name.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub name: Option<String>,
    /// Marketplace product.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub product: Option<String>,
    /// Promotion code applied to the plan.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub promotion_code: Option<String>,
    /// Plan publisher.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub publisher: Option<String>,
}

/// Container service resource in the ARM resource-definition shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerService {
    /// Fully qualified ARM resource ID.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Azure region.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub location: String,
    /// Resource name.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Billing plan (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<ResourcePurchasePlan>,
    /// Resource tags, written in key order.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// ARM resource type.
    #[serde(rename = "type", default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub resource_type: String,

    /// Cluster definition. Always present.
    pub properties: Properties,
}

impl ContainerService {
    /// Resource with the given properties and empty identity fields.
    pub fn new(properties: Properties) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }
}

/// Cluster definition carried in `ContainerService::properties`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Last known provisioning state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
    /// Orchestrator selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orchestrator_profile: Option<OrchestratorProfile>,
    /// Master nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_profile: Option<MasterProfile>,
    /// Agent pools, in declaration order.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub agent_pool_profiles: Vec<AgentPoolProfile>,
    /// Linux admin account and SSH keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_profile: Option<LinuxProfile>,
    /// Windows admin account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_profile: Option<WindowsProfile>,
    /// Credentials for Azure resource CRUD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_principal_profile: Option<ServicePrincipalProfile>,
    /// Non-standard orchestrator instantiation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_profile: Option<CustomProfile>,
}

impl Properties {
    /// Returns true if any agent pool runs Windows.
    pub fn has_windows(&self) -> bool {
        self.agent_pool_profiles.iter().any(AgentPoolProfile::is_windows)
    }
}

/// Client credentials the cluster uses for Azure resource CRUD.
///
/// `secret` is either the plain secret or a key-vault reference of the form
/// `/subscriptions/<SUB_ID>/resourceGroups/<RG_NAME>/providers/Microsoft.KeyVault/vaults/<KV_NAME>/secrets/<NAME>[/<VERSION>]`.
/// The reference is carried as-is; resolving it is up to the deployer.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePrincipalProfile {
    /// Application (client) ID.
    #[serde(rename = "clientId", deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    /// Literal secret or key-vault reference.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub secret: String,
}

impl ServicePrincipalProfile {
    /// Parsed key-vault reference, if `secret` is one.
    pub fn key_vault_secret(&self) -> Option<KeyVaultSecretRef> {
        KeyVaultSecretRef::parse(&self.secret)
    }
}

impl fmt::Debug for ServicePrincipalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicePrincipalProfile")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Custom orchestrator instantiation. Should not be used by most users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomProfile {
    /// Orchestrator name passed through to the template generator.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub orchestrator: String,
}

/// Linux configuration passed to the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinuxProfile {
    /// Admin account created on every Linux node.
    #[serde(deserialize_with = "null_as_default")]
    pub admin_username: String,
    /// SSH access for the admin account.
    #[serde(deserialize_with = "null_as_default")]
    pub ssh: SshConfiguration,
}

/// SSH settings of the Linux profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SshConfiguration {
    /// Authorized public keys.
    #[serde(deserialize_with = "null_as_default")]
    pub public_keys: Vec<PublicKey>,
}

/// Authorized SSH public key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicKey {
    /// Key in OpenSSH format.
    #[serde(deserialize_with = "null_as_default")]
    pub key_data: String,
}

/// Windows configuration passed to the cluster.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowsProfile {
    /// Admin account created on every Windows node.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub admin_username: String,
    /// Password of the admin account.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub admin_password: String,
}

impl fmt::Debug for WindowsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowsProfile")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .finish()
    }
}

/// Current state of a container service resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvisioningState {
    /// Resource is being created.
    Creating,
    /// Existing resource is being updated.
    Updating,
    /// Resource is in failed state.
    Failed,
    /// Last create/update succeeded.
    Succeeded,
    /// Resource is being deleted.
    Deleting,
    /// Resource is moving to another subscription or resource group.
    Migrating,
}

/// Orchestrator selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorProfile {
    /// Orchestrator kind, decoded case-insensitively.
    pub orchestrator_type: OrchestratorType,
    /// Orchestrator release; empty selects the default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub orchestrator_version: OrchestratorVersion,
}

impl OrchestratorProfile {
    /// Profile for `orchestrator_type` at its default version.
    pub fn new(orchestrator_type: OrchestratorType) -> Self {
        Self {
            orchestrator_type,
            orchestrator_version: OrchestratorVersion::default(),
        }
    }

    /// Returns true if this template is for the Docker CE orchestrator.
    pub fn is_swarm_mode(&self) -> bool {
        self.orchestrator_type == OrchestratorType::DockerCe
    }

    pub fn is_swarm(&self) -> bool {
        self.orchestrator_type == OrchestratorType::Swarm
    }

    pub fn is_kubernetes(&self) -> bool {
        self.orchestrator_type == OrchestratorType::Kubernetes
    }

    pub fn is_dcos(&self) -> bool {
        self.orchestrator_type == OrchestratorType::Dcos
    }
}

/// Master nodes of the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterProfile {
    /// Number of masters.
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    /// DNS prefix of the master endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub dns_prefix: String,
    /// VM size of each master.
    #[serde(deserialize_with = "null_as_default")]
    pub vm_size: String,
    /// OS disk size in GB.
    #[serde(rename = "osDiskSizeGB", skip_serializing_if = "Option::is_none")]
    pub os_disk_size_gb: Option<i64>,
    /// Subnet ID of a customer-provided VNET.
    #[serde(rename = "vnetSubnetID", skip_serializing_if = "is_unset")]
    pub vnet_subnet_id: Option<String>,
    /// First of the consecutive static IPs given to masters.
    #[serde(rename = "firstConsecutiveStaticIP", skip_serializing_if = "is_unset")]
    pub first_consecutive_static_ip: Option<String>,
    /// `ManagedDisks` or `StorageAccount`.
    #[serde(skip_serializing_if = "is_unset")]
    pub storage_profile: Option<String>,

    #[serde(skip)]
    subnet: String,

    /// Master load-balancer endpoint, `FQDN:2376`. Returned on GET only.
    #[serde(skip_serializing_if = "is_unset")]
    pub fqdn: Option<String>,
}

impl MasterProfile {
    /// Masters with the three fields every template sets.
    pub fn new(count: i64, dns_prefix: impl Into<String>, vm_size: impl Into<String>) -> Self {
        Self {
            count,
            dns_prefix: dns_prefix.into(),
            vm_size: vm_size.into(),
            ..Default::default()
        }
    }

    /// Returns true if the customer brought their own VNET.
    pub fn is_custom_vnet(&self) -> bool {
        !is_unset(&self.vnet_subnet_id)
    }

    /// Returns true if the masters use managed disks.
    pub fn is_managed_disks(&self) -> bool {
        self.storage_profile.as_deref() == Some(MANAGED_DISKS)
    }

    /// Returns true if the masters use storage accounts.
    pub fn is_storage_account(&self) -> bool {
        self.storage_profile.as_deref() == Some(STORAGE_ACCOUNT)
    }

    /// Read-only subnet of the master, never serialized.
    pub fn subnet(&self) -> &str {
        &self.subnet
    }

    /// Overwrite the internal subnet.
    pub fn set_subnet(&mut self, subnet: impl Into<String>) {
        self.subnet = subnet.into();
    }
}

/// VMs running agent daemons that register with the master and host
/// containerized applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentPoolProfile {
    /// Pool name, unique within the cluster.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Number of agents.
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    /// VM size of each agent.
    #[serde(deserialize_with = "null_as_default")]
    pub vm_size: String,
    /// OS disk size in GB.
    #[serde(rename = "osDiskSizeGB", skip_serializing_if = "Option::is_none")]
    pub os_disk_size_gb: Option<i64>,
    /// DNS prefix of the pool endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub dns_prefix: String,
    /// Pool endpoint. Returned on GET only.
    #[serde(deserialize_with = "null_as_default")]
    pub fqdn: String,
    /// Ports opened on the pool load balancer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<i64>>,
    /// `ManagedDisks` or `StorageAccount`.
    #[serde(deserialize_with = "null_as_default")]
    pub storage_profile: String,
    /// Subnet ID of a customer-provided VNET.
    #[serde(rename = "vnetSubnetID", skip_serializing_if = "is_unset")]
    pub vnet_subnet_id: Option<String>,
    /// Added after the first release, so older payloads leave it out.
    /// Absent means Linux; see [`AgentPoolProfile::effective_os_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<OsType>,

    #[serde(skip)]
    subnet: String,
}

impl AgentPoolProfile {
    /// Pool with the three fields every template sets.
    pub fn new(name: impl Into<String>, count: i64, vm_size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count,
            vm_size: vm_size.into(),
            ..Default::default()
        }
    }

    /// Returns true if the customer brought their own VNET.
    pub fn is_custom_vnet(&self) -> bool {
        !is_unset(&self.vnet_subnet_id)
    }

    /// Returns true if the pool OS type is exactly `Windows`.
    pub fn is_windows(&self) -> bool {
        self.os_type == Some(OsType::Windows)
    }

    /// Exact comparison; an unset OS type is not reported as Linux here.
    pub fn is_linux(&self) -> bool {
        self.os_type == Some(OsType::Linux)
    }

    /// OS type with the absent-means-Linux default applied.
    pub fn effective_os_type(&self) -> &OsType {
        self.os_type.as_ref().unwrap_or(&DEFAULT_OS_TYPE)
    }

    /// Returns true if the pool uses managed disks.
    pub fn is_managed_disks(&self) -> bool {
        self.storage_profile == MANAGED_DISKS
    }

    /// Returns true if the pool uses storage accounts.
    pub fn is_storage_account(&self) -> bool {
        self.storage_profile == STORAGE_ACCOUNT
    }

    /// Read-only subnet of the agent pool, never serialized.
    pub fn subnet(&self) -> &str {
        &self.subnet
    }

    /// Overwrite the internal subnet.
    pub fn set_subnet(&mut self, subnet: impl Into<String>) {
        self.subnet = subnet.into();
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

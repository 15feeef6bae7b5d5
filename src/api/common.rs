// Copyright 2024-2026 ACS-API Contributors
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary shared by every API version.

/// Storage profile value selecting Azure managed disks.
pub const MANAGED_DISKS: &str = "ManagedDisks";

/// Storage profile value selecting classic storage accounts.
pub const STORAGE_ACCOUNT: &str = "StorageAccount";

/// OS type value for Linux agent pools.
pub const LINUX: &str = "Linux";

/// OS type value for Windows agent pools.
pub const WINDOWS: &str = "Windows";

/// ARM resource type of a container service.
pub const RESOURCE_TYPE: &str = "Microsoft.ContainerService/containerServices";

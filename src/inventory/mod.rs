//! Network inventory
//!
//! Interfaces and their addresses as reported by the operating system.
//! Providers are best effort: a failed query yields an empty list.

#[cfg(target_os = "linux")]
mod netlink;

#[cfg(target_os = "linux")]
pub use netlink::NetlinkInventory;

use crate::core::tree::ValueSource;
use ipnet::IpNet;
use std::{fmt, sync::Arc};

/// Operational state of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperState {
    Up,
    Down,
    Unknown,
}

impl OperState {
    /// Report label, anything but `Up` shows as down
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down | Self::Unknown => "DOWN",
        }
    }
}

impl fmt::Display for OperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    /// Kernel interface index
    pub index: u32,
    pub name: String,
    /// Link kind such as `device`, `bridge` or `veth`
    pub kind: String,
    pub oper_state: OperState,
}

/// An address assigned to an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    pub network: IpNet,
}

impl fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.network)
    }
}

/// Source of interface and address listings
pub trait InventoryProvider {
    /// All interfaces, in provider order
    fn list_interfaces(&self) -> Vec<InterfaceInfo>;

    /// Addresses of one interface, all families
    fn list_addresses(&self, interface: &InterfaceInfo) -> Vec<AddressInfo>;
}

/// A fixed inventory
///
/// Used where no system facility is available and to drive the shell in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    entries: Vec<(InterfaceInfo, Vec<AddressInfo>)>,
}

impl StaticInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface with its addresses
    #[must_use]
    pub fn with_interface(mut self, interface: InterfaceInfo, addresses: Vec<AddressInfo>) -> Self {
        self.entries.push((interface, addresses));
        self
    }
}

impl InventoryProvider for StaticInventory {
    fn list_interfaces(&self) -> Vec<InterfaceInfo> {
        self.entries.iter().map(|(iface, _)| iface.clone()).collect()
    }

    fn list_addresses(&self, interface: &InterfaceInfo) -> Vec<AddressInfo> {
        self.entries
            .iter()
            .find(|(iface, _)| iface.index == interface.index && iface.name == interface.name)
            .map(|(_, addrs)| addrs.clone())
            .unwrap_or_default()
    }
}

/// Live interface names, for completing `set interface`
pub struct InterfaceNames {
    inventory: Arc<dyn InventoryProvider>,
}

impl InterfaceNames {
    pub fn new(inventory: Arc<dyn InventoryProvider>) -> Self {
        Self { inventory }
    }
}

impl ValueSource for InterfaceNames {
    fn values(&self) -> Vec<String> {
        self.inventory
            .list_interfaces()
            .into_iter()
            .map(|iface| iface.name)
            .collect()
    }
}

/// The inventory provider for the running platform
pub fn system_inventory() -> Arc<dyn InventoryProvider> {
    #[cfg(target_os = "linux")]
    {
        Arc::new(NetlinkInventory::new())
    }

    #[cfg(not(target_os = "linux"))]
    {
        tracing::debug!("No network inventory available on this platform");
        Arc::new(StaticInventory::new())
    }
}

//! Linux inventory over rtnetlink
//!
//! Every query opens its own netlink connection on a current-thread
//! runtime and tears it down when the dump is complete.

use std::{future::Future, num::NonZeroI32, time::Duration};

use futures::stream::TryStreamExt;
use ipnet::IpNet;
use netlink_packet_route::{
    address::{AddressAttribute, AddressMessage},
    link::{InfoKind, LinkAttribute, LinkInfo, LinkMessage, State},
};
use rtnetlink::{Handle, new_connection};
use tracing::{debug, instrument};

use crate::{
    error::{Result, ShellError},
    inventory::{AddressInfo, InterfaceInfo, InventoryProvider, OperState},
};

/// Type label for links without an `IFLA_LINKINFO` kind
const DEFAULT_KIND: &str = "device";

/// Linux EBUSY as reported in netlink error messages
const EBUSY: i32 = -16;

/// Inventory backed by the kernel routing netlink socket
#[derive(Debug, Clone, Copy, Default)]
pub struct NetlinkInventory;

impl NetlinkInventory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run `query` against a fresh netlink handle
    fn query<T, F, Fut>(&self, query: F) -> Result<T>
    where
        F: FnOnce(Handle) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ShellError::inventory("failed to start netlink runtime", e))?;

        runtime.block_on(async {
            let (connection, handle, _) = new_connection()
                .map_err(|e| ShellError::inventory("failed to open netlink socket", e))?;
            tokio::spawn(connection);
            query(handle).await
        })
    }
}

impl InventoryProvider for NetlinkInventory {
    #[instrument(skip(self))]
    fn list_interfaces(&self) -> Vec<InterfaceInfo> {
        let links = or_empty(self.query(fetch_links), "link");
        debug!(count = links.len(), "listed links");
        links
    }

    #[instrument(skip(self, interface), fields(interface = %interface.name))]
    fn list_addresses(&self, interface: &InterfaceInfo) -> Vec<AddressInfo> {
        let index = interface.index;
        or_empty(self.query(move |handle| fetch_addresses(handle, index)), "address")
    }
}

/// Failed queries count as an empty inventory
fn or_empty<T>(result: Result<Vec<T>>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        debug!("{} query failed: {}", what, e);
        Vec::new()
    })
}

async fn fetch_links(handle: Handle) -> Result<Vec<InterfaceInfo>> {
    let mut links = handle.link().get().execute();
    let mut interfaces = Vec::new();

    while let Some(msg) = links
        .try_next()
        .await
        .map_err(|e| ShellError::inventory("link dump failed", e))?
    {
        tracing::trace!(raw_link = ?msg);
        if let Some(interface) = interface_from_message(&msg) {
            interfaces.push(interface);
        }
    }

    Ok(interfaces)
}

async fn fetch_addresses(handle: Handle, index: u32) -> Result<Vec<AddressInfo>> {
    let mut result = dump_addresses(handle.clone(), index).await;

    if let Err(rtnetlink::Error::NetlinkError(msg)) = &result {
        if msg.code.map_or(0, NonZeroI32::get) == EBUSY {
            debug!("Retrying address dump for link {}", index);
            tokio::time::sleep(Duration::from_millis(100)).await;
            result = dump_addresses(handle, index).await;
        }
    }

    let messages = result.map_err(|e| ShellError::inventory("address dump failed", e))?;
    Ok(messages.iter().filter_map(address_from_message).collect())
}

async fn dump_addresses(
    handle: Handle,
    index: u32,
) -> std::result::Result<Vec<AddressMessage>, rtnetlink::Error> {
    let mut messages = Vec::new();
    let mut stream = handle
        .address()
        .get()
        .set_link_index_filter(index)
        .execute();

    while let Some(msg) = stream.try_next().await? {
        messages.push(msg);
    }

    Ok(messages)
}

fn interface_from_message(msg: &LinkMessage) -> Option<InterfaceInfo> {
    let mut name = None;
    let mut kind = None;
    let mut oper_state = OperState::Unknown;

    for attr in &msg.attributes {
        match attr {
            LinkAttribute::IfName(ifname) => name = Some(ifname.clone()),
            LinkAttribute::OperState(state) => oper_state = oper_state_from(state),
            LinkAttribute::LinkInfo(infos) => {
                kind = infos.iter().find_map(|info| match info {
                    LinkInfo::Kind(k) => Some(kind_label(k)),
                    _ => None,
                });
            }
            _ => {}
        }
    }

    Some(InterfaceInfo {
        index: msg.header.index,
        name: name?,
        kind: kind.unwrap_or_else(|| DEFAULT_KIND.to_string()),
        oper_state,
    })
}

fn oper_state_from(state: &State) -> OperState {
    match state {
        State::Up => OperState::Up,
        State::Unknown => OperState::Unknown,
        _ => OperState::Down,
    }
}

/// Kernel `IFLA_INFO_KIND` name, e.g. `sit` or `ip6gre`
fn kind_label(kind: &InfoKind) -> String {
    kind.to_string()
}

fn address_from_message(msg: &AddressMessage) -> Option<AddressInfo> {
    let mut address = None;
    let mut local = None;

    for attr in &msg.attributes {
        match attr {
            AddressAttribute::Address(ip) => address = Some(*ip),
            AddressAttribute::Local(ip) => local = Some(*ip),
            _ => {}
        }
    }

    // Point-to-point links carry the peer in IFA_ADDRESS and our side in IFA_LOCAL
    let ip = local.or(address)?;
    IpNet::new(ip, msg.header.prefix_len)
        .map(|network| AddressInfo { network })
        .ok()
}

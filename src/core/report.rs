//! Link and address reports
//!
//! Rows follow the order the inventory reports them in.

use crate::{
    inventory::{AddressInfo, InterfaceInfo},
    utils::table::Table,
};

/// One row per interface: name, type and operational state
pub fn link_table(interfaces: &[InterfaceInfo]) -> Table {
    let mut table = Table::new(["Name", "Type", "State"]);
    for iface in interfaces {
        table.push_row([iface.name.as_str(), iface.kind.as_str(), iface.oper_state.label()]);
    }
    table
}

/// One row per address; interfaces without addresses add no rows
pub fn address_table(entries: &[(InterfaceInfo, Vec<AddressInfo>)]) -> Table {
    let mut table = Table::new(["Interface", "Address"]);
    for (iface, addresses) in entries {
        for address in addresses {
            table.push_row([iface.name.clone(), address.to_string()]);
        }
    }
    table
}

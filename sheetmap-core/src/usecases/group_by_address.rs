use super::prelude::*;
use std::collections::HashMap;

/// Collect the names of all rows that share an address.
///
/// Groups are ordered by the first appearance of their address,
/// names by their appearance in `rows`.
pub fn group_by_address(rows: Vec<Row>) -> Vec<AddressGroup> {
    let mut groups: Vec<AddressGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();
    for row in rows {
        let (name, address) = row.into_parts();
        if let Some(&index) = group_index.get(&address) {
            groups[index].names.push(name);
        } else {
            group_index.insert(address.clone(), groups.len());
            groups.push(AddressGroup {
                address,
                names: vec![name],
            });
        }
    }
    groups
}

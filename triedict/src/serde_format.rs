//! Binary (de)serialization that exploits the node store's flat array layout.
//!
//! Wire format: a 4-byte magic tag, a big-endian `u16` version, a flag byte (bit 0: suffix
//! links present and current), a big-endian `u32` node count, then that many fixed-width node
//! records of five big-endian `u32` fields each: `(symbol, value, child, sibling, suffix)`.

use bytes::{Buf, BufMut};
use log::{debug, warn};

use crate::error::{CorruptReason, Error, Result};
use crate::node_store::{Node, NodeStore};

const MAGIC: [u8; 4] = *b"TRD1";
const VERSION: u16 = 1;
const LINKS_CURRENT_FLAG: u8 = 0b0000_0001;
const RECORD_LEN: usize = 4 * 5;

pub(crate) fn write(store: &NodeStore, links_current: bool, out: &mut impl BufMut) {
    out.put_slice(&MAGIC);
    out.put_u16(VERSION);
    out.put_u8(if links_current { LINKS_CURRENT_FLAG } else { 0 });
    out.put_u32(store.len() as u32);

    for node in store.nodes() {
        out.put_u32(node.symbol);
        out.put_u32(node.value);
        out.put_u32(node.child);
        out.put_u32(node.sibling);
        out.put_u32(node.suffix);
    }

    debug!("serialized {} nodes (links_current={links_current})", store.len());
}

pub(crate) fn read(mut input: impl Buf) -> Result<(NodeStore, bool)> {
    if input.remaining() < MAGIC.len() {
        return Err(Error::CorruptSerializedData(CorruptReason::TruncatedHeader));
    }
    let mut magic = [0u8; 4];
    input.copy_to_slice(&mut magic);
    if magic != MAGIC {
        warn!("deserialize: magic tag mismatch");
        return Err(Error::CorruptSerializedData(CorruptReason::BadMagic));
    }

    if input.remaining() < 2 {
        return Err(Error::CorruptSerializedData(CorruptReason::TruncatedHeader));
    }
    let version = input.get_u16();
    if version != VERSION {
        warn!("deserialize: unsupported format version {version}");
        return Err(Error::CorruptSerializedData(CorruptReason::UnsupportedVersion));
    }

    if input.remaining() < 1 {
        return Err(Error::CorruptSerializedData(CorruptReason::TruncatedHeader));
    }
    let flags = input.get_u8();
    let links_current = flags & LINKS_CURRENT_FLAG != 0;

    if input.remaining() < 4 {
        return Err(Error::CorruptSerializedData(CorruptReason::TruncatedHeader));
    }
    let count = input.get_u32();
    if count == 0 || count == u32::MAX {
        return Err(Error::CorruptSerializedData(CorruptReason::NodeCountOutOfRange));
    }

    if input.remaining() < count as usize * RECORD_LEN {
        return Err(Error::CorruptSerializedData(CorruptReason::TruncatedRecords));
    }

    let mut nodes = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let symbol = input.get_u32();
        let value = input.get_u32();
        let child = input.get_u32();
        let sibling = input.get_u32();
        let suffix = input.get_u32();

        if child >= count || sibling >= count || suffix >= count {
            return Err(Error::CorruptSerializedData(CorruptReason::DanglingReference));
        }

        nodes.push(Node {
            symbol,
            value,
            child,
            sibling,
            suffix,
        });
    }

    debug!("deserialized {count} nodes (links_current={links_current})");
    Ok((NodeStore::from_raw(nodes), links_current))
}

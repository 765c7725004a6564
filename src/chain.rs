//! Chains: singly linked lists of entries stored in a shared arena.
//!
//! Every entry of every chain lives in one `SlotMap`. A chain is named by
//! its head link, which the caller owns (the map keeps one per bucket);
//! each entry owns the link to its successor. Links are generational slot
//! keys, so a link to a removed entry never resolves to a newer one.
//!
//! All operations here take the head by value (reads) or by `&mut`
//! (writes) and never keep a link to an entry after unlinking it.

use core::iter::FusedIterator;
use core::mem;
use slotmap::{DefaultKey, SlotMap};

/// Arena key naming one entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Link(DefaultKey);

#[derive(Debug)]
pub(crate) struct Entry<V> {
    pub(crate) key: i64,
    pub(crate) value: V,
    next: Option<Link>,
}

/// Result of walking a chain looking for `key`.
enum Probe {
    /// The entry holding the key.
    Found(Link),
    /// Key absent; carries the current tail (`None` for an empty chain).
    Missing(Option<Link>),
}

#[derive(Debug)]
pub(crate) struct Chains<V> {
    nodes: SlotMap<DefaultKey, Entry<V>>,
}

impl<V> Chains<V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of entries across all chains.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn probe(&self, head: Option<Link>, key: i64) -> Probe {
        let mut tail = None;
        let mut cur = head;
        while let Some(link) = cur {
            let Some(entry) = self.nodes.get(link.0) else {
                debug_assert!(false, "chain link {:?} does not resolve", link);
                break;
            };
            if entry.key == key {
                return Probe::Found(link);
            }
            tail = Some(link);
            cur = entry.next;
        }
        Probe::Missing(tail)
    }

    fn alloc(&mut self, key: i64, value: V) -> Link {
        Link(self.nodes.insert(Entry {
            key,
            value,
            next: None,
        }))
    }

    /// Attach `new` after `tail`, or make it the head of an empty chain.
    fn append(&mut self, head: &mut Option<Link>, tail: Option<Link>, new: Link) {
        match tail {
            None => *head = Some(new),
            Some(t) => match self.nodes.get_mut(t.0) {
                Some(entry) => entry.next = Some(new),
                None => debug_assert!(false, "tail link {:?} does not resolve", t),
            },
        }
    }

    pub(crate) fn find(&self, head: Option<Link>, key: i64) -> Option<Link> {
        match self.probe(head, key) {
            Probe::Found(link) => Some(link),
            Probe::Missing(_) => None,
        }
    }

    pub(crate) fn get(&self, head: Option<Link>, key: i64) -> Option<&V> {
        let link = self.find(head, key)?;
        self.nodes.get(link.0).map(|e| &e.value)
    }

    pub(crate) fn get_mut(&mut self, head: Option<Link>, key: i64) -> Option<&mut V> {
        let link = self.find(head, key)?;
        self.nodes.get_mut(link.0).map(|e| &mut e.value)
    }

    /// Overwrite the value of `key` in place, or append a new tail entry.
    /// Returns the replaced value on update.
    pub(crate) fn upsert(&mut self, head: &mut Option<Link>, key: i64, value: V) -> Option<V> {
        match self.probe(*head, key) {
            Probe::Found(link) => self
                .nodes
                .get_mut(link.0)
                .map(|e| mem::replace(&mut e.value, value)),
            Probe::Missing(tail) => {
                let new = self.alloc(key, value);
                self.append(head, tail, new);
                None
            }
        }
    }

    /// Like `upsert`, but only builds a value when the key is absent.
    pub(crate) fn get_or_insert_with<F>(&mut self, head: &mut Option<Link>, key: i64, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let link = match self.probe(*head, key) {
            Probe::Found(link) => link,
            Probe::Missing(tail) => {
                let new = self.alloc(key, f());
                self.append(head, tail, new);
                new
            }
        };
        // `link` was just probed or allocated; nothing freed a slot since.
        &mut self.nodes[link.0].value
    }

    /// Unlink and free the entry holding `key`.
    ///
    /// Head and interior matches are separate branches; both return as
    /// soon as the entry is out of the chain.
    pub(crate) fn unlink(&mut self, head: &mut Option<Link>, key: i64) -> Option<V> {
        let first = (*head)?;
        let first_entry = self.nodes.get(first.0)?;
        if first_entry.key == key {
            *head = first_entry.next;
            return self.nodes.remove(first.0).map(|e| e.value);
        }

        let mut prev = first;
        let mut cur = first_entry.next;
        while let Some(link) = cur {
            let entry = self.nodes.get(link.0)?;
            if entry.key == key {
                let next = entry.next;
                if let Some(p) = self.nodes.get_mut(prev.0) {
                    p.next = next;
                }
                return self.nodes.remove(link.0).map(|e| e.value);
            }
            prev = link;
            cur = entry.next;
        }
        None
    }

    pub(crate) fn iter(&self, head: Option<Link>) -> ChainIter<'_, V> {
        ChainIter {
            nodes: &self.nodes,
            cur: head,
        }
    }
}

/// Walks one chain from head to tail.
pub(crate) struct ChainIter<'a, V> {
    nodes: &'a SlotMap<DefaultKey, Entry<V>>,
    cur: Option<Link>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = &'a Entry<V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let entry = nodes.get(self.cur?.0)?;
        self.cur = entry.next;
        Some(entry)
    }
}

impl<V> FusedIterator for ChainIter<'_, V> {}

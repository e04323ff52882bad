use std::fmt::{self, Debug, Display};
use std::io::{self, Write};

use log::{debug, trace};

use crate::error::RemoveError;

/// A record that can be looked up by a natural key.
pub trait Keyed {
    type Key: PartialEq + Debug + Display + ToOwned + ?Sized;

    fn key(&self) -> &Self::Key;
}

/// One link of the chain. Owns its record and the rest of the chain behind it.
#[derive(Debug)]
pub struct Node<T> {
    record: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(record: T) -> Self {
        Node { record, next: None }
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut T {
        &mut self.record
    }

    /// Swaps the stored record, handing back the previous one.
    pub fn set_record(&mut self, record: T) -> T {
        std::mem::replace(&mut self.record, record)
    }

    pub fn into_record(self) -> T {
        self.record
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Replaces the successor, handing back whatever was attached before.
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        std::mem::replace(&mut self.next, next)
    }

    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }
}

/// Singly-linked list, newest element first.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Wraps `record` in a fresh node and makes it the new head.
    pub fn insert_front(&mut self, record: T) {
        self.insert_front_node(Box::new(Node::new(record)));
    }

    /// Makes `node` the new head. A chain already hanging off `node` is dropped
    /// and replaced by the current head.
    pub fn insert_front_node(&mut self, mut node: Box<Node<T>>) {
        if node.set_next(self.head.take()).is_some() {
            trace!("Dropping the chain attached to an inserted node");
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Writes every record, head to tail, one per line.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        for record in self {
            writeln!(out, "{}", record)?;
        }
        Ok(())
    }

    /// Detaches the node owned by `link`, which is either the head slot or the
    /// predecessor's successor slot, and closes the gap behind it.
    /// The returned node never keeps a successor.
    fn unlink(link: &mut Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        let mut target = link.take()?;
        *link = target.take_next();
        Some(target)
    }
}

impl<T: Keyed> LinkedList<T> {
    /// First node, counting from the head, whose record has `key`.
    pub fn search(&self, key: &T::Key) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.record.key() == key {
                return Some(node);
            }
            current = node.next.as_deref();
        }
        None
    }

    pub fn search_mut(&mut self, key: &T::Key) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.record.key() == key {
                return Some(node);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node whose record has `key` and hands it back.
    pub fn remove(&mut self, key: &T::Key) -> Result<Box<Node<T>>, RemoveError> {
        if self.is_empty() {
            debug!("Remove {:?}: list is empty", key);
            return Err(RemoveError::Empty);
        }

        let scanned = self.len;
        let mut position = 0;
        // Slot owning the candidate: the head, then each predecessor's `next`.
        let mut link = &mut self.head;
        loop {
            match link {
                None => {
                    debug!("Remove {:?}: no match among {} nodes", key, scanned);
                    return Err(RemoveError::NotFound);
                }
                Some(node) if node.record.key() == key => break,
                Some(node) => {
                    link = &mut node.next;
                    position += 1;
                }
            }
        }

        let removed = Self::unlink(link).ok_or(RemoveError::NotFound)?;
        self.len -= 1;

        debug!("Removed {:?} at position {}", key, position);
        Ok(removed)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Inserts each record at the front, so the last one ends up as the head.
    fn extend<I: IntoIterator<Item = T>>(&mut self, records: I) {
        for record in records {
            self.insert_front(record);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(records: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(records);
        list
    }
}

impl<T> Drop for LinkedList<T> {
    // Unrolled so a long chain is not freed through nested Box drops.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
/// Value slot of a [`Storage`] entry.
pub enum StorageValue {
    /// Integer or boolean value.
    Int(i32),
    /// Floating point value.
    Float(f32),
    /// Opaque handle (index, pointer-sized key) owned by the caller.
    Handle(usize),
}

#[derive(Clone, Debug, Default)]
/// Sorted ID to value map used for per-window widget state (tree node open flags, scroll of lists, ...).
///
/// Entries are kept sorted by key so lookups are a binary search and insertions keep the order.
/// Reading a slot with the wrong type returns the default value.
pub struct Storage {
    data: Vec<(Id, StorageValue)>,
}

impl Storage {
    /// Creates an empty storage.
    pub fn new() -> Self { Self { data: Vec::new() } }

    /// Removes every entry.
    pub fn clear(&mut self) { self.data.clear() }

    /// Number of entries.
    pub fn len(&self) -> usize { self.data.len() }

    /// Returns `true` when there are no entries.
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    fn lower_bound(&self, key: Id) -> Result<usize, usize> { self.data.binary_search_by(|(k, _)| k.cmp(&key)) }

    fn get(&self, key: Id) -> Option<StorageValue> {
        match self.lower_bound(key) {
            Ok(idx) => Some(self.data[idx].1),
            Err(_) => None,
        }
    }

    fn set(&mut self, key: Id, value: StorageValue) {
        match self.lower_bound(key) {
            Ok(idx) => self.data[idx].1 = value,
            Err(idx) => self.data.insert(idx, (key, value)),
        }
    }

    /// Reads an integer, falling back to `default`.
    pub fn get_int(&self, key: Id, default: i32) -> i32 {
        match self.get(key) {
            Some(StorageValue::Int(v)) => v,
            _ => default,
        }
    }

    /// Writes an integer.
    pub fn set_int(&mut self, key: Id, value: i32) { self.set(key, StorageValue::Int(value)) }

    /// Reads a boolean stored as an integer.
    pub fn get_bool(&self, key: Id, default: bool) -> bool { self.get_int(key, default as i32) != 0 }

    /// Writes a boolean as an integer.
    pub fn set_bool(&mut self, key: Id, value: bool) { self.set_int(key, value as i32) }

    /// Reads a float, falling back to `default`.
    pub fn get_float(&self, key: Id, default: f32) -> f32 {
        match self.get(key) {
            Some(StorageValue::Float(v)) => v,
            _ => default,
        }
    }

    /// Writes a float.
    pub fn set_float(&mut self, key: Id, value: f32) { self.set(key, StorageValue::Float(value)) }

    /// Reads a handle.
    pub fn get_handle(&self, key: Id) -> Option<usize> {
        match self.get(key) {
            Some(StorageValue::Handle(v)) => Some(v),
            _ => None,
        }
    }

    /// Writes a handle.
    pub fn set_handle(&mut self, key: Id, value: usize) { self.set(key, StorageValue::Handle(value)) }

    /// Returns a mutable reference to an integer slot, inserting `default` when absent.
    /// A slot of another type is replaced by the default.
    pub fn get_int_mut(&mut self, key: Id, default: i32) -> &mut i32 {
        let idx = match self.lower_bound(key) {
            Ok(idx) => {
                if !matches!(self.data[idx].1, StorageValue::Int(_)) {
                    self.data[idx].1 = StorageValue::Int(default);
                }
                idx
            }
            Err(idx) => {
                self.data.insert(idx, (key, StorageValue::Int(default)));
                idx
            }
        };
        match &mut self.data[idx].1 {
            StorageValue::Int(v) => v,
            _ => unreachable!(),
        }
    }

    /// Returns a mutable reference to a float slot, inserting `default` when absent.
    pub fn get_float_mut(&mut self, key: Id, default: f32) -> &mut f32 {
        let idx = match self.lower_bound(key) {
            Ok(idx) => {
                if !matches!(self.data[idx].1, StorageValue::Float(_)) {
                    self.data[idx].1 = StorageValue::Float(default);
                }
                idx
            }
            Err(idx) => {
                self.data.insert(idx, (key, StorageValue::Float(default)));
                idx
            }
        };
        match &mut self.data[idx].1 {
            StorageValue::Float(v) => v,
            _ => unreachable!(),
        }
    }

    /// Overwrites every integer slot with `value` (e.g. collapse all tree nodes).
    pub fn set_all_int(&mut self, value: i32) {
        for (_, v) in self.data.iter_mut() {
            if let StorageValue::Int(slot) = v {
                *slot = value;
            }
        }
    }

    /// Bulk loading helper: append entries in any order and sort once.
    pub fn build_sort_by_key(&mut self) { self.data.sort_by(|a, b| a.0.cmp(&b.0)) }

    /// Appends an entry without keeping the order; call [`Storage::build_sort_by_key`] afterwards.
    pub fn push_unsorted(&mut self, key: Id, value: StorageValue) { self.data.push((key, value)) }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &(Id, StorageValue)> { self.data.iter() }
}

#[derive(Clone, Debug, Default)]
/// Persisted geometry of a window, written to and read from the ini text.
///
/// Position and size are stored as 16-bit integers, matching what the ini format can hold.
pub struct WindowSettings {
    /// Window name, as passed to `begin`.
    pub name: String,
    /// Hash of the name.
    pub id: Id,
    /// Position, rounded.
    pub pos: (i16, i16),
    /// Size, rounded.
    pub size: (i16, i16),
    /// Collapsed state.
    pub collapsed: bool,
    /// Set when read from the ini text and not yet applied to a live window.
    pub want_apply: bool,
}

impl WindowSettings {
    /// Creates a blank record for `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: hash_str(name, Id::NONE),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_keeps_keys_sorted() {
        let mut s = Storage::new();
        for k in [50u32, 10, 30, 20, 40] {
            s.set_int(Id::new(k), k as i32);
        }
        let keys: Vec<u32> = s.iter().map(|(k, _)| k.raw()).collect();
        assert_eq!(keys, vec![10, 20, 30, 40, 50]);
        assert_eq!(s.get_int(Id::new(30), -1), 30);
        assert_eq!(s.get_int(Id::new(31), -1), -1);
    }

    #[test]
    fn typed_getters_ignore_other_types() {
        let mut s = Storage::new();
        s.set_float(Id::new(1), 2.5);
        s.set_handle(Id::new(2), 77);
        assert_eq!(s.get_int(Id::new(1), 9), 9);
        assert_eq!(s.get_float(Id::new(1), 0.0), 2.5);
        assert_eq!(s.get_handle(Id::new(2)), Some(77));
        assert_eq!(s.get_handle(Id::new(1)), None);
    }

    #[test]
    fn mutable_slots_are_created_once() {
        let mut s = Storage::new();
        *s.get_int_mut(Id::new(5), 1) += 10;
        *s.get_int_mut(Id::new(5), 1) += 10;
        assert_eq!(s.get_int(Id::new(5), 0), 21);
        *s.get_float_mut(Id::new(6), 0.5) *= 4.0;
        assert_eq!(s.get_float(Id::new(6), 0.0), 2.0);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn set_all_int_touches_only_ints() {
        let mut s = Storage::new();
        s.set_bool(Id::new(1), true);
        s.set_int(Id::new(2), 5);
        s.set_float(Id::new(3), 1.0);
        s.set_all_int(0);
        assert!(!s.get_bool(Id::new(1), true));
        assert_eq!(s.get_int(Id::new(2), 9), 0);
        assert_eq!(s.get_float(Id::new(3), 0.0), 1.0);
    }

    #[test]
    fn bulk_build() {
        let mut s = Storage::new();
        s.push_unsorted(Id::new(3), StorageValue::Int(3));
        s.push_unsorted(Id::new(1), StorageValue::Int(1));
        s.build_sort_by_key();
        assert_eq!(s.get_int(Id::new(1), 0), 1);
        assert_eq!(s.get_int(Id::new(3), 0), 3);
    }
}

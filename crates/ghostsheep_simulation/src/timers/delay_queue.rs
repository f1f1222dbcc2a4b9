//! DelayQueue - min-heap (due_tick, seq, key) + map живых записей
//!
//! `schedule` заменяет существующую запись ключа: старая запись в heap
//! остаётся, но становится stale (seq не совпадает) и пропускается при pop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Armed {
    seq: u64,
    due_tick: u64,
}

#[derive(Debug)]
pub struct DelayQueue<K> {
    heap: BinaryHeap<Reverse<(u64, u64, K)>>,
    armed: HashMap<K, Armed>,
    next_seq: u64,
}

impl<K> Default for DelayQueue<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            armed: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq + Hash + Ord> DelayQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Арм (или ре-арм) таймера ключа на абсолютный тик
    ///
    /// Возвращает предыдущий due tick, если таймер уже был pending.
    pub fn schedule(&mut self, key: K, due_tick: u64) -> Option<u64> {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.heap.push(Reverse((due_tick, seq, key)));
        self.armed
            .insert(key, Armed { seq, due_tick })
            .map(|previous| previous.due_tick)
    }

    /// Снять таймер ключа (heap запись станет stale)
    pub fn cancel(&mut self, key: K) -> bool {
        self.armed.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.armed.contains_key(&key)
    }

    /// 0 или 1 - больше одного быть не может
    pub fn pending_count(&self, key: K) -> usize {
        usize::from(self.is_pending(key))
    }

    pub fn due_tick(&self, key: K) -> Option<u64> {
        self.armed.get(&key).map(|armed| armed.due_tick)
    }

    /// Количество живых таймеров
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }

    /// Следующий due ключ (due_tick <= now), снимается с учёта
    ///
    /// Порядок: по due_tick, затем по порядку арма.
    pub fn pop_due(&mut self, now: u64) -> Option<K> {
        while let Some(Reverse((due_tick, seq, key))) = self.heap.peek().copied() {
            if due_tick > now {
                return None;
            }
            self.heap.pop();

            let live = self.armed.get(&key).is_some_and(|armed| armed.seq == seq);
            if live {
                self.armed.remove(&key);
                return Some(key);
            }
            // stale запись (ре-арм или cancel) - пропускаем
        }
        None
    }
}

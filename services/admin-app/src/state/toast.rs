//! Transient user-visible notifications

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Bounded FIFO of posted toasts; the oldest is dropped when full
#[derive(Debug)]
pub struct ToastQueue {
    posted: VecDeque<(u64, Toast)>,
    next_id: u64,
    max_size: usize,
}

impl ToastQueue {
    pub fn new(max_size: usize) -> Self {
        Self {
            posted: VecDeque::with_capacity(max_size),
            next_id: 0,
            max_size,
        }
    }

    pub fn push(&mut self, toast: Toast) -> u64 {
        if self.posted.len() >= self.max_size {
            self.posted.pop_front();
        }
        self.next_id += 1;
        self.posted.push_back((self.next_id, toast));
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.posted.retain(|(posted_id, _)| *posted_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Toast)> {
        self.posted.iter()
    }

    pub fn len(&self) -> usize {
        self.posted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(4);
        let first = queue.push(Toast::success("created"));
        let second = queue.push(Toast::error("failed"));
        assert!(second > first);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn queue_respects_max_size() {
        let mut queue = ToastQueue::new(2);
        queue.push(Toast::success("one"));
        queue.push(Toast::success("two"));
        queue.push(Toast::success("three"));

        assert_eq!(queue.len(), 2);
        let messages: Vec<_> = queue.iter().map(|(_, t)| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::new(4);
        let first = queue.push(Toast::success("keep"));
        let second = queue.push(Toast::error("drop"));

        queue.dismiss(second);
        assert_eq!(queue.len(), 1);
        assert!(queue.iter().all(|(id, _)| *id == first));
    }
}

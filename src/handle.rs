//! 面向测试驱动程序的调用接口
//!
//! 驱动程序可能持有一个不存在的队列，这里用 `Option` 表示。
//! 所有失败都以 `false` 返回，原因记录在 debug 日志里。

use tracing::debug;

use crate::error::QueueError;
use crate::queue::Queue;

pub fn create() -> Box<Queue> {
    Box::new(Queue::new())
}

pub fn destroy(q: Option<Box<Queue>>) {
    drop(q);
}

pub fn insert_head(q: Option<&mut Queue>, s: Option<&[u8]>) -> bool {
    let Some(q) = q else {
        return report("insert_head", Err(QueueError::InvalidArgument("queue is absent")));
    };
    report("insert_head", q.insert_head(s))
}

pub fn insert_tail(q: Option<&mut Queue>, s: Option<&[u8]>) -> bool {
    let Some(q) = q else {
        return report("insert_tail", Err(QueueError::InvalidArgument("queue is absent")));
    };
    report("insert_tail", q.insert_tail(s))
}

pub fn remove_head(q: Option<&mut Queue>, buf: Option<&mut [u8]>) -> bool {
    let Some(q) = q else {
        return report("remove_head", Err(QueueError::EmptyQueue));
    };
    report("remove_head", q.remove_head(buf))
}

pub fn size(q: Option<&Queue>) -> usize {
    q.map_or(0, Queue::len)
}

pub fn reverse(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.reverse();
    }
}

pub fn sort(q: Option<&mut Queue>) {
    if let Some(q) = q {
        q.sort();
    }
}

fn report(op: &'static str, result: Result<(), QueueError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(op, %err, "queue operation rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_queue() {
        let mut buf = [0u8; 8];
        assert!(!insert_head(None, Some(b"a".as_slice())));
        assert!(!insert_tail(None, Some(b"a".as_slice())));
        assert!(!remove_head(None, Some(&mut buf[..])));
        assert_eq!(size(None), 0);
        reverse(None);
        sort(None);
        destroy(None);
    }

    #[test]
    fn test_handle_round_trip() {
        let mut q = create();
        assert_eq!(size(Some(&*q)), 0);

        for s in ["banana", "apple", "cherry"] {
            assert!(insert_tail(Some(&mut *q), Some(s.as_bytes())));
        }
        assert_eq!(size(Some(&*q)), 3);

        sort(Some(&mut *q));
        assert_eq!(q.to_string(), "Queue [apple, banana, cherry]");
        reverse(Some(&mut *q));
        assert_eq!(q.to_string(), "Queue [cherry, banana, apple]");

        let mut buf = [0u8; 4];
        assert!(remove_head(Some(&mut *q), Some(&mut buf[..])));
        assert_eq!(&buf, b"che\0");
        assert!(!remove_head(Some(&mut *q), None));
        assert_eq!(size(Some(&*q)), 2);

        destroy(Some(q));
    }

    #[test]
    fn test_absent_value_asymmetry() {
        let mut q = create();
        assert!(insert_head(Some(&mut *q), None));
        assert!(!insert_tail(Some(&mut *q), None));
        assert_eq!(size(Some(&*q)), 1);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut q = create();
        let mut buf = [0u8; 8];
        assert!(!remove_head(Some(&mut *q), Some(&mut buf[..])));
        assert_eq!(size(Some(&*q)), 0);
    }
}

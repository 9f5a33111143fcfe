//! 单向链表的节点与链操作
//!
//! 链表没有独立的表头节点，由 `Element` 串联而成。每个节点持有自己的值，
//! 并通过 `next` 持有后继节点（连同其后整条链）的所有权。
//!
//! # 内存布局
//! ```text
//! head                       tail
//!  |                          |
//!  v                          v
//! +-------+    +-------+    +-------+
//! | "foo" |--->| "bar" |--->| NULL  |---> None
//! +-------+    +-------+    +-------+
//! ```
//!
//! # 所有权设计
//! - value：`Option<Box<[u8]>>`，只有头部插入允许不带值
//! - next：`Box<Element>` 持有后继节点的所有权
//! - 翻转、切段、归并都是对 `Box<Element>` 的所有权转移，不分配也不释放节点

use std::ptr::NonNull;

use derive_new::new;

use crate::error::QueueError;

pub(crate) type Link = Option<Box<Element>>;

#[derive(new)]
pub(crate) struct Element {
    pub value: Option<Box<[u8]>>,
    // 拥有所有权
    #[new(default)]
    pub next: Link,
}

impl Element {
    /// 复制 `s` 到新申请的存储中并构造节点，`None` 表示节点不携带值
    pub fn with_copy(s: Option<&[u8]>) -> Result<Box<Self>, QueueError> {
        let value = s.map(duplicate).transpose()?;
        Ok(Box::new(Self::new(value)))
    }
}

/// 为值申请恰好够用的存储，申请失败时返回 `Allocation`
pub(crate) fn duplicate(s: &[u8]) -> Result<Box<[u8]>, QueueError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(s.len())?;
    buf.extend_from_slice(s);
    Ok(buf.into_boxed_slice())
}

/// 原地翻转一条链，返回新的头节点
///
/// 经典的 prev / current / next 三指针做法：逐个摘下 current，
/// 把它的 next 指回 prev。
pub(crate) fn reverse(mut current: Link) -> Link {
    let mut prev = None;
    while let Some(mut node) = current {
        current = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// 找到链的最后一个节点
pub(crate) fn last(head: &mut Link) -> Option<NonNull<Element>> {
    let mut node = head.as_deref_mut()?;
    loop {
        match node.next {
            Some(ref mut next) => node = &mut **next,
            None => return Some(NonNull::from(node)),
        }
    }
}

/// 逐个释放节点，避免长链在递归 drop 时耗尽栈
pub(crate) fn release(mut current: Link) {
    while let Some(mut node) = current {
        current = node.next.take();
    }
}

/// 按顺序借用队列中每个元素的值
pub struct Iter<'a> {
    next: Option<&'a Element>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: &'a Link) -> Self {
        Self { next: head.as_deref() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Option<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_deref()
        })
    }
}

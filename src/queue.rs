//! 字符串队列
//!
//! 这个模块提供一个基于单向链表的队列，不考虑线程安全。队列持有整条链，
//! 另外保存一个不拥有所有权的尾指针以及缓存的元素个数。
//!
//! # 内存布局
//! ```text
//! head (Box)                 tail (NonNull)
//!  |                          |
//!  v                          v
//! +-------+    +-------+    +-------+
//! | "gnu" |--->| "bar" |--->| "foo" |---> None
//! +-------+    +-------+    +-------+
//! ```
//!
//! # 不变式
//! - `len == 0` 当且仅当 head 与 tail 都为空
//! - 从 head 沿 next 走 `len - 1` 步恰好到达 tail，且 tail 没有后继
//! - 翻转与排序只改写链接，不申请也不释放节点

use std::fmt::{self, Display};
use std::ptr::NonNull;

use derive_new::new;

use crate::chain::{self, Element, Iter, Link};
use crate::error::QueueError;
use crate::sort;

#[derive(Default, new)]
pub struct Queue {
    // 拥有所有权
    #[new(default)]
    head: Link,
    // 不拥有所有权
    #[new(default)]
    tail: Option<NonNull<Element>>,
    // 长度
    #[new(default)]
    len: usize,
}

impl Queue {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.head)
    }

    /// 在头部插入 `s` 的副本，`None` 表示插入一个不带值的元素
    ///
    /// 申请存储失败时队列保持不变。
    pub fn insert_head(&mut self, s: Option<&[u8]>) -> Result<(), QueueError> {
        let mut new_box = Element::with_copy(s)?;

        match self.head.take() {
            Some(old_head) => new_box.next = Some(old_head),
            // 空队列
            None => self.tail = Some(NonNull::from(new_box.as_mut())),
        }

        self.head = Some(new_box);
        self.len += 1;
        Ok(())
    }

    /// 在尾部插入 `s` 的副本
    ///
    /// 和 [`insert_head`](Self::insert_head) 不同，尾部插入不接受 `None`，
    /// 返回 `InvalidArgument`。
    pub fn insert_tail(&mut self, s: Option<&[u8]>) -> Result<(), QueueError> {
        let s = s.ok_or(QueueError::InvalidArgument("tail insertion requires a value"))?;
        let mut new_box = Element::with_copy(Some(s))?;

        // 转为裸指针 避免borrow check
        let p = NonNull::from(new_box.as_mut());

        match self.tail {
            // SAFETY: tail 指向 head 链上的最后一个节点，该节点由队列持有且没有其他引用
            Some(mut tail) => unsafe {
                tail.as_mut().next = Some(new_box);
            },
            None => self.head = Some(new_box),
        }

        self.tail = Some(p);
        self.len += 1;
        Ok(())
    }

    pub fn push_front(&mut self, s: impl AsRef<[u8]>) -> Result<(), QueueError> {
        self.insert_head(Some(s.as_ref()))
    }

    pub fn push_back(&mut self, s: impl AsRef<[u8]>) -> Result<(), QueueError> {
        self.insert_tail(Some(s.as_ref()))
    }

    /// 依次在尾部插入每个值，遇到第一个错误即停止
    pub fn extend_tail<I>(&mut self, values: I) -> Result<(), QueueError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        values.into_iter().try_for_each(|s| self.push_back(s))
    }

    /// 移除头部元素，并把它的值复制到 `buf`
    ///
    /// 至多复制 `buf.len() - 1` 字节，随后写入结尾的 0；值更长时静默截断。
    /// 不带值的元素按空串处理。长度为 0 的缓冲区放不下结尾的 0，什么都不写。
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<(), QueueError> {
        let head = self.head.as_deref().ok_or(QueueError::EmptyQueue)?;
        let buf = buf.ok_or(QueueError::NullBuffer)?;
        copy_truncated(head.value.as_deref().unwrap_or_default(), buf);

        if let Some(mut old_head) = self.head.take() {
            self.head = old_head.next.take();
        }
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(())
    }

    /// 原地翻转，头尾互换
    pub fn reverse(&mut self) {
        if self.len <= 1 {
            return;
        }

        // 翻转只移动 Box，节点本身不搬动，原头节点的地址就是新的尾
        let old_head = self.head.as_deref_mut().map(NonNull::from);
        self.head = chain::reverse(self.head.take());
        self.tail = old_head;
    }

    /// 按字节序升序排序，相等元素的相对顺序不保证
    pub fn sort(&mut self) {
        if self.len <= 1 {
            return;
        }

        self.head = sort::natural_sort(self.head.take());
        self.tail = chain::last(&mut self.head);
    }
}

fn copy_truncated(value: &[u8], buf: &mut [u8]) {
    let Some(room) = buf.len().checked_sub(1) else {
        return;
    };
    let n = value.len().min(room);
    buf[..n].copy_from_slice(&value[..n]);
    buf[n] = 0;
}

impl Drop for Queue {
    fn drop(&mut self) {
        chain::release(self.head.take());
    }
}

impl Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue [")?;

        let mut values = self.iter().peekable();
        while let Some(value) = values.next() {
            match value {
                Some(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes))?,
                None => write!(f, "NULL")?,
            }
            if values.peek().is_some() {
                write!(f, ", ")?;
            }
        }

        write!(f, "]")
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("len", &self.len)
            .field("values", &Values(self))
            .finish()
    }
}

/// 逐个迭代输出元素，不沿 `next` 递归
struct Values<'a>(&'a Queue);

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|v| v.map(String::from_utf8_lossy)))
            .finish()
    }
}

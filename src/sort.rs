//! 自然归并排序
//!
//! 先从左到右扫描一遍，把链切成若干个最长的单调段（run），
//! 严格递减的段原地翻转成递增段；随后相邻的段两两归并，直到只剩一段。
//!
//! ```text
//! 输入:   c -> d -> e -> b -> a -> f -> g
//! 切段:   [c d e]  [b a]  [f g]
//! 规整:   [c d e]  [a b]  [f g]
//! 第一轮: [a b c d e]     [f g]
//! 第二轮: [a b c d e f g]
//! ```
//!
//! 整个过程只改写 `next` 链接，不申请也不释放任何节点；
//! 段列表只在一次排序调用内存在。段列表的长度等于段数，
//! 最坏情况（锯齿输入）约为 n / 2，而不是 O(log n)。

use tracing::debug;

use crate::chain::{self, Element, Link};

/// 当前段的扫描方向，由段首两个节点决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// 非递减
    Ascending,
    /// 严格递减
    Descending,
}

impl Direction {
    fn of(first: &Element, second: &Element) -> Self {
        if second.value < first.value {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    fn continues(self, prev: &Element, next: &Element) -> bool {
        match self {
            Direction::Ascending => prev.value <= next.value,
            Direction::Descending => next.value < prev.value,
        }
    }
}

/// 从 `head` 开始切下一个最长的单调段
///
/// 返回 (段, 剩余的链, 段的方向)。节点逐个从原链摘下并接到段尾。
fn detach_run(head: Box<Element>) -> (Link, Link, Direction) {
    let direction = match head.next.as_deref() {
        Some(second) => Direction::of(&head, second),
        None => Direction::Ascending,
    };

    let mut run = None;
    let mut slot = &mut run;
    let mut rest = Some(head);
    while let Some(mut node) = rest.take() {
        rest = node.next.take();
        let extends = rest
            .as_deref()
            .is_some_and(|next| direction.continues(&node, next));
        slot = &mut slot.insert(node).next;
        if !extends {
            break;
        }
    }

    (run, rest, direction)
}

/// 归并两条递增链
///
/// 相等时优先取 `left` 的节点。
pub(crate) fn merge(mut left: Link, mut right: Link) -> Link {
    let mut merged = None;
    let mut slot = &mut merged;

    loop {
        let take_left = match (&left, &right) {
            (Some(l), Some(r)) => l.value <= r.value,
            _ => break,
        };
        let source = if take_left { &mut left } else { &mut right };
        let Some(mut node) = source.take() else {
            break;
        };
        *source = node.next.take();
        slot = &mut slot.insert(node).next;
    }

    // 剩下的那条链直接接在末尾
    *slot = left.or(right);
    merged
}

/// 把段列表里相邻的段两两归并，落单的最后一段原样保留
fn merge_pass(runs: Vec<Link>) -> Vec<Link> {
    let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
    let mut runs = runs.into_iter();
    while let Some(left) = runs.next() {
        merged.push(match runs.next() {
            Some(right) => merge(left, right),
            None => left,
        });
    }
    merged
}

/// 对整条链做自然归并排序，返回排好序的链
pub(crate) fn natural_sort(head: Link) -> Link {
    let mut runs = Vec::new();
    let mut rest = head;
    while let Some(node) = rest {
        let (run, remainder, direction) = detach_run(node);
        runs.push(match direction {
            Direction::Ascending => run,
            Direction::Descending => chain::reverse(run),
        });
        rest = remainder;
    }

    debug!(runs = runs.len(), "detected runs");

    let mut passes = 0usize;
    while runs.len() > 1 {
        runs = merge_pass(runs);
        passes += 1;
    }
    if passes > 0 {
        debug!(passes, "merged runs");
    }

    runs.pop().flatten()
}

//! 事件源（EventSource）
//!
//! 以组合方式嵌入实体的待分发事件列表：
//! - `record`：同步、按发生顺序追加事件；
//! - `drain`：原子地取出并清空列表，连续两次 drain 第二次必为空；
//! - 实体只累积事件，从不自行分发。
//!
use crate::domain_event::{DomainEvent, EventEnvelope};

/// 待分发事件列表
///
/// 克隆实体时不会复制待分发事件，避免同一事件被两个副本各分发一次。
#[derive(Debug, Default)]
pub struct EventSource {
    pending: Vec<EventEnvelope>,
}

impl EventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一条事件，返回其信封的引用
    pub fn record<E: DomainEvent>(&mut self, event: E) -> &EventEnvelope {
        let sequence = self.pending.len();
        let envelope = EventEnvelope::with_sequence(event, sequence);
        tracing::trace!(
            event_type = envelope.metadata().event_type(),
            sequence,
            "domain event recorded"
        );
        self.pending.push(envelope);
        &self.pending[sequence]
    }

    /// 取出全部待分发事件并清空
    pub fn drain(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[EventEnvelope] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Clone for EventSource {
    fn clone(&self) -> Self {
        Self::default()
    }
}

/// 具备事件累积能力的实体
pub trait EventSourced {
    fn event_source(&self) -> &EventSource;

    fn event_source_mut(&mut self) -> &mut EventSource;

    fn drain_events(&mut self) -> Vec<EventEnvelope> {
        self.event_source_mut().drain()
    }

    fn has_pending_events(&self) -> bool {
        !self.event_source().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct IncomeAdded {
        user_id: String,
        amount: i64,
    }

    impl DomainEvent for IncomeAdded {
        fn event_type(&self) -> &'static str {
            "test.income_added"
        }

        fn owner_id(&self) -> String {
            self.user_id.clone()
        }
    }

    #[derive(Default, Clone)]
    struct Wallet {
        events: EventSource,
    }

    impl Wallet {
        fn add(&mut self, amount: i64) {
            self.events.record(IncomeAdded {
                user_id: "u-1".into(),
                amount,
            });
        }
    }

    impl EventSourced for Wallet {
        fn event_source(&self) -> &EventSource {
            &self.events
        }

        fn event_source_mut(&mut self) -> &mut EventSource {
            &mut self.events
        }
    }

    fn amounts(events: &[EventEnvelope]) -> Vec<i64> {
        events
            .iter()
            .map(|e| e.downcast_ref::<IncomeAdded>().unwrap().amount)
            .collect()
    }

    #[test]
    fn drain_returns_append_order_then_empty() {
        let mut wallet = Wallet::default();
        wallet.add(10);
        wallet.add(20);
        wallet.add(30);
        assert!(wallet.has_pending_events());

        let first = wallet.drain_events();
        assert_eq!(amounts(&first), vec![10, 20, 30]);
        let sequences: Vec<usize> = first.iter().map(|e| e.metadata().sequence()).collect();
        assert_eq!(sequences, vec![0, 1, 2]);

        let second = wallet.drain_events();
        assert!(second.is_empty());
        assert!(!wallet.has_pending_events());
    }

    #[test]
    fn recording_after_drain_starts_a_new_cycle() {
        let mut wallet = Wallet::default();
        wallet.add(1);
        let _ = wallet.drain_events();
        wallet.add(2);

        let next = wallet.drain_events();
        assert_eq!(amounts(&next), vec![2]);
        assert_eq!(next[0].metadata().sequence(), 0);
    }

    #[test]
    fn clone_does_not_duplicate_pending_events() {
        let mut wallet = Wallet::default();
        wallet.add(5);

        let mut copy = wallet.clone();
        assert!(copy.drain_events().is_empty());
        assert_eq!(wallet.event_source().len(), 1);
    }
}

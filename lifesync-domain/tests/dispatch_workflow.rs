use async_trait::async_trait;
use lifesync_domain::domain_event::{DomainEvent, Metadata};
use lifesync_domain::entity::Entity;
use lifesync_domain::event_source::{EventSource, EventSourced};
use lifesync_domain::eventing::{DispatchConfig, EventDispatcher, EventHandler, HandlerRegistry};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq)]
struct Income {
    id: u32,
    amount: i64,
}

#[derive(Debug)]
struct IncomeCreated {
    user_id: String,
    income: Income,
}

impl DomainEvent for IncomeCreated {
    fn event_type(&self) -> &'static str {
        "income.created"
    }

    fn owner_id(&self) -> String {
        self.user_id.clone()
    }
}

#[derive(Debug)]
struct ExpenseCreated {
    user_id: String,
    amount: i64,
}

impl DomainEvent for ExpenseCreated {
    fn event_type(&self) -> &'static str {
        "expense.created"
    }

    fn owner_id(&self) -> String {
        self.user_id.clone()
    }
}

#[derive(Default)]
struct Ledger {
    id: String,
    incomes: Vec<Income>,
    events: EventSource,
}

impl Ledger {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn add_income(&mut self, amount: i64) {
        let income = Income {
            id: self.incomes.len() as u32 + 1,
            amount,
        };
        self.incomes.push(income.clone());
        self.events.record(IncomeCreated {
            user_id: self.id.clone(),
            income,
        });
    }

    fn add_expense(&mut self, amount: i64) {
        self.events.record(ExpenseCreated {
            user_id: self.id.clone(),
            amount,
        });
    }
}

impl Entity for Ledger {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl EventSourced for Ledger {
    fn event_source(&self) -> &EventSource {
        &self.events
    }

    fn event_source_mut(&mut self) -> &mut EventSource {
        &mut self.events
    }
}

#[derive(Default)]
struct Journal {
    lines: Mutex<Vec<String>>,
}

impl Journal {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventHandler<IncomeCreated> for Journal {
    async fn handle(&self, event: &IncomeCreated, metadata: &Metadata) -> anyhow::Result<()> {
        assert_eq!(metadata.owner_id(), event.user_id);
        self.lines.lock().unwrap().push(format!(
            "income#{}={}",
            event.income.id, event.income.amount
        ));
        Ok(())
    }
}

#[async_trait]
impl EventHandler<ExpenseCreated> for Journal {
    async fn handle(&self, event: &ExpenseCreated, _metadata: &Metadata) -> anyhow::Result<()> {
        self.lines
            .lock()
            .unwrap()
            .push(format!("expense={}", event.amount));
        Ok(())
    }
}

fn dispatcher_with(registry: HandlerRegistry) -> EventDispatcher {
    EventDispatcher::new(Arc::new(registry), DispatchConfig::default())
}

#[tokio::test]
async fn two_incomes_are_drained_and_handled_in_order() {
    let journal = Arc::new(Journal::default());
    let dispatcher = dispatcher_with(
        HandlerRegistry::builder()
            .register::<IncomeCreated, _>(journal.clone())
            .build(),
    );

    let mut ledger = Ledger::new("u-1");
    ledger.add_income(100);
    ledger.add_income(250);

    let events = ledger.drain_events();
    let drained: Vec<&Income> = events
        .iter()
        .map(|e| &e.downcast_ref::<IncomeCreated>().unwrap().income)
        .collect();
    assert_eq!(
        drained,
        vec![
            &Income { id: 1, amount: 100 },
            &Income { id: 2, amount: 250 }
        ]
    );
    assert!(ledger.drain_events().is_empty());

    let report = dispatcher
        .dispatch(&events, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(journal.lines(), vec!["income#1=100", "income#2=250"]);
    assert_eq!(report.invocations, 2);
}

#[tokio::test]
async fn each_variant_handler_runs_once_in_input_order() {
    let journal = Arc::new(Journal::default());
    let dispatcher = dispatcher_with(
        HandlerRegistry::builder()
            .register::<IncomeCreated, _>(journal.clone())
            .register::<ExpenseCreated, _>(journal.clone())
            .build(),
    );

    let mut ledger = Ledger::new("u-2");
    ledger.add_expense(5);
    ledger.add_income(10);
    ledger.add_expense(7);

    let report = dispatcher
        .drain_and_dispatch(&mut ledger, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        journal.lines(),
        vec!["expense=5", "income#1=10", "expense=7"]
    );
    assert_eq!(report.events, 3);
    assert_eq!(report.invocations, 3);
    assert!(!ledger.has_pending_events());
}

#[tokio::test]
async fn duplicate_registration_invokes_twice() {
    let journal = Arc::new(Journal::default());
    let dispatcher = dispatcher_with(
        HandlerRegistry::builder()
            .register::<IncomeCreated, _>(journal.clone())
            .register::<IncomeCreated, _>(journal.clone())
            .build(),
    );

    let mut ledger = Ledger::new("u-3");
    ledger.add_income(42);

    dispatcher
        .drain_and_dispatch(&mut ledger, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(journal.lines(), vec!["income#1=42", "income#1=42"]);
}

#[tokio::test]
async fn events_without_handlers_leave_no_trace() {
    let journal = Arc::new(Journal::default());
    let dispatcher = dispatcher_with(
        HandlerRegistry::builder()
            .register::<IncomeCreated, _>(journal.clone())
            .build(),
    );

    let mut ledger = Ledger::new("u-4");
    ledger.add_expense(1);

    let report = dispatcher
        .drain_and_dispatch(&mut ledger, &CancellationToken::new())
        .await
        .unwrap();

    assert!(journal.lines().is_empty());
    assert_eq!(report.invocations, 0);
    assert!(report.is_clean());
}

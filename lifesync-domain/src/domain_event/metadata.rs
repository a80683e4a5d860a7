use super::BusinessContext;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 事件元数据
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[builder(default = Uuid::new_v4())]
    event_id: Uuid,
    #[builder(into)]
    event_type: String,
    #[builder(into)]
    owner_id: String,
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
    /// 在所属事件源中的记录序号（自上次 drain 起算）
    #[builder(default)]
    sequence: usize,
    /// 触发该事件的业务语境，提交时由应用层写入
    #[builder(default)]
    context: BusinessContext,
}

impl Metadata {
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn context(&self) -> &BusinessContext {
        &self.context
    }

    pub(crate) fn set_context(&mut self, context: BusinessContext) {
        self.context = context;
    }
}

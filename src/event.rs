use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// EventBridge scheduled-event envelope. Every field is optional: the
/// notifier needs nothing from the event and only echoes it back.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ScheduledEvent {
    pub source: Option<String>,
    #[serde(rename = "detail-type")]
    pub detail_type: Option<String>,
    pub detail: Option<ScheduleDetail>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ScheduleDetail {
    #[serde(alias = "scheduleName")]
    pub schedule_name: Option<String>,
    #[serde(alias = "timeZone")]
    pub timezone: Option<String>,
    pub description: Option<String>,
}

impl ScheduledEvent {
    pub fn from_value(event: &Value) -> Self {
        let scheduled = match ScheduledEvent::deserialize(event) {
            Ok(scheduled) => scheduled,
            Err(error) => {
                warn!("Unexpected event shape ({}), continuing without schedule metadata", error);
                return ScheduledEvent::default();
            }
        };
        if scheduled.source.is_none() || scheduled.detail_type.is_none() {
            warn!("Event is missing source or detail-type, continuing anyway");
        }
        scheduled
    }

    pub fn schedule_name(&self) -> Option<String> {
        self.detail.as_ref().and_then(|detail| detail.schedule_name.clone())
    }

    pub fn timezone(&self) -> Option<String> {
        self.detail.as_ref().and_then(|detail| detail.timezone.clone())
    }
}

use common::constants::{EVENT_STANDARD, EVENT_VERSION};
use common::types::{Amount, TicketCount};
use common::PrizeTier;
use judge::{Statistics, Ticket, WinningNumbers};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct PurchaseEvent<'a> {
    pub amount: Amount,
    pub tickets: &'a [Ticket],
}

#[derive(Serialize)]
struct TierCount {
    pub tier: PrizeTier,
    pub count: TicketCount,
}

#[derive(Serialize)]
struct StatisticsEvent {
    pub purchase_amount: Amount,
    pub counts: Vec<TierCount>,
    /// Decimal string, u128 does not survive every JSON reader.
    pub total_payout: String,
    pub payout_rate: Option<f64>,
}

pub(crate) fn event_json<T: Serialize>(event: &str, data: T) -> Value {
    json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_VERSION,
        "event": event,
        "data": [data]
    })
}

/// Writes `EVENT_JSON:` lines to stderr when enabled.
#[derive(Debug, Clone, Copy)]
pub struct EventLog {
    enabled: bool,
}

impl EventLog {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn log_event<T: Serialize>(&self, event: &str, data: T) {
        if !self.enabled {
            return;
        }

        eprintln!("EVENT_JSON:{}", event_json(event, data));
    }

    pub fn tickets_purchased(&self, amount: Amount, tickets: &[Ticket]) {
        self.log_event("tickets_purchased", PurchaseEvent { amount, tickets });
    }

    pub fn winning_numbers_set(&self, winning: &WinningNumbers) {
        self.log_event("winning_numbers_set", winning);
    }

    pub fn statistics_computed(&self, stats: &Statistics) {
        self.log_event("statistics_computed", statistics_event(stats));
    }
}

fn statistics_event(stats: &Statistics) -> StatisticsEvent {
    StatisticsEvent {
        purchase_amount: stats.purchase_amount(),
        counts: PrizeTier::ALL
            .iter()
            .map(|tier| TierCount { tier: *tier, count: stats.count(*tier) })
            .collect(),
        total_payout: stats.total_payout().to_string(),
        payout_rate: stats.payout_rate().ok().map(|rate| rate.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use judge::{BonusNumber, NumberSet};

    use super::*;

    #[test]
    fn test_event_envelope() {
        let value = event_json("tickets_purchased", json!({"amount": 1000}));

        assert_eq!(value["standard"], "lotto");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["event"], "tickets_purchased");
        assert_eq!(value["data"][0]["amount"], 1000);
    }

    #[test]
    fn test_statistics_payload() {
        let winning = NumberSet::parse("1,2,3,4,5,6").unwrap();
        let bonus = BonusNumber::validate("7", &winning).unwrap();
        let tickets = vec![Ticket::new(NumberSet::parse("1,2,3,10,11,12").unwrap())];
        let stats = Statistics::aggregate(&tickets, &winning, bonus, 1_000);

        let value = event_json("statistics_computed", statistics_event(&stats));
        let data = &value["data"][0];
        assert_eq!(data["purchase_amount"], 1000);
        assert_eq!(data["total_payout"], "5000");
        assert_eq!(data["payout_rate"], 5.0);
        assert_eq!(data["counts"][1]["tier"], "Fifth");
        assert_eq!(data["counts"][1]["count"], 1);
    }

    #[test]
    fn test_undefined_rate_is_null() {
        let value = event_json("statistics_computed", statistics_event(&Statistics::new(0)));
        assert!(value["data"][0]["payout_rate"].is_null());
    }
}

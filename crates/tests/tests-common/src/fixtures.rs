//! Accounts and subscriptions shared by the test suites.

use chrono::{TimeZone, Utc};

use cloudflare_client::{Account, RatePlan, Subscription};

pub const ACME_ACCOUNT_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";
pub const GLOBEX_ACCOUNT_ID: &str = "5a7805061c76ada191ed06f989cc3dac";
pub const INITECH_ACCOUNT_ID: &str = "9a7806061c88ada191ed06f989cc3dac";

pub fn account(id: &str, name: &str) -> Account {
    Account {
        name: Some(name.to_string()),
        account_type: Some("standard".to_string()),
        ..Account::new(id)
    }
}

/// A monthly, paid subscription with a zone-scoped rate plan.
pub fn subscription(id: &str, public_name: &str, price: f64) -> Subscription {
    Subscription {
        id: Some(id.to_string()),
        currency: Some("USD".to_string()),
        current_period_end: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).single(),
        current_period_start: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).single(),
        frequency: Some("monthly".to_string()),
        price: Some(price),
        rate_plan: Some(RatePlan {
            id: Some(public_name.to_lowercase().replace(' ', "_")),
            currency: Some("USD".to_string()),
            externally_managed: Some(false),
            is_contract: Some(false),
            public_name: Some(public_name.to_string()),
            scope: Some("zone".to_string()),
            sets: Some(vec![]),
        }),
        state: Some("Paid".to_string()),
    }
}

pub fn acme_subscriptions() -> Vec<Subscription> {
    vec![
        subscription("acme-pro", "Pro Plan", 20.0),
        subscription("acme-business", "Business Plan", 200.0),
        subscription("acme-workers", "Workers Paid", 5.0),
    ]
}

pub fn globex_subscriptions() -> Vec<Subscription> {
    vec![Subscription {
        state: Some("Trial".to_string()),
        frequency: Some("yearly".to_string()),
        ..subscription("globex-enterprise", "Enterprise Plan", 5000.0)
    }]
}

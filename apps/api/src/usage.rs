//! Usage Ledger — per-client daily quotas for the generator-backed actions.
//!
//! Counters live only in process memory and reset lazily: the first time a
//! client is seen on a new UTC day its entry is zeroed. No background sweep.
//! Quota-exceeded is a normal return value, never an error path.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::errors::AppError;

/// The actions subject to a daily cap, each with its own fixed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Interview,
    ResumeCheck,
    PitchReview,
    RoleplayReview,
    SoftSkillReview,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Interview,
        ActionKind::ResumeCheck,
        ActionKind::PitchReview,
        ActionKind::RoleplayReview,
        ActionKind::SoftSkillReview,
    ];

    pub fn daily_limit(self) -> u32 {
        match self {
            ActionKind::Interview => 3,
            ActionKind::ResumeCheck => 2,
            ActionKind::PitchReview => 2,
            ActionKind::RoleplayReview => 3,
            ActionKind::SoftSkillReview => 3,
        }
    }

    /// User-facing refusal message for this kind's limit.
    pub fn limit_message(self) -> &'static str {
        match self {
            ActionKind::Interview => {
                "You've reached your daily limit of 3 practice interviews. Come back tomorrow for more practice!"
            }
            ActionKind::ResumeCheck => {
                "Resume check limit reached for today. Upgrade to Pro for unlimited access."
            }
            ActionKind::PitchReview => {
                "Pitch review limit reached for today. Come back tomorrow to keep polishing!"
            }
            ActionKind::RoleplayReview => {
                "Roleplay practice limit reached for today. Come back tomorrow for another round!"
            }
            ActionKind::SoftSkillReview => {
                "Soft-skill practice limit reached for today. Come back tomorrow for more scenarios!"
            }
        }
    }

    fn index(self) -> usize {
        match self {
            ActionKind::Interview => 0,
            ActionKind::ResumeCheck => 1,
            ActionKind::PitchReview => 2,
            ActionKind::RoleplayReview => 3,
            ActionKind::SoftSkillReview => 4,
        }
    }
}

/// Per-client counters for one UTC day.
#[derive(Debug, Clone)]
struct UsageEntry {
    counts: [u32; ActionKind::ALL.len()],
    last_reset: NaiveDate,
}

impl UsageEntry {
    fn fresh(today: NaiveDate) -> Self {
        Self {
            counts: [0; ActionKind::ALL.len()],
            last_reset: today,
        }
    }
}

/// Outcome of a quota check. A refusal carries the kind's user-facing message.
#[derive(Debug, Clone, Copy)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub message: Option<&'static str>,
}

impl QuotaDecision {
    /// Turns a refusal into the quota error returned untouched to the client.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.allowed {
            Ok(())
        } else {
            Err(AppError::QuotaExceeded(
                self.message.unwrap_or("Daily limit reached.").to_string(),
            ))
        }
    }
}

/// Remaining allowance per action kind, as served by `GET /api/usage`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub interviews_remaining: u32,
    pub resume_checks_remaining: u32,
    pub pitch_reviews_remaining: u32,
    pub roleplay_reviews_remaining: u32,
    pub soft_skill_reviews_remaining: u32,
    /// Next UTC midnight, when every counter resets.
    pub resets_at: DateTime<Utc>,
}

/// In-memory daily quota ledger keyed by client network address.
///
/// Shared NAT collisions are an accepted limitation of address keying.
/// All mutation happens under one async mutex held only for map operations,
/// never across an await point.
#[derive(Debug, Default)]
pub struct UsageLedger {
    entries: Mutex<HashMap<String, UsageEntry>>,
}

impl UsageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads (and lazily resets) the client's counters for today. Side-effect
    /// free apart from zeroing a stale entry.
    pub async fn check_allowed(&self, client: &str, kind: ActionKind) -> QuotaDecision {
        self.check_allowed_on(client, kind, today_utc()).await
    }

    /// Increments the counter for `kind`. Call only after the gated action has
    /// succeeded — a failed action must not consume quota.
    ///
    /// The counter saturates at the kind's limit, so racing check/record
    /// interleavings can never drive it past the cap.
    pub async fn record(&self, client: &str, kind: ActionKind) {
        self.record_on(client, kind, today_utc()).await;
    }

    /// Remaining allowance per kind plus the next UTC reset instant.
    pub async fn stats(&self, client: &str) -> UsageStats {
        self.stats_on(client, today_utc()).await
    }

    /// Clears every client entry. Testing/ops hook.
    #[allow(dead_code)]
    pub async fn reset_all(&self) {
        self.entries.lock().await.clear();
    }

    async fn check_allowed_on(&self, client: &str, kind: ActionKind, today: NaiveDate) -> QuotaDecision {
        let mut entries = self.entries.lock().await;
        let entry = entry_for_day(&mut entries, client, today);
        if entry.counts[kind.index()] >= kind.daily_limit() {
            QuotaDecision {
                allowed: false,
                message: Some(kind.limit_message()),
            }
        } else {
            QuotaDecision {
                allowed: true,
                message: None,
            }
        }
    }

    async fn record_on(&self, client: &str, kind: ActionKind, today: NaiveDate) {
        let mut entries = self.entries.lock().await;
        let entry = entry_for_day(&mut entries, client, today);
        let count = &mut entry.counts[kind.index()];
        *count = (*count + 1).min(kind.daily_limit());
    }

    async fn stats_on(&self, client: &str, today: NaiveDate) -> UsageStats {
        let mut entries = self.entries.lock().await;
        let entry = entry_for_day(&mut entries, client, today);
        let remaining =
            |kind: ActionKind| kind.daily_limit().saturating_sub(entry.counts[kind.index()]);
        UsageStats {
            interviews_remaining: remaining(ActionKind::Interview),
            resume_checks_remaining: remaining(ActionKind::ResumeCheck),
            pitch_reviews_remaining: remaining(ActionKind::PitchReview),
            roleplay_reviews_remaining: remaining(ActionKind::RoleplayReview),
            soft_skill_reviews_remaining: remaining(ActionKind::SoftSkillReview),
            resets_at: next_utc_midnight(today),
        }
    }
}

/// Fetches the client's entry, zeroing it first if it was last reset on an
/// earlier day. The lazy reset is the only mutation on read paths.
fn entry_for_day<'a>(
    entries: &'a mut HashMap<String, UsageEntry>,
    client: &str,
    today: NaiveDate,
) -> &'a mut UsageEntry {
    let entry = entries
        .entry(client.to_string())
        .or_insert_with(|| UsageEntry::fresh(today));
    if entry.last_reset != today {
        *entry = UsageEntry::fresh(today);
    }
    entry
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

fn next_utc_midnight(today: NaiveDate) -> DateTime<Utc> {
    let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
    Utc.from_utc_datetime(&tomorrow.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_fresh_client_is_allowed() {
        let ledger = UsageLedger::new();
        let decision = ledger.check_allowed("10.0.0.1", ActionKind::Interview).await;
        assert!(decision.allowed);
        assert!(decision.message.is_none());
    }

    #[tokio::test]
    async fn test_fourth_interview_is_refused_with_the_limit_message() {
        let ledger = UsageLedger::new();
        for _ in 0..3 {
            assert!(ledger.check_allowed("a", ActionKind::Interview).await.allowed);
            ledger.record("a", ActionKind::Interview).await;
        }

        let decision = ledger.check_allowed("a", ActionKind::Interview).await;
        assert!(!decision.allowed);
        assert!(decision.message.unwrap().contains("3 practice interviews"));

        let stats = ledger.stats("a").await;
        assert_eq!(stats.interviews_remaining, 0);
        // Other kinds are untouched.
        assert_eq!(stats.resume_checks_remaining, 2);
    }

    #[tokio::test]
    async fn test_clients_are_independent() {
        let ledger = UsageLedger::new();
        for _ in 0..2 {
            ledger.record("a", ActionKind::ResumeCheck).await;
        }
        assert!(!ledger.check_allowed("a", ActionKind::ResumeCheck).await.allowed);
        assert!(ledger.check_allowed("b", ActionKind::ResumeCheck).await.allowed);
    }

    #[tokio::test]
    async fn test_counters_reset_lazily_on_the_next_day() {
        let ledger = UsageLedger::new();
        let d1 = day(2025, 3, 9);
        let d2 = day(2025, 3, 10);

        for _ in 0..3 {
            ledger.record_on("a", ActionKind::Interview, d1).await;
        }
        assert!(!ledger.check_allowed_on("a", ActionKind::Interview, d1).await.allowed);

        // No explicit reset call: the first touch on day two zeroes the entry.
        assert!(ledger.check_allowed_on("a", ActionKind::Interview, d2).await.allowed);
        let stats = ledger.stats_on("a", d2).await;
        assert_eq!(stats.interviews_remaining, 3);
    }

    #[tokio::test]
    async fn test_record_saturates_at_the_daily_limit() {
        let ledger = UsageLedger::new();
        for _ in 0..10 {
            ledger.record("a", ActionKind::ResumeCheck).await;
        }
        let entries = ledger.entries.lock().await;
        let counts = entries.get("a").unwrap().counts;
        assert_eq!(counts[ActionKind::ResumeCheck.index()], 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_quota_is_never_over_consumed_under_parallel_attempts() {
        let ledger = Arc::new(UsageLedger::new());
        let mut handles = Vec::new();
        for _ in 0..20 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                if ledger.check_allowed("a", ActionKind::Interview).await.allowed {
                    ledger.record("a", ActionKind::Interview).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let entries = ledger.entries.lock().await;
        let counts = entries.get("a").unwrap().counts;
        assert!(counts[ActionKind::Interview.index()] <= ActionKind::Interview.daily_limit());
    }

    #[tokio::test]
    async fn test_reset_all_clears_every_client() {
        let ledger = UsageLedger::new();
        ledger.record("a", ActionKind::Interview).await;
        ledger.record("b", ActionKind::PitchReview).await;
        ledger.reset_all().await;

        assert_eq!(ledger.stats("a").await.interviews_remaining, 3);
        assert_eq!(ledger.stats("b").await.pitch_reviews_remaining, 2);
    }

    #[tokio::test]
    async fn test_stats_reports_the_next_utc_midnight() {
        let ledger = UsageLedger::new();
        let stats = ledger.stats_on("a", day(2025, 3, 9)).await;
        assert_eq!(
            stats.resets_at,
            Utc.from_utc_datetime(&day(2025, 3, 10).and_time(NaiveTime::MIN))
        );
    }

    #[test]
    fn test_quota_decision_into_result_maps_refusal() {
        let ok = QuotaDecision {
            allowed: true,
            message: None,
        };
        assert!(ok.into_result().is_ok());

        let refused = QuotaDecision {
            allowed: false,
            message: Some(ActionKind::ResumeCheck.limit_message()),
        };
        let err = refused.into_result().unwrap_err();
        assert!(matches!(err, AppError::QuotaExceeded(msg) if msg.contains("Resume check limit")));
    }
}

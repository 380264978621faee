use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::clock::Clock;
use crate::models::{
    CycleConfiguration, CycleStats, Mood, MoodEntry, Severity, Symptom, SymptomEntry,
    MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH,
};
use crate::store::{load_json, save_json, to_json, KvStore, StoreError, CYCLE_KEY, MOODS_KEY, SYMPTOMS_KEY};

#[derive(Debug, Error)]
pub enum JournalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("energy must be between 1 and 5, got {0}")]
    InvalidEnergy(u8),

    #[error("period length must be at least 1 and shorter than the {cycle_length}-day cycle, got {period_length}")]
    InvalidPeriodLength { period_length: i64, cycle_length: i64 },
}

pub struct Onboarding {
    pub last_period_start: NaiveDate,
    pub cycle_length: i64,
    pub period_length: Option<i64>,
}

pub struct NewMood {
    pub mood: Mood,
    pub energy: u8,
    pub notes: String,
    pub symptoms: Vec<Symptom>,
}

pub struct Journal {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    // Serialises load-modify-save so concurrent requests don't drop writes.
    write_lock: Mutex<()>,
}

impl Journal {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub async fn cycle_config(&self) -> Result<CycleConfiguration, JournalError> {
        Ok(load_json(self.store.as_ref(), CYCLE_KEY).await?.unwrap_or_default())
    }

    /// Marks today as the start of a new period.
    pub async fn log_period_today(&self) -> Result<CycleConfiguration, JournalError> {
        let _guard = self.write_lock.lock().await;
        let today = self.today();

        let mut config = self.cycle_config().await?;
        config.last_period_start = Some(today);
        config.period_dates.push(today);
        save_json(self.store.as_ref(), CYCLE_KEY, &config).await?;

        tracing::info!("🩸 Period logged for {}", today);
        Ok(config)
    }

    pub async fn complete_onboarding(
        &self,
        onboarding: Onboarding,
    ) -> Result<CycleConfiguration, JournalError> {
        let _guard = self.write_lock.lock().await;

        let mut config = self.cycle_config().await?;
        let cycle_length = onboarding.cycle_length.clamp(MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH);
        let period_length = onboarding.period_length.unwrap_or(config.period_length);
        if period_length < 1 || period_length >= cycle_length {
            return Err(JournalError::InvalidPeriodLength { period_length, cycle_length });
        }

        config.cycle_length = cycle_length;
        config.period_length = period_length;
        config.last_period_start = Some(onboarding.last_period_start);
        save_json(self.store.as_ref(), CYCLE_KEY, &config).await?;

        tracing::info!(
            "✅ Onboarding complete: cycle {} days, period {} days, last start {}",
            cycle_length,
            period_length,
            onboarding.last_period_start
        );
        Ok(config)
    }

    /// Records today's mood and, if any were picked, today's symptoms.
    ///
    /// Both documents go to the store in one batch.
    pub async fn add_mood_entry(&self, new: NewMood) -> Result<MoodEntry, JournalError> {
        if !(1..=5).contains(&new.energy) {
            return Err(JournalError::InvalidEnergy(new.energy));
        }

        let _guard = self.write_lock.lock().await;
        let today = self.today();

        let entry = MoodEntry {
            id: Uuid::new_v4(),
            date: today,
            mood: new.mood,
            energy: new.energy,
            notes: new.notes,
        };
        let mut moods = self.mood_entries().await?;
        moods.insert(0, entry.clone());
        let mut batch = vec![(MOODS_KEY.to_string(), to_json(MOODS_KEY, &moods)?)];

        if !new.symptoms.is_empty() {
            let severity = Severity::from_symptom_count(new.symptoms.len());
            let symptom_entry = SymptomEntry {
                id: Uuid::new_v4(),
                date: today,
                symptoms: new.symptoms,
                severity,
            };
            let mut symptoms = self.symptom_entries().await?;
            symptoms.insert(0, symptom_entry);
            batch.push((SYMPTOMS_KEY.to_string(), to_json(SYMPTOMS_KEY, &symptoms)?));
        }

        self.store.save_batch(batch).await?;
        Ok(entry)
    }

    /// Newest first.
    pub async fn mood_entries(&self) -> Result<Vec<MoodEntry>, JournalError> {
        Ok(load_json(self.store.as_ref(), MOODS_KEY).await?.unwrap_or_default())
    }

    pub async fn todays_mood(&self) -> Result<Option<MoodEntry>, JournalError> {
        let today = self.today();
        Ok(self.mood_entries().await?.into_iter().find(|e| e.date == today))
    }

    /// Newest first.
    pub async fn symptom_entries(&self) -> Result<Vec<SymptomEntry>, JournalError> {
        Ok(load_json(self.store.as_ref(), SYMPTOMS_KEY).await?.unwrap_or_default())
    }

    /// Lengths of the completed cycles between logged period starts, plus
    /// how much has been journaled.
    pub async fn cycle_stats(&self) -> Result<CycleStats, JournalError> {
        let config = self.cycle_config().await?;
        let mut stats = cycle_stats(&config.period_dates);
        stats.cycle_length = config.cycle_length;
        stats.mood_entries = self.mood_entries().await?.len();
        stats.symptom_logs = self.symptom_entries().await?.len();
        Ok(stats)
    }
}

fn cycle_stats(period_dates: &[NaiveDate]) -> CycleStats {
    let mut starts = period_dates.to_vec();
    starts.sort();
    starts.dedup();

    let cycle_lengths: Vec<i64> = starts
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect();

    let count = cycle_lengths.len() as f64;
    let average_cycle_length = if cycle_lengths.is_empty() {
        None
    } else {
        Some(cycle_lengths.iter().sum::<i64>() as f64 / count)
    };

    CycleStats {
        cycle_length: 0,
        logged_periods: starts.len(),
        cycle_lengths,
        average_cycle_length,
        mood_entries: 0,
        symptom_logs: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Memory store whose batch writes always fail.
    #[derive(Default)]
    struct BrokenBatchStore(MemoryStore);

    #[async_trait]
    impl KvStore for BrokenBatchStore {
        async fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
            self.0.load(key).await
        }

        async fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
            self.0.save(key, value).await
        }

        async fn save_batch(&self, _entries: Vec<(String, Value)>) -> Result<(), StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn journal_on(today: NaiveDate) -> Journal {
        Journal::new(Arc::new(MemoryStore::new()), Arc::new(FixedClock(today)))
    }

    fn mood(energy: u8, symptoms: Vec<Symptom>) -> NewMood {
        NewMood {
            mood: Mood::Calm,
            energy,
            notes: "slept well".to_string(),
            symptoms,
        }
    }

    #[tokio::test]
    async fn fresh_journal_has_default_config() {
        let journal = journal_on(date(2024, 1, 1));
        assert_eq!(journal.cycle_config().await.unwrap(), CycleConfiguration::default());
    }

    #[tokio::test]
    async fn logging_a_period_appends_today() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let first = Journal::new(store.clone(), Arc::new(FixedClock(date(2024, 1, 1))));
        first.log_period_today().await.unwrap();

        let second = Journal::new(store, Arc::new(FixedClock(date(2024, 1, 30))));
        let config = second.log_period_today().await.unwrap();

        assert_eq!(config.last_period_start, Some(date(2024, 1, 30)));
        assert_eq!(config.period_dates, vec![date(2024, 1, 1), date(2024, 1, 30)]);
        assert_eq!(second.cycle_config().await.unwrap(), config);
    }

    #[tokio::test]
    async fn onboarding_clamps_cycle_length() {
        let journal = journal_on(date(2024, 1, 10));
        let config = journal
            .complete_onboarding(Onboarding {
                last_period_start: date(2024, 1, 1),
                cycle_length: 60,
                period_length: None,
            })
            .await
            .unwrap();

        assert_eq!(config.cycle_length, MAX_CYCLE_LENGTH);
        assert_eq!(config.period_length, 5);
        assert_eq!(config.last_period_start, Some(date(2024, 1, 1)));

        let config = journal
            .complete_onboarding(Onboarding {
                last_period_start: date(2024, 1, 1),
                cycle_length: 3,
                period_length: Some(4),
            })
            .await
            .unwrap();
        assert_eq!(config.cycle_length, MIN_CYCLE_LENGTH);
        assert_eq!(config.period_length, 4);
    }

    #[tokio::test]
    async fn onboarding_rejects_period_as_long_as_cycle() {
        let journal = journal_on(date(2024, 1, 10));
        let err = journal
            .complete_onboarding(Onboarding {
                last_period_start: date(2024, 1, 1),
                cycle_length: 28,
                period_length: Some(28),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidPeriodLength { period_length: 28, cycle_length: 28 }));
        assert_eq!(journal.cycle_config().await.unwrap(), CycleConfiguration::default());
    }

    #[tokio::test]
    async fn mood_entries_are_newest_first() {
        let journal = journal_on(date(2024, 2, 1));
        let first = journal.add_mood_entry(mood(2, vec![])).await.unwrap();
        let second = journal.add_mood_entry(mood(4, vec![])).await.unwrap();

        let moods = journal.mood_entries().await.unwrap();
        assert_eq!(moods, vec![second.clone(), first]);
        assert_eq!(journal.todays_mood().await.unwrap(), Some(second));
        assert!(journal.symptom_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn energy_out_of_range_is_rejected() {
        let journal = journal_on(date(2024, 2, 1));
        assert!(matches!(
            journal.add_mood_entry(mood(0, vec![])).await,
            Err(JournalError::InvalidEnergy(0))
        ));
        assert!(matches!(
            journal.add_mood_entry(mood(6, vec![])).await,
            Err(JournalError::InvalidEnergy(6))
        ));
        assert!(journal.mood_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn symptoms_get_severity_from_count() {
        let journal = journal_on(date(2024, 2, 1));
        journal.add_mood_entry(mood(3, vec![Symptom::Cramps])).await.unwrap();
        journal
            .add_mood_entry(mood(3, vec![Symptom::Headache, Symptom::Fatigue]))
            .await
            .unwrap();
        journal
            .add_mood_entry(mood(
                1,
                vec![Symptom::Bloating, Symptom::Cravings, Symptom::BreastPain, Symptom::Dizziness],
            ))
            .await
            .unwrap();

        let severities: Vec<Severity> = journal
            .symptom_entries()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.severity)
            .collect();
        assert_eq!(severities, vec![Severity::Severe, Severity::Moderate, Severity::Mild]);
    }

    #[tokio::test]
    async fn no_mood_for_today_after_midnight() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        Journal::new(store.clone(), Arc::new(FixedClock(date(2024, 2, 1))))
            .add_mood_entry(mood(3, vec![]))
            .await
            .unwrap();

        let tomorrow = Journal::new(store, Arc::new(FixedClock(date(2024, 2, 2))));
        assert_eq!(tomorrow.todays_mood().await.unwrap(), None);
        assert_eq!(tomorrow.mood_entries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_checkin_keeps_no_mood() {
        let journal = Journal::new(
            Arc::new(BrokenBatchStore::default()),
            Arc::new(FixedClock(date(2024, 2, 1))),
        );
        let err = journal
            .add_mood_entry(mood(3, vec![Symptom::Cramps]))
            .await
            .unwrap_err();

        assert!(matches!(err, JournalError::Store(_)));
        assert!(journal.mood_entries().await.unwrap().is_empty());
        assert!(journal.symptom_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stats_count_journal_entries() {
        let journal = journal_on(date(2024, 2, 1));
        journal.log_period_today().await.unwrap();
        journal.add_mood_entry(mood(3, vec![])).await.unwrap();
        journal.add_mood_entry(mood(4, vec![Symptom::Headache])).await.unwrap();

        let stats = journal.cycle_stats().await.unwrap();
        assert_eq!(stats.cycle_length, 28);
        assert_eq!(stats.logged_periods, 1);
        assert_eq!(stats.mood_entries, 2);
        assert_eq!(stats.symptom_logs, 1);
    }

    #[test]
    fn stats_from_logged_starts() {
        let stats = cycle_stats(&[
            date(2024, 3, 1),
            date(2024, 1, 1),
            date(2024, 1, 30),
            date(2024, 1, 30),
        ]);
        assert_eq!(stats.logged_periods, 3);
        assert_eq!(stats.cycle_lengths, vec![29, 31]);
        assert_eq!(stats.average_cycle_length, Some(30.0));
    }

    #[test]
    fn stats_need_two_starts() {
        let stats = cycle_stats(&[date(2024, 1, 1)]);
        assert_eq!(stats.logged_periods, 1);
        assert!(stats.cycle_lengths.is_empty());
        assert_eq!(stats.average_cycle_length, None);
    }
}

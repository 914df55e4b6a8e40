use tracing::{debug, info, instrument, warn};

use super::sleeper::Sleeper;
use crate::features::settings::{FormData, SaveStatus};
use crate::services::config::SaveTimingConfig;

/// Run the simulated save, reporting each status change through `set_status`.
///
/// Sets `Saving` immediately, `Saved` after `save_delay_ms` and `Idle` after a
/// further `clear_delay_ms`. There is no failure path and no guard against
/// overlapping calls: each call schedules its own updates and the last write wins.
#[instrument(skip_all, fields(save_delay_ms = timing.save_delay_ms, clear_delay_ms = timing.clear_delay_ms))]
pub async fn simulate_save<S, F>(
    form: &FormData,
    timing: SaveTimingConfig,
    sleeper: &S,
    mut set_status: F,
) where
    S: Sleeper + ?Sized,
    F: FnMut(SaveStatus),
{
    set_status(SaveStatus::Saving);

    // Log the submitted keys only, the values include API keys
    match form.to_payload() {
        Ok(payload) => {
            let keys: Vec<&str> = payload
                .as_object()
                .map(|fields| fields.keys().map(String::as_str).collect())
                .unwrap_or_default();
            debug!(?keys, "Simulating settings submission");
        }
        Err(e) => warn!("Could not build settings payload: {}", e),
    }

    sleeper.sleep_ms(timing.save_delay_ms).await;
    set_status(SaveStatus::Saved);
    info!("Settings saved");

    sleeper.sleep_ms(timing.clear_delay_ms).await;
    set_status(SaveStatus::Idle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::{SettingsAction, SettingsState};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records requested delays and resolves immediately
    #[derive(Default)]
    struct RecordingSleeper {
        delays: RefCell<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep_ms(&self, millis: u32) {
            self.delays.borrow_mut().push(millis);
        }
    }

    /// Yields to the executor once per 100ms so concurrent saves interleave
    /// in proportion to their delays
    struct TickSleeper;

    #[async_trait(?Send)]
    impl Sleeper for TickSleeper {
        async fn sleep_ms(&self, millis: u32) {
            for _ in 0..millis / 100 {
                tokio::task::yield_now().await;
            }
        }
    }

    #[tokio::test]
    async fn test_save_status_sequence() {
        let sleeper = RecordingSleeper::default();
        let statuses = RefCell::new(Vec::new());

        simulate_save(
            &FormData::default(),
            SaveTimingConfig::default(),
            &sleeper,
            |status| statuses.borrow_mut().push(status),
        )
        .await;

        assert_eq!(
            statuses.into_inner(),
            vec![SaveStatus::Saving, SaveStatus::Saved, SaveStatus::Idle]
        );
        assert_eq!(sleeper.delays.into_inner(), vec![1000, 3000]);
    }

    #[tokio::test]
    async fn test_saving_is_reported_before_the_first_delay() {
        struct AssertingSleeper<'a> {
            statuses: &'a RefCell<Vec<SaveStatus>>,
            expected_len: RefCell<usize>,
        }

        #[async_trait(?Send)]
        impl<'a> Sleeper for AssertingSleeper<'a> {
            async fn sleep_ms(&self, _millis: u32) {
                let mut expected = self.expected_len.borrow_mut();
                *expected += 1;
                assert_eq!(self.statuses.borrow().len(), *expected);
            }
        }

        let statuses = RefCell::new(Vec::new());
        let sleeper = AssertingSleeper {
            statuses: &statuses,
            expected_len: RefCell::new(0),
        };

        simulate_save(
            &FormData::default(),
            SaveTimingConfig::default(),
            &sleeper,
            |status| statuses.borrow_mut().push(status),
        )
        .await;

        assert_eq!(statuses.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_save_drives_page_state_through_the_reducer() {
        let state = RefCell::new(SettingsState::default());
        let form = state.borrow().form.clone();
        let mut messages = Vec::new();

        simulate_save(
            &form,
            SaveTimingConfig::default(),
            &RecordingSleeper::default(),
            |status| {
                state
                    .borrow_mut()
                    .reduce_in_place(SettingsAction::SetSaveStatus(status));
                messages.push(state.borrow().save_status.message());
            },
        )
        .await;

        assert_eq!(
            messages,
            vec!["Saving...", "Settings saved successfully!", ""]
        );
    }

    #[tokio::test]
    async fn test_overlapping_saves_are_last_write_wins() {
        let log = RefCell::new(Vec::new());
        let timing = SaveTimingConfig::default();
        let form = FormData::default();

        let first = simulate_save(&form, timing, &TickSleeper, |status| {
            log.borrow_mut().push(("first", status))
        });
        let second = async {
            // Second click half a second later
            TickSleeper.sleep_ms(500).await;
            simulate_save(&form, timing, &TickSleeper, |status| {
                log.borrow_mut().push(("second", status))
            })
            .await;
        };
        futures::future::join(first, second).await;

        assert_eq!(
            log.into_inner(),
            vec![
                ("first", SaveStatus::Saving),
                ("second", SaveStatus::Saving),
                ("first", SaveStatus::Saved),
                ("second", SaveStatus::Saved),
                // The first save clears the status while the second one's
                // success message is still showing
                ("first", SaveStatus::Idle),
                ("second", SaveStatus::Idle),
            ]
        );
    }
}

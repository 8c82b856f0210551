#[cfg(test)]
mod tests {
    use engine::plan::{SessionPlan, plan_session};
    use store::checkpoint::model::Checkpoint;

    fn checkpoint(start: i64, last: Option<i64>, last_event: Option<i64>) -> Checkpoint {
        Checkpoint {
            start_height: start,
            last_processed_height: last,
            last_processed_event_height: last_event,
        }
    }

    #[test]
    fn waits_at_the_head_when_the_requested_start_is_beyond_it() {
        let plan = plan_session(Some(200), 150, None);
        assert_eq!(plan, SessionPlan { start_height: 150, event_start_height: 150 });

        // even a progressed checkpoint does not override wait mode
        let progressed = checkpoint(100, Some(130), Some(120));
        let plan = plan_session(Some(200), 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 150, event_start_height: 150 });
    }

    #[test]
    fn a_requested_start_equal_to_the_head_is_not_wait_mode() {
        // boundary: equal means the height is scannable, so a matching
        // checkpoint still resumes
        let progressed = checkpoint(150, Some(80), Some(70));
        let plan = plan_session(Some(150), 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 80, event_start_height: 70 });
    }

    #[test]
    fn starts_fresh_without_a_checkpoint() {
        let plan = plan_session(Some(100), 150, None);
        assert_eq!(plan, SessionPlan { start_height: 100, event_start_height: 100 });

        let plan = plan_session(None, 150, None);
        assert_eq!(plan, SessionPlan { start_height: 150, event_start_height: 150 });
    }

    #[test]
    fn starts_fresh_when_the_checkpoint_recorded_no_progress() {
        let empty = checkpoint(100, None, None);

        let plan = plan_session(Some(100), 150, Some(&empty));
        assert_eq!(plan, SessionPlan { start_height: 100, event_start_height: 100 });

        let plan = plan_session(None, 150, Some(&empty));
        assert_eq!(plan, SessionPlan { start_height: 150, event_start_height: 150 });
    }

    #[test]
    fn resumes_when_the_requested_start_matches_the_recorded_one() {
        let progressed = checkpoint(100, Some(130), Some(120));
        let plan = plan_session(Some(100), 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 130, event_start_height: 120 });
    }

    #[test]
    fn resume_falls_back_to_the_block_height_without_event_progress() {
        let progressed = checkpoint(100, Some(130), None);
        let plan = plan_session(Some(100), 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 130, event_start_height: 130 });
    }

    #[test]
    fn resume_falls_back_to_the_session_start_without_block_progress() {
        let events_only = checkpoint(100, None, Some(120));
        let plan = plan_session(Some(100), 150, Some(&events_only));
        assert_eq!(plan, SessionPlan { start_height: 100, event_start_height: 120 });
    }

    #[test]
    fn a_changed_requested_start_begins_a_new_session() {
        let progressed = checkpoint(100, Some(130), Some(120));

        let plan = plan_session(Some(110), 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 110, event_start_height: 110 });

        // no requested start never matches a recorded one
        let plan = plan_session(None, 150, Some(&progressed));
        assert_eq!(plan, SessionPlan { start_height: 150, event_start_height: 150 });
    }
}

mod tests {
    use embassy_time::{Duration, Instant};
    use embedded_hal::delay::DelayNs;
    use myrtio_eyes_composer::{DelayPacer, FrameScheduler, Pacer, mock::RecordingPacer};

    #[derive(Default)]
    struct MockDelay {
        calls_us: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls_us.push(ns / 1_000);
        }

        fn delay_us(&mut self, us: u32) {
            self.calls_us.push(us);
        }
    }

    #[test]
    fn test_delay_pacer_waits_the_full_duration() {
        let mut pacer = DelayPacer::new(MockDelay::default());
        pacer.pause(Duration::from_millis(40));
        pacer.pause(Duration::from_ticks(0));

        assert_eq!(pacer.release().calls_us, [40_000]);
    }

    #[test]
    fn test_delay_pacer_splits_long_pauses() {
        let mut pacer = DelayPacer::new(MockDelay::default());
        let long = Duration::from_micros(u64::from(u32::MAX) + 10);
        pacer.pause(long);

        assert_eq!(pacer.release().calls_us, [u32::MAX, 10]);
    }

    #[test]
    fn test_recorded_total_saturates() {
        let mut pacer = RecordingPacer::new();
        pacer.pause(Duration::from_millis(40));
        pacer.pause(Duration::from_millis(60));
        assert_eq!(pacer.total(), Duration::from_millis(100));

        pacer.pause(Duration::MAX);
        assert_eq!(pacer.total(), Duration::MAX);
    }

    #[test]
    fn test_scheduler_absorbs_render_time() {
        let mut scheduler = FrameScheduler::new();
        let frame = Duration::from_millis(50);

        let first = scheduler.schedule(Instant::from_millis(0), frame);
        assert_eq!(first.next_deadline, Instant::from_millis(50));
        assert_eq!(first.sleep_duration, frame);

        // 10 ms spent writing the frame is taken off the next sleep
        let second = scheduler.schedule(Instant::from_millis(60), frame);
        assert_eq!(second.next_deadline, Instant::from_millis(100));
        assert_eq!(second.sleep_duration, Duration::from_millis(40));
    }

    #[test]
    fn test_scheduler_behind_schedule_does_not_sleep() {
        let mut scheduler = FrameScheduler::new();
        let frame = Duration::from_millis(50);
        scheduler.schedule(Instant::from_millis(0), frame);

        let late = scheduler.schedule(Instant::from_millis(120), frame);
        assert_eq!(late.next_deadline, Instant::from_millis(100));
        assert_eq!(late.sleep_duration, Duration::from_ticks(0));
    }

    #[test]
    fn test_scheduler_drops_backlog_after_large_drift() {
        let mut scheduler = FrameScheduler::new();
        let frame = Duration::from_millis(50);
        scheduler.schedule(Instant::from_millis(0), frame);

        // more than two frames behind the last deadline
        let resumed = scheduler.schedule(Instant::from_millis(500), frame);
        assert_eq!(resumed.next_deadline, Instant::from_millis(550));
        assert_eq!(resumed.sleep_duration, frame);
    }

    #[test]
    fn test_scheduler_reset() {
        let mut scheduler = FrameScheduler::new();
        let frame = Duration::from_millis(50);
        scheduler.schedule(Instant::from_millis(0), frame);
        scheduler.reset();

        let fresh = scheduler.schedule(Instant::from_millis(70), frame);
        assert_eq!(fresh.next_deadline, Instant::from_millis(120));
    }
}

//! Property tests for filtering, depth clamping and line termination.

use std::sync::Arc;

use loggy::{CallerDepth, Logger, Severity, with_severity_labels, with_time_format};
use loggy_test_support::CaptureSink;
use proptest::prelude::*;

fn capture_logger(level: Severity) -> (Logger, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = Logger::new(": prop:", sink.clone(), level, [with_time_format("TS")]);
    (logger, sink)
}

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..=5).prop_map(|raw| Severity::from_u8(raw).unwrap_or(Severity::Disabled))
}

proptest! {
    #[test]
    fn written_iff_loggable_and_at_or_above_minimum(minimum in severity(), level in severity()) {
        let (logger, sink) = capture_logger(minimum);

        logger.log(level, &[&"entry"]).unwrap();

        let expected = level != Severity::Disabled && level >= minimum;
        prop_assert_eq!(sink.write_count() == 1, expected);
    }

    #[test]
    fn depth_is_clamped(depth in any::<i32>()) {
        let frames = CallerDepth(depth).frames();
        prop_assert!(frames <= CallerDepth::MAX_FRAMES);
        prop_assert_eq!(frames, depth.clamp(0, 99) as usize);
    }

    #[test]
    fn every_entry_ends_with_one_added_newline(message in "[a-z \\n]{0,24}") {
        let (logger, sink) = capture_logger(Severity::Debug);

        logger.info(&[&message]).unwrap();

        let contents = sink.contents();
        let added = usize::from(!message.ends_with('\n'));
        prop_assert!(contents.ends_with('\n'));
        prop_assert_eq!(contents.matches('\n').count(), message.matches('\n').count() + added);
        let body = format!(" {message}");
        prop_assert!(contents.trim_end_matches('\n').ends_with(body.trim_end_matches('\n')));
    }

    #[test]
    fn labels_replaced_only_when_exactly_five(count in 0usize..9) {
        let sink = Arc::new(CaptureSink::unlocked());
        let labels: Vec<String> = (0..count).map(|index| format!("L{index}:")).collect();
        let logger = Logger::new(
            ": prop:",
            sink.clone(),
            Severity::Debug,
            [with_time_format("TS"), with_severity_labels(labels)],
        );

        logger.warn(&[&"x"]).unwrap();

        let expected = if count == 5 { "TS: prop:L2: " } else { "TS: prop:warn: " };
        prop_assert!(sink.contents().starts_with(expected));
    }

    #[test]
    fn set_level_accepts_only_in_range_values(raw in any::<u8>()) {
        let (logger, _sink) = capture_logger(Severity::Info);

        logger.set_level(raw);

        let expected = Severity::from_u8(raw).unwrap_or(Severity::Info);
        prop_assert_eq!(logger.level(), expected);
    }
}

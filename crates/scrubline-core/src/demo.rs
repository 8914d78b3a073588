//! Placeholder timeline content.
//!
//! Used when a widget is created without `timeline_data`, so the demo
//! shell (and tests) have something to scrub through. The option set
//! and per-tick shape mirror the fabricated demo content the widget
//! ships with; the choice is a deterministic index mix rather than a
//! random pick, so renders are reproducible.

use crate::config::TimelineEntry;

fn entry_options() -> [TimelineEntry; 3] {
    [
        TimelineEntry::new("Something good")
            .with_class("timeline-info-good")
            .with_more_info("Like a birth or the end of wars"),
        TimelineEntry::new("Something bad")
            .with_class("timeline-info-bad")
            .with_more_info(
                "As if millions of voices suddenly cried out in terror \
                 and were suddenly silenced",
            ),
        TimelineEntry::new("Chance event!"),
    ]
}

/// Synthesize one annotation list per tick: two entries each, a third
/// on even ticks.
pub fn placeholder_timeline(num_ticks: usize) -> Vec<Vec<TimelineEntry>> {
    let options = entry_options();

    (0..num_ticks)
        .map(|tick| {
            let mut entries = vec![
                options[tick % 3].clone(),
                options[(tick * 5 + 1) % 3].clone(),
            ];
            if tick % 2 == 0 {
                entries.push(options[(tick * 7 + 2) % 3].clone());
            }
            entries
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_list_per_tick() {
        let data = placeholder_timeline(9);
        assert_eq!(data.len(), 9);
    }

    #[test]
    fn test_even_ticks_get_a_third_entry() {
        let data = placeholder_timeline(4);
        assert_eq!(data[0].len(), 3);
        assert_eq!(data[1].len(), 2);
        assert_eq!(data[2].len(), 3);
        assert_eq!(data[3].len(), 2);
    }

    #[test]
    fn test_entries_always_have_summaries() {
        for entries in placeholder_timeline(12) {
            for entry in entries {
                assert!(!entry.summary_text.is_empty());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(placeholder_timeline(7), placeholder_timeline(7));
    }
}

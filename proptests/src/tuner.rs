//! Property-based tests for the flavor tuner.
//!
//! Tests the following invariants:
//! - Identical flavors always produce byte-identical tuning output
//! - Disk and memory sizes pass through to the hardware hints unchanged
//! - Document-store max file size is a monotone step function of memory
//! - The per-target flush budget always equals the aggregate budget
//! - The transaction-log cap is exactly 7% of disk below the ceiling,
//!   and never exceeds 100 GB

use crate::strategies::*;
use proptest::prelude::*;
use tuning::constants::{GB, MB};
use tuning::{tune, NodeFlavor};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Same flavor in, byte-identical configuration out.
    #[test]
    fn prop_tune_is_deterministic(flavor in node_flavor_strategy()) {
        prop_assert_eq!(tune(&flavor), tune(&flavor));
    }

    /// Hardware sizes are echoed without transformation.
    #[test]
    fn prop_hardware_sizes_are_echoed(flavor in node_flavor_strategy()) {
        let cfg = tune(&flavor);

        prop_assert_eq!(cfg.hwinfo.disk.size_bytes, flavor.disk_bytes());
        prop_assert_eq!(cfg.hwinfo.memory.size_bytes, flavor.memory_bytes());
    }

    /// The write-speed hint follows the declared disk class; the slow-speed
    /// classification threshold never moves.
    #[test]
    fn prop_disk_speed_hints(flavor in node_flavor_strategy()) {
        let cfg = tune(&flavor);

        let expected = if flavor.fast_disk() { 200.0 } else { 40.0 };
        prop_assert_eq!(cfg.hwinfo.disk.write_speed, expected);
        prop_assert_eq!(cfg.hwinfo.disk.slow_write_speed_limit, 100.0);
    }

    /// More memory never yields a smaller max file size, and the output is
    /// always one of the four tier values.
    #[test]
    fn prop_max_file_size_is_monotone_step_function(
        memory_a in memory_bytes_strategy(),
        memory_b in memory_bytes_strategy(),
    ) {
        let size_of = |memory_bytes| {
            tune(&NodeFlavor::new("step", memory_bytes, 0, 0.0, false))
                .document_store
                .max_file_size_bytes
        };

        let (lo, hi) = if memory_a <= memory_b {
            (memory_a, memory_b)
        } else {
            (memory_b, memory_a)
        };

        prop_assert!(size_of(lo) <= size_of(hi));
        prop_assert!([256 * MB, 512 * MB, GB, 4 * GB].contains(&size_of(lo)));
    }

    /// Thread count never drops below the floor of 8 and tracks half the
    /// core count above it.
    #[test]
    fn prop_num_threads_floor_and_scaling(flavor in node_flavor_strategy()) {
        let threads = tune(&flavor).document_store.num_threads;

        prop_assert!(threads >= 8);
        if flavor.cpu_cores() >= 17.0 {
            prop_assert_eq!(threads, (flavor.cpu_cores() / 2.0).round() as u32);
        }
    }

    /// Each flush target may consume the whole aggregate budget, which is
    /// exactly 1/8 of node memory.
    #[test]
    fn prop_flush_budget_ratios(flavor in node_flavor_strategy()) {
        let cfg = tune(&flavor);

        prop_assert_eq!(cfg.flush.max_memory_bytes, flavor.memory_bytes() / 8);
        prop_assert_eq!(cfg.flush.each_max_memory_bytes, cfg.flush.max_memory_bytes);
    }

    /// 7% of disk below the ceiling, capped at 100 GB above it.
    #[test]
    fn prop_tls_size_fraction_and_cap(flavor in node_flavor_strategy()) {
        let tls = tune(&flavor).flush.max_tls_size_bytes;

        prop_assert!(tls <= 100 * GB);
        let uncapped = (flavor.disk_bytes() as f64 * 0.07) as u64;
        if uncapped < 100 * GB {
            prop_assert_eq!(tls, uncapped);
        } else {
            prop_assert_eq!(tls, 100 * GB);
        }
    }
}

#![cfg(test)]

use super::*;

#[test]
fn test_absolute_stage_times() {
    let timelocks = SrcTimelocks {
        withdrawal: 120,
        cancellation: 500,
        public_cancellation: 900,
    }
    .pack()
    .with_deployed_at(1_000_000);

    assert_eq!(timelocks.deployed_at(), 1_000_000);
    assert_eq!(timelocks.get(Stage::SrcWithdrawal), 1_000_120);
    assert_eq!(timelocks.get(Stage::SrcCancellation), 1_000_500);
    assert_eq!(timelocks.get(Stage::SrcPublicCancellation), 1_000_900);
    assert_eq!(timelocks.rescue_start(604_800), 1_604_800);
}

#[test]
fn test_dst_lanes_are_independent_of_src_lanes() {
    let timelocks = DstTimelocks {
        withdrawal: 300,
        public_withdrawal: 540,
        cancellation: 840,
    }
    .pack()
    .with_deployed_at(42);

    assert_eq!(timelocks.get(Stage::DstWithdrawal), 342);
    assert_eq!(timelocks.get(Stage::DstPublicWithdrawal), 582);
    assert_eq!(timelocks.get(Stage::DstCancellation), 882);
}

#[test]
fn test_stamping_replaces_only_deployed_at() {
    let packed = SrcTimelocks {
        withdrawal: 1,
        cancellation: 2,
        public_cancellation: 3,
    }
    .pack();

    let first = packed.with_deployed_at(100);
    let second = first.with_deployed_at(7_000);

    assert_eq!(first.deployed_at(), 100);
    assert_eq!(second.deployed_at(), 7_000);
    assert_eq!(second.get(Stage::SrcWithdrawal), 7_001);
    assert_eq!(second.get(Stage::SrcCancellation), 7_002);
    assert_eq!(second.get(Stage::SrcPublicCancellation), 7_003);
}

#[test]
fn test_max_offsets_do_not_bleed_between_lanes() {
    let timelocks = SrcTimelocks {
        withdrawal: u32::MAX - 2,
        cancellation: u32::MAX - 1,
        public_cancellation: u32::MAX,
    }
    .pack()
    .with_deployed_at(u32::MAX as u64);

    assert_eq!(timelocks.deployed_at(), u32::MAX as u64);
    assert_eq!(
        timelocks.get(Stage::SrcWithdrawal),
        u32::MAX as u64 + (u32::MAX - 2) as u64
    );
    assert_eq!(
        timelocks.get(Stage::SrcPublicCancellation),
        u32::MAX as u64 + u32::MAX as u64
    );
}

#[test]
fn test_src_duration_ordering() {
    let good = SrcTimelocks {
        withdrawal: 120,
        cancellation: 500,
        public_cancellation: 500,
    };
    assert!(good.validate());

    // Cancellation may never open at or before the withdrawal window.
    let bad = SrcTimelocks {
        withdrawal: 500,
        cancellation: 500,
        public_cancellation: 900,
    };
    assert!(!bad.validate());

    let inverted = SrcTimelocks {
        withdrawal: 120,
        cancellation: 900,
        public_cancellation: 500,
    };
    assert!(!inverted.validate());
}

#[test]
fn test_dst_duration_ordering() {
    let good = DstTimelocks {
        withdrawal: 120,
        public_withdrawal: 120,
        cancellation: 500,
    };
    assert!(good.validate());

    let bad = DstTimelocks {
        withdrawal: 120,
        public_withdrawal: 500,
        cancellation: 500,
    };
    assert!(!bad.validate());

    let inverted = DstTimelocks {
        withdrawal: 500,
        public_withdrawal: 120,
        cancellation: 900,
    };
    assert!(!inverted.validate());
}

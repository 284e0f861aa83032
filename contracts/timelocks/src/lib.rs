#![no_std]
use soroban_sdk::contracttype;

/// Named stage starts for both escrow legs.
///
/// A source-leg word carries the taker's private withdrawal start, the private
/// cancellation start and the public (anyone-may-call) cancellation start. A
/// destination-leg word carries the private withdrawal start, the public
/// withdrawal start and the cancellation start. The first offset doubles as
/// the finality lock: nothing is callable before it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    SrcWithdrawal,
    SrcCancellation,
    SrcPublicCancellation,
    DstWithdrawal,
    DstPublicWithdrawal,
    DstCancellation,
}

impl Stage {
    fn lane(self) -> u32 {
        match self {
            Stage::SrcWithdrawal | Stage::DstWithdrawal => 1,
            Stage::SrcCancellation | Stage::DstPublicWithdrawal => 2,
            Stage::SrcPublicCancellation | Stage::DstCancellation => 3,
        }
    }
}

const LANE_BITS: u32 = 32;
const LANE_MASK: u128 = u32::MAX as u128;

/// Full schedule of one escrow instance in a single word.
///
/// Lane 0 (low 32 bits) is the deployment timestamp stamped by the factory at
/// creation; lanes 1..=3 are the leg's stage starts as offsets in seconds
/// relative to it. Which `Stage` a lane means depends on the leg, so reads go
/// through [`Timelocks::get`] with a named stage rather than a lane index.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timelocks {
    pub packed: u128,
}

impl Timelocks {
    pub fn deployed_at(&self) -> u64 {
        (self.packed & LANE_MASK) as u64
    }

    /// Returns the word with the deployment timestamp replaced, offsets kept.
    pub fn with_deployed_at(&self, at: u64) -> Timelocks {
        Timelocks {
            packed: (self.packed & !LANE_MASK) | (at as u32 as u128),
        }
    }

    /// Absolute time at which the given stage opens.
    pub fn get(&self, stage: Stage) -> u64 {
        self.deployed_at() + self.offset(stage.lane())
    }

    /// Start of the residual-asset rescue period.
    pub fn rescue_start(&self, rescue_delay: u64) -> u64 {
        self.deployed_at() + rescue_delay
    }

    /// Stage starts must increase so every window is reachable.
    pub fn src_ordered(&self) -> bool {
        self.get(Stage::SrcWithdrawal) < self.get(Stage::SrcCancellation)
            && self.get(Stage::SrcCancellation) <= self.get(Stage::SrcPublicCancellation)
    }

    pub fn dst_ordered(&self) -> bool {
        self.get(Stage::DstWithdrawal) <= self.get(Stage::DstPublicWithdrawal)
            && self.get(Stage::DstPublicWithdrawal) < self.get(Stage::DstCancellation)
    }

    fn offset(&self, lane: u32) -> u64 {
        ((self.packed >> (lane * LANE_BITS)) & LANE_MASK) as u64
    }
}

fn pack_lanes(a: u32, b: u32, c: u32) -> u128 {
    ((a as u128) << LANE_BITS) | ((b as u128) << (2 * LANE_BITS)) | ((c as u128) << (3 * LANE_BITS))
}

/// Source-leg stage durations as chosen at order creation, before the
/// deployment timestamp is known.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SrcTimelocks {
    pub withdrawal: u32,
    pub cancellation: u32,
    pub public_cancellation: u32,
}

impl SrcTimelocks {
    /// Packs the durations with a zero deployment timestamp; the factory
    /// stamps the real one via [`Timelocks::with_deployed_at`].
    pub fn pack(&self) -> Timelocks {
        Timelocks {
            packed: pack_lanes(self.withdrawal, self.cancellation, self.public_cancellation),
        }
    }

    pub fn validate(&self) -> bool {
        self.pack().src_ordered()
    }
}

/// Destination-leg stage durations.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DstTimelocks {
    pub withdrawal: u32,
    pub public_withdrawal: u32,
    pub cancellation: u32,
}

impl DstTimelocks {
    pub fn pack(&self) -> Timelocks {
        Timelocks {
            packed: pack_lanes(self.withdrawal, self.public_withdrawal, self.cancellation),
        }
    }

    pub fn validate(&self) -> bool {
        self.pack().dst_ordered()
    }
}

mod test;

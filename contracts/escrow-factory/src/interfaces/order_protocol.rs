use soroban_sdk::{contracttype, Address, Bytes, BytesN};
use timelocks::{DstTimelocks, SrcTimelocks};

/// Shape of the order whose fill triggers source-side escrow creation. Only
/// the fields the factory consumes are modeled; the order protocol owns the
/// matching, pricing and signature semantics.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub salt: BytesN<32>,
    pub maker: Address,
    /// Receives the destination-leg funds; usually the maker itself.
    pub receiver: Address,
    pub maker_asset: Address,
    pub taker_asset: Address,
    pub making_amount: i128,
    pub taking_amount: i128,
}

/// Swap-specific payload the order protocol forwards with every fill:
/// the hashlock, the destination-leg routing, both legs' safety deposits in
/// one packed word and both legs' timelock durations, plus opaque fee data
/// for the resolver-access collaborator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtraDataArgs {
    pub hashlock: BytesN<32>,
    pub dst_chain_id: u32,
    pub dst_token: Address,
    /// Source-leg deposit in the high 64 bits, destination-leg in the low 64.
    pub deposits: u128,
    pub src_timelocks: SrcTimelocks,
    pub dst_timelocks: DstTimelocks,
    pub fee_data: Bytes,
}

impl ExtraDataArgs {
    pub fn src_safety_deposit(&self) -> i128 {
        ((self.deposits >> 64) as u64).into()
    }

    pub fn dst_safety_deposit(&self) -> i128 {
        (self.deposits as u64).into()
    }
}

/// Everything the resolver needs, beyond the source immutables, to mirror the
/// escrow on the destination chain. Emitted with the creation event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DstImmutablesComplement {
    pub maker: Address,
    pub amount: i128,
    pub token: Address,
    pub safety_deposit: i128,
    pub chain_id: u32,
}

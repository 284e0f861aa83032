use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env};
use timelocks::Timelocks;

/// The frozen parameter set of one escrow instance.
///
/// Nothing here is kept in instance storage. The factory hashes the full
/// struct into the deployment salt, and every later call supplies the struct
/// again so the instance can re-derive its own identity from it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Immutables {
    pub order_hash: BytesN<32>,
    /// sha256 of the secret whose revelation unlocks both legs.
    pub hashlock: BytesN<32>,
    pub maker: Address,
    pub taker: Address,
    pub token: Address,
    pub amount: i128,
    /// Native-asset incentive paid to whoever performs the settling call.
    pub safety_deposit: i128,
    pub timelocks: Timelocks,
}

impl Immutables {
    /// Deployment salt: the content hash of the full parameter set, so exactly
    /// one instance can ever exist per parameter set.
    pub fn salt(&self, env: &Env) -> BytesN<32> {
        env.crypto().sha256(&self.clone().to_xdr(env)).to_bytes()
    }

    /// Address the factory deploys (or would deploy) this parameter set at.
    /// Pure in (network, factory, salt) and computable before the instance
    /// exists, so counterparties can fund it in advance.
    pub fn escrow_address(&self, env: &Env, factory: &Address) -> Address {
        env.deployer()
            .with_address(factory.clone(), self.salt(env))
            .deployed_address()
    }
}

/// Which leg of the swap this instance holds. The leg decides who may act in
/// which window and who receives the locked amount on success and on failure.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Src,
    Dst,
}

/// Instance storage, all bound once at clone init.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Factory,
    Side,
    RescueDelay,
    NativeToken,
}

#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, panic_with_error, symbol_short, token,
    Address, Bytes, BytesN, Env,
};

use escrow::{Immutables, Side};

mod error;
pub mod interfaces;


pub use error::FactoryError;
pub use interfaces::{
    DstImmutablesComplement, ExtraDataArgs, Order, ResolverAccess, ResolverAccessClient,
};

contractmeta!(
    key = "Description",
    val = "Deterministic factory for cross-chain atomic swap escrows"
);

/// Factory configuration, bound once at deploy time.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    EscrowWasm,
    RescueDelay,
    NativeToken,
    OrderProtocol,
    ResolverAccess,
}

#[contract]
pub struct EscrowFactory;

#[contractimpl]
impl EscrowFactory {
    pub fn __constructor(
        env: Env,
        escrow_wasm_hash: BytesN<32>,
        rescue_delay: u64,
        native_token: Address,
        order_protocol: Address,
        resolver_access: Address,
    ) {
        env.storage()
            .instance()
            .set(&DataKey::EscrowWasm, &escrow_wasm_hash);
        env.storage()
            .instance()
            .set(&DataKey::RescueDelay, &rescue_delay);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        env.storage()
            .instance()
            .set(&DataKey::OrderProtocol, &order_protocol);
        env.storage()
            .instance()
            .set(&DataKey::ResolverAccess, &resolver_access);
    }

    /// Creates the destination-leg escrow. The caller funds both the swap
    /// amount and the native safety deposit, and is refused once the source
    /// leg's cancellation deadline has passed, after which the counterpart
    /// can no longer be completed in time.
    pub fn create_dst_escrow(
        env: Env,
        immutables: Immutables,
        src_cancellation_timestamp: u64,
        caller: Address,
    ) -> Address {
        caller.require_auth();

        let now = env.ledger().timestamp();
        if now > src_cancellation_timestamp {
            panic_with_error!(&env, FactoryError::InvalidCreationTime);
        }

        let timelocks = immutables.timelocks.with_deployed_at(now);
        if !timelocks.dst_ordered() {
            panic_with_error!(&env, FactoryError::InvalidTimelocks);
        }
        let immutables = Immutables {
            timelocks,
            ..immutables
        };

        let escrow_address = Self::deploy(&env, &immutables, Side::Dst);

        token::Client::new(&env, &immutables.token).transfer(
            &caller,
            &escrow_address,
            &immutables.amount,
        );
        token::Client::new(&env, &Self::stored_native_token(&env)).transfer(
            &caller,
            &escrow_address,
            &immutables.safety_deposit,
        );

        env.events().publish(
            (symbol_short!("dst_esc"),),
            (
                escrow_address.clone(),
                immutables.hashlock.clone(),
                immutables.taker.clone(),
            ),
        );
        escrow_address
    }

    /// Order-fill hook: the order protocol calls this exactly once per fill,
    /// synchronously within the fill, after routing the maker's asset to the
    /// derived escrow address. Builds the source immutables from the fill and
    /// the extra payload, deploys the clone at the pre-derivable address and
    /// pulls the resolver's native safety deposit.
    #[allow(clippy::too_many_arguments)]
    pub fn post_interaction(
        env: Env,
        order: Order,
        _extension: Bytes,
        order_hash: BytesN<32>,
        taker: Address,
        making_amount: i128,
        taking_amount: i128,
        _remaining_making_amount: i128,
        extra: ExtraDataArgs,
    ) -> Address {
        let order_protocol: Address = env
            .storage()
            .instance()
            .get(&DataKey::OrderProtocol)
            .unwrap();
        order_protocol.require_auth();

        let resolver_access: Address = env
            .storage()
            .instance()
            .get(&DataKey::ResolverAccess)
            .unwrap();
        let allowed = ResolverAccessClient::new(&env, &resolver_access)
            .validate_resolver(&taker, &extra.fee_data);
        if !allowed {
            panic_with_error!(&env, FactoryError::ResolverAccessDenied);
        }

        if !extra.src_timelocks.validate() || !extra.dst_timelocks.validate() {
            panic_with_error!(&env, FactoryError::InvalidTimelocks);
        }

        let immutables = Immutables {
            order_hash: order_hash.clone(),
            hashlock: extra.hashlock.clone(),
            maker: order.maker.clone(),
            taker: taker.clone(),
            token: order.maker_asset.clone(),
            amount: making_amount,
            safety_deposit: extra.src_safety_deposit(),
            timelocks: extra
                .src_timelocks
                .pack()
                .with_deployed_at(env.ledger().timestamp()),
        };

        let escrow_address = Self::deploy(&env, &immutables, Side::Src);

        token::Client::new(&env, &Self::stored_native_token(&env)).transfer(
            &taker,
            &escrow_address,
            &immutables.safety_deposit,
        );

        // The fill transfers the maker's asset straight to the derived
        // address; creation aborts if it never arrived.
        let funded = token::Client::new(&env, &immutables.token).balance(&escrow_address);
        if funded < immutables.amount {
            panic_with_error!(&env, FactoryError::InsufficientEscrowBalance);
        }

        let complement = DstImmutablesComplement {
            maker: order.receiver.clone(),
            amount: taking_amount,
            token: extra.dst_token.clone(),
            safety_deposit: extra.dst_safety_deposit(),
            chain_id: extra.dst_chain_id,
        };
        env.events().publish(
            (symbol_short!("src_esc"),),
            (immutables.clone(), complement),
        );
        escrow_address
    }

    /// Deterministic address of the escrow a parameter set would deploy to.
    /// Callable before creation; equals the deployed instance's address.
    pub fn address_of_escrow(env: Env, immutables: Immutables) -> Address {
        immutables.escrow_address(&env, &env.current_contract_address())
    }

    pub fn escrow_wasm_hash(env: Env) -> BytesN<32> {
        env.storage().instance().get(&DataKey::EscrowWasm).unwrap()
    }

    pub fn rescue_delay(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RescueDelay)
            .unwrap()
    }

    pub fn native_token(env: Env) -> Address {
        Self::stored_native_token(&env)
    }

    pub fn order_protocol(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::OrderProtocol)
            .unwrap()
    }

    pub fn resolver_access(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::ResolverAccess)
            .unwrap()
    }

    fn deploy(env: &Env, immutables: &Immutables, side: Side) -> Address {
        let wasm_hash: BytesN<32> = env.storage().instance().get(&DataKey::EscrowWasm).unwrap();
        let rescue_delay: u64 = env
            .storage()
            .instance()
            .get(&DataKey::RescueDelay)
            .unwrap();
        env.deployer()
            .with_current_contract(immutables.salt(env))
            .deploy_v2(
                wasm_hash,
                (
                    env.current_contract_address(),
                    side,
                    rescue_delay,
                    Self::stored_native_token(env),
                ),
            )
    }

    fn stored_native_token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .unwrap()
    }
}

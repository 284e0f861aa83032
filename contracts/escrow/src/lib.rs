#![no_std]
use soroban_sdk::{
    contract, contractimpl, contractmeta, panic_with_error, token, Address, Bytes, BytesN, Env,
};
use timelocks::Stage;

mod error;
mod events;
mod types;


pub use error::EscrowError;
pub use types::{DataKey, Immutables, Side};

contractmeta!(
    key = "Description",
    val = "Hash-locked, time-gated escrow for one leg of a cross-chain swap"
);

#[contract]
pub struct Escrow;

#[contractimpl]
impl Escrow {
    /// Binds the clone to the factory that derived its address and to its role
    /// policy. All swap-specific state lives in the token balances and in the
    /// caller-supplied immutables; nothing else is ever written.
    pub fn __constructor(
        env: Env,
        factory: Address,
        side: Side,
        rescue_delay: u64,
        native_token: Address,
    ) {
        env.storage().instance().set(&DataKey::Factory, &factory);
        env.storage().instance().set(&DataKey::Side, &side);
        env.storage()
            .instance()
            .set(&DataKey::RescueDelay, &rescue_delay);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
    }

    /// Private withdrawal by the taker during the finalized withdrawal window.
    /// On the source leg the locked amount goes to the taker, on the
    /// destination leg to the maker; the safety deposit goes to the caller.
    pub fn withdraw(env: Env, secret: BytesN<32>, caller: Address, immutables: Immutables) {
        Self::check_immutables(&env, &immutables);
        caller.require_auth();
        if caller != immutables.taker {
            panic_with_error!(&env, EscrowError::InvalidCaller);
        }

        let side = Self::stored_side(&env);
        let (start, end) = match side {
            Side::Src => (
                immutables.timelocks.get(Stage::SrcWithdrawal),
                immutables.timelocks.get(Stage::SrcCancellation),
            ),
            Side::Dst => (
                immutables.timelocks.get(Stage::DstWithdrawal),
                immutables.timelocks.get(Stage::DstCancellation),
            ),
        };
        let now = env.ledger().timestamp();
        if now < start || now >= end {
            panic_with_error!(&env, EscrowError::InvalidWithdrawalTime);
        }

        Self::check_secret(&env, &secret, &immutables);

        let recipient = match side {
            Side::Src => immutables.taker.clone(),
            Side::Dst => immutables.maker.clone(),
        };
        Self::settle(&env, &immutables, &recipient, &caller);
        events::withdrawal(&env, &secret);
    }

    /// Anyone may complete the destination leg once the public window opens.
    /// The amount still goes to the maker; the caller earns the safety
    /// deposit. Not available on the source leg.
    pub fn public_withdraw(env: Env, secret: BytesN<32>, caller: Address, immutables: Immutables) {
        Self::check_immutables(&env, &immutables);
        caller.require_auth();
        if Self::stored_side(&env) != Side::Dst {
            panic_with_error!(&env, EscrowError::InvalidCaller);
        }

        let start = immutables.timelocks.get(Stage::DstPublicWithdrawal);
        let end = immutables.timelocks.get(Stage::DstCancellation);
        let now = env.ledger().timestamp();
        if now < start || now >= end {
            panic_with_error!(&env, EscrowError::InvalidWithdrawalTime);
        }

        Self::check_secret(&env, &secret, &immutables);
        Self::settle(&env, &immutables, &immutables.maker, &caller);
        events::withdrawal(&env, &secret);
    }

    /// Taker-gated cancellation once the withdrawal windows have lapsed.
    /// Refunds the depositor of the leg: src returns the maker's asset, dst
    /// returns the taker's.
    pub fn cancel(env: Env, caller: Address, immutables: Immutables) {
        Self::check_immutables(&env, &immutables);
        caller.require_auth();
        if caller != immutables.taker {
            panic_with_error!(&env, EscrowError::InvalidCaller);
        }

        let side = Self::stored_side(&env);
        let start = match side {
            Side::Src => immutables.timelocks.get(Stage::SrcCancellation),
            Side::Dst => immutables.timelocks.get(Stage::DstCancellation),
        };
        if env.ledger().timestamp() < start {
            panic_with_error!(&env, EscrowError::InvalidCancellationTime);
        }

        let recipient = match side {
            Side::Src => immutables.maker.clone(),
            Side::Dst => immutables.taker.clone(),
        };
        Self::settle(&env, &immutables, &recipient, &caller);
        events::cancelled(&env);
    }

    /// Anyone may cancel a source-leg escrow after its public cancellation
    /// stage opens; the maker is refunded and the caller earns the deposit.
    pub fn public_cancel(env: Env, caller: Address, immutables: Immutables) {
        Self::check_immutables(&env, &immutables);
        caller.require_auth();
        if Self::stored_side(&env) != Side::Src {
            panic_with_error!(&env, EscrowError::InvalidCaller);
        }
        if env.ledger().timestamp() < immutables.timelocks.get(Stage::SrcPublicCancellation) {
            panic_with_error!(&env, EscrowError::InvalidCancellationTime);
        }

        Self::settle(&env, &immutables, &immutables.maker, &caller);
        events::cancelled(&env);
    }

    /// Lets the taker recover any residual balance of any asset after the
    /// rescue delay, regardless of how the swap ended. The immutables still
    /// authenticate the taker; the rescued token and amount are deliberately
    /// unconstrained by the swap terms.
    pub fn rescue_funds(
        env: Env,
        token: Address,
        amount: i128,
        caller: Address,
        immutables: Immutables,
    ) {
        Self::check_immutables(&env, &immutables);
        caller.require_auth();
        if caller != immutables.taker {
            panic_with_error!(&env, EscrowError::InvalidCaller);
        }

        let rescue_delay: u64 = env
            .storage()
            .instance()
            .get(&DataKey::RescueDelay)
            .unwrap();
        if env.ledger().timestamp() < immutables.timelocks.rescue_start(rescue_delay) {
            panic_with_error!(&env, EscrowError::InvalidRescueTime);
        }

        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );
        events::rescued(&env, &token, amount);
    }

    pub fn factory(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Factory).unwrap()
    }

    pub fn side(env: Env) -> Side {
        Self::stored_side(&env)
    }

    pub fn rescue_delay(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RescueDelay)
            .unwrap()
    }

    /// The supplied immutables must re-derive this instance's own address,
    /// which defeats substitution of altered parameters against a genuine
    /// instance.
    fn check_immutables(env: &Env, immutables: &Immutables) {
        let factory: Address = env.storage().instance().get(&DataKey::Factory).unwrap();
        if immutables.escrow_address(env, &factory) != env.current_contract_address() {
            panic_with_error!(env, EscrowError::InvalidImmutables);
        }
    }

    fn check_secret(env: &Env, secret: &BytesN<32>, immutables: &Immutables) {
        let preimage: Bytes = secret.clone().into();
        if env.crypto().sha256(&preimage).to_bytes() != immutables.hashlock {
            panic_with_error!(env, EscrowError::InvalidSecret);
        }
    }

    /// Moves the swap amount to the entitled recipient and the native safety
    /// deposit to the caller. A drained balance makes a repeat call fail
    /// inside the token transfer, so settlement is naturally one-shot.
    fn settle(env: &Env, immutables: &Immutables, recipient: &Address, caller: &Address) {
        token::Client::new(env, &immutables.token).transfer(
            &env.current_contract_address(),
            recipient,
            &immutables.amount,
        );

        let native: Address = env.storage().instance().get(&DataKey::NativeToken).unwrap();
        token::Client::new(env, &native).transfer(
            &env.current_contract_address(),
            caller,
            &immutables.safety_deposit,
        );
    }

    fn stored_side(env: &Env) -> Side {
        env.storage().instance().get(&DataKey::Side).unwrap()
    }
}

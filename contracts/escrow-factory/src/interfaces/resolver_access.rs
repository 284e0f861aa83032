use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Fee/whitelist collaborator consulted before source-side creation. It
/// decides whether the filling resolver may create escrows right now and
/// debits its pre-funded fee balance; the factory refuses creation when it
/// returns false.
#[contractclient(name = "ResolverAccessClient")]
pub trait ResolverAccess {
    fn validate_resolver(env: Env, resolver: Address, fee_data: Bytes) -> bool;
}

use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn withdrawal(env: &Env, secret: &BytesN<32>) {
    env.events()
        .publish((symbol_short!("withdraw"),), secret.clone());
}

pub fn cancelled(env: &Env) {
    env.events().publish((symbol_short!("cancel"),), ());
}

pub fn rescued(env: &Env, token: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("rescue"),), (token.clone(), amount));
}

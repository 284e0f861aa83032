use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    /// Caller is not authorized for the attempted action in the current window.
    InvalidCaller = 1,
    /// Supplied immutables do not hash to this instance's address.
    InvalidImmutables = 2,
    /// sha256 of the supplied secret does not match the hashlock.
    InvalidSecret = 3,
    InvalidWithdrawalTime = 4,
    InvalidCancellationTime = 5,
    InvalidRescueTime = 6,
}

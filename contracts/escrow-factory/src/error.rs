use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    /// Destination-side creation attempted after the source leg's
    /// cancellation deadline.
    InvalidCreationTime = 1,
    /// Stage durations are not monotonically ordered.
    InvalidTimelocks = 2,
    /// The resolver-access collaborator rejected the filling resolver.
    ResolverAccessDenied = 3,
    /// The fill did not leave the maker's asset at the derived address.
    InsufficientEscrowBalance = 4,
}

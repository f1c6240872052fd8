//! Domain identifier types with proper encapsulation.

use std::fmt;

/// Token identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new `TokenId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the token ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Contract address - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Create a new `ContractAddress` from a string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the contract address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContractAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ContractAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Stable identity of a listed token: contract address plus token ID.
///
/// This is the key every cache and every in-flight registration is keyed by.
/// It is derivable from the raw listing payload before any network call and
/// never changes for the lifetime of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    contract: ContractAddress,
    token: TokenId,
}

impl ListingKey {
    /// Create a new `ListingKey`.
    pub fn new(contract: impl Into<ContractAddress>, token: impl Into<TokenId>) -> Self {
        Self {
            contract: contract.into(),
            token: token.into(),
        }
    }

    /// Get the contract address.
    #[must_use]
    pub const fn contract(&self) -> &ContractAddress {
        &self.contract
    }

    /// Get the token ID.
    #[must_use]
    pub const fn token(&self) -> &TokenId {
        &self.token
    }
}

impl fmt::Display for ListingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.contract, self.token)
    }
}

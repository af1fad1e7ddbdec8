use serde::{Deserialize, Serialize};

/// A wallet exposed by the external wallet provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedWallet {
    pub address: String,
}

impl ConnectedWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }
}

/// Identity handed to the profile page by whoever owns the wallet session.
///
/// Only the first wallet is used. A missing wallet means the identity is
/// not available yet, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityContext {
    pub authenticated: bool,
    pub wallets: Vec<ConnectedWallet>,
}

impl IdentityContext {
    pub fn connected(wallets: Vec<ConnectedWallet>) -> Self {
        Self {
            authenticated: !wallets.is_empty(),
            wallets,
        }
    }

    /// Address of the first connected wallet
    pub fn active_wallet(&self) -> Option<&str> {
        self.wallets
            .first()
            .map(|wallet| wallet.address.as_str())
            .filter(|address| !address.is_empty())
    }
}

/// First eight characters of an address followed by an ellipsis
pub fn short_address(address: &str) -> String {
    let prefix: String = address.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_active_wallet_is_first() {
        let identity = IdentityContext::connected(vec![
            ConnectedWallet::new("0xABC123"),
            ConnectedWallet::new("0xDEF456"),
        ]);
        assert!(identity.authenticated);
        assert_eq!(identity.active_wallet(), Some("0xABC123"));
    }

    #[test]
    fn test_no_wallets_means_no_identity() {
        let identity = IdentityContext {
            authenticated: true,
            wallets: vec![],
        };
        assert_eq!(identity.active_wallet(), None);
        assert!(!IdentityContext::connected(vec![]).authenticated);
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("0x1234567890abcdef"), "0x123456...");
        assert_eq!(short_address("0xAB"), "0xAB...");
    }
}

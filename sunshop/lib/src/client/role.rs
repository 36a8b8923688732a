use strum::Display;

use crate::session::StorageKey;

/// Which side of the platform a client acts for.
///
/// The admin and customer clients share all request machinery and differ
/// only in the storage keys they use and the routes they call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Admin dashboard.
    Admin,
    /// Storefront customer.
    Customer,
}

impl Role {
    /// Key holding this role's bearer token.
    pub fn token_key(self) -> StorageKey {
        match self {
            Self::Admin => StorageKey::AdminToken,
            Self::Customer => StorageKey::CustomerToken,
        }
    }

    /// Key holding this role's cached user record, if it keeps one.
    pub fn user_key(self) -> Option<StorageKey> {
        match self {
            Self::Admin => None,
            Self::Customer => Some(StorageKey::CustomerUser),
        }
    }
}

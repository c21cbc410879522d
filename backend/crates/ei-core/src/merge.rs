//! Record reconciliation between the cached and the server copy of a user.
//!
//! All profile load sites go through these functions so the precedence
//! rules stay identical: server fields win, and `tier` resolves as
//! server tier, else cached tier, else `Free`.

use crate::{Tier, UserPatch, UserRecord};

/// Overlay every field the server returned onto the cached record.
pub fn merge_user_records(cached: &UserRecord, server: &UserPatch) -> UserRecord {
    UserRecord {
        id: server.id.clone().unwrap_or_else(|| cached.id.clone()),
        name: server.name.clone().unwrap_or_else(|| cached.name.clone()),
        email: server.email.clone().unwrap_or_else(|| cached.email.clone()),
        image: server.image.clone().unwrap_or_else(|| cached.image.clone()),
        tier: resolve_tier(server.tier.as_deref(), cached.tier),
        wallet_address: server
            .wallet_address
            .clone()
            .or_else(|| cached.wallet_address.clone()),
    }
}

/// Overlay only the tier reported by the status endpoint.
pub fn apply_server_tier(current: &UserRecord, server_tier: Option<&str>) -> UserRecord {
    UserRecord {
        tier: resolve_tier(server_tier, current.tier),
        ..current.clone()
    }
}

/// Overlay the result of a name update.
///
/// Empty server values fall back to the submitted name and the current
/// email respectively.
pub fn apply_name_update(
    current: &UserRecord,
    submitted_name: &str,
    server: &UserPatch,
) -> UserRecord {
    let name = server
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(submitted_name);
    let email = server
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .unwrap_or(&current.email);

    UserRecord {
        name: name.to_string(),
        email: email.to_string(),
        ..current.clone()
    }
}

/// A cached record that never stored a tier already deserialized to the
/// default (`Free`), which covers the last step of the precedence chain.
fn resolve_tier(server: Option<&str>, cached: Tier) -> Tier {
    Tier::parse_reported(server).unwrap_or(cached)
}

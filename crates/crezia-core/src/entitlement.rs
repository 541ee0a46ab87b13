//! Usage gating rules.

use crate::account::{Account, DailyLimit};
use crate::error::{CreziaError, Result};

/// Checks whether the given session may start a gated action.
///
/// - no session: `NotAuthenticated`
/// - premium: always allowed, whatever the usage counter says
/// - free with `usage >= limit`: `QuotaExceeded`
pub fn check(current: Option<&Account>) -> Result<()> {
    let account = current.ok_or(CreziaError::NotAuthenticated)?;

    if account.is_premium() {
        return Ok(());
    }

    match account.daily_limit {
        DailyLimit::Capped(limit) if account.usage >= limit => Err(CreziaError::QuotaExceeded {
            usage: account.usage,
            limit,
        }),
        _ => Ok(()),
    }
}

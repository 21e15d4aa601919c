//! User responders: listing and single-user detail.

use std::io::{self, Write};

use opsdesk_core::User;
use tracing::warn;

use super::missing_argument_notice;
use crate::bootstrap::ConsoleContext;
use crate::invocation::Invocation;

/// Shown when there is nothing to list, or in place of an unreadable record.
pub const NO_USERS_MESSAGE: &str = "Unable to find any registered users at this time";

/// Execute the list users command.
///
/// Records are read one at a time so summaries appear in listing order.
pub async fn list<W: Write>(ctx: &mut ConsoleContext<W>) -> io::Result<()> {
    let ids = match ctx.users.list_ids().await {
        Ok(ids) if !ids.is_empty() => ids,
        Ok(_) => return ctx.renderer.line(NO_USERS_MESSAGE),
        Err(e) => {
            warn!(error = %e, "User listing failed");
            return ctx.renderer.line(NO_USERS_MESSAGE);
        }
    };

    ctx.renderer.vertical_space(1)?;
    for id in ids {
        match ctx.users.get(&id).await {
            Ok(user) => ctx.renderer.line(summary(&user))?,
            Err(e) => {
                warn!(user_id = %id, error = %e, "User record unreadable");
                ctx.renderer.line(NO_USERS_MESSAGE)?;
            }
        }
        ctx.renderer.vertical_space(1)?;
    }
    Ok(())
}

/// Execute the more user info command.
///
/// The credential hash is removed before anything is rendered.
pub async fn more_info<W: Write>(
    ctx: &mut ConsoleContext<W>,
    invocation: &Invocation<'_>,
) -> io::Result<()> {
    let Some(user_id) = invocation.argument() else {
        return ctx
            .renderer
            .line(missing_argument_notice(invocation.descriptor().usage));
    };

    let user = match ctx.users.get(user_id).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => {
            return ctx.renderer.line(format!("No user found with id {user_id}"));
        }
        Err(e) => {
            warn!(user_id, error = %e, "User lookup failed");
            return ctx.renderer.line(format!("Unable to read user {user_id}"));
        }
    };

    ctx.renderer.vertical_space(1)?;
    ctx.renderer.json(&user.redacted())?;
    ctx.renderer.vertical_space(1)
}

fn summary(user: &User) -> String {
    format!(
        "Name: {} Phone: {} Orders: {}",
        user.full_name(),
        user.phone(),
        user.order_count()
    )
}

//! Command handlers shared by the one-shot subcommands and the shell.
//!
//! Each handler renders its own outcome and returns whether it succeeded.

use crezia_core::error::CreziaError;
use crezia_core::notification::Notification;
use crezia_core::tool::{ToolInput, ToolKind};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::bootstrap::AppContext;
use crate::render;

/// Cancels its token on Ctrl-C until dropped.
pub struct CtrlCWatch {
    token: CancellationToken,
    watcher: JoinHandle<()>,
}

impl CtrlCWatch {
    pub fn start() -> Self {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                trigger.cancel();
            }
        });
        Self { token, watcher }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for CtrlCWatch {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> bool {
    render::pending("Signing in...");
    let watch = CtrlCWatch::start();
    match ctx.auth.login(email, password, watch.token()).await {
        Ok(account) => {
            render::notification(&Notification::login_succeeded());
            render::status(Some(&account));
            true
        }
        Err(e) => failed(e),
    }
}

pub async fn signup(ctx: &AppContext, name: &str, email: &str, password: &str) -> bool {
    render::pending("Creating account...");
    let watch = CtrlCWatch::start();
    match ctx.auth.signup(name, email, password, watch.token()).await {
        Ok(account) => {
            render::notification(&Notification::signup_succeeded());
            render::status(Some(&account));
            true
        }
        Err(e) => failed(e),
    }
}

pub fn logout(ctx: &AppContext) -> bool {
    match ctx.auth.logout() {
        Ok(()) => {
            render::notification(&Notification::logged_out());
            true
        }
        Err(e) => failed(e),
    }
}

pub fn status(ctx: &AppContext) -> bool {
    render::status(ctx.sessions.current_user().as_ref());
    true
}

pub fn tools(ctx: &AppContext) -> bool {
    render::catalog(ctx.sessions.current_user().is_some());
    true
}

pub async fn run(ctx: &AppContext, tool: &str, primary: &str, secondary: Option<String>) -> bool {
    let kind = match ToolKind::parse(tool).and_then(|kind| ctx.tools.open(kind)) {
        Ok(kind) => kind,
        Err(e) => return failed(e),
    };
    let input = ToolInput::from_parts(kind, primary, secondary);

    render::pending(&format!("Running {}... (Ctrl-C to cancel)", kind.title()));
    let watch = CtrlCWatch::start();
    match ctx.tools.run(&input, watch.token()).await {
        Ok(run) => {
            match &run.report {
                Some(report) => render::report(report),
                None => render::incomplete_input(run.kind),
            }
            if let Some(remaining) = run.account.remaining() {
                render::pending(&format!("{} runs left today", remaining));
            }
            true
        }
        Err(e) => failed(e),
    }
}

fn failed(err: CreziaError) -> bool {
    if err.is_entitlement() || err.is_cancelled() {
        tracing::info!("Request refused: {}", err);
    } else {
        tracing::warn!("Request failed: {}", err);
    }
    render::notification(&Notification::from(&err));
    false
}

//! # Feature: Notifier
//!
//! Emails a reminder for a due-soon event through an authenticated SMTP
//! relay. Every failure is logged and contained to the one notification;
//! nothing is retried.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: true (leave `REMINDER_SMTP_ADDR` empty to disable)

pub mod message;
pub mod mime;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lettre::address::Envelope;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use log::{error, info, warn};

use crate::core::Config;
use crate::features::manifest::Event;

pub use message::ReminderMessage;

/// What happened to a single notification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No relay configured
    Skipped,
    Failed,
}

/// Destination for due-soon events
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, event: &Event, day: i64) -> Delivery;
}

/// Sends reminders to the configured mailbox over SMTP
pub struct SmtpNotifier {
    config: Config,
}

impl SmtpNotifier {
    pub fn new(config: Config) -> Self {
        SmtpNotifier { config }
    }

    async fn send(&self, host: &str, port: u16, event: &Event, day: i64) -> Result<()> {
        let mailbox = &self.config.smtp_user;
        let payload = ReminderMessage::new(mailbox, event, day).render();

        let address: Address = mailbox
            .parse()
            .with_context(|| format!("invalid mailbox {mailbox:?}"))?;
        let envelope = Envelope::new(Some(address.clone()), vec![address])
            .context("build envelope")?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .tls(tls_policy(host)?)
            .credentials(Credentials::new(
                self.config.smtp_user.clone(),
                self.config.smtp_pass.clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build();

        transport
            .send_raw(&envelope, &payload)
            .await
            .with_context(|| format!("submit to {host}:{port}"))?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, event: &Event, day: i64) -> Delivery {
        if !self.config.relay_enabled() {
            warn!("Send notification skip: relay address is empty");
            return Delivery::Skipped;
        }

        info!("Sending notification for \"{}\"", event.title);
        let (host, port) = match split_host_port(&self.config.smtp_addr) {
            Ok(parts) => parts,
            Err(e) => {
                error!("Send notification fail: {e:#}");
                return Delivery::Failed;
            }
        };

        match self.send(&host, port, event, day).await {
            Ok(()) => {
                info!("Send notification success for \"{}\"", event.title);
                Delivery::Sent
            }
            Err(e) => {
                error!("Send notification fail for \"{}\": {e:#}", event.title);
                Delivery::Failed
            }
        }
    }
}

/// Whether credentials may travel without encryption to `host`
pub fn is_loopback_relay(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}

/// STARTTLS is mandatory unless the relay is on this machine.
fn tls_policy(host: &str) -> Result<Tls> {
    let params = TlsParameters::new(host.to_string()).context("tls parameters")?;
    if is_loopback_relay(host) {
        Ok(Tls::Opportunistic(params))
    } else {
        Ok(Tls::Required(params))
    }
}

/// Split `host:port` or `[ipv6]:port` into its parts.
pub fn split_host_port(addr: &str) -> Result<(String, u16)> {
    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| anyhow!("address {addr:?}: missing ']'"))?;
        let port = tail
            .strip_prefix(':')
            .ok_or_else(|| anyhow!("address {addr:?}: missing port"))?;
        (host, port)
    } else {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("address {addr:?}: missing port"))?;
        if host.contains(':') {
            return Err(anyhow!("address {addr:?}: too many colons"));
        }
        (host, port)
    };

    if host.is_empty() {
        return Err(anyhow!("address {addr:?}: missing host"));
    }
    let port = port
        .parse::<u16>()
        .with_context(|| format!("address {addr:?}: invalid port {port:?}"))?;

    Ok((host.to_string(), port))
}
